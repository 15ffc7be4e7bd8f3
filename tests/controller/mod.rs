//! Integration tests for the HTTP controllers.
//!
//! Handlers are called directly with their extractors where the behavior under test is the
//! handler itself, and through the full router where parsing, validation or caching matter.

mod apartment;
mod assistant;
mod bill;
mod building;
mod owner;

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use tower::ServiceExt;
use upravdom::server::{
    extract::{ObjectId, ValidJson},
    model::app::AppState,
};
use upravdom_test_utils::prelude::*;

use crate::util::{authorized, body_json, test_app};
