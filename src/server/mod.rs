//! Server application core modules.
//!
//! This module contains the backend of the Upravdom property-management service: HTTP routing,
//! Basic authentication, response caching, database repositories for buildings, owners,
//! apartments and bills, and the assistant that turns unpaid bills into debtor notices.

pub mod cache;
pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;
