use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum DataError {
    #[error("Requested object was not found")]
    ObjectNotFound,
    #[error("Integrity constraint violated: {0}")]
    IntegrityViolation(String),
}

impl IntoResponse for DataError {
    fn into_response(self) -> Response {
        match self {
            Self::ObjectNotFound => {
                tracing::debug!("{}", self);

                (
                    StatusCode::NOT_FOUND,
                    Json(ErrorDto {
                        message: "object_not_found_error".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::IntegrityViolation(_) => {
                tracing::error!("{}", self);

                (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorDto {
                        message: "sqlalchemy_integrity_error".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
