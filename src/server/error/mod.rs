//! Error types for the Upravdom server application.
//!
//! This module provides the error taxonomy of the service with specialized error types for
//! each domain (authentication, configuration, data access, validation). All errors implement
//! `IntoResponse` for Axum HTTP responses and use `thiserror` for `Display` and `Error`
//! trait implementations.

pub mod auth;
pub mod config;
pub mod data;
pub mod validation;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        auth::AuthError,
        config::ConfigError,
        data::DataError,
        validation::{RequestValidationError, ValidationError},
    },
};

/// Main error type for the Upravdom server application.
///
/// This enum aggregates all domain-specific error types and external library errors into a
/// single unified error type, enabling conversion from underlying error types via the `?`
/// operator. The `IntoResponse` implementation maps errors to HTTP responses for API consumers.
///
/// # Error Categories
/// - Configuration errors (missing/invalid environment variables)
/// - Authentication errors (missing or wrong credentials)
/// - Data errors (object not found, integrity constraint violations)
/// - Validation errors (invalid field values, unparsable requests)
/// - External library errors (database, cache backend, serialization, password hashing)
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Authentication error, always answered with 401.
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Not found or integrity violation.
    #[error(transparent)]
    DataError(#[from] DataError),
    /// A submitted field holds an invalid value.
    #[error(transparent)]
    ValidationError(#[from] ValidationError),
    /// The request body, query or path could not be parsed.
    #[error(transparent)]
    RequestValidation(#[from] RequestValidationError),
    /// Database error other than a constraint violation.
    ///
    /// Constraint violations are converted to [`DataError::IntegrityViolation`] by the
    /// `From<DbErr>` implementation.
    #[error(transparent)]
    DbErr(DbErr),
    /// Valkey/Redis error (connection, command execution).
    #[error(transparent)]
    CacheError(#[from] fred::error::Error),
    /// JSON (de)serialization error.
    #[error(transparent)]
    SerdeJson(#[from] serde_json::Error),
    /// I/O error (binding the listener, serving connections).
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// Password hashing error (malformed stored hash, hasher failure).
    #[error("Password hashing failed: {0}")]
    PasswordHash(argon2::password_hash::Error),
}

/// Classifies database errors.
///
/// Unique and foreign key violations become [`DataError::IntegrityViolation`] so they are
/// answered with 400, every other database error is kept as [`Error::DbErr`].
impl From<DbErr> for Error {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(detail))
            | Some(SqlErr::ForeignKeyConstraintViolation(detail)) => {
                Self::DataError(DataError::IntegrityViolation(detail))
            }
            _ => Self::DbErr(err),
        }
    }
}

impl From<argon2::password_hash::Error> for Error {
    fn from(err: argon2::password_hash::Error) -> Self {
        Self::PasswordHash(err)
    }
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - Integrity constraint violations
/// - 401 Unauthorized - Authentication failures
/// - 404 Not Found - Missing objects
/// - 422 Unprocessable Entity - Validation failures
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::DataError(err) => err.into_response(),
            Self::ValidationError(err) => err.into_response(),
            Self::RequestValidation(err) => err.into_response(),
            Self::DbErr(err) => InternalServerError(err).into_response(),
            Self::CacheError(err) => InternalServerError(err).into_response(),
            Self::SerdeJson(err) => InternalServerError(err).into_response(),
            Self::Io(err) => InternalServerError(err).into_response(),
            Self::PasswordHash(err) => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any error into a 500 Internal Server Error response.
///
/// The response body carries the error type, its message and the chain of its sources,
/// formatted as `"<Type>: <message> <sources>"`. The same text is logged.
pub struct InternalServerError<E>(pub E);

impl<E: std::error::Error> InternalServerError<E> {
    /// Longest source chain included in the response body, in bytes.
    const MAX_SOURCE_CHAIN: usize = 512;

    fn describe(&self) -> String {
        let full_name = std::any::type_name::<E>();
        let type_name = full_name
            .split('<')
            .next()
            .and_then(|path| path.rsplit("::").next())
            .unwrap_or(full_name);

        let mut sources = Vec::new();
        let mut source = self.0.source();
        while let Some(err) = source {
            sources.push(err.to_string());
            source = err.source();
        }

        let mut chain = sources.join(" <- ");
        if chain.len() > Self::MAX_SOURCE_CHAIN {
            let mut cut = Self::MAX_SOURCE_CHAIN;
            while !chain.is_char_boundary(cut) {
                cut -= 1;
            }
            chain.truncate(cut);
        }

        format!("{}: {} {}", type_name, self.0, chain)
            .trim_end()
            .to_string()
    }
}

/// Converts wrapped errors into 500 Internal Server Error responses.
///
/// Logs the error description and returns it to the client as `{"message": ...}`.
impl<E: std::error::Error> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        let message = self.describe();

        tracing::error!("{}", message);

        (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorDto { message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use axum::{body::to_bytes, http::StatusCode, response::IntoResponse};
    use sea_orm::{DbErr, RuntimeErr};

    use super::*;

    async fn body_json(resp: axum::response::Response) -> serde_json::Value {
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    /// Expect a generic database error to be kept as Error::DbErr
    #[test]
    fn keeps_generic_db_errors() {
        let err = Error::from(DbErr::Custom("boom".to_string()));

        assert!(matches!(err, Error::DbErr(_)));
    }

    /// Expect 500 with the error type name prefixed to the message
    #[tokio::test]
    async fn internal_error_body_names_type() {
        let resp = Error::DbErr(DbErr::Conn(RuntimeErr::Internal("refused".to_string())))
            .into_response();

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(resp).await;
        let message = body["message"].as_str().unwrap();
        assert!(message.starts_with("DbErr: "), "message: {}", message);
        assert!(message.contains("refused"));
    }

    /// Expect a password hashing failure to answer 500 naming the hashing error
    #[tokio::test]
    async fn password_hash_error_is_internal() {
        let resp = Error::from(argon2::password_hash::Error::Algorithm).into_response();

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(resp).await;
        assert!(body["message"].as_str().unwrap().starts_with("Error: "));
    }

    /// Expect 404 with object_not_found_error for missing objects
    #[tokio::test]
    async fn not_found_body() {
        let resp = Error::DataError(DataError::ObjectNotFound).into_response();

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_json(resp).await,
            serde_json::json!({"message": "object_not_found_error"})
        );
    }

    /// Expect 400 with sqlalchemy_integrity_error for constraint violations
    #[tokio::test]
    async fn integrity_violation_body() {
        let resp =
            Error::DataError(DataError::IntegrityViolation("duplicate".to_string())).into_response();

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(resp).await,
            serde_json::json!({"message": "sqlalchemy_integrity_error"})
        );
    }
}
