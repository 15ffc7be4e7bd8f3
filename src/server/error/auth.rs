use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::AuthErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Request has neither an API key nor an Authorization header")]
    MissingCredentials,
    #[error("Authorization header is not valid Basic credentials")]
    MalformedHeader,
    #[error("API key does not match")]
    InvalidApiKey,
    #[error("No user with login {0:?}")]
    UnknownLogin(String),
    #[error("Wrong password for login {0:?}")]
    WrongPassword(String),
    #[error("Failed to check credentials: {0}")]
    LookupFailed(String),
}

/// Every authentication failure is answered the same way, the reason is only logged.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        (
            StatusCode::UNAUTHORIZED,
            [(header::WWW_AUTHENTICATE, "Basic")],
            Json(AuthErrorDto {
                detail: "Authorization error".to_string(),
            }),
        )
            .into_response()
    }
}
