use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::{DataErrorDto, RequestValidationErrorDto};

/// A field value that was parsed but rejected by a validator
#[derive(Error, Debug)]
#[error("Invalid value for {wrong_data_key}: {reason}")]
pub struct ValidationError {
    pub wrong_data_key: String,
    pub data: serde_json::Value,
    pub reason: String,
}

impl ValidationError {
    pub fn new(wrong_data_key: &str, data: &str, reason: &str) -> Self {
        Self {
            wrong_data_key: wrong_data_key.to_string(),
            data: serde_json::Value::String(data.to_string()),
            reason: reason.to_string(),
        }
    }
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(DataErrorDto {
                message: "validation_error".to_string(),
                wrong_data_key: self.wrong_data_key,
                data: self.data,
                reason: self.reason,
            }),
        )
            .into_response()
    }
}

/// A request whose body, query string or path could not be parsed
#[derive(Error, Debug)]
#[error("Request validation failed: {0:?}")]
pub struct RequestValidationError(pub Vec<RequestValidationErrorDto>);

impl RequestValidationError {
    pub fn single(location: &[&str], message: impl Into<String>, kind: &str) -> Self {
        Self(vec![RequestValidationErrorDto {
            location: location.iter().map(|part| part.to_string()).collect(),
            message: message.into(),
            kind: kind.to_string(),
        }])
    }
}

impl From<JsonRejection> for RequestValidationError {
    fn from(rejection: JsonRejection) -> Self {
        let kind = match rejection {
            JsonRejection::MissingJsonContentType(_) => "content_type",
            JsonRejection::JsonSyntaxError(_) => "json_invalid",
            _ => "model_attributes_type",
        };

        Self::single(&["body"], rejection.body_text(), kind)
    }
}

impl From<QueryRejection> for RequestValidationError {
    fn from(rejection: QueryRejection) -> Self {
        Self::single(&["query"], rejection.body_text(), "query_invalid")
    }
}

impl From<PathRejection> for RequestValidationError {
    fn from(rejection: PathRejection) -> Self {
        Self::single(&["path"], rejection.body_text(), "path_invalid")
    }
}

impl IntoResponse for RequestValidationError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        (StatusCode::UNPROCESSABLE_ENTITY, Json(self.0)).into_response()
    }
}
