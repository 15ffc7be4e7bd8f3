//! Request extractors that answer parse and validation failures with 422.

use axum::{
    extract::{FromRequest, FromRequestParts, Path, Query, Request},
    http::request::Parts,
    Json,
};
use serde::de::DeserializeOwned;

use crate::server::{
    error::{validation::RequestValidationError, Error},
    util::validate::ValidateDto,
};

/// JSON body that has been deserialized and passed through [`ValidateDto::validate`]
///
/// Validation runs before the handler body, so rejected input never reaches the database.
#[derive(Debug)]
pub struct ValidJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + ValidateDto,
{
    type Rejection = Error;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(RequestValidationError::from)?;

        Ok(Self(value.validate()?))
    }
}

/// Query string parameters, rejected with the `query_invalid` validation error
#[derive(Debug)]
pub struct ValidQuery<T>(pub T);

impl<S, T> FromRequestParts<S> for ValidQuery<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(RequestValidationError::from)?;

        Ok(Self(value))
    }
}

/// Primary key from the `{id}` path segment, must be at least 1
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObjectId(pub i32);

impl<S> FromRequestParts<S> for ObjectId
where
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i32>::from_request_parts(parts, state)
            .await
            .map_err(RequestValidationError::from)?;

        if id < 1 {
            return Err(RequestValidationError::single(
                &["path", "id"],
                "Input should be greater than or equal to 1",
                "greater_than_equal",
            )
            .into());
        }

        Ok(Self(id))
    }
}
