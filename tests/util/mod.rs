//! Helpers shared by the integration tests.

use axum::{
    body::{to_bytes, Body},
    http::{header, Request},
    response::Response,
    Router,
};
use base64::{engine::general_purpose::STANDARD, Engine};
use upravdom::server::{model::app::AppState, router, util::password::hash_password};
use upravdom_test_utils::prelude::*;

pub static TEST_LOGIN: &str = "admin";
pub static TEST_PASSWORD: &str = "s3cret";

/// Full router over the test database, with the test admin stored
pub async fn test_app(test: &TestContext) -> Result<Router, TestError> {
    let hashed_password = hash_password(TEST_PASSWORD).unwrap();
    test.user().insert_user(TEST_LOGIN, &hashed_password).await?;

    let state: AppState = test.to_app_state();

    Ok(router::routes(state))
}

/// `Authorization` header value for the given credentials
pub fn basic_auth(login: &str, password: &str) -> String {
    format!("Basic {}", STANDARD.encode(format!("{}:{}", login, password)))
}

/// Request authorized as the test admin
pub fn authorized(method: &str, uri: &str, body: Option<serde_json::Value>) -> Request<Body> {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::AUTHORIZATION, basic_auth(TEST_LOGIN, TEST_PASSWORD));

    match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

/// Reads the response body as JSON
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    serde_json::from_slice(&bytes).unwrap()
}
