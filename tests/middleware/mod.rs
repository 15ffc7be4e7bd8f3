//! Basic authentication through the full router.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use tower::ServiceExt;
use upravdom::server::{
    middleware::auth::API_KEY_HEADER,
    model::app::{AppOptions, AppState, AuthOptions},
    router,
};
use upravdom_test_utils::prelude::*;

use crate::util::{basic_auth, body_json, test_app, TEST_LOGIN, TEST_PASSWORD};

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

/// Expect allow-listed paths to be served without credentials
#[tokio::test]
async fn allow_listed_path_needs_no_credentials() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_property_tables()
        .with_user_table()
        .build()
        .await?;
    let app = test_app(&test).await?;

    let resp = app.oneshot(get("/openapi.json")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect 401 with a Basic challenge when no credentials are sent
#[tokio::test]
async fn missing_credentials_are_rejected() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_property_tables()
        .with_user_table()
        .build()
        .await?;
    let app = test_app(&test).await?;

    let resp = app.oneshot(get("/owner/all_short")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(resp.headers()[header::WWW_AUTHENTICATE], "Basic");
    assert_eq!(body_json(resp).await["detail"], "Authorization error");

    Ok(())
}

/// Expect correct Basic credentials to pass
#[tokio::test]
async fn correct_password_is_accepted() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_property_tables()
        .with_user_table()
        .build()
        .await?;
    let app = test_app(&test).await?;

    let request = Request::builder()
        .uri("/owner/all_short")
        .header(header::AUTHORIZATION, basic_auth(TEST_LOGIN, TEST_PASSWORD))
        .body(Body::empty())
        .unwrap();
    let resp = app.oneshot(request).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect 401 with a Basic challenge for a wrong password
#[tokio::test]
async fn wrong_password_is_rejected() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_property_tables()
        .with_user_table()
        .build()
        .await?;
    let app = test_app(&test).await?;

    let request = Request::builder()
        .uri("/owner/all_short")
        .header(header::AUTHORIZATION, basic_auth(TEST_LOGIN, "wrong"))
        .body(Body::empty())
        .unwrap();
    let resp = app.oneshot(request).await.unwrap();

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(resp.headers()[header::WWW_AUTHENTICATE], "Basic");

    Ok(())
}

/// Expect 401 for a login that does not exist
#[tokio::test]
async fn unknown_login_is_rejected() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_property_tables()
        .with_user_table()
        .build()
        .await?;
    let app = test_app(&test).await?;

    let request = Request::builder()
        .uri("/owner/all_short")
        .header(header::AUTHORIZATION, basic_auth("nobody", TEST_PASSWORD))
        .body(Body::empty())
        .unwrap();
    let resp = app.oneshot(request).await.unwrap();

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

/// Expect the configured API key to pass and any other key to be rejected without a Basic fallback
#[tokio::test]
async fn api_key_is_checked_on_its_own() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_property_tables()
        .with_user_table()
        .build()
        .await?;
    let base: AppState = test.to_app_state();
    let state = AppState {
        options: Arc::new(AppOptions {
            auth: AuthOptions {
                api_key: Some("service-key".to_string()),
                ..base.options.auth.clone()
            },
            ..(*base.options).clone()
        }),
        ..base
    };
    let app = router::routes(state);

    let accepted = Request::builder()
        .uri("/bill/all_full")
        .header(API_KEY_HEADER, "service-key")
        .body(Body::empty())
        .unwrap();
    let resp = app.clone().oneshot(accepted).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let rejected = Request::builder()
        .uri("/bill/all_full")
        .header(API_KEY_HEADER, "other-key")
        .header(header::AUTHORIZATION, basic_auth(TEST_LOGIN, TEST_PASSWORD))
        .body(Body::empty())
        .unwrap();
    let resp = app.oneshot(rejected).await.unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}
