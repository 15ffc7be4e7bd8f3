use serde_json::json;
use upravdom::{model::bill::BillDto, server::controller::bill::upsert_bill};

use super::*;

/// Expect 200 with the stored bill
#[tokio::test]
async fn upsert_returns_stored_bill() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_property_tables()
        .with_user_table()
        .build()
        .await?;
    let building = test.property().insert_building("ул. Мира, 1").await?;
    let apartment = test
        .property()
        .insert_apartment(building.id, None, "100")
        .await?;
    let state: AppState = test.to_app_state();

    let resp = upsert_bill(
        State(state),
        ValidJson(BillDto {
            id: None,
            id_apartment: apartment.id,
            bill_period: "2024-05".to_string(),
            bill_size: 3200.75,
            is_paid: false,
        }),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["bill_size"], 3200.75);
    assert!(body["id"].is_i64());

    Ok(())
}

/// Expect `deleted: false` when one of the ids does not exist
#[tokio::test]
async fn delete_many_reports_missing_ids() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_property_tables()
        .with_user_table()
        .build()
        .await?;
    let building = test.property().insert_building("ул. Мира, 1").await?;
    let apartment = test
        .property()
        .insert_apartment(building.id, None, "100")
        .await?;
    let bill = test
        .property()
        .insert_bill(apartment.id, "2024-01", 10.0, false)
        .await?;
    let app = test_app(&test).await?;

    let resp = app
        .oneshot(authorized(
            "DELETE",
            "/bill/many",
            Some(json!([bill.id, bill.id + 10])),
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await, json!({ "deleted": false }));

    Ok(())
}

/// Expect 422 for a body that is not valid JSON
#[tokio::test]
async fn upsert_rejects_malformed_json() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_property_tables()
        .with_user_table()
        .build()
        .await?;
    let app = test_app(&test).await?;

    let request = axum::http::Request::builder()
        .method("PUT")
        .uri("/bill")
        .header(axum::http::header::CONTENT_TYPE, "application/json")
        .header(
            axum::http::header::AUTHORIZATION,
            crate::util::basic_auth(crate::util::TEST_LOGIN, crate::util::TEST_PASSWORD),
        )
        .body(axum::body::Body::from("{\"id_apartment\":"))
        .unwrap();

    let resp = app.oneshot(request).await.unwrap();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body_json(resp).await[0]["type"], "json_invalid");

    Ok(())
}
