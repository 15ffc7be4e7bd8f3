use serde_json::json;
use upravdom::server::controller::apartment::{delete_apartment, get_apartments_short};

use super::*;

/// Expect an integer utility account to be stored as a string and the info to be embedded
#[tokio::test]
async fn upsert_accepts_integer_account() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_property_tables()
        .with_user_table()
        .build()
        .await?;
    let building = test.property().insert_building("ул. Мира, 1").await?;
    let app = test_app(&test).await?;

    let resp = app
        .oneshot(authorized(
            "PUT",
            "/apartments",
            Some(json!({
                "utility_account": 1234567,
                "apartment_number": 12,
                "floor": 3,
                "id_building": building.id,
                "id_owner": 0,
                "apartment_info": {
                    "room_number": 2,
                    "common_square": 48.3
                }
            })),
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["utility_account"], "1234567");
    assert_eq!(body["id_owner"], serde_json::Value::Null);
    assert_eq!(body["apartment_info"]["room_number"], 2);

    Ok(())
}

/// Expect 422 `string_too_long` for an account over 100 characters
#[tokio::test]
async fn upsert_rejects_long_account() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_property_tables()
        .with_user_table()
        .build()
        .await?;
    let building = test.property().insert_building("ул. Мира, 1").await?;
    let app = test_app(&test).await?;

    let resp = app
        .oneshot(authorized(
            "PUT",
            "/apartments",
            Some(json!({
                "utility_account": "1".repeat(101),
                "apartment_number": 12,
                "floor": 3,
                "id_building": building.id
            })),
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_json(resp).await;
    assert_eq!(body[0]["type"], "string_too_long");
    assert_eq!(body[0]["location"], json!(["body", "utility_account"]));

    Ok(())
}

/// Expect 400 `sqlalchemy_integrity_error` for an unknown building
#[tokio::test]
async fn upsert_reports_integrity_violation() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_property_tables()
        .with_user_table()
        .build()
        .await?;
    let app = test_app(&test).await?;

    let resp = app
        .oneshot(authorized(
            "PUT",
            "/apartments",
            Some(json!({
                "utility_account": "100",
                "apartment_number": 1,
                "floor": 1,
                "id_building": 99
            })),
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(resp).await["message"], "sqlalchemy_integrity_error");

    Ok(())
}

/// Expect 422 `greater_than_equal` for a zero id
#[tokio::test]
async fn get_rejects_zero_id() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_property_tables()
        .with_user_table()
        .build()
        .await?;
    let app = test_app(&test).await?;

    let resp = app
        .oneshot(authorized("GET", "/apartments/0", None))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body_json(resp).await[0]["type"], "greater_than_equal");

    Ok(())
}

/// Expect a cached list to be served until it expires, even after a write
#[tokio::test]
async fn get_all_short_is_cached() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_property_tables()
        .with_user_table()
        .build()
        .await?;
    let building = test.property().insert_building("ул. Мира, 1").await?;
    test.property()
        .insert_apartment(building.id, None, "100")
        .await?;
    let state: AppState = test.to_app_state();

    let first = get_apartments_short(State(state.clone()), "/apartments/all_short".parse().unwrap())
        .await
        .into_response();
    assert_eq!(body_json(first).await.as_array().unwrap().len(), 1);

    test.property()
        .insert_apartment(building.id, None, "101")
        .await?;

    let second = get_apartments_short(State(state), "/apartments/all_short".parse().unwrap())
        .await
        .into_response();
    assert_eq!(body_json(second).await.as_array().unwrap().len(), 1);

    Ok(())
}

/// Expect 400 and the apartment kept while it has bills
#[tokio::test]
async fn delete_fails_while_bills_exist() -> Result<(), TestError> {
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
    test.property()
        .insert_bill(apartment.id, "2024-01", 10.0, true)
        .await?;
    let state: AppState = test.to_app_state();

    let resp = delete_apartment(State(state), ObjectId(apartment.id))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect only apartments of the requested building with only their unpaid bills
#[tokio::test]
async fn get_apartments_with_debt_filters_building() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_property_tables()
        .with_user_table()
        .build()
        .await?;
    let first = test.property().insert_building("ул. Мира, 1").await?;
    let second = test.property().insert_building("ул. Мира, 3").await?;
    let a = test.property().insert_apartment(first.id, None, "1").await?;
    let b = test.property().insert_apartment(second.id, None, "2").await?;
    test.property().insert_bill(a.id, "2024-01", 10.0, false).await?;
    test.property().insert_bill(b.id, "2024-01", 20.0, false).await?;
    test.property().insert_bill(b.id, "2024-02", 30.0, true).await?;
    let app = test_app(&test).await?;

    let resp = app
        .oneshot(authorized(
            "GET",
            &format!("/apartments/get_apartments_with_debt?building_id={}", second.id),
            None,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    let apartments = body.as_array().unwrap();
    assert_eq!(apartments.len(), 1);
    assert_eq!(apartments[0]["utility_account"], "2");
    assert_eq!(apartments[0]["bills"].as_array().unwrap().len(), 1);
    assert_eq!(apartments[0]["bills"][0]["is_paid"], false);

    Ok(())
}
