use serde_json::json;
use upravdom::{
    model::owner::OwnerDto,
    server::controller::owner::{delete_owner, get_owner, upsert_owner},
};

use super::*;

fn owner_dto(fullname: &str) -> OwnerDto {
    OwnerDto {
        id: None,
        fullname: fullname.to_string(),
        passport_series: "4510".to_string(),
        passport_values: "123456".to_string(),
        phone: "89001234567".to_string(),
    }
}

/// Expect 200 with the stored owner and an empty apartment list
#[tokio::test]
async fn upsert_returns_stored_owner() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_property_tables()
        .with_user_table()
        .build()
        .await?;
    let state: AppState = test.to_app_state();

    let result = upsert_owner(State(state), ValidJson(owner_dto("Иванов Иван"))).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect names, phones and passport data to be normalized before storing
#[tokio::test]
async fn upsert_normalizes_fields() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_property_tables()
        .with_user_table()
        .build()
        .await?;
    let app = test_app(&test).await?;

    let resp = app
        .oneshot(authorized(
            "PUT",
            "/owner",
            Some(json!({
                "fullname": "иванов   иван",
                "passport_series": "45 10",
                "passport_values": "123-456",
                "phone": "+7 (900) 123-45-67"
            })),
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["fullname"], "Иванов Иван");
    assert_eq!(body["passport_series"], "4510");
    assert_eq!(body["passport_values"], "123456");
    assert_eq!(body["phone"], "89001234567");
    assert_eq!(body["apartments"], json!([]));

    Ok(())
}

/// Expect 422 with the offending field when the name contains Latin letters
#[tokio::test]
async fn upsert_rejects_latin_name() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_property_tables()
        .with_user_table()
        .build()
        .await?;
    let app = test_app(&test).await?;

    let resp = app
        .oneshot(authorized(
            "PUT",
            "/owner",
            Some(json!({
                "fullname": "Ivanov Ivan",
                "passport_series": "4510",
                "passport_values": "123456",
                "phone": "89001234567"
            })),
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_json(resp).await;
    assert_eq!(body["message"], "validation_error");
    assert_eq!(body["wrong_data_key"], "fullname");
    assert_eq!(body["data"], "Ivanov Ivan");

    Ok(())
}

/// Expect 422 when the phone number has the wrong number of digits
#[tokio::test]
async fn upsert_rejects_short_phone() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_property_tables()
        .with_user_table()
        .build()
        .await?;
    let app = test_app(&test).await?;

    let resp = app
        .oneshot(authorized(
            "PUT",
            "/owner/many",
            Some(json!([{
                "fullname": "Иванов Иван",
                "passport_series": "4510",
                "passport_values": "123456",
                "phone": "8900123"
            }])),
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_json(resp).await;
    assert_eq!(body["wrong_data_key"], "phone");

    Ok(())
}

/// Expect 404 with `object_not_found_error` for an unknown owner
#[tokio::test]
async fn get_returns_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_property_tables()
        .with_user_table()
        .build()
        .await?;
    let state: AppState = test.to_app_state();

    let resp = get_owner(State(state), ObjectId(7), "/owner/7".parse().unwrap())
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = body_json(resp).await;
    assert_eq!(body["message"], "object_not_found_error");

    Ok(())
}

/// Expect the owner's apartments to be listed
#[tokio::test]
async fn get_lists_owned_apartments() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_property_tables()
        .with_user_table()
        .build()
        .await?;
    let building = test.property().insert_building("ул. Мира, 1").await?;
    let owner = test.property().insert_owner("Иванов Иван", "89001234567").await?;
    test.property()
        .insert_apartment(building.id, Some(owner.id), "500")
        .await?;
    let app = test_app(&test).await?;

    let resp = app
        .oneshot(authorized("GET", &format!("/owner/{}", owner.id), None))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["apartments"][0]["utility_account"], "500");

    Ok(())
}

/// Expect 200 with `deleted: true` and the apartment kept without owner
#[tokio::test]
async fn delete_keeps_apartments() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_property_tables()
        .with_user_table()
        .build()
        .await?;
    let building = test.property().insert_building("ул. Мира, 1").await?;
    let owner = test.property().insert_owner("Иванов Иван", "89001234567").await?;
    test.property()
        .insert_apartment(building.id, Some(owner.id), "500")
        .await?;
    let state: AppState = test.to_app_state();

    let resp = delete_owner(State(state), ObjectId(owner.id))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await["deleted"], true);

    Ok(())
}
