use upravdom::server::controller::building::{delete_building, get_buildings_full};

use super::*;

/// Expect buildings with their apartments in the full list
#[tokio::test]
async fn get_all_full_embeds_apartments() -> Result<(), TestError> {
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

    let resp = get_buildings_full(State(state), "/building/all_full".parse().unwrap())
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body[0]["address"], "ул. Мира, 1");
    assert_eq!(body[0]["apartments"][0]["utility_account"], "100");

    Ok(())
}

/// Expect the single building without its apartments
#[tokio::test]
async fn get_returns_short_building() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_property_tables()
        .with_user_table()
        .build()
        .await?;
    let building = test.property().insert_building("ул. Мира, 1").await?;
    test.property()
        .insert_apartment(building.id, None, "100")
        .await?;
    let app = test_app(&test).await?;

    let resp = app
        .oneshot(authorized("GET", &format!("/building/{}", building.id), None))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["project_name"], "П-44");
    assert!(body.get("apartments").is_none());

    Ok(())
}

/// Expect the building's apartments to be removed with it
#[tokio::test]
async fn delete_removes_apartments() -> Result<(), TestError> {
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
    test.property().insert_apartment_info(apartment.id).await?;
    let app = test_app(&test).await?;

    let resp = app
        .clone()
        .oneshot(authorized("DELETE", &format!("/building/{}", building.id), None))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await["deleted"], true);

    let resp = app
        .oneshot(authorized(
            "GET",
            &format!("/apartments/{}", apartment.id),
            None,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect `deleted: false` for an unknown building
#[tokio::test]
async fn delete_reports_missing_building() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_property_tables()
        .with_user_table()
        .build()
        .await?;
    let state: AppState = test.to_app_state();

    let resp = delete_building(State(state), ObjectId(3))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await["deleted"], false);

    Ok(())
}
