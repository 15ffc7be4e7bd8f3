use upravdom::server::controller::assistant::get_all_debtors_with_debt_analyse;
use upravdom::{model::api::ProjectNameQuery, server::extract::ValidQuery};

use super::*;

/// Expect the rendered notice for an owned apartment with debt
#[tokio::test]
async fn message_for_debtor_renders_notice() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_property_tables()
        .with_user_table()
        .build()
        .await?;
    let building = test.property().insert_building("ул. Мира, 1").await?;
    let owner = test.property().insert_owner("Иванов Иван", "89001234567").await?;
    let apartment = test
        .property()
        .insert_apartment(building.id, Some(owner.id), "100")
        .await?;
    test.property()
        .insert_bill(apartment.id, "2024-01", 100.0, false)
        .await?;
    let app = test_app(&test).await?;

    let resp = app
        .oneshot(authorized(
            "GET",
            &format!(
                "/assistant/get_message_body_for_debtor?apartment_number={}&building_id={}",
                apartment.apartment_number, building.id
            ),
            None,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    let data = body["data"].as_str().unwrap();
    assert!(data.contains("Иванов Иван"));
    assert!(data.contains("ул. Мира, 1, кв 1"));
    assert!(data.contains("- 2024-01: 100.0 \n"));

    Ok(())
}

/// Expect 404 when the apartment has no unpaid bills
#[tokio::test]
async fn message_for_debtor_not_found_without_debt() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_property_tables()
        .with_user_table()
        .build()
        .await?;
    let building = test.property().insert_building("ул. Мира, 1").await?;
    let app = test_app(&test).await?;

    let resp = app
        .oneshot(authorized(
            "GET",
            &format!(
                "/assistant/get_message_body_for_debtor?apartment_number=1&building_id={}",
                building.id
            ),
            None,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 422 when a required query parameter is missing
#[tokio::test]
async fn message_for_debtor_requires_query() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_property_tables()
        .with_user_table()
        .build()
        .await?;
    let app = test_app(&test).await?;

    let resp = app
        .oneshot(authorized(
            "GET",
            "/assistant/get_message_body_for_debtor?apartment_number=1",
            None,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body_json(resp).await[0]["type"], "query_invalid");

    Ok(())
}

/// Expect debtors grouped by owner and ordered by total debt
#[tokio::test]
async fn debt_analyse_groups_and_sorts() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_property_tables()
        .with_user_table()
        .build()
        .await?;
    let building = test.property().insert_building("ул. Мира, 1").await?;
    let small = test.property().insert_owner("Малый Должник", "89000000001").await?;
    let large = test.property().insert_owner("Крупный Должник", "89000000002").await?;
    let a = test
        .property()
        .insert_apartment(building.id, Some(small.id), "1")
        .await?;
    let b = test
        .property()
        .insert_apartment(building.id, Some(large.id), "2")
        .await?;
    let c = test
        .property()
        .insert_apartment(building.id, Some(large.id), "3")
        .await?;
    test.property().insert_bill(a.id, "2024-01", 120.0, false).await?;
    test.property().insert_bill(b.id, "2024-01", 100.0, false).await?;
    test.property().insert_bill(c.id, "2024-01", 50.0, false).await?;
    let state: AppState = test.to_app_state();

    let resp = get_all_debtors_with_debt_analyse(
        State(state),
        ValidQuery(ProjectNameQuery::default()),
        "/assistant/get_all_debtors_with_debt_analyse".parse().unwrap(),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body[0]["id_owner"], large.id);
    assert_eq!(body[0]["all_aparts_common_debt"], 150.0);
    assert_eq!(body[0]["apartments_debt"].as_array().unwrap().len(), 2);
    assert_eq!(body[1]["id_owner"], small.id);

    Ok(())
}
