use upravdom_test_utils::prelude::*;

use crate::model::{apartment::ApartmentFullDto, owner::OwnerDto};


fn new_apartment(id_building: i32, utility_account: &str, apartment_number: i32) -> ApartmentFullDto {
    ApartmentFullDto {
        id: None,
        utility_account: utility_account.to_string(),
        apartment_number,
        floor: 2,
        id_building,
        id_owner: None,
        apartment_info: None,
    }
}

fn new_owner(fullname: &str) -> OwnerDto {
    OwnerDto {
        id: None,
        fullname: fullname.to_string(),
        passport_series: "4510".to_string(),
        passport_values: "654321".to_string(),
        phone: "79001234567".to_string(),
    }
}

async fn property_test() -> Result<TestContext, TestError> {
    TestBuilder::new().with_property_tables().build().await
}
