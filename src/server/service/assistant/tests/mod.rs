use crate::model::{
    apartment::ApartmentWithDebtDto, bill::BillDto, building::BuildingDto, owner::OwnerDto,
};

mod aggregate_debtors;

fn owner(id: i32, fullname: &str, phone: &str) -> OwnerDto {
    OwnerDto {
        id: Some(id),
        fullname: fullname.to_string(),
        passport_series: "4510".to_string(),
        passport_values: "123456".to_string(),
        phone: phone.to_string(),
    }
}

fn bill(bill_period: &str, bill_size: f64) -> BillDto {
    BillDto {
        id: None,
        id_apartment: 1,
        bill_period: bill_period.to_string(),
        bill_size,
        is_paid: false,
    }
}

fn apartment_with_debt(
    owner: Option<OwnerDto>,
    utility_account: &str,
    bills: Vec<BillDto>,
) -> ApartmentWithDebtDto {
    ApartmentWithDebtDto {
        utility_account: utility_account.to_string(),
        apartment_number: 15,
        floor: 3,
        apartment_info: None,
        building: Some(BuildingDto {
            id: Some(1),
            address: "ул. Ленина, 5".to_string(),
            floors_number: 9,
            lift_number: 2,
            project_name: "Солнечный".to_string(),
        }),
        owner,
        bills,
    }
}
