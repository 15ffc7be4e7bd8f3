use serde::{Deserialize, Deserializer, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::model::{bill::BillDto, building::BuildingDto, owner::OwnerDto};

/// Detail record of an apartment
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct ApartmentInfoDto {
    #[serde(default)]
    pub id: Option<i32>,
    pub room_number: i32,
    pub common_square: f64,
    #[serde(default)]
    pub kitchen_square: Option<f64>,
    #[serde(default)]
    pub balcony: Option<bool>,
}

/// Apartment as shown in lists
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct ApartmentDto {
    /// Absent or `0` creates a new apartment
    #[serde(default)]
    pub id: Option<i32>,
    /// Utility account, unique within a building
    #[serde(deserialize_with = "string_or_integer")]
    #[schema(max_length = 100)]
    pub utility_account: String,
    pub apartment_number: i32,
    pub floor: i32,
    pub id_building: i32,
    /// `0` is treated as no owner
    #[serde(default, deserialize_with = "zero_as_none")]
    pub id_owner: Option<i32>,
}

/// Apartment together with its detail record
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct ApartmentFullDto {
    #[serde(default)]
    pub id: Option<i32>,
    #[serde(deserialize_with = "string_or_integer")]
    #[schema(max_length = 100)]
    pub utility_account: String,
    pub apartment_number: i32,
    pub floor: i32,
    pub id_building: i32,
    #[serde(default, deserialize_with = "zero_as_none")]
    pub id_owner: Option<i32>,
    #[serde(default)]
    pub apartment_info: Option<ApartmentInfoDto>,
}

/// Apartment with at least one unpaid bill, joined with everything needed to contact its owner
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct ApartmentWithDebtDto {
    pub utility_account: String,
    pub apartment_number: i32,
    pub floor: i32,
    pub apartment_info: Option<ApartmentInfoDto>,
    pub building: Option<BuildingDto>,
    pub owner: Option<OwnerDto>,
    /// Unpaid bills only
    pub bills: Vec<BillDto>,
}

/// Query string for `/apartments/get_apartments_with_debt`
#[derive(Serialize, Deserialize, IntoParams, Debug, Default)]
#[into_params(parameter_in = Query)]
pub struct ApartmentsWithDebtQuery {
    /// Restrict to one building, all buildings when omitted or `0`
    pub building_id: Option<i32>,
}

/// Query string for `/assistant/get_message_body_for_debtor`
#[derive(Serialize, Deserialize, IntoParams, Debug)]
#[into_params(parameter_in = Query)]
pub struct DebtorApartmentQuery {
    pub apartment_number: i32,
    pub building_id: i32,
}

impl From<ApartmentFullDto> for ApartmentDto {
    fn from(full: ApartmentFullDto) -> Self {
        Self {
            id: full.id,
            utility_account: full.utility_account,
            apartment_number: full.apartment_number,
            floor: full.floor,
            id_building: full.id_building,
            id_owner: full.id_owner,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrInteger {
    String(String),
    Integer(i64),
}

fn string_or_integer<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match StringOrInteger::deserialize(deserializer)? {
        StringOrInteger::String(value) => value,
        StringOrInteger::Integer(value) => value.to_string(),
    })
}

fn zero_as_none<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<i32>::deserialize(deserializer)?.filter(|id| *id != 0))
}
