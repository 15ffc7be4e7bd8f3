use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Apartment owner
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct OwnerDto {
    /// Absent or `0` creates a new owner
    #[serde(default)]
    pub id: Option<i32>,
    /// Cyrillic full name, normalized to title case
    pub fullname: String,
    /// 4 digits
    pub passport_series: String,
    /// 6 digits
    pub passport_values: String,
    /// 11 digits starting with `8`, unique
    pub phone: String,
}

/// Apartment as listed under its owner
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct OwnerApartmentDto {
    pub utility_account: String,
    pub apartment_number: i32,
    pub floor: i32,
}

/// Owner together with the apartments they own
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct OwnerFullDto {
    pub id: Option<i32>,
    pub fullname: String,
    pub passport_series: String,
    pub passport_values: String,
    pub phone: String,
    pub apartments: Vec<OwnerApartmentDto>,
}

impl From<OwnerFullDto> for OwnerDto {
    fn from(full: OwnerFullDto) -> Self {
        Self {
            id: full.id,
            fullname: full.fullname,
            passport_series: full.passport_series,
            passport_values: full.passport_values,
            phone: full.phone,
        }
    }
}
