use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::apartment::ApartmentFullDto;

/// Apartment building
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct BuildingDto {
    /// Absent or `0` creates a new building
    #[serde(default)]
    pub id: Option<i32>,
    /// Street address, unique
    #[schema(max_length = 200)]
    pub address: String,
    pub floors_number: i32,
    pub lift_number: i32,
    /// Name of the residential complex the building belongs to
    #[schema(max_length = 100)]
    pub project_name: String,
}

/// Building together with all of its apartments
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct BuildingFullDto {
    #[serde(default)]
    pub id: Option<i32>,
    pub address: String,
    pub floors_number: i32,
    pub lift_number: i32,
    pub project_name: String,
    #[serde(default)]
    pub apartments: Vec<ApartmentFullDto>,
}

impl From<BuildingFullDto> for BuildingDto {
    fn from(full: BuildingFullDto) -> Self {
        Self {
            id: full.id,
            address: full.address,
            floors_number: full.floors_number,
            lift_number: full.lift_number,
            project_name: full.project_name,
        }
    }
}
