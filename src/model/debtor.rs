use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::bill::BillSummaryDto;

/// Notice letter addressed to a debtor
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct DebtorMessageDto {
    /// Rendered letter text
    pub data: String,
}

/// Debt of a single apartment
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct ApartmentDebtDto {
    pub utility_account: String,
    pub apartment_number: i32,
    pub floor: i32,
    pub address: String,
    pub project_name: String,
    /// Sum of the unpaid bills of this apartment
    pub common_debt: f64,
    pub bills_not_payed: Vec<BillSummaryDto>,
}

/// Owner with the debt of every apartment they own
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct DebtorInfoDto {
    pub id_owner: i32,
    pub fullname: String,
    pub phone: String,
    /// Sum of the debt over all apartments of the owner
    pub all_aparts_common_debt: f64,
    pub apartments_debt: Vec<ApartmentDebtDto>,
}
