use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Utility bill issued for an apartment
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct BillDto {
    /// Absent or `0` creates a new bill
    #[serde(default)]
    pub id: Option<i32>,
    pub id_apartment: i32,
    /// Billing period label, e.g. `2024-03`
    pub bill_period: String,
    pub bill_size: f64,
    pub is_paid: bool,
}

/// Bill without identifiers, as listed in debt reports
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct BillSummaryDto {
    pub bill_period: String,
    pub bill_size: f64,
    pub is_paid: bool,
}

impl From<BillDto> for BillSummaryDto {
    fn from(bill: BillDto) -> Self {
        Self {
            bill_period: bill.bill_period,
            bill_size: bill.bill_size,
            is_paid: bill.is_paid,
        }
    }
}
