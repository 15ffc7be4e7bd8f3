use crate::{
    model::{apartment::ApartmentWithDebtDto, debtor::DebtorMessageDto},
    server::util::template::{fill_placeholders, format_amount},
};

/// Fills the notice template for one apartment.
///
/// The placeholders receive, in order: owner name, `"{address}, кв {number}"`, owner name,
/// total debt and one `"- {period}: {amount} \n"` line per bill. A missing owner or building
/// leaves the matching parts empty.
pub fn render_debtor_message(template: &str, apartment: &ApartmentWithDebtDto) -> DebtorMessageDto {
    let fullname = apartment
        .owner
        .as_ref()
        .map(|owner| owner.fullname.as_str())
        .unwrap_or_default();
    let address = apartment
        .building
        .as_ref()
        .map(|building| building.address.as_str())
        .unwrap_or_default();
    let recipient_address = format!("{}, кв {}", address, apartment.apartment_number);

    let total: f64 = apartment.bills.iter().map(|bill| bill.bill_size).sum();
    let bill_lines: String = apartment
        .bills
        .iter()
        .map(|bill| format!("- {}: {} \n", bill.bill_period, format_amount(bill.bill_size)))
        .collect();

    DebtorMessageDto {
        data: fill_placeholders(
            template,
            &[
                fullname,
                &recipient_address,
                fullname,
                &format_amount(total),
                &bill_lines,
            ],
        ),
    }
}
