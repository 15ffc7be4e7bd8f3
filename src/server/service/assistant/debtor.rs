use std::collections::HashMap;

use crate::model::{
    apartment::ApartmentWithDebtDto,
    bill::BillSummaryDto,
    debtor::{ApartmentDebtDto, DebtorInfoDto},
};

/// Groups apartments with debt by owner.
///
/// Owners are identified by full name, phone and id together, so namesakes stay apart. Groups
/// keep the order in which their first apartment appears and apartments without an owner are
/// skipped. With `sort` the result is ordered by total debt, largest first, keeping the
/// first-seen order between equal totals.
pub fn aggregate_debtors(apartments: Vec<ApartmentWithDebtDto>, sort: bool) -> Vec<DebtorInfoDto> {
    let mut debtors: Vec<DebtorInfoDto> = Vec::new();
    let mut positions: HashMap<(String, String, i32), usize> = HashMap::new();

    for apartment in apartments {
        let Some(owner) = apartment.owner else {
            continue;
        };
        let Some(id_owner) = owner.id else {
            continue;
        };

        let common_debt: f64 = apartment.bills.iter().map(|bill| bill.bill_size).sum();
        let (address, project_name) = match apartment.building {
            Some(building) => (building.address, building.project_name),
            None => (String::new(), String::new()),
        };

        let apartment_debt = ApartmentDebtDto {
            utility_account: apartment.utility_account,
            apartment_number: apartment.apartment_number,
            floor: apartment.floor,
            address,
            project_name,
            common_debt,
            bills_not_payed: apartment
                .bills
                .into_iter()
                .map(BillSummaryDto::from)
                .collect(),
        };

        let key = (owner.fullname.clone(), owner.phone.clone(), id_owner);
        let position = *positions.entry(key).or_insert_with(|| {
            debtors.push(DebtorInfoDto {
                id_owner,
                fullname: owner.fullname,
                phone: owner.phone,
                all_aparts_common_debt: 0.0,
                apartments_debt: Vec::new(),
            });
            debtors.len() - 1
        });

        let debtor = &mut debtors[position];
        debtor.all_aparts_common_debt += common_debt;
        debtor.apartments_debt.push(apartment_debt);
    }

    if sort {
        debtors.sort_by(|a, b| b.all_aparts_common_debt.total_cmp(&a.all_aparts_common_debt));
    }

    debtors
}
