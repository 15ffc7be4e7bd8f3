use super::*;

use crate::server::service::assistant::aggregate_debtors;

/// Expect apartments of the same owner to be summed into one group
#[test]
fn sums_debt_per_owner() {
    let ivanov = owner(1, "Иванов Иван", "89001112233");
    let apartments = vec![
        apartment_with_debt(Some(ivanov.clone()), "100", vec![bill("2024-01", 100.0)]),
        apartment_with_debt(Some(ivanov), "101", vec![bill("2024-01", 50.0)]),
    ];

    let debtors = aggregate_debtors(apartments, false);

    assert_eq!(debtors.len(), 1);
    assert_eq!(debtors[0].all_aparts_common_debt, 150.0);
    assert_eq!(debtors[0].apartments_debt.len(), 2);
    assert_eq!(debtors[0].apartments_debt[0].common_debt, 100.0);
    assert_eq!(debtors[0].apartments_debt[1].common_debt, 50.0);
    assert_eq!(debtors[0].apartments_debt[0].address, "ул. Ленина, 5");
}

/// Expect namesakes with different ids or phones to stay in separate groups
#[test]
fn keeps_namesakes_apart() {
    let apartments = vec![
        apartment_with_debt(
            Some(owner(1, "Иванов Иван", "89001112233")),
            "100",
            vec![bill("2024-01", 10.0)],
        ),
        apartment_with_debt(
            Some(owner(2, "Иванов Иван", "89001112233")),
            "101",
            vec![bill("2024-01", 20.0)],
        ),
        apartment_with_debt(
            Some(owner(1, "Иванов Иван", "89009998877")),
            "102",
            vec![bill("2024-01", 30.0)],
        ),
    ];

    let debtors = aggregate_debtors(apartments, false);

    assert_eq!(debtors.len(), 3);
}

/// Expect a stable descending order when sorting, equal totals keep their order
#[test]
fn sorts_descending_and_stable() {
    let apartments = vec![
        apartment_with_debt(
            Some(owner(1, "Первый Должник", "89000000001")),
            "1",
            vec![bill("2024-01", 50.0)],
        ),
        apartment_with_debt(
            Some(owner(2, "Второй Должник", "89000000002")),
            "2",
            vec![bill("2024-01", 200.0)],
        ),
        apartment_with_debt(
            Some(owner(3, "Третий Должник", "89000000003")),
            "3",
            vec![bill("2024-01", 50.0)],
        ),
    ];

    let debtors = aggregate_debtors(apartments, true);

    let ids: Vec<i32> = debtors.iter().map(|debtor| debtor.id_owner).collect();
    assert_eq!(ids, vec![2, 1, 3]);
}

/// Expect first-seen order without sorting and ownerless apartments to be skipped
#[test]
fn keeps_first_seen_order_and_skips_ownerless() {
    let apartments = vec![
        apartment_with_debt(
            Some(owner(1, "Первый Должник", "89000000001")),
            "1",
            vec![bill("2024-01", 5.0)],
        ),
        apartment_with_debt(None, "2", vec![bill("2024-01", 500.0)]),
        apartment_with_debt(
            Some(owner(2, "Второй Должник", "89000000002")),
            "3",
            vec![bill("2024-01", 50.0)],
        ),
    ];

    let debtors = aggregate_debtors(apartments, false);

    let ids: Vec<i32> = debtors.iter().map(|debtor| debtor.id_owner).collect();
    assert_eq!(ids, vec![1, 2]);
}
