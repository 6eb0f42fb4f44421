// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use ledgerbook::models::{Kind, Transaction};
use ledgerbook::query;
use rust_decimal::Decimal;

fn tx(id: i64, date: &str, kind: Kind, label: &str, amount: i64, remark: &str) -> Transaction {
    Transaction {
        id,
        date: date.to_string(),
        kind,
        label: label.to_string(),
        amount: Decimal::from(amount),
        remark: remark.to_string(),
    }
}

fn march_sample() -> Vec<Transaction> {
    vec![
        tx(2, "2025-03-20", Kind::Income, "Income.Salary", 3000000, ""),
        tx(1, "2025-03-05", Kind::Expense, "Expense.Food", 15000, "lunch"),
    ]
}

#[test]
fn monthly_sum_partitions_by_kind() {
    let records = march_sample();
    let (income, expense) = query::monthly_sum(&records, "2025-03");
    assert_eq!(income, Decimal::from(3000000));
    assert_eq!(expense, Decimal::from(15000));
}

#[test]
fn monthly_sum_of_absent_month_is_zero_zero() {
    let records = march_sample();
    assert_eq!(
        query::monthly_sum(&records, "1999-01"),
        (Decimal::ZERO, Decimal::ZERO)
    );
    assert_eq!(query::monthly_sum(&[], "2025-03"), (Decimal::ZERO, Decimal::ZERO));
}

#[test]
fn monthly_sum_skips_unparsable_dates() {
    let mut records = march_sample();
    records.push(tx(3, "2025-03-99", Kind::Expense, "Expense.Food", 777, ""));
    records.push(tx(4, "garbage", Kind::Expense, "Expense.Food", 888, ""));
    let (_, expense) = query::monthly_sum(&records, "2025-03");
    assert_eq!(expense, Decimal::from(15000));
}

#[test]
fn monthly_sum_is_additive_over_disjoint_sets() {
    let a = vec![
        tx(1, "2025-03-01", Kind::Expense, "Expense.Food", 100, ""),
        tx(2, "2025-03-02", Kind::Income, "Income.Salary", 500, ""),
    ];
    let b = vec![
        tx(3, "2025-03-09", Kind::Expense, "Expense.Transit", 40, ""),
        tx(4, "2025-04-01", Kind::Expense, "Expense.Food", 60, ""),
    ];
    let union: Vec<Transaction> = a.iter().chain(b.iter()).cloned().collect();
    for month in ["2025-03", "2025-04"] {
        let (ia, ea) = query::monthly_sum(&a, month);
        let (ib, eb) = query::monthly_sum(&b, month);
        assert_eq!(query::monthly_sum(&union, month), (ia + ib, ea + eb));
    }
}

#[test]
fn distinct_months_sorted_and_deduped() {
    let records = vec![
        tx(1, "2025-03-05", Kind::Expense, "Expense.Food", 1, ""),
        tx(2, "2024-12-31", Kind::Income, "Income.Salary", 1, ""),
        tx(3, "2025-03-20", Kind::Income, "Income.Salary", 1, ""),
        tx(4, "bogus-date", Kind::Expense, "Expense.Food", 1, ""),
    ];
    assert_eq!(query::distinct_months(&records), vec!["2024-12", "2025-03"]);
    assert!(query::distinct_months(&[]).is_empty());
}

// chrono accepts non-zero-padded dates, but their first seven characters
// are not a month key; such records must stay out of every aggregation.
#[test]
fn non_canonical_dates_have_no_month_key() {
    let records = vec![
        tx(1, "2025-03-05", Kind::Expense, "Expense.Food", 100, ""),
        tx(2, "2025-3-5", Kind::Expense, "Expense.Food", 999, ""),
        tx(3, "2025-3-05", Kind::Income, "Income.Salary", 999, ""),
    ];
    assert_eq!(query::distinct_months(&records), vec!["2025-03"]);
    let (income, expense) = query::monthly_sum(&records, "2025-03");
    assert_eq!(income, Decimal::ZERO);
    assert_eq!(expense, Decimal::from(100));
    let breakdown = query::category_breakdown(&records, None);
    assert_eq!(
        breakdown,
        vec![("Expense.Food".to_string(), Decimal::from(100))]
    );
}

#[test]
fn parse_month_zero_pads_permissive_input() {
    assert_eq!(ledgerbook::utils::parse_month("2025-3").unwrap(), "2025-03");
    assert_eq!(ledgerbook::utils::parse_month("2025-03").unwrap(), "2025-03");
    assert!(ledgerbook::utils::parse_month("2025-13").is_err());
    assert!(ledgerbook::utils::parse_month("garbage").is_err());
}

#[test]
fn distinct_months_of_march_sample() {
    assert_eq!(query::distinct_months(&march_sample()), vec!["2025-03"]);
}

#[test]
fn category_breakdown_excludes_income() {
    let breakdown = query::category_breakdown(&march_sample(), Some("2025-03"));
    assert_eq!(
        breakdown,
        vec![("Expense.Food".to_string(), Decimal::from(15000))]
    );
}

#[test]
fn category_breakdown_sorts_amount_desc_then_label_asc() {
    let records = vec![
        tx(1, "2025-03-01", Kind::Expense, "Expense.Transit", 50, ""),
        tx(2, "2025-03-02", Kind::Expense, "Expense.Food", 30, ""),
        tx(3, "2025-03-03", Kind::Expense, "Expense.Food", 20, ""),
        tx(4, "2025-03-04", Kind::Expense, "Expense.Books", 50, ""),
    ];
    let breakdown = query::category_breakdown(&records, None);
    assert_eq!(
        breakdown,
        vec![
            ("Expense.Books".to_string(), Decimal::from(50)),
            ("Expense.Food".to_string(), Decimal::from(50)),
            ("Expense.Transit".to_string(), Decimal::from(50)),
        ]
    );
}

#[test]
fn category_breakdown_month_filter() {
    let records = vec![
        tx(1, "2025-03-01", Kind::Expense, "Expense.Food", 30, ""),
        tx(2, "2025-04-01", Kind::Expense, "Expense.Food", 70, ""),
    ];
    let all = query::category_breakdown(&records, None);
    assert_eq!(all[0].1, Decimal::from(100));
    let march = query::category_breakdown(&records, Some("2025-03"));
    assert_eq!(march[0].1, Decimal::from(30));
}

#[test]
fn sums_keep_decimal_precision() {
    let records = vec![
        Transaction {
            id: 1,
            date: "2025-03-01".to_string(),
            kind: Kind::Expense,
            label: "Expense.Food".to_string(),
            amount: "0.1".parse().unwrap(),
            remark: String::new(),
        },
        Transaction {
            id: 2,
            date: "2025-03-02".to_string(),
            kind: Kind::Expense,
            label: "Expense.Food".to_string(),
            amount: "0.2".parse().unwrap(),
            remark: String::new(),
        },
    ];
    let (_, expense) = query::monthly_sum(&records, "2025-03");
    assert_eq!(expense, "0.3".parse::<Decimal>().unwrap());
}
