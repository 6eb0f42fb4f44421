// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::query;
use crate::store::LedgerStore;
use crate::utils::{parse_month, pretty_table};
use anyhow::Result;

pub fn handle(store: &LedgerStore, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("monthly", sub)) => monthly(store, sub)?,
        Some(("months", _)) => months(store)?,
        Some(("categories", sub)) => categories(store, sub)?,
        _ => {}
    }
    Ok(())
}

fn monthly(store: &LedgerStore, sub: &clap::ArgMatches) -> Result<()> {
    let month = parse_month(sub.get_one::<String>("month").unwrap())?;
    let records = store.select_all()?;
    let (income, expense) = query::monthly_sum(&records, &month);
    let rows = vec![vec![
        month,
        income.to_string(),
        expense.to_string(),
        (income - expense).to_string(),
    ]];
    println!(
        "{}",
        pretty_table(&["Month", "Income", "Expense", "Net"], rows)
    );
    Ok(())
}

fn months(store: &LedgerStore) -> Result<()> {
    let records = store.select_all()?;
    let rows: Vec<Vec<String>> = query::distinct_months(&records)
        .into_iter()
        .map(|m| vec![m])
        .collect();
    println!("{}", pretty_table(&["Month"], rows));
    Ok(())
}

fn categories(store: &LedgerStore, sub: &clap::ArgMatches) -> Result<()> {
    let month = match sub.get_one::<String>("month") {
        Some(m) => Some(parse_month(m)?),
        None => None,
    };
    let records = store.select_all()?;
    let rows: Vec<Vec<String>> = query::category_breakdown(&records, month.as_deref())
        .into_iter()
        .map(|(label, amount)| vec![label, amount.to_string()])
        .collect();
    println!("{}", pretty_table(&["Category", "Spent"], rows));
    Ok(())
}
