// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::Transaction;
use crate::query::{self, SearchCriteria};
use crate::store::LedgerStore;
use crate::utils::{maybe_print_json, parse_decimal_lenient};
use anyhow::Result;

pub fn handle(store: &LedgerStore, m: &clap::ArgMatches) -> Result<()> {
    let criteria = criteria_from_args(m);
    let records = store.select_all()?;
    let matches: Vec<Transaction> = query::evaluate(&records, &criteria)
        .into_iter()
        .cloned()
        .collect();
    if !maybe_print_json(m.get_flag("json"), m.get_flag("jsonl"), &matches)? {
        super::transactions::print_feed(&matches);
    }
    Ok(())
}

/// Bounds that fail to parse are treated as "no bound", mirroring the
/// permissive handling of end-user input.
pub fn criteria_from_args(m: &clap::ArgMatches) -> SearchCriteria {
    SearchCriteria {
        start_date: m.get_one::<String>("from").cloned(),
        end_date: m.get_one::<String>("to").cloned(),
        include_income: !m.get_flag("expense-only"),
        include_expense: !m.get_flag("income-only"),
        min_amount: m
            .get_one::<String>("min")
            .and_then(|s| parse_decimal_lenient(s)),
        max_amount: m
            .get_one::<String>("max")
            .and_then(|s| parse_decimal_lenient(s)),
        keyword: m.get_one::<String>("keyword").cloned(),
    }
}
