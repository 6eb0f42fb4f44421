// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{LEDGER_ROW_HEADER, LedgerRow};
use crate::store::LedgerStore;
use anyhow::{Result, anyhow};

pub fn handle(store: &LedgerStore, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("transactions", sub)) => export_transactions(store, sub),
        _ => Ok(()),
    }
}

fn export_transactions(store: &LedgerStore, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = sub.get_one::<String>("format").unwrap().to_lowercase();
    let out = sub.get_one::<String>("out").unwrap();

    let rows: Vec<LedgerRow> = store
        .select_all()?
        .iter()
        .map(LedgerRow::from_transaction)
        .collect();

    match fmt.as_str() {
        "csv" => {
            let mut wtr = csv::Writer::from_path(out)?;
            wtr.write_record(LEDGER_ROW_HEADER)?;
            for row in &rows {
                wtr.write_record([
                    row.date.as_str(),
                    row.kind.as_str(),
                    row.label.as_str(),
                    row.income.as_str(),
                    row.expense.as_str(),
                    row.remark.as_str(),
                ])?;
            }
            wtr.flush()?;
        }
        "json" => {
            std::fs::write(out, serde_json::to_string_pretty(&rows)?)?;
        }
        _ => {
            return Err(anyhow!("Unknown format: {} (use csv|json)", fmt));
        }
    }
    println!("Exported {} transactions to {}", rows.len(), out);
    Ok(())
}
