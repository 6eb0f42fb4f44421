// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::StoreError;
use crate::models::{Kind, TransactionInput};
use crate::store::LedgerStore;
use anyhow::{Context, Result, anyhow};
use csv::ReaderBuilder;
use rust_decimal::Decimal;

pub fn handle(store: &LedgerStore, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("transactions", sub)) => import_transactions(store, sub),
        _ => Ok(()),
    }
}

/// Imports six-field rows (date, kind, label, income, expense, remark),
/// one insert per row. A row that fails to parse or validate is skipped,
/// never aborting the rest; a storage fault does abort.
fn import_transactions(store: &LedgerStore, sub: &clap::ArgMatches) -> Result<()> {
    let path = sub.get_one::<String>("path").unwrap().trim();
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("Open CSV {}", path))?;

    let mut inserted = 0usize;
    let mut skipped = 0usize;
    for (lineno, result) in rdr.records().enumerate() {
        // A ragged record (wrong field count) is one bad row, not a reason
        // to abandon the rest of the file.
        let rec = match result {
            Ok(rec) => rec,
            Err(e) => {
                eprintln!("Skipping row {}: {}", lineno + 2, e);
                skipped += 1;
                continue;
            }
        };
        let input = match row_to_input(&rec) {
            Ok(input) => input,
            Err(e) => {
                eprintln!("Skipping row {}: {}", lineno + 2, e);
                skipped += 1;
                continue;
            }
        };
        match store.insert(&input) {
            Ok(_) => inserted += 1,
            Err(StoreError::Validation(msg)) => {
                eprintln!("Skipping row {}: {}", lineno + 2, msg);
                skipped += 1;
            }
            Err(e) => return Err(e.into()),
        }
    }
    println!(
        "Imported {} transactions from {} ({} skipped)",
        inserted, path, skipped
    );
    Ok(())
}

fn row_to_input(rec: &csv::StringRecord) -> Result<TransactionInput> {
    let date = rec.get(0).context("date missing")?.trim().to_string();
    let kind_raw = rec.get(1).context("kind missing")?.trim();
    let label = rec.get(2).context("label missing")?.trim().to_string();
    let income_raw = rec.get(3).unwrap_or("").trim();
    let expense_raw = rec.get(4).unwrap_or("").trim();
    let remark = rec.get(5).unwrap_or("").trim().to_string();

    let kind =
        Kind::parse(kind_raw).ok_or_else(|| anyhow!("unrecognized kind '{}'", kind_raw))?;
    // The kind column decides which amount column is active.
    let amount_raw = match kind {
        Kind::Income => income_raw,
        Kind::Expense => expense_raw,
    };
    let amount = if amount_raw.is_empty() {
        Decimal::ZERO
    } else {
        amount_raw
            .parse::<Decimal>()
            .with_context(|| format!("invalid amount '{}'", amount_raw))?
    };
    Ok(TransactionInput {
        date,
        kind,
        label,
        amount,
        remark,
    })
}
