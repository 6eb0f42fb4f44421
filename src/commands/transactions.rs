// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{Kind, Transaction, TransactionInput};
use crate::store::LedgerStore;
use crate::utils::{maybe_print_json, parse_date, parse_decimal, parse_month, pretty_table};
use anyhow::{Result, anyhow};

pub fn handle(store: &LedgerStore, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(store, sub)?,
        Some(("list", sub)) => list(store, sub)?,
        Some(("edit", sub)) => edit(store, sub)?,
        Some(("rm", sub)) => rm(store, sub)?,
        _ => {}
    }
    Ok(())
}

fn input_from_args(sub: &clap::ArgMatches) -> Result<TransactionInput> {
    let date = parse_date(sub.get_one::<String>("date").unwrap())?.to_string();
    let kind_raw = sub.get_one::<String>("kind").unwrap();
    let kind = Kind::parse(kind_raw)
        .ok_or_else(|| anyhow!("Invalid kind '{}', expected income or expense", kind_raw))?;
    let label = sub.get_one::<String>("label").unwrap().to_string();
    let amount = parse_decimal(sub.get_one::<String>("amount").unwrap())?;
    let remark = sub
        .get_one::<String>("remark")
        .map(|s| s.to_string())
        .unwrap_or_default();
    Ok(TransactionInput {
        date,
        kind,
        label,
        amount,
        remark,
    })
}

fn add(store: &LedgerStore, sub: &clap::ArgMatches) -> Result<()> {
    let input = input_from_args(sub)?;
    if !sub.get_flag("force") && store.is_duplicate(&input.date, &input.label, input.amount)? {
        return Err(anyhow!(
            "Looks like a duplicate of an existing {} '{}' entry on {}; use --force to insert anyway",
            input.amount,
            input.label,
            input.date
        ));
    }
    let id = store.insert(&input)?;
    println!(
        "Recorded #{}: {} {} '{}' on {}",
        id,
        input.kind.interchange_label(),
        input.amount,
        input.label,
        input.date
    );
    Ok(())
}

fn list(store: &LedgerStore, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = match sub.get_one::<String>("month") {
        Some(month) => store.select_month(&parse_month(month)?)?,
        None => store.select_all()?,
    };
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        print_feed(&data);
    }
    Ok(())
}

pub fn print_feed(data: &[Transaction]) {
    let rows: Vec<Vec<String>> = data
        .iter()
        .map(|t| {
            vec![
                t.id.to_string(),
                t.date.clone(),
                t.kind.interchange_label().to_string(),
                t.label.clone(),
                t.amount.to_string(),
                t.remark.clone(),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(&["Id", "Date", "Kind", "Label", "Amount", "Remark"], rows)
    );
}

fn edit(store: &LedgerStore, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    let input = input_from_args(sub)?;
    store.update(id, &input)?;
    println!("Updated #{}", id);
    Ok(())
}

fn rm(store: &LedgerStore, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    store.delete(id)?;
    println!("Deleted #{}", id);
    Ok(())
}
