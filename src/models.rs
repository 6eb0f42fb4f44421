// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Income/expense discriminator. Every transaction is exactly one of the
/// two; all aggregation partitions on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Income,
    Expense,
}

impl Kind {
    /// Column value in sqlite.
    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Income => "income",
            Kind::Expense => "expense",
        }
    }

    /// Label used in the six-field interchange rows.
    pub fn interchange_label(&self) -> &'static str {
        match self {
            Kind::Income => "Income",
            Kind::Expense => "Expense",
        }
    }

    /// Parses either the sqlite column value or the interchange label.
    pub fn parse(s: &str) -> Option<Kind> {
        match s.trim() {
            "income" | "Income" => Some(Kind::Income),
            "expense" | "Expense" => Some(Kind::Expense),
            _ => None,
        }
    }
}

/// One dated ledger entry. `date` stays a raw string so that malformed
/// stored values reach the query layer, which skips them per-record
/// instead of failing the whole pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,
    pub date: String,
    pub kind: Kind,
    pub label: String,
    pub amount: Decimal,
    pub remark: String,
}

impl Transaction {
    /// The `YYYY-MM` prefix of a syntactically valid date, `None` for
    /// malformed dates. Only the canonical zero-padded form qualifies:
    /// chrono also accepts dates like `2025-3-5`, whose first seven
    /// characters are not a month key.
    pub fn month_key(&self) -> Option<&str> {
        if self.date.len() == 10
            && chrono::NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").is_ok()
        {
            self.date.get(..7)
        } else {
            None
        }
    }
}

/// The writable fields of a transaction, shared by insert and update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionInput {
    pub date: String,
    pub kind: Kind,
    pub label: String,
    pub amount: Decimal,
    pub remark: String,
}

/// One interchange row: the fixed six-field shape consumed and produced
/// by bulk import/export. `kind` carries the interchange label and only
/// the active amount column is populated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerRow {
    pub date: String,
    pub kind: String,
    pub label: String,
    pub income: String,
    pub expense: String,
    pub remark: String,
}

pub const LEDGER_ROW_HEADER: [&str; 6] = ["date", "kind", "label", "income", "expense", "remark"];

impl LedgerRow {
    pub fn from_transaction(t: &Transaction) -> LedgerRow {
        let amount = t.amount.to_string();
        let (income, expense) = match t.kind {
            Kind::Income => (amount, String::new()),
            Kind::Expense => (String::new(), amount),
        };
        LedgerRow {
            date: t.date.clone(),
            kind: t.kind.interchange_label().to_string(),
            label: t.label.clone(),
            income,
            expense,
            remark: t.remark.clone(),
        }
    }
}
