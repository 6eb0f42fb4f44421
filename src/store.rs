// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::{StoreError, StoreResult};
use crate::models::{Kind, Transaction, TransactionInput};
use rusqlite::{Connection, params};
use rust_decimal::Decimal;
use std::path::Path;

/// The ledger store: a sqlite-backed, ordered collection of transactions
/// with a monotone id counter. Constructed once at startup and passed
/// explicitly to every consumer; each mutating call is an independently
/// committed unit (sqlite autocommit), so readers never observe a
/// half-applied write.
pub struct LedgerStore {
    conn: Connection,
}

impl LedgerStore {
    /// Opens the store in the platform data dir, creating it on first run.
    pub fn open_default() -> anyhow::Result<LedgerStore> {
        Ok(LedgerStore {
            conn: crate::db::open_or_init()?,
        })
    }

    pub fn open<P: AsRef<Path>>(path: P) -> anyhow::Result<LedgerStore> {
        let conn = Connection::open(path)?;
        crate::db::init_schema(&conn)?;
        Ok(LedgerStore { conn })
    }

    /// Wraps an existing connection; the schema must already be in place.
    pub fn from_connection(conn: Connection) -> LedgerStore {
        LedgerStore { conn }
    }

    fn validate(input: &TransactionInput) -> StoreResult<()> {
        if input.date.trim().is_empty() {
            return Err(StoreError::Validation("date must not be empty".into()));
        }
        if input.label.trim().is_empty() {
            return Err(StoreError::Validation("label must not be empty".into()));
        }
        if input.amount < Decimal::ZERO {
            return Err(StoreError::Validation(format!(
                "amount must not be negative, got {}",
                input.amount
            )));
        }
        Ok(())
    }

    /// Inserts one transaction and returns its freshly assigned id.
    pub fn insert(&self, input: &TransactionInput) -> StoreResult<i64> {
        Self::validate(input)?;
        self.conn.execute(
            "INSERT INTO ledger(date, kind, label, amount, remark) VALUES (?1,?2,?3,?4,?5)",
            params![
                input.date,
                input.kind.as_str(),
                input.label,
                input.amount.to_string(),
                input.remark
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Bulk insert inside a single sqlite transaction; either every row
    /// lands or none does. Returns the number of rows written.
    pub fn insert_many(&mut self, inputs: &[TransactionInput]) -> StoreResult<usize> {
        for input in inputs {
            Self::validate(input)?;
        }
        let tx = self.conn.transaction()?;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO ledger(date, kind, label, amount, remark) VALUES (?1,?2,?3,?4,?5)",
            )?;
            for input in inputs {
                stmt.execute(params![
                    input.date,
                    input.kind.as_str(),
                    input.label,
                    input.amount.to_string(),
                    input.remark
                ])?;
            }
        }
        tx.commit()?;
        Ok(inputs.len())
    }

    /// Every transaction, most recent first (date desc, then id desc).
    /// Rows with an unrecognized kind or unparsable amount are skipped.
    pub fn select_all(&self) -> StoreResult<Vec<Transaction>> {
        self.select_where("", &[])
    }

    /// Transactions whose date carries the given `YYYY-MM` prefix, in
    /// store order.
    pub fn select_month(&self, year_month: &str) -> StoreResult<Vec<Transaction>> {
        self.select_where(
            " WHERE substr(date,1,7)=?1",
            &[&year_month as &dyn rusqlite::ToSql],
        )
    }

    fn select_where(
        &self,
        clause: &str,
        params: &[&dyn rusqlite::ToSql],
    ) -> StoreResult<Vec<Transaction>> {
        let sql = format!(
            "SELECT id, date, kind, label, amount, remark FROM ledger{} ORDER BY date DESC, id DESC",
            clause
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt.query(rusqlite::params_from_iter(params.iter()))?;
        let mut data = Vec::new();
        while let Some(r) = rows.next()? {
            let id: i64 = r.get(0)?;
            let date: String = r.get(1)?;
            let kind_raw: String = r.get(2)?;
            let label: String = r.get(3)?;
            let amount_raw: String = r.get(4)?;
            let remark: Option<String> = r.get(5)?;
            let Some(kind) = Kind::parse(&kind_raw) else {
                continue;
            };
            let Ok(amount) = amount_raw.parse::<Decimal>() else {
                continue;
            };
            data.push(Transaction {
                id,
                date,
                kind,
                label,
                amount,
                remark: remark.unwrap_or_default(),
            });
        }
        Ok(data)
    }

    /// Replaces every field of the identified transaction in one statement.
    pub fn update(&self, id: i64, input: &TransactionInput) -> StoreResult<()> {
        Self::validate(input)?;
        let changed = self.conn.execute(
            "UPDATE ledger SET date=?1, kind=?2, label=?3, amount=?4, remark=?5 WHERE id=?6",
            params![
                input.date,
                input.kind.as_str(),
                input.label,
                input.amount.to_string(),
                input.remark,
                id
            ],
        )?;
        if changed == 0 {
            return Err(StoreError::NotFound(id));
        }
        Ok(())
    }

    pub fn delete(&self, id: i64) -> StoreResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM ledger WHERE id=?1", params![id])?;
        if changed == 0 {
            return Err(StoreError::NotFound(id));
        }
        Ok(())
    }

    /// Advisory pre-insert check: does a record with the same (date, label)
    /// and a numerically equal amount already exist? Numeric equality is
    /// deliberate, so `15000` and `15000.0` count as the same amount.
    /// Never enforced; the caller decides whether to proceed.
    pub fn is_duplicate(&self, date: &str, label: &str, amount: Decimal) -> StoreResult<bool> {
        let mut stmt = self
            .conn
            .prepare("SELECT amount FROM ledger WHERE date=?1 AND label=?2")?;
        let mut rows = stmt.query(params![date, label])?;
        while let Some(r) = rows.next()? {
            let existing_raw: String = r.get(0)?;
            if let Ok(existing) = existing_raw.parse::<Decimal>() {
                if existing == amount {
                    return Ok(true);
                }
            }
        }
        Ok(false)
    }
}
