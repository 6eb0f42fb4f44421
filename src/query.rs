// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Read-only derivations over a ledger snapshot.
//!
//! Everything here is a pure function of a `select_all` snapshot: no I/O,
//! no mutation, deterministic for identical inputs. Records whose date
//! fails to parse are skipped per-record, never fatal.

use crate::models::{Kind, Transaction};
use rust_decimal::Decimal;
use std::collections::BTreeMap;

/// Income and expense totals for one `YYYY-MM` month key. A month with
/// no matching records sums to `(0, 0)`.
pub fn monthly_sum(records: &[Transaction], year_month: &str) -> (Decimal, Decimal) {
    let mut income = Decimal::ZERO;
    let mut expense = Decimal::ZERO;
    for t in records {
        if t.month_key() != Some(year_month) {
            continue;
        }
        match t.kind {
            Kind::Income => income += t.amount,
            Kind::Expense => expense += t.amount,
        }
    }
    (income, expense)
}

/// Every `YYYY-MM` key present in the ledger, each once, ascending.
/// Lexicographic order is chronological for this format.
pub fn distinct_months(records: &[Transaction]) -> Vec<String> {
    let mut months: Vec<String> = records
        .iter()
        .filter_map(|t| t.month_key())
        .map(str::to_string)
        .collect();
    months.sort();
    months.dedup();
    months
}

/// Expense totals per label, optionally restricted to one month. Sorted
/// by amount descending, ties broken by label ascending.
pub fn category_breakdown(
    records: &[Transaction],
    year_month: Option<&str>,
) -> Vec<(String, Decimal)> {
    let mut agg: BTreeMap<&str, Decimal> = BTreeMap::new();
    for t in records {
        if t.kind != Kind::Expense {
            continue;
        }
        let Some(month) = t.month_key() else { continue };
        if let Some(wanted) = year_month {
            if month != wanted {
                continue;
            }
        }
        *agg.entry(t.label.as_str()).or_insert(Decimal::ZERO) += t.amount;
    }
    let mut items: Vec<(String, Decimal)> = agg
        .into_iter()
        .map(|(label, amt)| (label.to_string(), amt))
        .collect();
    items.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    items
}

/// Compound filter; absent bounds match everything and all active
/// criteria combine with AND.
#[derive(Debug, Clone)]
pub struct SearchCriteria {
    /// Inclusive ISO date bounds, compared as strings.
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub include_income: bool,
    pub include_expense: bool,
    pub min_amount: Option<Decimal>,
    pub max_amount: Option<Decimal>,
    /// Case-sensitive substring over `remark`.
    pub keyword: Option<String>,
}

impl Default for SearchCriteria {
    fn default() -> Self {
        SearchCriteria {
            start_date: None,
            end_date: None,
            include_income: true,
            include_expense: true,
            min_amount: None,
            max_amount: None,
            keyword: None,
        }
    }
}

impl SearchCriteria {
    fn matches(&self, t: &Transaction) -> bool {
        match t.kind {
            Kind::Income if !self.include_income => return false,
            Kind::Expense if !self.include_expense => return false,
            _ => {}
        }
        if self.start_date.is_some() || self.end_date.is_some() {
            // A record whose date cannot be parsed never matches a date bound.
            if t.month_key().is_none() {
                return false;
            }
            if let Some(ref start) = self.start_date {
                if t.date.as_str() < start.as_str() {
                    return false;
                }
            }
            if let Some(ref end) = self.end_date {
                if t.date.as_str() > end.as_str() {
                    return false;
                }
            }
        }
        if let Some(min) = self.min_amount {
            if t.amount < min {
                return false;
            }
        }
        if let Some(max) = self.max_amount {
            if t.amount > max {
                return false;
            }
        }
        if let Some(ref kw) = self.keyword {
            if !t.remark.contains(kw.as_str()) {
                return false;
            }
        }
        true
    }
}

/// Applies all active criteria in AND over the snapshot, preserving the
/// store's most-recent-first order.
pub fn evaluate<'a>(records: &'a [Transaction], criteria: &SearchCriteria) -> Vec<&'a Transaction> {
    records.iter().filter(|t| criteria.matches(t)).collect()
}
