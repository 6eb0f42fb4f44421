// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use thiserror::Error;

/// Errors surfaced by the ledger store.
///
/// `Validation` and `NotFound` are caller-recoverable; `Storage` wraps the
/// underlying sqlite fault and is surfaced as-is.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("invalid field: {0}")]
    Validation(String),

    #[error("no transaction with id {0}")]
    NotFound(i64),

    #[error("storage failure: {0}")]
    Storage(#[from] rusqlite::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;
