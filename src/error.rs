// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use thiserror::Error;

/// Errors surfaced by the client. Validation variants are resolved locally
/// and never reach the ledger service; `RemoteOperationFailed` carries the
/// service's rejection verbatim and is never retried automatically.
#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("Invalid exchange rate: {0}")]
    InvalidExchangeRate(String),
    #[error("A currency code is required for a custom currency")]
    InvalidCurrencyCode,
    #[error("Invalid date: {0}")]
    InvalidDate(String),
    #[error("Ledger service call failed: {0}")]
    RemoteOperationFailed(String),
    #[error("Not connected to a ledger service (run 'rupeeclip connect' first)")]
    ServiceUnavailable,
}
