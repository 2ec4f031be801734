// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::api::LedgerClient;
use crate::error::LedgerError;
use crate::models::Transaction;
use anyhow::Result;

pub mod exporter;
pub mod profile;
pub mod reports;
pub mod roles;
pub mod transactions;

/// Run a read against the ledger service. A missing connection is treated as
/// an empty ledger ("no data yet"); mutating commands instead construct the
/// client directly and fail hard.
pub(crate) fn fetch_or_empty(
    read: impl FnOnce(&LedgerClient) -> Result<Vec<Transaction>, LedgerError>,
) -> Result<Vec<Transaction>> {
    match LedgerClient::from_config() {
        Ok(client) => Ok(read(&client)?),
        Err(LedgerError::ServiceUnavailable) => Ok(Vec::new()),
        Err(e) => Err(e.into()),
    }
}
