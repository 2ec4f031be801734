// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::export::{export_filename, generate_csv};
use crate::filter::TransactionFilter;
use crate::finance_time::parse_date;
use crate::models::Transaction;
use anyhow::Result;
use std::path::{Path, PathBuf};

pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("transactions", sub)) => export_transactions(sub),
        _ => Ok(()),
    }
}

fn export_transactions(sub: &clap::ArgMatches) -> Result<()> {
    let start = parse_date(sub.get_one::<String>("start").unwrap())?;
    let end = parse_date(sub.get_one::<String>("end").unwrap())?;

    let all = super::fetch_or_empty(|c| c.get_user_transactions())?;
    let filter = TransactionFilter {
        date_start: Some(start),
        date_end: Some(end),
        ..Default::default()
    };
    let in_range: Vec<Transaction> = all.into_iter().filter(|t| filter.matches(t)).collect();

    let out = sub
        .get_one::<String>("out")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(export_filename(start, end)));
    let count = write_csv(&in_range, &out)?;
    println!("Exported {} transactions to {}", count, out.display());
    Ok(())
}

/// Write the CSV document for `transactions` to `out`, returning the row count.
pub fn write_csv(transactions: &[Transaction], out: &Path) -> Result<usize> {
    std::fs::write(out, generate_csv(transactions)?)?;
    Ok(transactions.len())
}
