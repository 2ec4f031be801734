// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::filter::{SortKey, SortOrder, sort_transactions};
use crate::finance_time::format_date;
use crate::models::Transaction;
use crate::money::display_amount;
use anyhow::Result;
use chrono::NaiveDate;

pub const CSV_HEADER: [&str; 5] = ["Date", "Type", "Amount (INR)", "Category", "Description"];

/// Render transactions as a CSV document: fixed header, rows newest first,
/// amounts as plain 2-decimal INR values, categories as their labels.
/// Quoting is the writer's standard rule (fields containing a comma, quote,
/// or newline are wrapped, embedded quotes doubled), applied to every field
/// since the date rendering itself contains a comma. No trailing newline.
pub fn generate_csv(transactions: &[Transaction]) -> Result<String> {
    let mut sorted = transactions.to_vec();
    sort_transactions(&mut sorted, SortKey::Date, SortOrder::Desc);

    let mut wtr = csv::Writer::from_writer(vec![]);
    wtr.write_record(CSV_HEADER)?;
    for t in &sorted {
        wtr.write_record([
            format_date(t.date),
            t.transaction_type.as_str().to_string(),
            display_amount(t.amount),
            t.category.label().to_string(),
            t.description.clone(),
        ])?;
    }
    let mut doc = String::from_utf8(wtr.into_inner()?)?;
    if doc.ends_with('\n') {
        doc.pop();
    }
    Ok(doc)
}

/// Conventional export filename for a report range, ISO calendar dates.
pub fn export_filename(start: NaiveDate, end: NaiveDate) -> String {
    format!("transactions_{}_to_{}.csv", start, end)
}
