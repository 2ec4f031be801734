// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::LedgerError;
use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, Utc};

// The ledger stores timestamps as nanoseconds since epoch. Calendar math is
// always UTC so a transaction maps to the same day and month everywhere.

/// Calendar date (UTC) of a ledger timestamp.
pub fn to_calendar_date(ns: i64) -> NaiveDate {
    DateTime::<Utc>::from_timestamp_nanos(ns).date_naive()
}

/// `(year, month)` of a ledger timestamp, for month grouping.
pub fn year_month(ns: i64) -> (i32, u32) {
    let date = to_calendar_date(ns);
    (date.year(), date.month())
}

/// 00:00:00.000 UTC of `date` in nanoseconds. Dates outside the
/// nanosecond-representable range (~1677..2262) degrade to an open bound.
pub fn day_start_nanos(date: NaiveDate) -> i64 {
    date.and_time(NaiveTime::MIN)
        .and_utc()
        .timestamp_nanos_opt()
        .unwrap_or(i64::MIN)
}

/// 23:59:59.999 UTC of `date` in nanoseconds, the inclusive end-of-day bound.
pub fn day_end_nanos(date: NaiveDate) -> i64 {
    date.and_hms_milli_opt(23, 59, 59, 999)
        .and_then(|dt| dt.and_utc().timestamp_nanos_opt())
        .unwrap_or(i64::MAX)
}

/// Parse `YYYY-MM-DD`.
pub fn parse_date(s: &str) -> Result<NaiveDate, LedgerError> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| LedgerError::InvalidDate(format!("'{}', expected YYYY-MM-DD", s)))
}

/// Parse `YYYY-MM` into `(year, month)`.
pub fn parse_month(s: &str) -> Result<(i32, u32), LedgerError> {
    let date = NaiveDate::parse_from_str(&format!("{}-01", s), "%Y-%m-%d")
        .map_err(|_| LedgerError::InvalidDate(format!("'{}', expected YYYY-MM", s)))?;
    Ok((date.year(), date.month()))
}

/// Report/CSV date rendering, e.g. `"Jan 15, 2024"`.
pub fn format_date(ns: i64) -> String {
    to_calendar_date(ns).format("%b %-d, %Y").to_string()
}
