// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::finance_time::{day_end_nanos, day_start_nanos};
use crate::models::{Category, Transaction, TransactionType};
use anyhow::bail;
use chrono::NaiveDate;
use std::str::FromStr;

/// Conjunctive predicate set over a transaction list. `None` means "all".
/// Date bounds are calendar dates, expanded to 00:00:00.000 UTC (start) and
/// 23:59:59.999 UTC (end), both inclusive.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TransactionFilter {
    pub type_filter: Option<TransactionType>,
    pub category_filter: Option<Category>,
    pub date_start: Option<NaiveDate>,
    pub date_end: Option<NaiveDate>,
}

impl TransactionFilter {
    pub fn matches(&self, t: &Transaction) -> bool {
        if let Some(ty) = self.type_filter {
            if t.transaction_type != ty {
                return false;
            }
        }
        if let Some(cat) = self.category_filter {
            if t.category != cat {
                return false;
            }
        }
        if let Some(start) = self.date_start {
            if t.date < day_start_nanos(start) {
                return false;
            }
        }
        if let Some(end) = self.date_end {
            if t.date > day_end_nanos(end) {
                return false;
            }
        }
        true
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    #[default]
    Date,
    Amount,
}

impl FromStr for SortKey {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "date" => Ok(SortKey::Date),
            "amount" => Ok(SortKey::Amount),
            other => bail!("Unknown sort key '{}' (use date|amount)", other),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl FromStr for SortOrder {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            other => bail!("Unknown sort order '{}' (use asc|desc)", other),
        }
    }
}

/// Sort in place by the chosen key. The sort is stable in both directions:
/// equal keys keep their original relative order, there is no secondary key.
pub fn sort_transactions(transactions: &mut [Transaction], key: SortKey, order: SortOrder) {
    transactions.sort_by(|a, b| {
        let ord = match key {
            SortKey::Date => a.date.cmp(&b.date),
            SortKey::Amount => a.amount.cmp(&b.amount),
        };
        match order {
            SortOrder::Asc => ord,
            SortOrder::Desc => ord.reverse(),
        }
    });
}

/// Apply the filter, then sort. The input is never mutated; an empty result
/// is valid.
pub fn filter_and_sort(
    transactions: &[Transaction],
    filter: &TransactionFilter,
    key: SortKey,
    order: SortOrder,
) -> Vec<Transaction> {
    let mut out: Vec<Transaction> = transactions
        .iter()
        .filter(|t| filter.matches(t))
        .cloned()
        .collect();
    sort_transactions(&mut out, key, order);
    out
}
