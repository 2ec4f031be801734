// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::filter::{SortKey, SortOrder, sort_transactions};
use crate::finance_time::{format_date, year_month};
use crate::models::{
    Category, CategoryBreakdown, MonthlySummary, Report, Totals, Transaction, TransactionType,
};
use crate::money::format_inr;
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;

// Everything here is a pure function of the transaction slice it is given:
// derived views are recomputed on every call and hold no state.

/// Group by UTC `(year, month)` and sum income and expenses per group.
/// One entry per month present in the input, chronological ascending.
pub fn monthly_summaries(transactions: &[Transaction]) -> Vec<MonthlySummary> {
    let mut by_month: BTreeMap<(i32, u32), (i64, i64)> = BTreeMap::new();
    for t in transactions {
        let entry = by_month.entry(year_month(t.date)).or_insert((0, 0));
        match t.transaction_type {
            TransactionType::Income => entry.0 += t.amount,
            TransactionType::Expense => entry.1 += t.amount,
        }
    }
    by_month
        .into_iter()
        .map(|((year, month), (income, expenses))| MonthlySummary {
            year,
            month,
            income,
            expenses,
        })
        .collect()
}

/// Sum expense amounts per category. Income is ignored; every category is
/// present in the result, zero when unused.
pub fn category_breakdown(transactions: &[Transaction]) -> CategoryBreakdown {
    let mut breakdown = CategoryBreakdown::default();
    for t in transactions {
        if t.transaction_type == TransactionType::Expense {
            breakdown.add(t.category, t.amount);
        }
    }
    breakdown
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CategoryShare {
    pub category: Category,
    pub amount: i64,
    pub percentage: f64,
}

/// Percentage-of-total-expenses per category, sorted descending by amount.
/// With no expenses at all, every share is 0. Ties keep the fixed category
/// order (the sort is stable).
pub fn category_percentages(breakdown: &CategoryBreakdown) -> Vec<CategoryShare> {
    let total = breakdown.total();
    let mut shares: Vec<CategoryShare> = Category::ALL
        .iter()
        .map(|&category| {
            let amount = breakdown.get(category);
            let percentage = if total > 0 {
                amount as f64 / total as f64 * 100.0
            } else {
                0.0
            };
            CategoryShare {
                category,
                amount,
                percentage,
            }
        })
        .collect();
    shares.sort_by(|a, b| b.amount.cmp(&a.amount));
    shares
}

/// Overall income/expense sums; `net` is signed.
pub fn totals(transactions: &[Transaction]) -> Totals {
    let mut income = 0i64;
    let mut expenses = 0i64;
    for t in transactions {
        match t.transaction_type {
            TransactionType::Income => income += t.amount,
            TransactionType::Expense => expenses += t.amount,
        }
    }
    Totals {
        income,
        expenses,
        net: income - expenses,
    }
}

/// Local equivalent of the service's report operation.
pub fn build_report(transactions: &[Transaction]) -> Report {
    Report {
        monthly_summaries: monthly_summaries(transactions),
        category_breakdowns: vec![category_breakdown(transactions)],
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryRow {
    pub date: String,
    pub transaction_type: TransactionType,
    pub category: &'static str,
    pub description: String,
    /// Signed INR display: `+` for income, `−` for expense.
    pub amount: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportSummary {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub total_income: i64,
    pub total_expenses: i64,
    pub net: i64,
    pub rows: Vec<SummaryRow>,
}

/// Printable summary for a date range: totals plus rows sorted newest first.
/// `None` is the no-data state for an empty transaction set.
pub fn printable_summary(
    transactions: &[Transaction],
    start: NaiveDate,
    end: NaiveDate,
) -> Option<ReportSummary> {
    if transactions.is_empty() {
        return None;
    }
    let sums = totals(transactions);
    let mut sorted = transactions.to_vec();
    sort_transactions(&mut sorted, SortKey::Date, SortOrder::Desc);
    let rows = sorted
        .iter()
        .map(|t| {
            let sign = match t.transaction_type {
                TransactionType::Income => '+',
                TransactionType::Expense => '−',
            };
            SummaryRow {
                date: format_date(t.date),
                transaction_type: t.transaction_type,
                category: t.category.label(),
                description: t.description.clone(),
                amount: format!("{}{}", sign, format_inr(t.amount)),
            }
        })
        .collect();
    Some(ReportSummary {
        start,
        end,
        total_income: sums.income,
        total_expenses: sums.expenses,
        net: sums.net,
        rows,
    })
}
