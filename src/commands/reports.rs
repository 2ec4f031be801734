// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::api::LedgerClient;
use crate::filter::TransactionFilter;
use crate::finance_time::{day_end_nanos, day_start_nanos, parse_date, parse_month};
use crate::models::{Category, CategoryBreakdown, MonthlySummary, Transaction};
use crate::money::{display_amount, format_inr};
use crate::report::{category_breakdown, category_percentages, monthly_summaries, printable_summary};
use crate::utils::{maybe_print_json, pretty_table};
use anyhow::Result;
use chrono::NaiveDate;

pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("summary", sub)) => summary(sub),
        Some(("trend", sub)) => trend(sub),
        Some(("categories", sub)) => categories(sub),
        Some(("full", sub)) => full(sub),
        Some(("month", sub)) => month(sub),
        _ => Ok(()),
    }
}

// Fetch everything, then scope to the range locally. Derived views are
// recomputed from scratch on each invocation.
fn fetch_range(start: NaiveDate, end: NaiveDate) -> Result<Vec<Transaction>> {
    let all = super::fetch_or_empty(|c| c.get_user_transactions())?;
    let filter = TransactionFilter {
        date_start: Some(start),
        date_end: Some(end),
        ..Default::default()
    };
    Ok(all.into_iter().filter(|t| filter.matches(t)).collect())
}

fn range_args(sub: &clap::ArgMatches) -> Result<(NaiveDate, NaiveDate)> {
    let start = parse_date(sub.get_one::<String>("start").unwrap())?;
    let end = parse_date(sub.get_one::<String>("end").unwrap())?;
    Ok((start, end))
}

fn summary(sub: &clap::ArgMatches) -> Result<()> {
    let (start, end) = range_args(sub)?;
    let in_range = fetch_range(start, end)?;
    let Some(s) = printable_summary(&in_range, start, end) else {
        println!("No transactions found for the selected date range");
        return Ok(());
    };
    println!("Financial Report {} to {}", s.start, s.end);
    println!("Total Income:   {}", format_inr(s.total_income));
    println!("Total Expenses: {}", format_inr(s.total_expenses));
    let net_sign = if s.net >= 0 { '+' } else { '−' };
    println!("Net:            {}{}", net_sign, format_inr(s.net.abs()));
    let rows = s
        .rows
        .iter()
        .map(|r| {
            vec![
                r.date.clone(),
                r.transaction_type.to_string(),
                r.category.to_string(),
                if r.description.is_empty() {
                    "—".to_string()
                } else {
                    r.description.clone()
                },
                r.amount.clone(),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(&["Date", "Type", "Category", "Description", "Amount"], rows)
    );
    Ok(())
}

fn trend(sub: &clap::ArgMatches) -> Result<()> {
    let (start, end) = range_args(sub)?;
    let summaries = monthly_summaries(&fetch_range(start, end)?);
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &summaries)? {
        print_monthly(&summaries);
    }
    Ok(())
}

fn categories(sub: &clap::ArgMatches) -> Result<()> {
    let (start, end) = range_args(sub)?;
    let breakdown = if sub.get_flag("remote") {
        let client = LedgerClient::from_config()?;
        client.get_category_stats(day_start_nanos(start), day_end_nanos(end))?
    } else {
        category_breakdown(&fetch_range(start, end)?)
    };
    let shares = category_percentages(&breakdown);
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &shares)? {
        let rows = shares
            .iter()
            .map(|s| {
                vec![
                    s.category.label().to_string(),
                    format_inr(s.amount),
                    format!("{:.1}%", s.percentage),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Category", "Spent (INR)", "Share"], rows)
        );
    }
    Ok(())
}

fn full(sub: &clap::ArgMatches) -> Result<()> {
    let (start, end) = range_args(sub)?;
    let client = LedgerClient::from_config()?;
    let report = client.generate_report(day_start_nanos(start), day_end_nanos(end))?;
    print_monthly(&report.monthly_summaries);
    for breakdown in &report.category_breakdowns {
        print_breakdown(breakdown);
    }
    Ok(())
}

fn month(sub: &clap::ArgMatches) -> Result<()> {
    let (year, month) = parse_month(sub.get_one::<String>("month").unwrap())?;
    let client = LedgerClient::from_config()?;
    let summary = client.get_monthly_stats(year, month)?;
    print_monthly(std::slice::from_ref(&summary));
    Ok(())
}

fn print_monthly(summaries: &[MonthlySummary]) {
    let rows = summaries
        .iter()
        .map(|s| {
            vec![
                format!("{}-{:02}", s.year, s.month),
                display_amount(s.income),
                display_amount(s.expenses),
            ]
        })
        .collect();
    println!("{}", pretty_table(&["Month", "Income", "Expense"], rows));
}

fn print_breakdown(breakdown: &CategoryBreakdown) {
    let rows = Category::ALL
        .iter()
        .map(|&c| vec![c.label().to_string(), format_inr(breakdown.get(c))])
        .collect();
    println!("{}", pretty_table(&["Category", "Spent (INR)"], rows));
}
