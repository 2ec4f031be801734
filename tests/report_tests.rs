// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rupeeclip::finance_time::day_start_nanos;
use rupeeclip::models::{Category, MonthlySummary, Transaction, TransactionType};
use rupeeclip::report::{
    build_report, category_breakdown, category_percentages, monthly_summaries, printable_summary,
    totals,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn tx(
    id: i64,
    y: i32,
    m: u32,
    d: u32,
    amount: i64,
    transaction_type: TransactionType,
    category: Category,
) -> Transaction {
    Transaction {
        transaction_id: id,
        date: day_start_nanos(date(y, m, d)),
        amount,
        transaction_type,
        category,
        description: String::new(),
    }
}

fn mixed_fixture() -> Vec<Transaction> {
    vec![
        tx(1, 2024, 1, 15, 10_000, TransactionType::Income, Category::Salary),
        tx(2, 2024, 1, 20, 3_000, TransactionType::Expense, Category::Food),
        tx(3, 2024, 2, 1, 2_000, TransactionType::Expense, Category::Transport),
    ]
}

#[test]
fn groups_income_and_expenses_by_calendar_month() {
    let summaries = monthly_summaries(&mixed_fixture());
    assert_eq!(
        summaries,
        vec![
            MonthlySummary { year: 2024, month: 1, income: 10_000, expenses: 3_000 },
            MonthlySummary { year: 2024, month: 2, income: 0, expenses: 2_000 },
        ]
    );
}

#[test]
fn empty_input_yields_the_zero_state() {
    let sums = totals(&[]);
    assert_eq!((sums.income, sums.expenses, sums.net), (0, 0, 0));
    assert!(monthly_summaries(&[]).is_empty());

    let breakdown = category_breakdown(&[]);
    assert_eq!(breakdown.total(), 0);
    for c in Category::ALL {
        assert_eq!(breakdown.get(c), 0);
    }
    // All six categories still appear in the percentage view, all at zero
    let shares = category_percentages(&breakdown);
    assert_eq!(shares.len(), 6);
    assert!(shares.iter().all(|s| s.amount == 0 && s.percentage == 0.0));
}

#[test]
fn net_is_income_minus_expenses() {
    let sums = totals(&mixed_fixture());
    assert_eq!(sums.income, 10_000);
    assert_eq!(sums.expenses, 5_000);
    assert_eq!(sums.net, sums.income - sums.expenses);

    // Net may go negative
    let overspent = vec![tx(1, 2024, 3, 1, 700, TransactionType::Expense, Category::Other)];
    assert_eq!(totals(&overspent).net, -700);
}

#[test]
fn breakdown_total_matches_expense_total() {
    let set = mixed_fixture();
    assert_eq!(category_breakdown(&set).total(), totals(&set).expenses);
}

#[test]
fn breakdown_ignores_income_and_keeps_zero_categories() {
    let breakdown = category_breakdown(&mixed_fixture());
    assert_eq!(breakdown.get(Category::Food), 3_000);
    assert_eq!(breakdown.get(Category::Transport), 2_000);
    assert_eq!(breakdown.get(Category::Salary), 0);
    assert_eq!(breakdown.get(Category::Utilities), 0);
}

#[test]
fn percentages_sort_descending_with_stable_ties() {
    let set = vec![
        tx(1, 2024, 1, 1, 500, TransactionType::Expense, Category::Transport),
        tx(2, 2024, 1, 2, 500, TransactionType::Expense, Category::Food),
        tx(3, 2024, 1, 3, 1_000, TransactionType::Expense, Category::Utilities),
    ];
    let shares = category_percentages(&category_breakdown(&set));
    let order: Vec<Category> = shares.iter().map(|s| s.category).collect();
    // Utilities leads; the 500/500 tie keeps the fixed category order
    // (food before transport), zeros trail in fixed order too.
    assert_eq!(
        order,
        vec![
            Category::Utilities,
            Category::Food,
            Category::Transport,
            Category::Salary,
            Category::Other,
            Category::Entertainment,
        ]
    );
    assert_eq!(shares[0].percentage, 50.0);
    assert_eq!(shares[1].percentage, 25.0);
}

#[test]
fn aggregation_is_idempotent() {
    let set = mixed_fixture();
    assert_eq!(monthly_summaries(&set), monthly_summaries(&set));
    assert_eq!(category_breakdown(&set), category_breakdown(&set));
    assert_eq!(totals(&set), totals(&set));
    assert_eq!(build_report(&set), build_report(&set));
}

#[test]
fn report_carries_breakdown_as_one_element_array() {
    let report = build_report(&mixed_fixture());
    assert_eq!(report.monthly_summaries.len(), 2);
    assert_eq!(report.category_breakdowns.len(), 1);
    assert_eq!(report.category_breakdowns[0].total(), 5_000);
}

#[test]
fn printable_summary_orders_rows_newest_first_with_signs() {
    let start = date(2024, 1, 1);
    let end = date(2024, 2, 29);
    let summary = printable_summary(&mixed_fixture(), start, end).unwrap();
    assert_eq!(summary.total_income, 10_000);
    assert_eq!(summary.total_expenses, 5_000);
    assert_eq!(summary.net, 5_000);
    let dates: Vec<&str> = summary.rows.iter().map(|r| r.date.as_str()).collect();
    assert_eq!(dates, vec!["Feb 1, 2024", "Jan 20, 2024", "Jan 15, 2024"]);
    assert_eq!(summary.rows[0].amount, "−₹20.00");
    assert_eq!(summary.rows[2].amount, "+₹100.00");
    assert_eq!(summary.rows[1].category, "Food");
}

#[test]
fn printable_summary_has_a_designated_no_data_state() {
    assert!(printable_summary(&[], date(2024, 1, 1), date(2024, 1, 31)).is_none());
}
