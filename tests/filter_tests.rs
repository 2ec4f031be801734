// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rupeeclip::cli;
use rupeeclip::commands::transactions::filter_from_matches;
use rupeeclip::filter::{SortKey, SortOrder, TransactionFilter, filter_and_sort};
use rupeeclip::finance_time::{day_end_nanos, day_start_nanos};
use rupeeclip::models::{Category, Transaction, TransactionType};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn tx(
    id: i64,
    date_ns: i64,
    amount: i64,
    transaction_type: TransactionType,
    category: Category,
) -> Transaction {
    Transaction {
        transaction_id: id,
        date: date_ns,
        amount,
        transaction_type,
        category,
        description: String::new(),
    }
}

#[test]
fn date_range_is_inclusive_on_both_day_boundaries() {
    let jan_last_milli = day_end_nanos(date(2024, 1, 31));
    let feb_midnight = day_start_nanos(date(2024, 2, 1));
    let set = [
        tx(1, day_start_nanos(date(2024, 1, 1)), 100, TransactionType::Expense, Category::Food),
        tx(2, jan_last_milli, 200, TransactionType::Expense, Category::Food),
        tx(3, feb_midnight, 300, TransactionType::Expense, Category::Food),
    ];
    let filter = TransactionFilter {
        date_start: Some(date(2024, 1, 1)),
        date_end: Some(date(2024, 1, 31)),
        ..Default::default()
    };
    let out = filter_and_sort(&set, &filter, SortKey::Date, SortOrder::Asc);
    let ids: Vec<i64> = out.iter().map(|t| t.transaction_id).collect();
    assert_eq!(ids, vec![1, 2]);
}

#[test]
fn predicates_are_conjunctive() {
    let day = day_start_nanos(date(2024, 3, 10));
    let set = [
        tx(1, day, 100, TransactionType::Expense, Category::Food),
        tx(2, day, 200, TransactionType::Income, Category::Food),
        tx(3, day, 300, TransactionType::Expense, Category::Transport),
    ];
    let filter = TransactionFilter {
        type_filter: Some(TransactionType::Expense),
        category_filter: Some(Category::Food),
        ..Default::default()
    };
    let out = filter_and_sort(&set, &filter, SortKey::Date, SortOrder::Asc);
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].transaction_id, 1);
}

#[test]
fn equal_amounts_keep_their_original_order() {
    let day = day_start_nanos(date(2024, 5, 1));
    let set = [
        tx(1, day, 500, TransactionType::Expense, Category::Food),
        tx(2, day + 1, 500, TransactionType::Expense, Category::Food),
        tx(3, day + 2, 100, TransactionType::Expense, Category::Food),
    ];
    let filter = TransactionFilter::default();

    let desc = filter_and_sort(&set, &filter, SortKey::Amount, SortOrder::Desc);
    let ids: Vec<i64> = desc.iter().map(|t| t.transaction_id).collect();
    assert_eq!(ids, vec![1, 2, 3]);

    let asc = filter_and_sort(&set, &filter, SortKey::Amount, SortOrder::Asc);
    let ids: Vec<i64> = asc.iter().map(|t| t.transaction_id).collect();
    assert_eq!(ids, vec![3, 1, 2]);
}

#[test]
fn equal_dates_keep_their_original_order() {
    let day = day_start_nanos(date(2024, 5, 1));
    let set = [
        tx(1, day, 900, TransactionType::Income, Category::Salary),
        tx(2, day, 100, TransactionType::Expense, Category::Food),
        tx(3, day, 400, TransactionType::Expense, Category::Other),
    ];
    let filter = TransactionFilter::default();
    for order in [SortOrder::Asc, SortOrder::Desc] {
        let out = filter_and_sort(&set, &filter, SortKey::Date, order);
        let ids: Vec<i64> = out.iter().map(|t| t.transaction_id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }
}

#[test]
fn date_asc_reversed_equals_desc_without_ties() {
    let set = [
        tx(1, day_start_nanos(date(2024, 1, 3)), 10, TransactionType::Expense, Category::Food),
        tx(2, day_start_nanos(date(2024, 1, 1)), 20, TransactionType::Expense, Category::Food),
        tx(3, day_start_nanos(date(2024, 1, 2)), 30, TransactionType::Expense, Category::Food),
    ];
    let filter = TransactionFilter::default();
    let mut asc = filter_and_sort(&set, &filter, SortKey::Date, SortOrder::Asc);
    asc.reverse();
    let desc = filter_and_sort(&set, &filter, SortKey::Date, SortOrder::Desc);
    assert_eq!(asc, desc);
}

#[test]
fn fully_filtered_input_yields_empty_output() {
    let set = [tx(1, day_start_nanos(date(2024, 1, 1)), 10, TransactionType::Income, Category::Salary)];
    let filter = TransactionFilter {
        type_filter: Some(TransactionType::Expense),
        ..Default::default()
    };
    assert!(filter_and_sort(&set, &filter, SortKey::Date, SortOrder::Desc).is_empty());
    assert!(filter_and_sort(&[], &TransactionFilter::default(), SortKey::Date, SortOrder::Desc).is_empty());
}

#[test]
fn list_flags_map_onto_the_filter() {
    let cli = cli::build_cli();
    let matches = cli.get_matches_from([
        "rupeeclip", "tx", "list", "--type", "expense", "--category", "food", "--start",
        "2024-01-01", "--end", "2024-01-31", "--sort", "amount", "--order", "asc",
    ]);
    let Some(("tx", tx_m)) = matches.subcommand() else {
        panic!("no tx subcommand");
    };
    let Some(("list", list_m)) = tx_m.subcommand() else {
        panic!("no list subcommand");
    };
    let (filter, key, order) = filter_from_matches(list_m).unwrap();
    assert_eq!(
        filter,
        TransactionFilter {
            type_filter: Some(TransactionType::Expense),
            category_filter: Some(Category::Food),
            date_start: Some(date(2024, 1, 1)),
            date_end: Some(date(2024, 1, 31)),
        }
    );
    assert_eq!(key, SortKey::Amount);
    assert_eq!(order, SortOrder::Asc);
}

#[test]
fn list_defaults_to_newest_first() {
    let cli = cli::build_cli();
    let matches = cli.get_matches_from(["rupeeclip", "tx", "list"]);
    let Some(("tx", tx_m)) = matches.subcommand() else {
        panic!("no tx subcommand");
    };
    let Some(("list", list_m)) = tx_m.subcommand() else {
        panic!("no list subcommand");
    };
    let (filter, key, order) = filter_from_matches(list_m).unwrap();
    assert_eq!(filter, TransactionFilter::default());
    assert_eq!(key, SortKey::Date);
    assert_eq!(order, SortOrder::Desc);
}
