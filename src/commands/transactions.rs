// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::api::LedgerClient;
use crate::filter::{SortKey, SortOrder, TransactionFilter, filter_and_sort};
use crate::finance_time::{day_end_nanos, day_start_nanos, format_date, parse_date};
use crate::models::{Category, Transaction, TransactionData, TransactionType};
use crate::money::{BASE_CURRENCY, format_inr, normalize_amount};
use crate::utils::{maybe_print_json, pretty_table};
use anyhow::Result;

pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(&LedgerClient::from_config()?, sub),
        Some(("list", sub)) => list(sub),
        Some(("show", sub)) => show(&LedgerClient::from_config()?, sub),
        Some(("edit", sub)) => edit(&LedgerClient::from_config()?, sub),
        Some(("rm", sub)) => rm(&LedgerClient::from_config()?, sub),
        Some(("by-category", sub)) => by_category(sub),
        Some(("by-type", sub)) => by_type(sub),
        Some(("in-range", sub)) => in_range(sub),
        _ => Ok(()),
    }
}

fn add(client: &LedgerClient, sub: &clap::ArgMatches) -> Result<()> {
    let date = parse_date(sub.get_one::<String>("date").unwrap())?;
    let currency = sub
        .get_one::<String>("currency")
        .map(String::as_str)
        .unwrap_or(BASE_CURRENCY);
    let rate = sub.get_one::<String>("rate").map(String::as_str);
    // Normalization happens here, before anything reaches the service.
    let amount = normalize_amount(sub.get_one::<String>("amount").unwrap(), currency, rate)?;
    let transaction_type: TransactionType = sub.get_one::<String>("type").unwrap().parse()?;
    let category: Category = sub.get_one::<String>("category").unwrap().parse()?;
    let description = sub.get_one::<String>("note").cloned().unwrap_or_default();

    let data = TransactionData {
        date: day_start_nanos(date),
        amount,
        transaction_type,
        category,
        description,
    };
    let id = client.add_transaction(&data)?;
    println!(
        "Recorded {} {} on {} (id: {})",
        transaction_type,
        format_inr(amount),
        date,
        id
    );
    Ok(())
}

fn list(sub: &clap::ArgMatches) -> Result<()> {
    let (filter, key, order) = filter_from_matches(sub)?;
    let all = super::fetch_or_empty(|c| c.get_user_transactions())?;
    let mut rows = filter_and_sort(&all, &filter, key, order);
    if let Some(&limit) = sub.get_one::<usize>("limit") {
        rows.truncate(limit);
    }
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &rows)? {
        print_transactions(&rows);
    }
    Ok(())
}

fn show(client: &LedgerClient, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    let t = client.get_transaction(id)?;
    print_transactions(std::slice::from_ref(&t));
    Ok(())
}

fn edit(client: &LedgerClient, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    // Updates are full replacements, so start from the stored entry and
    // overlay whatever was passed.
    let existing = client.get_transaction(id)?;
    let date = match sub.get_one::<String>("date") {
        Some(raw) => day_start_nanos(parse_date(raw)?),
        None => existing.date,
    };
    let amount = match sub.get_one::<String>("amount") {
        Some(raw) => {
            let currency = sub
                .get_one::<String>("currency")
                .map(String::as_str)
                .unwrap_or(BASE_CURRENCY);
            normalize_amount(raw, currency, sub.get_one::<String>("rate").map(String::as_str))?
        }
        None => existing.amount,
    };
    let transaction_type = match sub.get_one::<String>("type") {
        Some(raw) => raw.parse()?,
        None => existing.transaction_type,
    };
    let category = match sub.get_one::<String>("category") {
        Some(raw) => raw.parse()?,
        None => existing.category,
    };
    let description = sub
        .get_one::<String>("note")
        .cloned()
        .unwrap_or(existing.description);

    let data = TransactionData {
        date,
        amount,
        transaction_type,
        category,
        description,
    };
    client.update_transaction(id, &data)?;
    println!("Updated transaction {}", id);
    Ok(())
}

fn rm(client: &LedgerClient, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    client.delete_transaction(id)?;
    println!("Deleted transaction {}", id);
    Ok(())
}

fn by_category(sub: &clap::ArgMatches) -> Result<()> {
    let category: Category = sub.get_one::<String>("category").unwrap().parse()?;
    let rows = super::fetch_or_empty(|c| c.get_transactions_by_category(category))?;
    print_transactions(&rows);
    Ok(())
}

fn by_type(sub: &clap::ArgMatches) -> Result<()> {
    let transaction_type: TransactionType = sub.get_one::<String>("type").unwrap().parse()?;
    let rows = super::fetch_or_empty(|c| c.get_transactions_by_type(transaction_type))?;
    print_transactions(&rows);
    Ok(())
}

fn in_range(sub: &clap::ArgMatches) -> Result<()> {
    let start = parse_date(sub.get_one::<String>("start").unwrap())?;
    let end = parse_date(sub.get_one::<String>("end").unwrap())?;
    let rows = super::fetch_or_empty(|c| {
        c.get_transactions_in_date_range(day_start_nanos(start), day_end_nanos(end))
    })?;
    print_transactions(&rows);
    Ok(())
}

/// Map `tx list` flags onto the filter/sort engine's inputs.
pub fn filter_from_matches(
    sub: &clap::ArgMatches,
) -> Result<(TransactionFilter, SortKey, SortOrder)> {
    let mut filter = TransactionFilter::default();
    if let Some(raw) = sub.get_one::<String>("type") {
        filter.type_filter = Some(raw.parse()?);
    }
    if let Some(raw) = sub.get_one::<String>("category") {
        filter.category_filter = Some(raw.parse()?);
    }
    if let Some(raw) = sub.get_one::<String>("start") {
        filter.date_start = Some(parse_date(raw)?);
    }
    if let Some(raw) = sub.get_one::<String>("end") {
        filter.date_end = Some(parse_date(raw)?);
    }
    let key = match sub.get_one::<String>("sort") {
        Some(raw) => raw.parse()?,
        None => SortKey::default(),
    };
    let order = match sub.get_one::<String>("order") {
        Some(raw) => raw.parse()?,
        None => SortOrder::default(),
    };
    Ok((filter, key, order))
}

fn print_transactions(transactions: &[Transaction]) {
    let rows = transactions
        .iter()
        .map(|t| {
            vec![
                t.transaction_id.to_string(),
                format_date(t.date),
                t.transaction_type.to_string(),
                format_inr(t.amount),
                t.category.label().to_string(),
                t.description.clone(),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(
            &["Id", "Date", "Type", "Amount (INR)", "Category", "Description"],
            rows,
        )
    );
}
