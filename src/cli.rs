// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, crate_version, value_parser};

pub fn build_cli() -> Command {
    Command::new("rupeeclip")
        .version(crate_version!())
        .about("INR personal income/expense tracking, reports, and CSV export")
        .subcommand(
            Command::new("connect")
                .about("Save the ledger service connection")
                .arg(
                    Arg::new("url")
                        .long("url")
                        .required(true)
                        .help("Service base URL"),
                )
                .arg(Arg::new("token").long("token").help("Bearer token")),
        )
        .subcommand(
            Command::new("tx")
                .about("Record and inspect transactions")
                .subcommand(
                    Command::new("add")
                        .about("Record a transaction (the amount is normalized to INR paise before submission)")
                        .arg(Arg::new("date").long("date").required(true).help("YYYY-MM-DD"))
                        .arg(Arg::new("amount").long("amount").required(true).help("Amount in the entered currency"))
                        .arg(Arg::new("type").long("type").required(true).help("income|expense"))
                        .arg(Arg::new("category").long("category").required(true).help("salary|other|entertainment|food|transport|utilities"))
                        .arg(Arg::new("currency").long("currency").help("Entered currency code; defaults to INR, custom codes allowed"))
                        .arg(Arg::new("rate").long("rate").help("Exchange rate: INR per 1 unit of the entered currency"))
                        .arg(Arg::new("note").long("note").help("Optional description")),
                )
                .subcommand(
                    Command::new("list")
                        .about("List transactions, filtered and sorted locally")
                        .arg(Arg::new("type").long("type").help("income|expense"))
                        .arg(Arg::new("category").long("category"))
                        .arg(Arg::new("start").long("start").help("YYYY-MM-DD, inclusive"))
                        .arg(Arg::new("end").long("end").help("YYYY-MM-DD, inclusive"))
                        .arg(Arg::new("sort").long("sort").help("date|amount (default date)"))
                        .arg(Arg::new("order").long("order").help("asc|desc (default desc)"))
                        .arg(Arg::new("limit").long("limit").value_parser(value_parser!(usize)))
                        .arg(Arg::new("json").long("json").action(ArgAction::SetTrue))
                        .arg(Arg::new("jsonl").long("jsonl").action(ArgAction::SetTrue)),
                )
                .subcommand(
                    Command::new("show")
                        .about("Show one transaction")
                        .arg(Arg::new("id").required(true).value_parser(value_parser!(i64))),
                )
                .subcommand(
                    Command::new("edit")
                        .about("Edit a transaction (unspecified fields keep their stored value)")
                        .arg(Arg::new("id").required(true).value_parser(value_parser!(i64)))
                        .arg(Arg::new("date").long("date").help("YYYY-MM-DD"))
                        .arg(Arg::new("amount").long("amount"))
                        .arg(Arg::new("type").long("type"))
                        .arg(Arg::new("category").long("category"))
                        .arg(Arg::new("currency").long("currency"))
                        .arg(Arg::new("rate").long("rate"))
                        .arg(Arg::new("note").long("note")),
                )
                .subcommand(
                    Command::new("rm")
                        .about("Delete a transaction")
                        .arg(Arg::new("id").required(true).value_parser(value_parser!(i64))),
                )
                .subcommand(
                    Command::new("by-category")
                        .about("Server-side read of one category")
                        .arg(Arg::new("category").required(true)),
                )
                .subcommand(
                    Command::new("by-type")
                        .about("Server-side read of one type")
                        .arg(Arg::new("type").required(true)),
                )
                .subcommand(
                    Command::new("in-range")
                        .about("Server-side read of a date range")
                        .arg(Arg::new("start").long("start").required(true).help("YYYY-MM-DD"))
                        .arg(Arg::new("end").long("end").required(true).help("YYYY-MM-DD")),
                ),
        )
        .subcommand(
            Command::new("report")
                .about("Summaries over a date range")
                .subcommand(
                    Command::new("summary")
                        .about("Printable summary: totals plus every transaction in range")
                        .arg(Arg::new("start").long("start").required(true).help("YYYY-MM-DD"))
                        .arg(Arg::new("end").long("end").required(true).help("YYYY-MM-DD")),
                )
                .subcommand(
                    Command::new("trend")
                        .about("Monthly income/expense series")
                        .arg(Arg::new("start").long("start").required(true))
                        .arg(Arg::new("end").long("end").required(true))
                        .arg(Arg::new("json").long("json").action(ArgAction::SetTrue))
                        .arg(Arg::new("jsonl").long("jsonl").action(ArgAction::SetTrue)),
                )
                .subcommand(
                    Command::new("categories")
                        .about("Expense breakdown by category with percentages")
                        .arg(Arg::new("start").long("start").required(true))
                        .arg(Arg::new("end").long("end").required(true))
                        .arg(
                            Arg::new("remote")
                                .long("remote")
                                .action(ArgAction::SetTrue)
                                .help("Ask the service for the breakdown instead of computing locally"),
                        )
                        .arg(Arg::new("json").long("json").action(ArgAction::SetTrue))
                        .arg(Arg::new("jsonl").long("jsonl").action(ArgAction::SetTrue)),
                )
                .subcommand(
                    Command::new("full")
                        .about("Server-computed report for the range")
                        .arg(Arg::new("start").long("start").required(true))
                        .arg(Arg::new("end").long("end").required(true)),
                )
                .subcommand(
                    Command::new("month")
                        .about("Server-computed stats for one month")
                        .arg(Arg::new("month").long("month").required(true).help("YYYY-MM")),
                ),
        )
        .subcommand(
            Command::new("export")
                .about("Export data")
                .subcommand(
                    Command::new("transactions")
                        .about("Write the date range as CSV")
                        .arg(Arg::new("start").long("start").required(true).help("YYYY-MM-DD"))
                        .arg(Arg::new("end").long("end").required(true).help("YYYY-MM-DD"))
                        .arg(Arg::new("out").long("out").help("Output path; defaults to transactions_<start>_to_<end>.csv")),
                ),
        )
        .subcommand(
            Command::new("profile")
                .about("User profile")
                .subcommand(
                    Command::new("show")
                        .about("Show a profile (defaults to the caller's)")
                        .arg(Arg::new("user").long("user").help("Principal to look up (admin only)")),
                )
                .subcommand(
                    Command::new("set")
                        .about("Save the caller's profile")
                        .arg(Arg::new("name").long("name").required(true)),
                ),
        )
        .subcommand(
            Command::new("role")
                .about("Role assignment and checks")
                .subcommand(Command::new("show").about("Show the caller's role"))
                .subcommand(Command::new("check-admin").about("Check whether the caller is an admin"))
                .subcommand(
                    Command::new("assign")
                        .about("Assign a role to a user (admin only)")
                        .arg(Arg::new("user").long("user").required(true).help("Principal"))
                        .arg(Arg::new("role").long("role").required(true).help("admin|user|guest")),
                ),
        )
}
