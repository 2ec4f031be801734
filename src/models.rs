// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::bail;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Income => "income",
            TransactionType::Expense => "expense",
        }
    }
}

impl FromStr for TransactionType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "income" => Ok(TransactionType::Income),
            "expense" => Ok(TransactionType::Expense),
            other => bail!("Unknown transaction type '{}' (use income|expense)", other),
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The closed category set understood by the ledger service. The declaration
/// order is also the tie-break order for percentage rankings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Salary,
    Other,
    Entertainment,
    Food,
    Transport,
    Utilities,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Salary,
        Category::Other,
        Category::Entertainment,
        Category::Food,
        Category::Transport,
        Category::Utilities,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Salary => "salary",
            Category::Other => "other",
            Category::Entertainment => "entertainment",
            Category::Food => "food",
            Category::Transport => "transport",
            Category::Utilities => "utilities",
        }
    }

    /// Human-readable label used in tables and CSV exports.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Salary => "Salary",
            Category::Other => "Other",
            Category::Entertainment => "Entertainment",
            Category::Food => "Food",
            Category::Transport => "Transport",
            Category::Utilities => "Utilities",
        }
    }
}

impl FromStr for Category {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "salary" => Ok(Category::Salary),
            "other" => Ok(Category::Other),
            "entertainment" => Ok(Category::Entertainment),
            "food" => Ok(Category::Food),
            "transport" => Ok(Category::Transport),
            "utilities" => Ok(Category::Utilities),
            other => bail!(
                "Unknown category '{}' (use salary|other|entertainment|food|transport|utilities)",
                other
            ),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A ledger entry as stored by the service. `date` is nanoseconds since epoch
/// (UTC); `amount` is INR paise and always positive, the direction lives in
/// `transaction_type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub transaction_id: i64,
    pub date: i64,
    pub amount: i64,
    pub transaction_type: TransactionType,
    pub category: Category,
    pub description: String,
}

/// Create/update payload: a [`Transaction`] without its id. Updates are full
/// replacements, not patches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionData {
    pub date: i64,
    pub amount: i64,
    pub transaction_type: TransactionType,
    pub category: Category,
    pub description: String,
}

/// Income/expense sums (paise) for one calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlySummary {
    pub year: i32,
    pub month: u32,
    pub income: i64,
    pub expenses: i64,
}

/// Expense sums (paise) per category. All six categories are always present;
/// categories without expenses stay at zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryBreakdown {
    pub salary: i64,
    pub other: i64,
    pub entertainment: i64,
    pub food: i64,
    pub transport: i64,
    pub utilities: i64,
}

impl CategoryBreakdown {
    pub fn get(&self, category: Category) -> i64 {
        match category {
            Category::Salary => self.salary,
            Category::Other => self.other,
            Category::Entertainment => self.entertainment,
            Category::Food => self.food,
            Category::Transport => self.transport,
            Category::Utilities => self.utilities,
        }
    }

    pub fn add(&mut self, category: Category, amount: i64) {
        let slot = match category {
            Category::Salary => &mut self.salary,
            Category::Other => &mut self.other,
            Category::Entertainment => &mut self.entertainment,
            Category::Food => &mut self.food,
            Category::Transport => &mut self.transport,
            Category::Utilities => &mut self.utilities,
        };
        *slot += amount;
    }

    pub fn total(&self) -> i64 {
        Category::ALL.iter().map(|&c| self.get(c)).sum()
    }
}

/// Full report for a date range, in the service wire shape (the breakdown is
/// carried as a one-element array).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub monthly_summaries: Vec<MonthlySummary>,
    pub category_breakdowns: Vec<CategoryBreakdown>,
}

/// Overall sums (paise); `net` is signed and may be negative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Totals {
    pub income: i64,
    pub expenses: i64,
    pub net: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    User,
    Guest,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::User => "user",
            UserRole::Guest => "guest",
        }
    }
}

impl FromStr for UserRole {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "admin" => Ok(UserRole::Admin),
            "user" => Ok(UserRole::User),
            "guest" => Ok(UserRole::Guest),
            other => bail!("Unknown role '{}' (use admin|user|guest)", other),
        }
    }
}
