// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::LedgerError;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// All persisted amounts are INR paise; entries in any other currency are
/// converted before they leave the client.
pub const BASE_CURRENCY: &str = "INR";

/// Render paise as a plain 2-decimal string, e.g. `12345` -> `"123.45"`.
/// This is the CSV form: no symbol, no grouping.
pub fn display_amount(paise: i64) -> String {
    let sign = if paise < 0 { "-" } else { "" };
    let abs = paise.unsigned_abs();
    format!("{}{}.{:02}", sign, abs / 100, abs % 100)
}

/// Render paise as INR with the rupee symbol and Indian digit grouping,
/// e.g. `123456789` -> `"₹12,34,567.89"`.
pub fn format_inr(paise: i64) -> String {
    let sign = if paise < 0 { "-" } else { "" };
    let abs = paise.unsigned_abs();
    format!("{}₹{}.{:02}", sign, group_indian(&(abs / 100).to_string()), abs % 100)
}

// Indian grouping: the last three digits form one group, the rest pair up
// (12,34,567 rather than 1,234,567).
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let pairs: Vec<&str> = head
        .as_bytes()
        .rchunks(2)
        .rev()
        .map(|chunk| std::str::from_utf8(chunk).unwrap_or(""))
        .collect();
    format!("{},{}", pairs.join(","), tail)
}

/// Parse a user-entered INR amount into paise, rounding half-up to the
/// nearest paisa. Accepts the forms `display_amount`/`format_inr` produce
/// (an optional ₹ symbol, comma grouping, surrounding whitespace). Rejects
/// zero, negative, and non-numeric input.
pub fn to_minor_units(display: &str) -> Result<i64, LedgerError> {
    let cleaned: String = display
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ',' && *c != '₹')
        .collect();
    let amount = cleaned
        .parse::<Decimal>()
        .map_err(|_| LedgerError::InvalidAmount(display.to_string()))?;
    if amount <= Decimal::ZERO {
        return Err(LedgerError::InvalidAmount(display.to_string()));
    }
    to_paise(amount).ok_or_else(|| LedgerError::InvalidAmount(display.to_string()))
}

/// Convert a user-entered amount in an arbitrary currency into paise.
///
/// `exchange_rate` is INR per one unit of the entered currency. It is
/// required (and must be positive) for every currency other than INR; for
/// INR it is ignored and an implicit 1 applies. `currency_code` may be a
/// free-text custom code but must not be blank.
pub fn normalize_amount(
    amount: &str,
    currency_code: &str,
    exchange_rate: Option<&str>,
) -> Result<i64, LedgerError> {
    if currency_code.trim().is_empty() {
        return Err(LedgerError::InvalidCurrencyCode);
    }
    let amount_dec = amount
        .parse::<Decimal>()
        .map_err(|_| LedgerError::InvalidAmount(amount.to_string()))?;
    if amount_dec <= Decimal::ZERO {
        return Err(LedgerError::InvalidAmount(amount.to_string()));
    }

    let in_inr = if currency_code.trim().eq_ignore_ascii_case(BASE_CURRENCY) {
        amount_dec
    } else {
        let raw = exchange_rate
            .ok_or_else(|| LedgerError::InvalidExchangeRate("missing".to_string()))?;
        let rate = raw
            .parse::<Decimal>()
            .map_err(|_| LedgerError::InvalidExchangeRate(raw.to_string()))?;
        if rate <= Decimal::ZERO {
            return Err(LedgerError::InvalidExchangeRate(raw.to_string()));
        }
        amount_dec
            .checked_mul(rate)
            .ok_or_else(|| LedgerError::InvalidAmount("amount too large".to_string()))?
    };

    to_paise(in_inr).ok_or_else(|| LedgerError::InvalidAmount("amount too large".to_string()))
}

fn to_paise(inr: Decimal) -> Option<i64> {
    inr.checked_mul(Decimal::ONE_HUNDRED)?
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
}
