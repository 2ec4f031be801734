// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rupeeclip::error::LedgerError;
use rupeeclip::money::normalize_amount;

#[test]
fn converts_at_the_given_rate() {
    // 100 USD at 83.5 INR/USD -> 8350 INR -> 835000 paise
    assert_eq!(normalize_amount("100", "USD", Some("83.5")).unwrap(), 835_000);
}

#[test]
fn base_currency_needs_no_rate() {
    assert_eq!(normalize_amount("250.75", "INR", None).unwrap(), 25_075);
    // Case-insensitive, and a supplied rate is ignored for INR
    assert_eq!(normalize_amount("250.75", "inr", Some("99")).unwrap(), 25_075);
}

#[test]
fn rounds_half_up_to_the_nearest_paisa() {
    // 1 JPY at 0.615 -> 61.5 paise -> 62
    assert_eq!(normalize_amount("1", "JPY", Some("0.615")).unwrap(), 62);
    assert_eq!(normalize_amount("0.125", "INR", None).unwrap(), 13);
}

#[test]
fn custom_currency_codes_are_free_text() {
    assert_eq!(
        normalize_amount("10", "Singapore Dollar", Some("62.5")).unwrap(),
        62_500
    );
}

#[test]
fn rejects_bad_amounts() {
    for bad in ["0", "-1", "abc"] {
        let err = normalize_amount(bad, "INR", None).unwrap_err();
        assert!(matches!(err, LedgerError::InvalidAmount(_)), "input {:?}", bad);
    }
}

#[test]
fn rejects_missing_or_non_positive_rates() {
    for rate in [None, Some("0"), Some("-2"), Some("x")] {
        let err = normalize_amount("100", "USD", rate).unwrap_err();
        assert!(
            matches!(err, LedgerError::InvalidExchangeRate(_)),
            "rate {:?}",
            rate
        );
    }
}

#[test]
fn rejects_blank_currency_codes() {
    let err = normalize_amount("100", "  ", Some("2")).unwrap_err();
    assert!(matches!(err, LedgerError::InvalidCurrencyCode));
}
