// crates/storefront-locale-core/src/tests/format.rs
// ============================================================================
// Module: Locale Formatting Tests
// Description: Unit tests for number, currency, and date rendering.
// Purpose: Pin exact output strings for each supported locale.
// Dependencies: storefront-locale-core format module, time
// ============================================================================

//! ## Overview
//! Literal-string assertions for the formatters plus their refusal cases.

use time::Date;
use time::Month;
use time::macros::date;
use time::macros::datetime;

use crate::format::FormatError;
use crate::format::MAX_DECIMALS;
use crate::format::format_currency;
use crate::format::format_date;
use crate::format::format_number;
use crate::format::parse_currency;
use crate::format::parse_number;
use crate::locale::LocaleCode;
use crate::rules::CurrencyPlacement;
use crate::rules::DatePattern;
use crate::rules::FormatRules;

// ============================================================================
// SECTION: Rules
// ============================================================================

#[test]
fn rule_table_matches_locale_conventions() {
    let en = FormatRules::for_locale(LocaleCode::En);
    assert!(en.uses_neutral_separators());
    assert_eq!(en.date_pattern, DatePattern::MonthDayYear);
    assert_eq!(en.currency_placement, CurrencyPlacement::Prefix);

    let es = FormatRules::for_locale(LocaleCode::Es);
    assert!(!es.uses_neutral_separators());
    assert_eq!((es.decimal_separator, es.thousand_separator), (',', '.'));
    assert_eq!(es.date_pattern, DatePattern::DayMonthYear);
    assert_eq!(es.currency_symbol, "€");
    assert_eq!(es.currency_placement, CurrencyPlacement::SuffixWithSpace);
}

// ============================================================================
// SECTION: Numbers
// ============================================================================

#[test]
fn number_groups_and_swaps_separators() {
    assert_eq!(format_number(1_234_567.89, LocaleCode::En, 2).unwrap(), "1,234,567.89");
    assert_eq!(format_number(1_234_567.89, LocaleCode::Es, 2).unwrap(), "1.234.567,89");
}

#[test]
fn number_handles_small_zero_and_negative_values() {
    assert_eq!(format_number(0.0, LocaleCode::En, 2).unwrap(), "0.00");
    assert_eq!(format_number(999.0, LocaleCode::Es, 2).unwrap(), "999,00");
    assert_eq!(format_number(1000.0, LocaleCode::En, 2).unwrap(), "1,000.00");
    assert_eq!(format_number(-1234.5, LocaleCode::En, 2).unwrap(), "-1,234.50");
    assert_eq!(format_number(-1234.5, LocaleCode::Es, 2).unwrap(), "-1.234,50");
    assert_eq!(format_number(-12.0, LocaleCode::En, 2).unwrap(), "-12.00");
}

#[test]
fn number_drops_sign_on_zero_result() {
    assert_eq!(format_number(-0.0, LocaleCode::En, 2).unwrap(), "0.00");
    assert_eq!(format_number(-0.001, LocaleCode::Es, 2).unwrap(), "0,00");
}

#[test]
fn number_honors_decimal_count() {
    assert_eq!(format_number(1_234_567.89, LocaleCode::En, 0).unwrap(), "1,234,568");
    assert_eq!(format_number(1_234_567.89, LocaleCode::Es, 0).unwrap(), "1.234.568");
    assert_eq!(format_number(3.5, LocaleCode::En, 3).unwrap(), "3.500");
    assert_eq!(format_number(123_456_789_012.345, LocaleCode::Es, 3).unwrap(), "123.456.789.012,345");
}

#[test]
fn number_rounds_exact_binary_value() {
    // 2.675 is stored as 2.67499999...
    assert_eq!(format_number(2.675, LocaleCode::En, 2).unwrap(), "2.67");
    assert_eq!(format_number(0.996, LocaleCode::En, 2).unwrap(), "1.00");
    assert_eq!(format_number(999.999, LocaleCode::En, 2).unwrap(), "1,000.00");
}

#[test]
fn number_refuses_non_finite_input() {
    assert_eq!(format_number(f64::NAN, LocaleCode::En, 2), Err(FormatError::NonFinite));
    assert_eq!(format_number(f64::INFINITY, LocaleCode::Es, 2), Err(FormatError::NonFinite));
    assert_eq!(format_currency(f64::NEG_INFINITY, LocaleCode::En), Err(FormatError::NonFinite));
}

#[test]
fn number_renders_large_finite_values_exactly() {
    assert_eq!(format_number(1e16, LocaleCode::En, 2).unwrap(), "10,000,000,000,000,000.00");
    assert_eq!(
        format_number(-1e16, LocaleCode::Es, 2).unwrap(),
        "-10.000.000.000.000.000,00"
    );
    assert_eq!(format_number(1e23, LocaleCode::En, 0).unwrap(), "99,999,999,999,999,991,611,392");
    assert_eq!(format_currency(1e16, LocaleCode::Es).unwrap(), "10.000.000.000.000.000,00 €");
    let huge = format_number(f64::MAX, LocaleCode::En, 0).unwrap();
    assert_eq!(huge.replace(',', "").len(), 309);
}

#[test]
fn number_refuses_too_many_decimals() {
    assert_eq!(
        format_number(1.0, LocaleCode::En, MAX_DECIMALS + 1),
        Err(FormatError::DecimalsOutOfRange {
            decimals: MAX_DECIMALS + 1,
            max: MAX_DECIMALS,
        })
    );
    assert!(format_number(1.0, LocaleCode::En, MAX_DECIMALS).is_ok());
}

// ============================================================================
// SECTION: Currency
// ============================================================================

#[test]
fn currency_places_symbol_per_locale() {
    assert_eq!(format_currency(1299.99, LocaleCode::En).unwrap(), "$1,299.99");
    assert_eq!(format_currency(1299.99, LocaleCode::Es).unwrap(), "1.299,99 €");
    assert_eq!(format_currency(5.0, LocaleCode::Es).unwrap(), "5,00 €");
    assert_eq!(format_currency(-5.0, LocaleCode::En).unwrap(), "$-5.00");
}

// ============================================================================
// SECTION: Dates
// ============================================================================

#[test]
fn date_follows_locale_pattern() {
    let value = date!(2026 - 02 - 16);
    assert_eq!(format_date(&value, LocaleCode::En).unwrap(), "02/16/2026");
    assert_eq!(format_date(&value, LocaleCode::Es).unwrap(), "16/02/2026");
}

#[test]
fn date_pads_fields() {
    let value = Date::from_calendar_date(987, Month::January, 5).unwrap();
    assert_eq!(format_date(&value, LocaleCode::En).unwrap(), "01/05/0987");
    assert_eq!(format_date(&value, LocaleCode::Es).unwrap(), "05/01/0987");
}

#[test]
fn date_discards_time_of_day() {
    let late = datetime!(2026 - 02 - 16 23:59:59);
    assert_eq!(format_date(&late, LocaleCode::En).unwrap(), "02/16/2026");
    let offset = datetime!(2026 - 02 - 16 23:30 +5);
    assert_eq!(format_date(&offset, LocaleCode::Es).unwrap(), "16/02/2026");
}

#[test]
fn date_refuses_years_without_four_digits() {
    let year_zero = Date::from_calendar_date(0, Month::January, 1).unwrap();
    assert_eq!(
        format_date(&year_zero, LocaleCode::En),
        Err(FormatError::YearOutOfRange {
            year: 0
        })
    );
    let negative = Date::from_calendar_date(-44, Month::March, 15).unwrap();
    assert!(format_date(&negative, LocaleCode::Es).is_err());
}

// ============================================================================
// SECTION: Parsing
// ============================================================================

#[test]
fn parse_inverts_number_formatting() {
    assert_eq!(parse_number("1,234,567.89", LocaleCode::En).unwrap(), 1_234_567.89);
    assert_eq!(parse_number("1.234.567,89", LocaleCode::Es).unwrap(), 1_234_567.89);
    assert_eq!(parse_number("-0,50", LocaleCode::Es).unwrap(), -0.5);
    assert_eq!(parse_number("1234.5", LocaleCode::En).unwrap(), 1234.5);
    assert_eq!(parse_number("42", LocaleCode::Es).unwrap(), 42.0);
}

#[test]
fn parse_rejects_malformed_numbers() {
    for input in ["", "abc", "1.", "12,34", "1,23,4.00", "1234,567.00", ",123", "1.5.0", "--1"] {
        assert!(
            matches!(parse_number(input, LocaleCode::En), Err(FormatError::InvalidNumber { .. })),
            "expected rejection for {input:?}"
        );
    }
    assert!(parse_number("1.5", LocaleCode::Es).is_err());
}

#[test]
fn parse_currency_requires_symbol_placement() {
    assert_eq!(parse_currency("$1,299.99", LocaleCode::En).unwrap(), 1299.99);
    assert_eq!(parse_currency("1.299,99 €", LocaleCode::Es).unwrap(), 1299.99);
    assert!(parse_currency("1,299.99", LocaleCode::En).is_err());
    assert!(parse_currency("€1.299,99", LocaleCode::Es).is_err());
    assert!(parse_currency("1.299,99€", LocaleCode::Es).is_err());
}
