// crates/storefront-locale-core/src/format.rs
// ============================================================================
// Module: Locale Formatting
// Description: Number, currency, and date rendering per locale rules.
// Purpose: Produce byte-for-byte reproducible display strings.
// Dependencies: crate::{locale, rules}, thiserror, time
// ============================================================================

//! ## Overview
//! Numbers are first rendered in a neutral form (`,` grouping, `.` decimal)
//! and then mapped onto the target locale's separators. Currency and date
//! rendering layer on top of the same [`FormatRules`] table.
//!
//! ## Invariants
//! - Rounding is round-half-to-even on the exact binary value of the `f64`.
//! - A zero result never carries a minus sign (`-0.001` renders `0.00`).
//! - Non-finite input is refused with a [`FormatError`]. Every finite value
//!   renders its exact decimal expansion, however large.
//! - Parsing accepts exactly what formatting produces for the same locale.

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;
use time::Date;
use time::OffsetDateTime;
use time::PrimitiveDateTime;

use crate::locale::LocaleCode;
use crate::rules::CurrencyPlacement;
use crate::rules::DatePattern;
use crate::rules::FormatRules;
use crate::rules::NEUTRAL_DECIMAL_SEPARATOR;
use crate::rules::NEUTRAL_THOUSAND_SEPARATOR;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Fractional digits used when the caller does not choose.
pub const DEFAULT_DECIMALS: usize = 2;
/// Fractional digits used for currency amounts.
pub const CURRENCY_DECIMALS: usize = 2;
/// Largest accepted fractional digit count.
pub const MAX_DECIMALS: usize = 12;
/// Earliest renderable year.
const MIN_YEAR: i32 = 1;
/// Latest renderable year.
const MAX_YEAR: i32 = 9999;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Formatting and parsing failures.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormatError {
    /// NaN or infinity was supplied.
    #[error("cannot format non-finite number")]
    NonFinite,
    /// The requested fractional digit count exceeds [`MAX_DECIMALS`].
    #[error("decimals {decimals} exceeds maximum {max}")]
    DecimalsOutOfRange {
        /// Requested digit count.
        decimals: usize,
        /// Maximum supported digit count.
        max: usize,
    },
    /// The year cannot be rendered with four digits.
    #[error("year {year} is outside 1..=9999")]
    YearOutOfRange {
        /// Rejected year.
        year: i32,
    },
    /// Text did not match the locale's number or currency shape.
    #[error("invalid localized number: {input}")]
    InvalidNumber {
        /// Rejected input.
        input: String,
    },
}

// ============================================================================
// SECTION: Numbers
// ============================================================================

/// Formats `value` with exactly `decimals` fractional digits for `locale`.
///
/// # Errors
///
/// Returns [`FormatError`] for non-finite values, or when
/// `decimals` exceeds [`MAX_DECIMALS`].
pub fn format_number(value: f64, locale: LocaleCode, decimals: usize) -> Result<String, FormatError> {
    let neutral = neutral_number(value, decimals)?;
    let rules = FormatRules::for_locale(locale);
    if rules.uses_neutral_separators() {
        return Ok(neutral);
    }
    Ok(transpose_separators(&neutral, rules))
}

/// Renders the neutral intermediate form (`1,234.50`).
fn neutral_number(value: f64, decimals: usize) -> Result<String, FormatError> {
    if !value.is_finite() {
        return Err(FormatError::NonFinite);
    }
    if decimals > MAX_DECIMALS {
        return Err(FormatError::DecimalsOutOfRange {
            decimals,
            max: MAX_DECIMALS,
        });
    }
    let fixed = format!("{:.*}", decimals, value.abs());
    let (integer, fraction) = match fixed.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (fixed.as_str(), None),
    };
    let negative = value.is_sign_negative() && fixed.bytes().any(|byte| matches!(byte, b'1' ..= b'9'));

    let mut output = String::with_capacity(fixed.len() + integer.len() / 3 + 1);
    if negative {
        output.push('-');
    }
    push_grouped(integer, &mut output);
    if let Some(fraction) = fraction {
        output.push(NEUTRAL_DECIMAL_SEPARATOR);
        output.push_str(fraction);
    }
    Ok(output)
}

/// Appends `digits` with a neutral separator between groups of three.
fn push_grouped(digits: &str, output: &mut String) {
    let len = digits.len();
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (len - index) % 3 == 0 {
            output.push(NEUTRAL_THOUSAND_SEPARATOR);
        }
        output.push(digit);
    }
}

/// Maps neutral separators onto the locale's separators.
///
/// Each character is visited once, so swapping `,` and `.` cannot collide.
fn transpose_separators(neutral: &str, rules: &FormatRules) -> String {
    neutral
        .chars()
        .map(|ch| match ch {
            NEUTRAL_THOUSAND_SEPARATOR => rules.thousand_separator,
            NEUTRAL_DECIMAL_SEPARATOR => rules.decimal_separator,
            other => other,
        })
        .collect()
}

/// Parses text produced by [`format_number`] for `locale`.
///
/// Grouping is optional, but when present every group after the first must
/// hold exactly three digits.
///
/// # Errors
///
/// Returns [`FormatError::InvalidNumber`] when `input` is not a localized
/// number for `locale`.
pub fn parse_number(input: &str, locale: LocaleCode) -> Result<f64, FormatError> {
    let rules = FormatRules::for_locale(locale);
    let invalid = || FormatError::InvalidNumber {
        input: input.to_string(),
    };
    let trimmed = input.trim();
    let (sign, body) = match trimmed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", trimmed),
    };
    let (integer, fraction) = match body.split_once(rules.decimal_separator) {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (body, None),
    };
    let digits = ungroup(integer, rules.thousand_separator).ok_or_else(invalid)?;
    let mut neutral = format!("{sign}{digits}");
    if let Some(fraction) = fraction {
        if fraction.is_empty() || !fraction.bytes().all(|byte| byte.is_ascii_digit()) {
            return Err(invalid());
        }
        neutral.push('.');
        neutral.push_str(fraction);
    }
    let value: f64 = neutral.parse().map_err(|_| invalid())?;
    if !value.is_finite() {
        return Err(invalid());
    }
    Ok(value)
}

/// Strips grouping separators after validating group widths.
fn ungroup(integer: &str, separator: char) -> Option<String> {
    let mut groups = integer.split(separator);
    let first = groups.next()?;
    if first.is_empty() || !first.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }
    let mut digits = first.to_string();
    let grouped = integer.contains(separator);
    if grouped && first.len() > 3 {
        return None;
    }
    for group in groups {
        if group.len() != 3 || !group.bytes().all(|byte| byte.is_ascii_digit()) {
            return None;
        }
        digits.push_str(group);
    }
    Some(digits)
}

// ============================================================================
// SECTION: Currency
// ============================================================================

/// Formats a currency amount with two decimals and the locale's symbol.
///
/// # Errors
///
/// Returns [`FormatError`] under the same conditions as [`format_number`].
pub fn format_currency(value: f64, locale: LocaleCode) -> Result<String, FormatError> {
    let amount = format_number(value, locale, CURRENCY_DECIMALS)?;
    let rules = FormatRules::for_locale(locale);
    Ok(match rules.currency_placement {
        CurrencyPlacement::Prefix => format!("{}{amount}", rules.currency_symbol),
        CurrencyPlacement::SuffixWithSpace => format!("{amount} {}", rules.currency_symbol),
    })
}

/// Parses text produced by [`format_currency`] for `locale`.
///
/// # Errors
///
/// Returns [`FormatError::InvalidNumber`] when the symbol is misplaced or the
/// amount is malformed.
pub fn parse_currency(input: &str, locale: LocaleCode) -> Result<f64, FormatError> {
    let rules = FormatRules::for_locale(locale);
    let trimmed = input.trim();
    let amount = match rules.currency_placement {
        CurrencyPlacement::Prefix => trimmed.strip_prefix(rules.currency_symbol),
        CurrencyPlacement::SuffixWithSpace => trimmed
            .strip_suffix(rules.currency_symbol)
            .and_then(|rest| rest.strip_suffix(' ')),
    };
    let amount = amount.ok_or_else(|| FormatError::InvalidNumber {
        input: input.to_string(),
    })?;
    parse_number(amount, locale)
}

// ============================================================================
// SECTION: Dates
// ============================================================================

/// Values that carry a calendar date.
///
/// Time of day and offset are discarded; no timezone conversion happens.
pub trait CalendarDate {
    /// Returns the calendar date component.
    fn calendar_date(&self) -> Date;
}

impl CalendarDate for Date {
    fn calendar_date(&self) -> Date {
        *self
    }
}

impl CalendarDate for PrimitiveDateTime {
    fn calendar_date(&self) -> Date {
        self.date()
    }
}

impl CalendarDate for OffsetDateTime {
    fn calendar_date(&self) -> Date {
        self.date()
    }
}

/// Formats the date component of `value` for `locale`.
///
/// # Errors
///
/// Returns [`FormatError::YearOutOfRange`] when the year needs other than four
/// digits.
pub fn format_date<D: CalendarDate + ?Sized>(
    value: &D,
    locale: LocaleCode,
) -> Result<String, FormatError> {
    let date = value.calendar_date();
    let year = date.year();
    if !(MIN_YEAR ..= MAX_YEAR).contains(&year) {
        return Err(FormatError::YearOutOfRange {
            year,
        });
    }
    let month = u8::from(date.month());
    let day = date.day();
    Ok(match FormatRules::for_locale(locale).date_pattern {
        DatePattern::DayMonthYear => format!("{day:02}/{month:02}/{year:04}"),
        DatePattern::MonthDayYear => format!("{month:02}/{day:02}/{year:04}"),
    })
}
