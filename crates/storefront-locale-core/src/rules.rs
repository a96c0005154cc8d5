// crates/storefront-locale-core/src/rules.rs
// ============================================================================
// Module: Format Rules
// Description: Per-locale numeric, currency, and date conventions.
// Purpose: Hold the immutable rule table consumed by the formatters.
// Dependencies: crate::locale, serde
// ============================================================================

//! ## Overview
//! One [`FormatRules`] record exists per supported locale. Records are
//! `const` data, so the table is fixed at compile time and shared freely
//! across threads.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Serialize;

use crate::locale::LocaleCode;

// ============================================================================
// SECTION: Types
// ============================================================================

/// Field order for rendered dates.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DatePattern {
    /// `dd/mm/yyyy`.
    DayMonthYear,
    /// `mm/dd/yyyy`.
    MonthDayYear,
}

/// Where the currency symbol goes relative to the amount.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CurrencyPlacement {
    /// Symbol glued before the amount (`$1.00`).
    Prefix,
    /// Amount, one space, then the symbol (`1,00 €`).
    SuffixWithSpace,
}

/// Formatting conventions for one locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormatRules {
    /// Character between integer and fractional digits.
    pub decimal_separator: char,
    /// Character between groups of three integer digits.
    pub thousand_separator: char,
    /// Date field order.
    pub date_pattern: DatePattern,
    /// Currency symbol.
    pub currency_symbol: &'static str,
    /// Currency symbol placement.
    pub currency_placement: CurrencyPlacement,
}

// ============================================================================
// SECTION: Rule Table
// ============================================================================

/// Decimal separator of the neutral intermediate rendering.
pub const NEUTRAL_DECIMAL_SEPARATOR: char = '.';
/// Grouping separator of the neutral intermediate rendering.
pub const NEUTRAL_THOUSAND_SEPARATOR: char = ',';

/// English conventions.
const RULES_EN: FormatRules = FormatRules {
    decimal_separator: '.',
    thousand_separator: ',',
    date_pattern: DatePattern::MonthDayYear,
    currency_symbol: "$",
    currency_placement: CurrencyPlacement::Prefix,
};

/// Spanish conventions.
const RULES_ES: FormatRules = FormatRules {
    decimal_separator: ',',
    thousand_separator: '.',
    date_pattern: DatePattern::DayMonthYear,
    currency_symbol: "€",
    currency_placement: CurrencyPlacement::SuffixWithSpace,
};

impl FormatRules {
    /// Returns the rules for `locale`.
    #[must_use]
    pub const fn for_locale(locale: LocaleCode) -> &'static Self {
        match locale {
            LocaleCode::En => &RULES_EN,
            LocaleCode::Es => &RULES_ES,
        }
    }

    /// Returns true when the separators match the neutral rendering.
    #[must_use]
    pub const fn uses_neutral_separators(&self) -> bool {
        self.decimal_separator == NEUTRAL_DECIMAL_SEPARATOR
            && self.thousand_separator == NEUTRAL_THOUSAND_SEPARATOR
    }
}
