// crates/storefront-locale-core/src/localizer.rs
// ============================================================================
// Module: Bound Localizer
// Description: A translator paired with one request's resolved locale.
// Purpose: Give page rendering one handle for text, numbers, and dates.
// Dependencies: crate::{format, locale, translate}, serde, time
// ============================================================================

//! ## Overview
//! A [`Localizer`] is created per request once the locale is known. It only
//! borrows the shared [`Translator`], so it costs nothing to build and never
//! touches caller session state.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Serialize;
use time::Date;
use time::macros::date;

use crate::format::CalendarDate;
use crate::format::DEFAULT_DECIMALS;
use crate::format::FormatError;
use crate::format::format_currency;
use crate::format::format_date;
use crate::format::format_number;
use crate::locale::LocaleCode;
use crate::locale::SUPPORTED_LOCALES;
use crate::translate::MessageArgs;
use crate::translate::Translator;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Date shown on the locale formatting demo.
pub const DEMO_DATE: Date = date!(2026 - 02 - 16);
/// Number shown on the locale formatting demo.
pub const DEMO_NUMBER: f64 = 1_234_567.89;
/// Currency amount shown on the locale formatting demo.
pub const DEMO_CURRENCY: f64 = 1_299.99;

// ============================================================================
// SECTION: Types
// ============================================================================

/// One entry of a locale switcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LocaleOption {
    /// Locale code.
    pub code: LocaleCode,
    /// Name in the locale's own language.
    pub native_name: &'static str,
    /// Whether this is the active locale.
    pub active: bool,
    /// Whether this is the default locale.
    pub default: bool,
}

/// Demo values rendered for one locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocaleDemo {
    /// Locale used for rendering.
    pub locale: LocaleCode,
    /// Demo heading.
    pub title: String,
    /// Date label.
    pub date_label: String,
    /// Rendered [`DEMO_DATE`].
    pub date: String,
    /// Number label.
    pub number_label: String,
    /// Rendered [`DEMO_NUMBER`].
    pub number: String,
    /// Currency label.
    pub currency_label: String,
    /// Rendered [`DEMO_CURRENCY`].
    pub currency: String,
}

/// Translator and formatters bound to one locale.
#[derive(Clone, Copy)]
pub struct Localizer<'a> {
    /// Shared translator.
    translator: &'a Translator,
    /// Active locale.
    locale: LocaleCode,
    /// Fraction digits for [`Localizer::number`].
    default_decimals: usize,
}

impl<'a> Localizer<'a> {
    /// Binds `translator` to `locale`.
    #[must_use]
    pub const fn new(translator: &'a Translator, locale: LocaleCode) -> Self {
        Self {
            translator,
            locale,
            default_decimals: DEFAULT_DECIMALS,
        }
    }

    /// Overrides the fraction digits used by [`Localizer::number`].
    #[must_use]
    pub const fn with_default_decimals(mut self, decimals: usize) -> Self {
        self.default_decimals = decimals;
        self
    }

    /// Returns the active locale.
    #[must_use]
    pub const fn locale(&self) -> LocaleCode {
        self.locale
    }

    /// Translates `key` with no arguments.
    #[must_use]
    pub fn text(&self, key: &str) -> String {
        self.translator.translate(key, self.locale, &MessageArgs::new())
    }

    /// Translates `key` with `args`.
    #[must_use]
    pub fn text_with(&self, key: &str, args: &MessageArgs) -> String {
        self.translator.translate(key, self.locale, args)
    }

    /// Formats a number with the default fraction digits.
    ///
    /// # Errors
    ///
    /// See [`format_number`].
    pub fn number(&self, value: f64) -> Result<String, FormatError> {
        format_number(value, self.locale, self.default_decimals)
    }

    /// Formats a number with `decimals` fraction digits.
    ///
    /// # Errors
    ///
    /// See [`format_number`].
    pub fn number_with(&self, value: f64, decimals: usize) -> Result<String, FormatError> {
        format_number(value, self.locale, decimals)
    }

    /// Formats a currency amount.
    ///
    /// # Errors
    ///
    /// See [`format_currency`].
    pub fn currency(&self, value: f64) -> Result<String, FormatError> {
        format_currency(value, self.locale)
    }

    /// Formats a date.
    ///
    /// # Errors
    ///
    /// See [`format_date`].
    pub fn date<D: CalendarDate + ?Sized>(&self, value: &D) -> Result<String, FormatError> {
        format_date(value, self.locale)
    }

    /// Lists supported locales for a locale switcher.
    #[must_use]
    pub fn locale_options(&self) -> Vec<LocaleOption> {
        SUPPORTED_LOCALES
            .iter()
            .map(|code| LocaleOption {
                code: *code,
                native_name: code.native_name(),
                active: *code == self.locale,
                default: code.is_default(),
            })
            .collect()
    }

    /// Renders the locale formatting demo.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError`] if a demo value cannot be formatted.
    pub fn demo(&self) -> Result<LocaleDemo, FormatError> {
        Ok(LocaleDemo {
            locale: self.locale,
            title: self.text("i18n.demo_title"),
            date_label: self.text("i18n.demo_date"),
            date: self.date(&DEMO_DATE)?,
            number_label: self.text("i18n.demo_number"),
            number: format_number(DEMO_NUMBER, self.locale, DEFAULT_DECIMALS)?,
            currency_label: self.text("i18n.demo_currency"),
            currency: self.currency(DEMO_CURRENCY)?,
        })
    }
}
