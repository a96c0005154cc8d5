// crates/storefront-locale-core/src/lib.rs
// ============================================================================
// Module: Storefront Locale Core Library
// Description: Public API surface for locale resolution, translation, and formatting.
// Purpose: Expose the localization engine used by the storefront web layer.
// Dependencies: crate::{builtin, catalog, diagnostics, format, locale, localizer, rules, template, translate}
// ============================================================================

//! ## Overview
//! Storefront Locale core resolves untrusted locale hints into a supported
//! [`LocaleCode`], translates message keys with a two-step fallback, and
//! renders numbers, currency amounts, and dates byte-for-byte reproducibly.
//!
//! Every operation takes the locale explicitly. Catalogs and format rules are
//! immutable values built once at startup and shared by reference; nothing in
//! this crate reads or writes caller session state.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod builtin;
pub mod catalog;
pub mod diagnostics;
pub mod format;
pub mod locale;
pub mod localizer;
pub mod rules;
pub mod template;
pub mod translate;


// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use builtin::storefront_catalog;
pub use builtin::storefront_entries;
pub use catalog::CatalogBuilder;
pub use catalog::CatalogError;
pub use catalog::MessageCatalog;
pub use catalog::StaticCatalog;
pub use diagnostics::FallbackResolution;
pub use diagnostics::FileEventSink;
pub use diagnostics::L10nEvent;
pub use diagnostics::L10nEventSink;
pub use diagnostics::MemoryEventSink;
pub use diagnostics::NoopEventSink;
pub use diagnostics::PlaceholderMismatchEvent;
pub use diagnostics::StderrEventSink;
pub use diagnostics::TranslationFallbackEvent;
pub use format::CURRENCY_DECIMALS;
pub use format::CalendarDate;
pub use format::DEFAULT_DECIMALS;
pub use format::FormatError;
pub use format::MAX_DECIMALS;
pub use format::format_currency;
pub use format::format_date;
pub use format::format_number;
pub use format::parse_currency;
pub use format::parse_number;
pub use locale::DEFAULT_LOCALE;
pub use locale::LocaleCode;
pub use locale::LocaleHints;
pub use locale::LocaleSelection;
pub use locale::LocaleSource;
pub use locale::SUPPORTED_LOCALES;
pub use locale::UnsupportedLocale;
pub use locale::detect_from_header;
pub use locale::normalize;
pub use locale::resolve_request_locale;
pub use localizer::DEMO_CURRENCY;
pub use localizer::DEMO_DATE;
pub use localizer::DEMO_NUMBER;
pub use localizer::LocaleDemo;
pub use localizer::LocaleOption;
pub use localizer::Localizer;
pub use rules::CurrencyPlacement;
pub use rules::DatePattern;
pub use rules::FormatRules;
pub use template::Template;
pub use template::TemplateError;
pub use translate::MessageArgs;
pub use translate::PlaceholderPolicy;
pub use translate::Resolution;
pub use translate::TranslateError;
pub use translate::Translator;
