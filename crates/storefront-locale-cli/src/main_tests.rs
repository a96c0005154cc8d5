// crates/storefront-locale-cli/src/main_tests.rs
// ============================================================================
// Module: CLI Main Helpers Tests
// Description: Unit tests for argument helpers in the CLI entry point.
// Purpose: Ensure language selection and argument parsing fail with clear messages.
// Dependencies: storefront-locale-cli main helpers
// ============================================================================

//! ## Overview
//! Validates language resolution, `name=value` parsing, and ISO date input.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only output and panic-based assertions are permitted."
)]

// ============================================================================
// SECTION: Imports
// ============================================================================

use storefront_locale_cli::messages::CliMessages;
use storefront_locale_core::LocaleCode;
use storefront_locale_core::LocaleSource;
use time::Month;

use super::LangArg;
use super::parse_iso_date;
use super::parse_message_args;
use super::resolve_lang;
use super::source_label;

// ============================================================================
// SECTION: Tests
// ============================================================================

#[test]
fn lang_flag_beats_environment() {
    let messages = CliMessages::new().unwrap();
    let locale = resolve_lang(messages.localizer(), Some(LangArg::Es), Some("en")).unwrap();
    assert_eq!(locale, LocaleCode::Es);
}

#[test]
fn environment_lang_is_parsed() {
    let messages = CliMessages::new().unwrap();
    assert_eq!(resolve_lang(messages.localizer(), None, Some("es-MX")).unwrap(), LocaleCode::Es);
    assert_eq!(resolve_lang(messages.localizer(), None, Some("  ")).unwrap(), LocaleCode::En);
    assert_eq!(resolve_lang(messages.localizer(), None, None).unwrap(), LocaleCode::En);
}

#[test]
fn invalid_environment_lang_is_reported() {
    let messages = CliMessages::new().unwrap();
    let error = resolve_lang(messages.localizer(), None, Some("fr")).unwrap_err();
    assert_eq!(
        error.to_string(),
        "Invalid STOREFRONT_LOCALE_LANG value 'fr'. Expected one of: en, es."
    );
}

#[test]
fn message_args_split_on_first_equals() {
    let messages = CliMessages::new().unwrap();
    let raw = vec!["name=Ana".to_string(), "total=a=b".to_string(), " count =3".to_string()];
    let args = parse_message_args(messages.localizer(), &raw).unwrap();
    assert_eq!(args.get("name"), Some("Ana"));
    assert_eq!(args.get("total"), Some("a=b"));
    assert_eq!(args.get("count"), Some("3"));
}

#[test]
fn message_args_without_name_are_rejected() {
    let messages = CliMessages::new().unwrap().with_locale(LocaleCode::Es);
    let error = parse_message_args(messages.localizer(), &["=Ana".to_string()]).unwrap_err();
    assert_eq!(error.to_string(), "Argumento invalido '=Ana'. Se esperaba nombre=valor.");
    let error = parse_message_args(messages.localizer(), &["name".to_string()]).unwrap_err();
    assert!(error.to_string().contains("'name'"));
}

#[test]
fn iso_dates_parse() {
    let messages = CliMessages::new().unwrap();
    let date = parse_iso_date(messages.localizer(), "2026-02-16").unwrap();
    assert_eq!(date.year(), 2026);
    assert_eq!(date.month(), Month::February);
    assert_eq!(date.day(), 16);
    let error = parse_iso_date(messages.localizer(), "16/02/2026").unwrap_err();
    assert_eq!(error.to_string(), "Invalid date '16/02/2026'. Expected YYYY-MM-DD.");
}

#[test]
fn source_labels_match_json_names() {
    for source in [LocaleSource::Query, LocaleSource::Session, LocaleSource::Header] {
        let json = serde_json::to_string(&source).unwrap();
        assert_eq!(json, format!("\"{}\"", source_label(source)));
    }
}
