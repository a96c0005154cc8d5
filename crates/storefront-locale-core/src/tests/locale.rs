// crates/storefront-locale-core/src/tests/locale.rs
// ============================================================================
// Module: Locale Resolution Tests
// Description: Unit tests for normalization, header detection, and selection.
// Purpose: Ensure every locale hint resolves to a supported code.
// Dependencies: storefront-locale-core locale module
// ============================================================================

//! ## Overview
//! Exercises tolerant normalization and the request selection order.

use crate::locale::DEFAULT_LOCALE;
use crate::locale::LocaleCode;
use crate::locale::LocaleHints;
use crate::locale::LocaleSource;
use crate::locale::SUPPORTED_LOCALES;
use crate::locale::detect_from_header;
use crate::locale::normalize;
use crate::locale::resolve_request_locale;

#[test]
fn supported_locales_start_with_default() {
    assert_eq!(SUPPORTED_LOCALES.first(), Some(&DEFAULT_LOCALE));
    assert_eq!(DEFAULT_LOCALE, LocaleCode::En);
    assert!(SUPPORTED_LOCALES.contains(&LocaleCode::Es));
}

#[test]
fn normalize_accepts_region_tags_and_case() {
    assert_eq!(normalize(Some("ES-mx")), LocaleCode::Es);
    assert_eq!(normalize(Some("es")), LocaleCode::Es);
    assert_eq!(normalize(Some("  ES ")), LocaleCode::Es);
    assert_eq!(normalize(Some("en-US")), LocaleCode::En);
    assert_eq!(normalize(Some("EN")), LocaleCode::En);
}

#[test]
fn normalize_defaults_for_absent_or_unsupported() {
    assert_eq!(normalize(None), DEFAULT_LOCALE);
    assert_eq!(normalize(Some("")), DEFAULT_LOCALE);
    assert_eq!(normalize(Some("fr")), DEFAULT_LOCALE);
    assert_eq!(normalize(Some("   ")), DEFAULT_LOCALE);
    assert_eq!(normalize(Some("-es")), DEFAULT_LOCALE);
    assert_eq!(normalize(Some("\u{0}garbage\u{7f}")), DEFAULT_LOCALE);
}

#[test]
fn normalize_only_splits_on_hyphen() {
    assert_eq!(normalize(Some("es_MX")), DEFAULT_LOCALE);
}

#[test]
fn normalize_is_idempotent_on_labels() {
    for locale in SUPPORTED_LOCALES {
        assert_eq!(normalize(Some(locale.as_str())), *locale);
    }
}

#[test]
fn header_first_entry_wins() {
    assert_eq!(detect_from_header(Some("es-ES,en;q=0.8")), LocaleCode::Es);
    assert_eq!(detect_from_header(Some("en-GB,es;q=0.9")), LocaleCode::En);
    assert_eq!(detect_from_header(Some("fr-FR,es;q=0.9")), DEFAULT_LOCALE);
}

#[test]
fn header_ignores_quality_parameters() {
    assert_eq!(detect_from_header(Some("es;q=0.5, en;q=1.0")), LocaleCode::Es);
    assert_eq!(detect_from_header(Some("es;q=0.9,en")), LocaleCode::Es);
    assert_eq!(detect_from_header(Some("es-MX;q=0.1")), LocaleCode::Es);
    assert_eq!(detect_from_header(Some("fr;q=1.0,es")), DEFAULT_LOCALE);
    assert_eq!(detect_from_header(Some("  es-419 ,en")), LocaleCode::Es);
}

#[test]
fn header_absent_or_empty_uses_default() {
    assert_eq!(detect_from_header(None), DEFAULT_LOCALE);
    assert_eq!(detect_from_header(Some("")), DEFAULT_LOCALE);
    assert_eq!(detect_from_header(Some(",es")), DEFAULT_LOCALE);
    assert_eq!(detect_from_header(Some("*")), DEFAULT_LOCALE);
}

#[test]
fn strict_parse_rejects_unsupported() {
    assert_eq!("es-AR".parse::<LocaleCode>(), Ok(LocaleCode::Es));
    assert!("de".parse::<LocaleCode>().is_err());
    assert!("".parse::<LocaleCode>().is_err());
}

#[test]
fn query_hint_wins_and_persists() {
    let selection = resolve_request_locale(LocaleHints {
        query: Some("es"),
        session: Some("en"),
        accept_language: Some("en-US"),
    });
    assert_eq!(selection.locale, LocaleCode::Es);
    assert_eq!(selection.source, LocaleSource::Query);
    assert!(selection.persist);
}

#[test]
fn unsupported_query_still_persists_default() {
    let selection = resolve_request_locale(LocaleHints {
        query: Some("xx"),
        session: Some("es"),
        accept_language: None,
    });
    assert_eq!(selection.locale, DEFAULT_LOCALE);
    assert_eq!(selection.source, LocaleSource::Query);
    assert!(selection.persist);
}

#[test]
fn session_hint_reused_without_persisting() {
    let selection = resolve_request_locale(LocaleHints {
        query: Some(""),
        session: Some("es"),
        accept_language: Some("en"),
    });
    assert_eq!(selection.locale, LocaleCode::Es);
    assert_eq!(selection.source, LocaleSource::Session);
    assert!(!selection.persist);
}

#[test]
fn header_decides_first_visit() {
    let selection = resolve_request_locale(LocaleHints {
        query: None,
        session: None,
        accept_language: Some("es-MX,es;q=0.9"),
    });
    assert_eq!(selection.locale, LocaleCode::Es);
    assert_eq!(selection.source, LocaleSource::Header);
    assert!(selection.persist);

    let bare = resolve_request_locale(LocaleHints::default());
    assert_eq!(bare.locale, DEFAULT_LOCALE);
    assert_eq!(bare.source, LocaleSource::Header);
}
