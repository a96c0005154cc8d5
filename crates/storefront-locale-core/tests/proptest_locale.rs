// crates/storefront-locale-core/tests/proptest_locale.rs
// ============================================================================
// Module: Locale Property-Based Tests
// Description: Property tests for locale normalization and detection.
// Purpose: Ensure arbitrary client input always lands on a supported locale.
// ============================================================================

//! Property-based tests for locale resolution.

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
    reason = "Test-only assertions and helpers are permitted."
)]

use proptest::prelude::*;
use storefront_locale_core::DEFAULT_LOCALE;
use storefront_locale_core::LocaleHints;
use storefront_locale_core::LocaleSource;
use storefront_locale_core::detect_from_header;
use storefront_locale_core::normalize;
use storefront_locale_core::resolve_request_locale;

proptest! {
    #[test]
    fn normalize_is_idempotent(raw in ".{0,16}") {
        let once = normalize(Some(&raw));
        prop_assert_eq!(normalize(Some(once.as_str())), once);
    }

    #[test]
    fn unknown_primary_subtags_map_to_default(tag in "[a-z]{2,3}(-[A-Za-z0-9]{1,8})?") {
        let primary = tag.split('-').next().unwrap();
        prop_assume!(primary != "en" && primary != "es");
        prop_assert_eq!(normalize(Some(&tag)), DEFAULT_LOCALE);
    }

    #[test]
    fn region_subtags_do_not_matter(region in "[A-Za-z0-9]{1,8}") {
        let tag = format!("es-{region}");
        prop_assert_eq!(normalize(Some(&tag)), normalize(Some("es")));
    }

    #[test]
    fn header_uses_only_first_entry(
        first in "[A-Za-z-]{0,10}",
        rest in "[A-Za-z0-9=;., -]{0,24}",
    ) {
        let header = format!("{first};q=0.9,{rest}");
        prop_assert_eq!(detect_from_header(Some(&header)), normalize(Some(&first)));
    }

    #[test]
    fn query_always_wins_and_persists(
        query in "[a-z]{1,3}",
        session in proptest::option::of("[a-z]{2}"),
        header in proptest::option::of("[a-z]{2}"),
    ) {
        let selection = resolve_request_locale(LocaleHints {
            query: Some(&query),
            session: session.as_deref(),
            accept_language: header.as_deref(),
        });
        prop_assert_eq!(selection.source, LocaleSource::Query);
        prop_assert!(selection.persist);
        prop_assert_eq!(selection.locale, normalize(Some(&query)));
    }
}
