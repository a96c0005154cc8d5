// crates/storefront-locale-core/src/locale.rs
// ============================================================================
// Module: Locale Resolution
// Description: Supported locale codes and tolerant normalization of raw input.
// Purpose: Turn untrusted locale hints into a supported code without failing.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Every locale hint the web layer sees (query parameters, session values,
//! `Accept-Language` headers) is untrusted text. This module collapses any such
//! hint into a [`LocaleCode`] from the fixed supported set.
//!
//! ## Invariants
//! - Normalization never fails; unknown or malformed input yields
//!   [`DEFAULT_LOCALE`].
//! - [`normalize`] is idempotent over its own output.
//! - Resolution never logs: an unsupported locale is not an error.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

// ============================================================================
// SECTION: Types
// ============================================================================

/// Supported storefront locales.
///
/// # Invariants
/// - Variants are stable for catalog lookup and session persistence.
/// - [`LocaleCode::En`] is the default fallback locale.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocaleCode {
    /// English (default).
    En,
    /// Spanish.
    Es,
}

/// Locale used when input is absent, unsupported, or malformed.
pub const DEFAULT_LOCALE: LocaleCode = LocaleCode::En;

/// Ordered list of supported locales.
///
/// # Invariants
/// - Ordering is stable for deterministic presentation (default first).
pub const SUPPORTED_LOCALES: &[LocaleCode] = &[LocaleCode::En, LocaleCode::Es];

impl LocaleCode {
    /// Returns the canonical locale label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Es => "es",
        }
    }

    /// Returns the locale's name written in its own language.
    #[must_use]
    pub const fn native_name(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Es => "Español",
        }
    }

    /// Returns true when this is the default locale.
    #[must_use]
    pub const fn is_default(self) -> bool {
        matches!(self, Self::En)
    }

    /// Matches an already-normalized primary subtag.
    fn from_primary_subtag(tag: &str) -> Option<Self> {
        SUPPORTED_LOCALES.iter().copied().find(|locale| locale.as_str() == tag)
    }
}

impl fmt::Display for LocaleCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Strict parse failure for [`LocaleCode::from_str`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported locale: {0}")]
pub struct UnsupportedLocale(pub String);

impl FromStr for LocaleCode {
    type Err = UnsupportedLocale;

    /// Parses a locale strictly: the normalized primary subtag must be
    /// supported. Use [`normalize`] where a fallback is wanted instead.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.to_lowercase();
        let primary = primary_subtag(normalized.trim());
        Self::from_primary_subtag(primary).ok_or_else(|| UnsupportedLocale(value.to_string()))
    }
}

// ============================================================================
// SECTION: Normalization
// ============================================================================

/// Normalizes a raw locale hint into a supported locale.
///
/// The input is lowercased and trimmed, then only the primary subtag (text
/// before the first `-`) is kept. Absent, empty, or unsupported input resolves
/// to [`DEFAULT_LOCALE`].
#[must_use]
pub fn normalize(raw: Option<&str>) -> LocaleCode {
    let Some(raw) = raw else {
        return DEFAULT_LOCALE;
    };
    if raw.is_empty() {
        return DEFAULT_LOCALE;
    }
    let lowered = raw.to_lowercase();
    let primary = primary_subtag(lowered.trim());
    LocaleCode::from_primary_subtag(primary).unwrap_or(DEFAULT_LOCALE)
}

/// Detects a locale from an `Accept-Language`-style header.
///
/// Only the first comma-separated entry is considered; quality weights do not
/// reorder entries. Parameters after `;` on that entry are dropped before
/// normalization.
#[must_use]
pub fn detect_from_header(header: Option<&str>) -> LocaleCode {
    let Some(header) = header else {
        return DEFAULT_LOCALE;
    };
    if header.is_empty() {
        return DEFAULT_LOCALE;
    }
    let first = header.split(',').next().unwrap_or_default();
    let tag = first.split(';').next().unwrap_or_default().trim();
    normalize(Some(tag))
}

/// Returns the text before the first hyphen.
fn primary_subtag(value: &str) -> &str {
    value.split('-').next().unwrap_or_default()
}

// ============================================================================
// SECTION: Request Selection
// ============================================================================

/// Raw locale hints available to the web layer for one request.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocaleHints<'a> {
    /// Explicit `lang` query parameter.
    pub query: Option<&'a str>,
    /// Locale previously stored in the caller's session.
    pub session: Option<&'a str>,
    /// Raw `Accept-Language` header value.
    pub accept_language: Option<&'a str>,
}

/// Which hint decided the active locale.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LocaleSource {
    /// The explicit query parameter.
    Query,
    /// The stored session value.
    Session,
    /// The `Accept-Language` header (or its absence).
    Header,
}

/// Outcome of request locale selection.
///
/// # Invariants
/// - `persist` is true whenever the session did not already hold the choice.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub struct LocaleSelection {
    /// Active locale for the request.
    pub locale: LocaleCode,
    /// Hint that decided the locale.
    pub source: LocaleSource,
    /// Whether the caller should store `locale` in its session.
    pub persist: bool,
}

/// Selects the active locale for a request.
///
/// A non-empty query parameter wins and must be persisted. Otherwise an
/// existing session value is reused as-is. Otherwise the header decides and
/// the result must be persisted.
#[must_use]
pub fn resolve_request_locale(hints: LocaleHints<'_>) -> LocaleSelection {
    if let Some(query) = hints.query.filter(|value| !value.is_empty()) {
        return LocaleSelection {
            locale: normalize(Some(query)),
            source: LocaleSource::Query,
            persist: true,
        };
    }
    if let Some(session) = hints.session {
        return LocaleSelection {
            locale: normalize(Some(session)),
            source: LocaleSource::Session,
            persist: false,
        };
    }
    LocaleSelection {
        locale: detect_from_header(hints.accept_language),
        source: LocaleSource::Header,
        persist: true,
    }
}
