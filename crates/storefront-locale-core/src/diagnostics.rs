// crates/storefront-locale-core/src/diagnostics.rs
// ============================================================================
// Module: Localization Diagnostics
// Description: Structured events for translation fallbacks and mismatches.
// Purpose: Emit JSON-line diagnostics without coupling to a logging stack.
// Dependencies: crate::{locale, translate}, serde, serde_json
// ============================================================================

//! ## Overview
//! The translator reports fallbacks and placeholder mismatches as
//! [`L10nEvent`] values. Sinks decide where they go: nowhere, stderr, an
//! append-only file, or an in-memory buffer.
//!
//! Locale normalization never emits events; an unsupported locale is not a
//! failure.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs::OpenOptions;
use std::io;
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;
use std::sync::PoisonError;
use std::time::SystemTime;
use std::time::UNIX_EPOCH;

use serde::Serialize;

use crate::locale::LocaleCode;
use crate::translate::PlaceholderPolicy;

// ============================================================================
// SECTION: Types
// ============================================================================

/// How a missing translation was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackResolution {
    /// The default locale supplied the template.
    DefaultLocale,
    /// No locale had the key; the key was echoed.
    RawKey,
}

/// Translation fallback event payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranslationFallbackEvent {
    /// Event timestamp (milliseconds since epoch).
    pub timestamp_ms: u128,
    /// Message key.
    pub key: String,
    /// Locale the caller asked for.
    pub requested_locale: LocaleCode,
    /// Fallback step that produced the text.
    pub resolution: FallbackResolution,
}

/// Placeholder mismatch event payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlaceholderMismatchEvent {
    /// Event timestamp (milliseconds since epoch).
    pub timestamp_ms: u128,
    /// Message key.
    pub key: String,
    /// Locale the caller asked for.
    pub locale: LocaleCode,
    /// Declared placeholders with no argument.
    pub missing: Vec<String>,
    /// Arguments with no declared placeholder.
    pub unexpected: Vec<String>,
    /// Policy in force when the mismatch was seen.
    pub policy: PlaceholderPolicy,
}

/// Localization diagnostic event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum L10nEvent {
    /// A key was served from a fallback.
    TranslationFallback(TranslationFallbackEvent),
    /// Arguments did not match a template.
    PlaceholderMismatch(PlaceholderMismatchEvent),
}

/// Inputs required to construct a fallback event.
pub struct TranslationFallbackParams {
    /// Message key.
    pub key: String,
    /// Locale the caller asked for.
    pub requested_locale: LocaleCode,
    /// Fallback step that produced the text.
    pub resolution: FallbackResolution,
}

/// Inputs required to construct a mismatch event.
pub struct PlaceholderMismatchParams {
    /// Message key.
    pub key: String,
    /// Locale the caller asked for.
    pub locale: LocaleCode,
    /// Declared placeholders with no argument.
    pub missing: Vec<String>,
    /// Arguments with no declared placeholder.
    pub unexpected: Vec<String>,
    /// Policy in force.
    pub policy: PlaceholderPolicy,
}

impl L10nEvent {
    /// Creates a fallback event with a consistent timestamp.
    #[must_use]
    pub fn translation_fallback(params: TranslationFallbackParams) -> Self {
        Self::TranslationFallback(TranslationFallbackEvent {
            timestamp_ms: now_ms(),
            key: params.key,
            requested_locale: params.requested_locale,
            resolution: params.resolution,
        })
    }

    /// Creates a mismatch event with a consistent timestamp.
    #[must_use]
    pub fn placeholder_mismatch(params: PlaceholderMismatchParams) -> Self {
        Self::PlaceholderMismatch(PlaceholderMismatchEvent {
            timestamp_ms: now_ms(),
            key: params.key,
            locale: params.locale,
            missing: params.missing,
            unexpected: params.unexpected,
            policy: params.policy,
        })
    }

    /// Returns the message key the event concerns.
    #[must_use]
    pub fn key(&self) -> &str {
        match self {
            Self::TranslationFallback(event) => &event.key,
            Self::PlaceholderMismatch(event) => &event.key,
        }
    }
}

/// Milliseconds since the Unix epoch, or zero if the clock is before it.
fn now_ms() -> u128 {
    SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default().as_millis()
}

// ============================================================================
// SECTION: Trait
// ============================================================================

/// Destination for localization diagnostics.
pub trait L10nEventSink: Send + Sync {
    /// Record an event. Sinks must not fail the caller.
    fn record(&self, event: &L10nEvent);
}

// ============================================================================
// SECTION: Sinks
// ============================================================================

/// Sink that drops every event.
pub struct NoopEventSink;

impl L10nEventSink for NoopEventSink {
    fn record(&self, _event: &L10nEvent) {}
}

/// Sink that logs JSON lines to stderr.
pub struct StderrEventSink;

impl L10nEventSink for StderrEventSink {
    fn record(&self, event: &L10nEvent) {
        if let Ok(payload) = serde_json::to_string(event) {
            let _ = writeln!(std::io::stderr(), "{payload}");
        }
    }
}

/// Sink that logs JSON lines to a file.
pub struct FileEventSink {
    /// File handle used for append-only logging.
    file: Mutex<std::fs::File>,
}

impl FileEventSink {
    /// Opens the event log file in append mode.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened.
    pub fn new(path: &Path) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            file: Mutex::new(file),
        })
    }
}

impl L10nEventSink for FileEventSink {
    fn record(&self, event: &L10nEvent) {
        if let Ok(payload) = serde_json::to_string(event)
            && let Ok(mut file) = self.file.lock()
        {
            let _ = writeln!(file, "{payload}");
            let _ = file.flush();
        }
    }
}

/// Sink that keeps events in memory for later inspection.
#[derive(Default)]
pub struct MemoryEventSink {
    /// Captured events in arrival order.
    events: Mutex<Vec<L10nEvent>>,
}

impl MemoryEventSink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of captured events.
    #[must_use]
    pub fn events(&self) -> Vec<L10nEvent> {
        self.events.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }
}

impl L10nEventSink for MemoryEventSink {
    fn record(&self, event: &L10nEvent) {
        self.events.lock().unwrap_or_else(PoisonError::into_inner).push(event.clone());
    }
}
