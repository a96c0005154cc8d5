// crates/storefront-locale-core/src/translate.rs
// ============================================================================
// Module: Translation
// Description: Key resolution with locale fallback and checked interpolation.
// Purpose: Turn (key, locale, args) into display text without crashing callers.
// Dependencies: crate::{catalog, diagnostics, locale, template}, serde, thiserror
// ============================================================================

//! ## Overview
//! [`Translator`] resolves a key against its catalog in the requested locale,
//! then the default locale, then echoes the key. Arguments are validated
//! against the placeholders the resolved template declares.
//!
//! ## Invariants
//! - Lookup order is requested locale, [`DEFAULT_LOCALE`], raw key.
//! - With no arguments the template text is returned verbatim, escapes included.
//! - [`Translator::translate`] never fails; mismatches degrade to the lenient
//!   rendering and are reported through the event sink.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::collections::BTreeSet;
use std::sync::Arc;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use crate::catalog::MessageCatalog;
use crate::diagnostics::FallbackResolution;
use crate::diagnostics::L10nEvent;
use crate::diagnostics::L10nEventSink;
use crate::diagnostics::NoopEventSink;
use crate::diagnostics::PlaceholderMismatchParams;
use crate::diagnostics::TranslationFallbackParams;
use crate::locale::DEFAULT_LOCALE;
use crate::locale::LocaleCode;
use crate::template::Template;

// ============================================================================
// SECTION: Types
// ============================================================================

/// How argument/placeholder mismatches are handled.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaceholderPolicy {
    /// Mismatches fail with [`TranslateError::PlaceholderMismatch`].
    #[default]
    Strict,
    /// Unfilled placeholders stay as `{name}`; extra arguments are ignored.
    Lenient,
}

/// Named values substituted into a template.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageArgs {
    /// Placeholder name to preformatted value.
    values: BTreeMap<String, String>,
}

impl MessageArgs {
    /// Creates an empty argument set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `name = value`, replacing an earlier value for `name`.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    /// Inserts `name = value`, replacing an earlier value for `name`.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    /// Returns the value for `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Whether no arguments were supplied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of arguments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Argument names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }
}

impl<K, V> FromIterator<(K, V)> for MessageArgs
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(|(name, value)| (name.into(), value.into())).collect(),
        }
    }
}

/// Where a key's template came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution<'a> {
    /// Found in the requested locale.
    Requested(&'a Template),
    /// Found only in [`DEFAULT_LOCALE`].
    DefaultLocale(&'a Template),
    /// Missing everywhere; the key is echoed.
    RawKey,
}

/// Translation failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranslateError {
    /// Arguments do not match the template's declared placeholders.
    #[error(
        "placeholder mismatch for key '{key}' in locale '{locale}' (missing: [{}], unexpected: \
         [{}])",
        .missing.join(", "),
        .unexpected.join(", ")
    )]
    PlaceholderMismatch {
        /// Message key.
        key: String,
        /// Locale requested by the caller.
        locale: LocaleCode,
        /// Declared placeholders with no argument.
        missing: Vec<String>,
        /// Arguments with no declared placeholder.
        unexpected: Vec<String>,
    },
}

/// Text rendered leniently plus any strict-mode violation.
struct Rendered {
    /// Lenient rendering, always usable for display.
    text: String,
    /// Mismatch detected while rendering.
    mismatch: Option<TranslateError>,
}

// ============================================================================
// SECTION: Translator
// ============================================================================

/// Resolves message keys against a catalog.
///
/// # Invariants
/// - Immutable after construction; cheap to clone and share across threads.
#[derive(Clone)]
pub struct Translator {
    /// Template storage.
    catalog: Arc<dyn MessageCatalog>,
    /// Mismatch handling.
    policy: PlaceholderPolicy,
    /// Diagnostic event destination.
    sink: Arc<dyn L10nEventSink>,
}

impl Translator {
    /// Creates a strict translator with no diagnostics.
    #[must_use]
    pub fn new(catalog: Arc<dyn MessageCatalog>) -> Self {
        Self {
            catalog,
            policy: PlaceholderPolicy::default(),
            sink: Arc::new(NoopEventSink),
        }
    }

    /// Replaces the placeholder policy.
    #[must_use]
    pub fn with_policy(mut self, policy: PlaceholderPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Replaces the diagnostic event sink.
    #[must_use]
    pub fn with_event_sink(mut self, sink: Arc<dyn L10nEventSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Returns the placeholder policy.
    #[must_use]
    pub const fn policy(&self) -> PlaceholderPolicy {
        self.policy
    }

    /// Returns the backing catalog.
    #[must_use]
    pub fn catalog(&self) -> &dyn MessageCatalog {
        self.catalog.as_ref()
    }

    /// Finds the template for `key`, applying the locale fallback chain.
    #[must_use]
    pub fn resolve(&self, key: &str, locale: LocaleCode) -> Resolution<'_> {
        if let Some(template) = self.catalog.template(locale, key) {
            return Resolution::Requested(template);
        }
        if locale != DEFAULT_LOCALE
            && let Some(template) = self.catalog.template(DEFAULT_LOCALE, key)
        {
            return Resolution::DefaultLocale(template);
        }
        Resolution::RawKey
    }

    /// Translates `key`, honoring the placeholder policy.
    ///
    /// # Errors
    ///
    /// Returns [`TranslateError::PlaceholderMismatch`] under
    /// [`PlaceholderPolicy::Strict`] when `args` does not match the template.
    pub fn try_translate(
        &self,
        key: &str,
        locale: LocaleCode,
        args: &MessageArgs,
    ) -> Result<String, TranslateError> {
        let rendered = self.render(key, locale, args);
        match (self.policy, rendered.mismatch) {
            (PlaceholderPolicy::Strict, Some(error)) => Err(error),
            _ => Ok(rendered.text),
        }
    }

    /// Translates `key` and always returns displayable text.
    ///
    /// Mismatches render leniently, leaving `{name}` markers visible.
    #[must_use]
    pub fn translate(&self, key: &str, locale: LocaleCode, args: &MessageArgs) -> String {
        self.render(key, locale, args).text
    }

    /// Resolves, validates, and renders one message.
    fn render(&self, key: &str, locale: LocaleCode, args: &MessageArgs) -> Rendered {
        let template = match self.resolve(key, locale) {
            Resolution::Requested(template) => template,
            Resolution::DefaultLocale(template) => {
                self.record_fallback(key, locale, FallbackResolution::DefaultLocale);
                template
            }
            Resolution::RawKey => {
                self.record_fallback(key, locale, FallbackResolution::RawKey);
                return Rendered {
                    text: key.to_string(),
                    mismatch: None,
                };
            }
        };
        if args.is_empty() {
            return Rendered {
                text: template.source().to_string(),
                mismatch: None,
            };
        }

        let declared = template.placeholders();
        let supplied: BTreeSet<&str> = args.names().collect();
        let missing: Vec<String> = declared.difference(&supplied).map(ToString::to_string).collect();
        let unexpected: Vec<String> =
            supplied.difference(&declared).map(ToString::to_string).collect();
        let mismatch = if missing.is_empty() && unexpected.is_empty() {
            None
        } else {
            self.sink.record(&L10nEvent::placeholder_mismatch(PlaceholderMismatchParams {
                key: key.to_string(),
                locale,
                missing: missing.clone(),
                unexpected: unexpected.clone(),
                policy: self.policy,
            }));
            Some(TranslateError::PlaceholderMismatch {
                key: key.to_string(),
                locale,
                missing,
                unexpected,
            })
        };
        Rendered {
            text: template.render(|name| args.get(name)),
            mismatch,
        }
    }

    /// Reports a fallback step to the event sink.
    fn record_fallback(&self, key: &str, locale: LocaleCode, resolution: FallbackResolution) {
        self.sink.record(&L10nEvent::translation_fallback(TranslationFallbackParams {
            key: key.to_string(),
            requested_locale: locale,
            resolution,
        }));
    }
}

// ============================================================================
// SECTION: Macro
// ============================================================================

/// Translates a key through a [`Localizer`](crate::Localizer) with named
/// arguments.
///
/// ```
/// use std::sync::Arc;
///
/// use storefront_locale_core::LocaleCode;
/// use storefront_locale_core::Localizer;
/// use storefront_locale_core::StaticCatalog;
/// use storefront_locale_core::Translator;
/// use storefront_locale_core::t;
///
/// let catalog = StaticCatalog::builder()
///     .entry(LocaleCode::En, "cart.count", "{count} items")
///     .build()
///     .unwrap();
/// let translator = Translator::new(Arc::new(catalog));
/// let localizer = Localizer::new(&translator, LocaleCode::En);
/// assert_eq!(t!(localizer, "cart.count", count = 3), "3 items");
/// ```
#[macro_export]
macro_rules! t {
    ($localizer:expr, $key:literal $(, $name:ident = $value:expr )* $(,)?) => {{
        let args = $crate::MessageArgs::new()
            $( .with(stringify!($name), $value.to_string()) )*;
        $localizer.text_with($key, &args)
    }};
}
