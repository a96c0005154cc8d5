// crates/storefront-locale-core/src/catalog.rs
// ============================================================================
// Module: Message Catalog
// Description: Immutable (locale, key) -> template storage with validation.
// Purpose: Build the catalog once, reject defects up front, then serve reads.
// Dependencies: crate::{locale, template}, thiserror
// ============================================================================

//! ## Overview
//! Catalog storage sits behind the [`MessageCatalog`] trait so the
//! translator does not care where templates live. [`StaticCatalog`] is the
//! in-memory implementation assembled by [`CatalogBuilder`].
//!
//! ## Invariants
//! - Keys are dot-separated segments of `[A-Za-z0-9_]`.
//! - Templates are non-empty, so a defined key never translates to `""`.
//! - `(locale, key)` pairs are unique.
//! - Every key present in any locale is present in [`DEFAULT_LOCALE`].
//! - A translated template declares the same placeholders as its default.
//! - A built catalog is never mutated.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::collections::HashMap;
use std::collections::hash_map::Entry;

use thiserror::Error;

use crate::locale::DEFAULT_LOCALE;
use crate::locale::LocaleCode;
use crate::template::Template;
use crate::template::TemplateError;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Catalog construction defects.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// Key is not a dot-separated identifier.
    #[error("invalid message key '{key}' in locale '{locale}'")]
    InvalidKey {
        /// Locale holding the entry.
        locale: LocaleCode,
        /// Offending key.
        key: String,
    },
    /// Template text is empty.
    #[error("empty template for key '{key}' in locale '{locale}'")]
    EmptyTemplate {
        /// Locale holding the entry.
        locale: LocaleCode,
        /// Entry key.
        key: String,
    },
    /// The same key appears twice in one locale.
    #[error("duplicate key '{key}' in locale '{locale}'")]
    DuplicateKey {
        /// Locale holding the entries.
        locale: LocaleCode,
        /// Duplicated key.
        key: String,
    },
    /// Template syntax is malformed.
    #[error("invalid template for key '{key}' in locale '{locale}': {source}")]
    InvalidTemplate {
        /// Locale holding the entry.
        locale: LocaleCode,
        /// Entry key.
        key: String,
        /// Syntax error.
        source: TemplateError,
    },
    /// A translated key has no default-locale entry.
    #[error("key '{key}' in locale '{locale}' has no default-locale entry")]
    MissingDefault {
        /// Locale holding the orphan entry.
        locale: LocaleCode,
        /// Orphan key.
        key: String,
    },
    /// A translation declares different placeholders than the default.
    #[error("placeholder set for key '{key}' in locale '{locale}' differs from the default locale")]
    PlaceholderParity {
        /// Locale holding the translation.
        locale: LocaleCode,
        /// Entry key.
        key: String,
    },
}

// ============================================================================
// SECTION: Trait
// ============================================================================

/// Read-only template storage.
pub trait MessageCatalog: Send + Sync {
    /// Returns the template stored for `(locale, key)`, without fallback.
    fn template(&self, locale: LocaleCode, key: &str) -> Option<&Template>;

    /// Returns the keys stored for `locale`, sorted.
    fn keys(&self, locale: LocaleCode) -> Vec<&str>;
}

// ============================================================================
// SECTION: Static Catalog
// ============================================================================

/// In-memory catalog built once at startup.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    /// Templates per locale.
    locales: BTreeMap<LocaleCode, HashMap<String, Template>>,
}

impl StaticCatalog {
    /// Starts a new [`CatalogBuilder`].
    #[must_use]
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::default()
    }

    /// Number of entries stored for `locale`.
    #[must_use]
    pub fn len(&self, locale: LocaleCode) -> usize {
        self.locales.get(&locale).map_or(0, HashMap::len)
    }

    /// Whether the catalog holds no entries at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.locales.values().all(HashMap::is_empty)
    }

    /// Default-locale keys that `locale` does not translate, sorted.
    #[must_use]
    pub fn missing_keys(&self, locale: LocaleCode) -> Vec<&str> {
        let translated = self.locales.get(&locale);
        let mut missing: Vec<&str> = self
            .locales
            .get(&DEFAULT_LOCALE)
            .into_iter()
            .flat_map(HashMap::keys)
            .filter(|key| translated.is_none_or(|entries| !entries.contains_key(*key)))
            .map(String::as_str)
            .collect();
        missing.sort_unstable();
        missing
    }
}

impl MessageCatalog for StaticCatalog {
    fn template(&self, locale: LocaleCode, key: &str) -> Option<&Template> {
        self.locales.get(&locale)?.get(key)
    }

    fn keys(&self, locale: LocaleCode) -> Vec<&str> {
        let mut keys: Vec<&str> = self
            .locales
            .get(&locale)
            .into_iter()
            .flat_map(HashMap::keys)
            .map(String::as_str)
            .collect();
        keys.sort_unstable();
        keys
    }
}

// ============================================================================
// SECTION: Builder
// ============================================================================

/// Collects raw entries and validates them into a [`StaticCatalog`].
#[derive(Debug, Clone, Default)]
pub struct CatalogBuilder {
    /// Raw entries in insertion order.
    entries: Vec<(LocaleCode, String, String)>,
}

impl CatalogBuilder {
    /// Adds one entry.
    #[must_use]
    pub fn entry(
        mut self,
        locale: LocaleCode,
        key: impl Into<String>,
        template: impl Into<String>,
    ) -> Self {
        self.entries.push((locale, key.into(), template.into()));
        self
    }

    /// Adds a table of entries for `locale`.
    #[must_use]
    pub fn locale<K, V>(mut self, locale: LocaleCode, entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.entries
            .extend(entries.into_iter().map(|(key, template)| (locale, key.into(), template.into())));
        self
    }

    /// Validates all entries and builds the catalog.
    ///
    /// # Errors
    ///
    /// Returns the first [`CatalogError`] found, checking entries in insertion
    /// order and then cross-locale invariants in locale order.
    pub fn build(self) -> Result<StaticCatalog, CatalogError> {
        let mut locales: BTreeMap<LocaleCode, HashMap<String, Template>> = BTreeMap::new();
        for (locale, key, source) in self.entries {
            if !is_valid_key(&key) {
                return Err(CatalogError::InvalidKey {
                    locale,
                    key,
                });
            }
            if source.is_empty() {
                return Err(CatalogError::EmptyTemplate {
                    locale,
                    key,
                });
            }
            let template = match Template::parse(source) {
                Ok(template) => template,
                Err(source) => {
                    return Err(CatalogError::InvalidTemplate {
                        locale,
                        key,
                        source,
                    });
                }
            };
            match locales.entry(locale).or_default().entry(key) {
                Entry::Occupied(entry) => {
                    return Err(CatalogError::DuplicateKey {
                        locale,
                        key: entry.key().clone(),
                    });
                }
                Entry::Vacant(entry) => {
                    entry.insert(template);
                }
            }
        }

        let empty = HashMap::new();
        let defaults = locales.get(&DEFAULT_LOCALE).unwrap_or(&empty);
        for (locale, entries) in &locales {
            if *locale == DEFAULT_LOCALE {
                continue;
            }
            let mut sorted: Vec<(&String, &Template)> = entries.iter().collect();
            sorted.sort_unstable_by(|left, right| left.0.cmp(right.0));
            for (key, template) in sorted {
                let Some(default) = defaults.get(key) else {
                    return Err(CatalogError::MissingDefault {
                        locale: *locale,
                        key: key.clone(),
                    });
                };
                if template.placeholders() != default.placeholders() {
                    return Err(CatalogError::PlaceholderParity {
                        locale: *locale,
                        key: key.clone(),
                    });
                }
            }
        }

        Ok(StaticCatalog {
            locales,
        })
    }
}

/// Checks a key is one or more dot-separated `[A-Za-z0-9_]+` segments.
fn is_valid_key(key: &str) -> bool {
    !key.is_empty()
        && key.split('.').all(|segment| {
            !segment.is_empty()
                && segment.bytes().all(|byte| byte.is_ascii_alphanumeric() || byte == b'_')
        })
}
