// crates/storefront-locale-config/src/config.rs
// ============================================================================
// Module: Storefront Locale Configuration
// Description: Configuration loading and validation for the localization engine.
// Purpose: Provide strict config parsing with hard limits and safe defaults.
// Dependencies: storefront-locale-core, serde, toml
// ============================================================================

//! ## Overview
//! Configuration is loaded from a TOML file with strict size and path limits.
//! The file is optional: with no explicit path and no
//! [`CONFIG_ENV_VAR`] override, built-in defaults apply. A file that is named
//! but unreadable or invalid fails closed.
//!
//! ## Invariants
//! - Unknown tables and fields are rejected.
//! - `formatting.default_decimals` never exceeds [`MAX_DECIMALS`].
//! - `diagnostics.path` is present exactly when `diagnostics.sink = "file"`.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::env;
use std::fs;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;

use serde::Deserialize;
use serde::Serialize;
use storefront_locale_core::DEFAULT_DECIMALS;
use storefront_locale_core::FileEventSink;
use storefront_locale_core::L10nEventSink;
use storefront_locale_core::MAX_DECIMALS;
use storefront_locale_core::MessageCatalog;
use storefront_locale_core::NoopEventSink;
use storefront_locale_core::PlaceholderPolicy;
use storefront_locale_core::StderrEventSink;
use storefront_locale_core::Translator;
use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Environment variable used to override the config path.
pub const CONFIG_ENV_VAR: &str = "STOREFRONT_LOCALE_CONFIG";
/// Maximum configuration file size in bytes.
pub(crate) const MAX_CONFIG_FILE_SIZE: usize = 64 * 1024;
/// Maximum length of a single path component.
pub(crate) const MAX_PATH_COMPONENT_LENGTH: usize = 255;
/// Maximum total path length.
pub(crate) const MAX_TOTAL_PATH_LENGTH: usize = 4096;

// ============================================================================
// SECTION: Configuration Types
// ============================================================================

/// Top-level localization configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct L10nConfig {
    /// Translation behavior.
    #[serde(default)]
    pub translation: TranslationConfig,
    /// Number formatting defaults.
    #[serde(default)]
    pub formatting: FormattingConfig,
    /// Diagnostic event output.
    #[serde(default)]
    pub diagnostics: DiagnosticsConfig,
}

/// Translation behavior.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct TranslationConfig {
    /// How argument/placeholder mismatches are handled.
    #[serde(default)]
    pub placeholder_policy: PlaceholderPolicy,
}

/// Number formatting defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct FormattingConfig {
    /// Fraction digits used when a caller does not pass any.
    #[serde(default = "default_decimals")]
    pub default_decimals: usize,
}

impl Default for FormattingConfig {
    fn default() -> Self {
        Self {
            default_decimals: default_decimals(),
        }
    }
}

impl FormattingConfig {
    /// Validates formatting defaults.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.default_decimals > MAX_DECIMALS {
            return Err(ConfigError::Invalid(format!(
                "formatting.default_decimals must be at most {MAX_DECIMALS}"
            )));
        }
        Ok(())
    }
}

/// Diagnostic sink kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticsSinkKind {
    /// Drop all events.
    #[default]
    None,
    /// JSON lines on stderr.
    Stderr,
    /// Append-only JSON lines in a file.
    File,
}

/// Diagnostic event output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct DiagnosticsConfig {
    /// Where events go.
    #[serde(default)]
    pub sink: DiagnosticsSinkKind,
    /// Event log path (JSON lines), required for the file sink.
    #[serde(default)]
    pub path: Option<String>,
}

impl DiagnosticsConfig {
    /// Validates the sink selection and its path.
    fn validate(&self) -> Result<(), ConfigError> {
        match (self.sink, &self.path) {
            (DiagnosticsSinkKind::File, Some(path)) => validate_path_string("diagnostics.path", path),
            (DiagnosticsSinkKind::File, None) => Err(ConfigError::Invalid(
                "diagnostics.path is required when diagnostics.sink = \"file\"".to_string(),
            )),
            (_, Some(_)) => Err(ConfigError::Invalid(
                "diagnostics.path is only allowed when diagnostics.sink = \"file\"".to_string(),
            )),
            (_, None) => Ok(()),
        }
    }

    /// Opens the configured sink.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] when the event log cannot be opened.
    pub fn build_sink(&self) -> Result<Arc<dyn L10nEventSink>, ConfigError> {
        match (self.sink, &self.path) {
            (DiagnosticsSinkKind::None, _) => Ok(Arc::new(NoopEventSink)),
            (DiagnosticsSinkKind::Stderr, _) => Ok(Arc::new(StderrEventSink)),
            (DiagnosticsSinkKind::File, Some(path)) => {
                let sink = FileEventSink::new(Path::new(path.trim()))
                    .map_err(|err| ConfigError::Io(err.to_string()))?;
                Ok(Arc::new(sink))
            }
            (DiagnosticsSinkKind::File, None) => Err(ConfigError::Invalid(
                "diagnostics.path is required when diagnostics.sink = \"file\"".to_string(),
            )),
        }
    }
}

impl L10nConfig {
    /// Loads configuration using the default resolution rules.
    ///
    /// Resolution order is `path`, then [`CONFIG_ENV_VAR`], then built-in
    /// defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a named file cannot be loaded or fails
    /// validation.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(resolved) = resolve_path(path)? else {
            return Ok(Self::default());
        };
        validate_path(&resolved)?;
        let bytes = fs::read(&resolved).map_err(|err| ConfigError::Io(err.to_string()))?;
        if bytes.len() > MAX_CONFIG_FILE_SIZE {
            return Err(ConfigError::Invalid("config file exceeds size limit".to_string()));
        }
        let content = std::str::from_utf8(&bytes)
            .map_err(|_| ConfigError::Invalid("config file must be utf-8".to_string()))?;
        Self::from_toml_str(content)
    }

    /// Parses and validates configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when parsing or validation fails.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self =
            toml::from_str(content).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration for internal consistency.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when configuration is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.formatting.validate()?;
        self.diagnostics.validate()?;
        Ok(())
    }

    /// Builds a translator over `catalog` with the configured policy and sink.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the diagnostics sink cannot be opened.
    pub fn build_translator(
        &self,
        catalog: Arc<dyn MessageCatalog>,
    ) -> Result<Translator, ConfigError> {
        let sink = self.diagnostics.build_sink()?;
        Ok(Translator::new(catalog)
            .with_policy(self.translation.placeholder_policy)
            .with_event_sink(sink))
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Configuration loading or validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O failure while reading configuration.
    #[error("config io error: {0}")]
    Io(String),
    /// TOML parsing error.
    #[error("config parse error: {0}")]
    Parse(String),
    /// Invalid configuration data.
    #[error("invalid config: {0}")]
    Invalid(String),
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Default fraction digits for number formatting.
const fn default_decimals() -> usize {
    DEFAULT_DECIMALS
}

/// Resolves the config path from the caller or the environment.
fn resolve_path(path: Option<&Path>) -> Result<Option<PathBuf>, ConfigError> {
    if let Some(path) = path {
        return Ok(Some(path.to_path_buf()));
    }
    match env::var(CONFIG_ENV_VAR) {
        Ok(env_path) if !env_path.trim().is_empty() => {
            if env_path.len() > MAX_TOTAL_PATH_LENGTH {
                return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
            }
            Ok(Some(PathBuf::from(env_path)))
        }
        _ => Ok(None),
    }
}

/// Validates the resolved path against length limits.
fn validate_path(path: &Path) -> Result<(), ConfigError> {
    let text = path.to_string_lossy();
    if text.len() > MAX_TOTAL_PATH_LENGTH {
        return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
    }
    for component in path.components() {
        let value = component.as_os_str().to_string_lossy();
        if value.len() > MAX_PATH_COMPONENT_LENGTH {
            return Err(ConfigError::Invalid("config path component too long".to_string()));
        }
    }
    Ok(())
}

/// Validates a path string against length constraints.
fn validate_path_string(field: &str, value: &str) -> Result<(), ConfigError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::Invalid(format!("{field} must be non-empty")));
    }
    if trimmed.len() > MAX_TOTAL_PATH_LENGTH {
        return Err(ConfigError::Invalid(format!("{field} exceeds max length")));
    }
    for component in Path::new(trimmed).components() {
        if component.as_os_str().len() > MAX_PATH_COMPONENT_LENGTH {
            return Err(ConfigError::Invalid(format!("{field} path component too long")));
        }
    }
    Ok(())
}
