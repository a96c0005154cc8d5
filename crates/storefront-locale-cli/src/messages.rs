// crates/storefront-locale-cli/src/messages.rs
// ============================================================================
// Module: CLI Messages
// Description: Localized message catalog for the storefront-locale CLI.
// Purpose: Route all CLI output through the localization engine.
// Dependencies: storefront-locale-core
// ============================================================================

//! ## Overview
//! The CLI keeps its own `en`/`es` catalog, separate from the storefront
//! catalog it inspects. Output is rendered with [`t!`](storefront_locale_core::t)
//! through a [`Localizer`] bound to the CLI language.
//!
//! ## Invariants
//! - Every Spanish entry has an English counterpart with the same placeholders.
//! - Missing keys fall back to English, then to the key itself.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Arc;

use storefront_locale_core::CatalogError;
use storefront_locale_core::DEFAULT_LOCALE;
use storefront_locale_core::LocaleCode;
use storefront_locale_core::Localizer;
use storefront_locale_core::PlaceholderPolicy;
use storefront_locale_core::StaticCatalog;
use storefront_locale_core::Translator;

// ============================================================================
// SECTION: Catalog
// ============================================================================

/// English CLI messages.
pub const CLI_MESSAGES_EN: &[(&str, &str)] = &[
    ("main.version", "storefront-locale {version}"),
    ("output.stream.stdout", "stdout"),
    ("output.stream.stderr", "stderr"),
    ("output.write_failed", "Failed to write to {stream}: {error}"),
    ("output.json_failed", "Failed to serialize output: {error}"),
    ("i18n.lang.invalid_env", "Invalid {env} value '{value}'. Expected one of: {expected}."),
    ("config.load_failed", "Failed to load config: {error}"),
    ("config.sink_failed", "Failed to open diagnostics sink: {error}"),
    ("config.validate.ok", "Config valid."),
    ("config.validate.summary", "placeholder_policy={policy} default_decimals={decimals} sink={sink}"),
    ("catalog.build_failed", "Failed to build message catalog: {error}"),
    ("locales.entry", "{code}  {name}"),
    ("locales.entry_default", "{code}  {name} (default)"),
    ("resolve.summary", "Locale: {locale} (source: {source}, persist: {persist})"),
    ("translate.failed", "Translation failed: {error}"),
    ("translate.arg_invalid", "Invalid argument '{arg}'. Expected name=value."),
    ("format.failed", "Cannot format {value}: {error}"),
    ("parse.failed", "Cannot parse '{input}' for locale {locale}: {error}"),
    ("date.invalid", "Invalid date '{input}'. Expected YYYY-MM-DD."),
    ("demo.line", "{label}: {value}"),
];

/// Spanish CLI messages.
pub const CLI_MESSAGES_ES: &[(&str, &str)] = &[
    ("main.version", "storefront-locale {version}"),
    ("output.stream.stdout", "salida estandar"),
    ("output.stream.stderr", "salida de errores"),
    ("output.write_failed", "No se pudo escribir en {stream}: {error}"),
    ("output.json_failed", "No se pudo serializar la salida: {error}"),
    ("i18n.lang.invalid_env", "Valor de {env} invalido '{value}'. Se esperaba uno de: {expected}."),
    ("config.load_failed", "No se pudo cargar la configuracion: {error}"),
    ("config.sink_failed", "No se pudo abrir el destino de diagnosticos: {error}"),
    ("config.validate.ok", "Configuracion valida."),
    ("config.validate.summary", "placeholder_policy={policy} default_decimals={decimals} sink={sink}"),
    ("catalog.build_failed", "No se pudo construir el catalogo de mensajes: {error}"),
    ("locales.entry", "{code}  {name}"),
    ("locales.entry_default", "{code}  {name} (predeterminado)"),
    ("resolve.summary", "Idioma: {locale} (origen: {source}, guardar: {persist})"),
    ("translate.failed", "La traduccion fallo: {error}"),
    ("translate.arg_invalid", "Argumento invalido '{arg}'. Se esperaba nombre=valor."),
    ("format.failed", "No se puede formatear {value}: {error}"),
    ("parse.failed", "No se puede interpretar '{input}' para el idioma {locale}: {error}"),
    ("date.invalid", "Fecha invalida '{input}'. Se esperaba AAAA-MM-DD."),
    ("demo.line", "{label}: {value}"),
];

/// Builds the validated CLI message catalog.
///
/// # Errors
///
/// Returns [`CatalogError`] if the static tables are inconsistent.
pub fn cli_catalog() -> Result<StaticCatalog, CatalogError> {
    StaticCatalog::builder()
        .locale(LocaleCode::En, CLI_MESSAGES_EN.iter().copied())
        .locale(LocaleCode::Es, CLI_MESSAGES_ES.iter().copied())
        .build()
}

// ============================================================================
// SECTION: Messages
// ============================================================================

/// CLI translator bound to the output language.
#[derive(Clone)]
pub struct CliMessages {
    /// Lenient translator over the CLI catalog.
    translator: Translator,
    /// Output language.
    locale: LocaleCode,
}

impl CliMessages {
    /// Builds CLI messages in [`DEFAULT_LOCALE`].
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] if the CLI catalog fails validation.
    pub fn new() -> Result<Self, CatalogError> {
        let translator =
            Translator::new(Arc::new(cli_catalog()?)).with_policy(PlaceholderPolicy::Lenient);
        Ok(Self {
            translator,
            locale: DEFAULT_LOCALE,
        })
    }

    /// Switches the output language.
    #[must_use]
    pub fn with_locale(mut self, locale: LocaleCode) -> Self {
        self.locale = locale;
        self
    }

    /// Returns the output language.
    #[must_use]
    pub const fn locale(&self) -> LocaleCode {
        self.locale
    }

    /// Returns a localizer for rendering output lines.
    #[must_use]
    pub const fn localizer(&self) -> Localizer<'_> {
        Localizer::new(&self.translator, self.locale)
    }
}

/// Parses a CLI language such as `es` or `es-MX`.
///
/// Unlike request hints, an unsupported CLI language is reported instead of
/// silently replaced by the default.
#[must_use]
pub fn parse_lang(value: &str) -> Option<LocaleCode> {
    value.trim().parse().ok()
}

/// Lists accepted CLI language codes, comma separated.
#[must_use]
pub fn expected_langs() -> String {
    storefront_locale_core::SUPPORTED_LOCALES
        .iter()
        .map(|locale| locale.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
