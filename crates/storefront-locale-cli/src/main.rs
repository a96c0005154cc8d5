// crates/storefront-locale-cli/src/main.rs
// ============================================================================
// Module: Storefront Locale CLI Entry Point
// Description: Command dispatcher for locale resolution, translation, and formatting.
// Purpose: Provide a localized CLI over the storefront localization engine.
// Dependencies: clap, serde, storefront-locale-config, storefront-locale-core, thiserror, time.
// ============================================================================

//! ## Overview
//! The storefront-locale CLI exposes the localization engine for inspection
//! and scripting: locale resolution, catalog translation, number/currency/date
//! formatting and parsing, and the locale demo. Every user-facing line is
//! rendered through the CLI's own catalog in the language chosen by `--lang`
//! or `STOREFRONT_LOCALE_LANG`.

// ============================================================================
// SECTION: Modules
// ============================================================================

#[cfg(test)]
mod main_tests;

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt::Display;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::ArgAction;
use clap::Args;
use clap::CommandFactory;
use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;
use serde::Serialize;
use storefront_locale_cli::messages::CliMessages;
use storefront_locale_cli::messages::expected_langs;
use storefront_locale_cli::messages::parse_lang;
use storefront_locale_config::DiagnosticsSinkKind;
use storefront_locale_config::L10nConfig;
use storefront_locale_core::FormatError;
use storefront_locale_core::LocaleCode;
use storefront_locale_core::LocaleHints;
use storefront_locale_core::LocaleSource;
use storefront_locale_core::Localizer;
use storefront_locale_core::MessageArgs;
use storefront_locale_core::PlaceholderPolicy;
use storefront_locale_core::Translator;
use storefront_locale_core::format_currency;
use storefront_locale_core::format_date;
use storefront_locale_core::format_number;
use storefront_locale_core::normalize;
use storefront_locale_core::parse_currency;
use storefront_locale_core::parse_number;
use storefront_locale_core::resolve_request_locale;
use storefront_locale_core::storefront_catalog;
use storefront_locale_core::t;
use thiserror::Error;
use time::Date;
use time::macros::format_description;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Environment variable for CLI locale selection.
const LANG_ENV: &str = "STOREFRONT_LOCALE_LANG";

// ============================================================================
// SECTION: CLI Types
// ============================================================================

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(name = "storefront-locale", disable_help_subcommand = true, disable_version_flag = true)]
struct Cli {
    /// Print version information and exit.
    #[arg(long = "version", action = ArgAction::SetTrue, global = true)]
    show_version: bool,
    /// Preferred output language (overrides `STOREFRONT_LOCALE_LANG`).
    #[arg(long, value_enum, value_name = "LANG", global = true)]
    lang: Option<LangArg>,
    /// Selected subcommand to execute.
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Supported CLI subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// List supported locales.
    Locales(LocalesCommand),
    /// Select a request locale from query, session, and header hints.
    Resolve(ResolveCommand),
    /// Translate a storefront message key.
    Translate(TranslateCommand),
    /// Locale-aware formatting utilities.
    Format {
        /// Selected format subcommand.
        #[command(subcommand)]
        command: FormatCommand,
    },
    /// Locale-aware parsing utilities.
    Parse {
        /// Selected parse subcommand.
        #[command(subcommand)]
        command: ParseCommand,
    },
    /// Render the locale formatting demo.
    Demo(DemoCommand),
    /// Configuration utilities.
    Config {
        /// Selected config subcommand.
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

/// CLI output languages.
#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
enum LangArg {
    /// English.
    En,
    /// Spanish.
    Es,
}

impl From<LangArg> for LocaleCode {
    fn from(value: LangArg) -> Self {
        match value {
            LangArg::En => Self::En,
            LangArg::Es => Self::Es,
        }
    }
}

/// Output formats for CLI commands.
#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// JSON output.
    Json,
}

/// Placeholder policy overrides.
#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
enum PolicyArg {
    /// Reject argument/placeholder mismatches.
    Strict,
    /// Leave unfilled placeholders visible.
    Lenient,
}

impl From<PolicyArg> for PlaceholderPolicy {
    fn from(value: PolicyArg) -> Self {
        match value {
            PolicyArg::Strict => Self::Strict,
            PolicyArg::Lenient => Self::Lenient,
        }
    }
}

/// Locale hint shared by engine commands.
#[derive(Args, Debug)]
struct LocaleArgs {
    /// Locale hint; unsupported values fall back to `en`.
    #[arg(long, value_name = "LOCALE")]
    locale: Option<String>,
}

impl LocaleArgs {
    /// Normalizes the hint into a supported locale.
    fn resolve(&self) -> LocaleCode {
        normalize(self.locale.as_deref())
    }
}

/// Output format selection.
#[derive(Args, Debug)]
struct OutputArgs {
    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

/// Config file selection.
#[derive(Args, Debug)]
struct ConfigArgs {
    /// Config file path (overrides `STOREFRONT_LOCALE_CONFIG`).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

/// Arguments for `locales`.
#[derive(Args, Debug)]
struct LocalesCommand {
    /// Locale marked active in the listing.
    #[command(flatten)]
    locale: LocaleArgs,
    /// Output settings.
    #[command(flatten)]
    output: OutputArgs,
}

/// Arguments for `resolve`.
#[derive(Args, Debug)]
struct ResolveCommand {
    /// Explicit `lang` query parameter value.
    #[arg(long, value_name = "VALUE")]
    query: Option<String>,
    /// Locale stored in the session.
    #[arg(long, value_name = "VALUE")]
    session: Option<String>,
    /// Raw `Accept-Language` header value.
    #[arg(long = "accept-language", value_name = "HEADER")]
    accept_language: Option<String>,
    /// Output settings.
    #[command(flatten)]
    output: OutputArgs,
}

/// Arguments for `translate`.
#[derive(Args, Debug)]
struct TranslateCommand {
    /// Message key.
    #[arg(value_name = "KEY")]
    key: String,
    /// Target locale.
    #[command(flatten)]
    locale: LocaleArgs,
    /// Named argument, repeatable.
    #[arg(long = "arg", value_name = "NAME=VALUE")]
    args: Vec<String>,
    /// Placeholder policy override.
    #[arg(long, value_enum)]
    policy: Option<PolicyArg>,
    /// Config file selection.
    #[command(flatten)]
    config: ConfigArgs,
    /// Output settings.
    #[command(flatten)]
    output: OutputArgs,
}

/// Format subcommands.
#[derive(Subcommand, Debug)]
enum FormatCommand {
    /// Format a number with locale separators.
    Number(FormatNumberCommand),
    /// Format a currency amount.
    Currency(FormatCurrencyCommand),
    /// Format an ISO date (`YYYY-MM-DD`).
    Date(FormatDateCommand),
}

/// Arguments for `format number`.
#[derive(Args, Debug)]
struct FormatNumberCommand {
    /// Value to format.
    #[arg(value_name = "VALUE", allow_negative_numbers = true)]
    value: f64,
    /// Fraction digits (defaults to `formatting.default_decimals`).
    #[arg(long, value_name = "N")]
    decimals: Option<usize>,
    /// Target locale.
    #[command(flatten)]
    locale: LocaleArgs,
    /// Config file selection.
    #[command(flatten)]
    config: ConfigArgs,
    /// Output settings.
    #[command(flatten)]
    output: OutputArgs,
}

/// Arguments for `format currency`.
#[derive(Args, Debug)]
struct FormatCurrencyCommand {
    /// Amount to format.
    #[arg(value_name = "AMOUNT", allow_negative_numbers = true)]
    value: f64,
    /// Target locale.
    #[command(flatten)]
    locale: LocaleArgs,
    /// Output settings.
    #[command(flatten)]
    output: OutputArgs,
}

/// Arguments for `format date`.
#[derive(Args, Debug)]
struct FormatDateCommand {
    /// ISO date (`YYYY-MM-DD`).
    #[arg(value_name = "DATE")]
    date: String,
    /// Target locale.
    #[command(flatten)]
    locale: LocaleArgs,
    /// Output settings.
    #[command(flatten)]
    output: OutputArgs,
}

/// Parse subcommands.
#[derive(Subcommand, Debug)]
enum ParseCommand {
    /// Parse a localized number.
    Number(ParseTextCommand),
    /// Parse a localized currency amount.
    Currency(ParseTextCommand),
}

/// Arguments for `parse number` and `parse currency`.
#[derive(Args, Debug)]
struct ParseTextCommand {
    /// Localized text.
    #[arg(value_name = "TEXT", allow_hyphen_values = true)]
    input: String,
    /// Locale the text was formatted for.
    #[command(flatten)]
    locale: LocaleArgs,
    /// Output settings.
    #[command(flatten)]
    output: OutputArgs,
}

/// Arguments for `demo`.
#[derive(Args, Debug)]
struct DemoCommand {
    /// Demo locale.
    #[command(flatten)]
    locale: LocaleArgs,
    /// Config file selection.
    #[command(flatten)]
    config: ConfigArgs,
    /// Output settings.
    #[command(flatten)]
    output: OutputArgs,
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Validate a config file.
    Validate(ConfigValidateCommand),
}

/// Arguments for `config validate`.
#[derive(Args, Debug)]
struct ConfigValidateCommand {
    /// Config file selection.
    #[command(flatten)]
    config: ConfigArgs,
    /// Output settings.
    #[command(flatten)]
    output: OutputArgs,
}

// ============================================================================
// SECTION: Output Types
// ============================================================================

/// JSON payload for `translate`.
#[derive(Serialize)]
struct TranslateOutput<'a> {
    /// Requested key.
    key: &'a str,
    /// Locale used.
    locale: LocaleCode,
    /// Rendered text.
    text: &'a str,
}

/// JSON payload for `format` commands.
#[derive(Serialize)]
struct FormatOutput<'a> {
    /// Locale used.
    locale: LocaleCode,
    /// Rendered text.
    text: &'a str,
}

/// JSON payload for `parse` commands.
#[derive(Serialize)]
struct ParseOutput {
    /// Locale used.
    locale: LocaleCode,
    /// Parsed value.
    value: f64,
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// CLI error wrapper for localized error messages.
#[derive(Debug, Error)]
#[error("{message}")]
struct CliError {
    /// Human-readable error message.
    message: String,
}

impl CliError {
    /// Constructs a new [`CliError`] from a localized message.
    const fn new(message: String) -> Self {
        Self {
            message,
        }
    }
}

/// CLI result alias for fallible operations.
type CliResult<T> = Result<T, CliError>;

// ============================================================================
// SECTION: Entry Point
// ============================================================================

/// CLI entry point returning an exit code.
fn main() -> ExitCode {
    let messages = match CliMessages::new() {
        Ok(messages) => messages,
        Err(err) => return emit_error(&err.to_string()),
    };
    match run(messages) {
        Ok(code) => code,
        Err(err) => emit_error(&err.to_string()),
    }
}

/// Executes the CLI command dispatcher.
fn run(messages: CliMessages) -> CliResult<ExitCode> {
    let cli = Cli::parse();
    let env_lang = std::env::var(LANG_ENV).ok();
    let locale = resolve_lang(messages.localizer(), cli.lang, env_lang.as_deref())?;
    let messages = messages.with_locale(locale);
    let msgs = messages.localizer();

    if cli.show_version {
        let version = env!("CARGO_PKG_VERSION");
        write_stdout_line(&t!(msgs, "main.version", version = version))
            .map_err(|err| CliError::new(output_error(msgs, "stdout", &err)))?;
        return Ok(ExitCode::SUCCESS);
    }

    let Some(command) = cli.command else {
        show_help(msgs)?;
        return Ok(ExitCode::SUCCESS);
    };

    match command {
        Commands::Locales(command) => command_locales(msgs, &command),
        Commands::Resolve(command) => command_resolve(msgs, &command),
        Commands::Translate(command) => command_translate(msgs, &command),
        Commands::Format {
            command,
        } => command_format(msgs, &command),
        Commands::Parse {
            command,
        } => command_parse(msgs, &command),
        Commands::Demo(command) => command_demo(msgs, &command),
        Commands::Config {
            command,
        } => command_config(msgs, &command),
    }
}

/// Prints top-level help.
fn show_help(msgs: Localizer<'_>) -> CliResult<()> {
    let mut command = Cli::command();
    command.print_help().map_err(|err| CliError::new(output_error(msgs, "stdout", &err)))?;
    write_stdout_line("").map_err(|err| CliError::new(output_error(msgs, "stdout", &err)))?;
    Ok(())
}

/// Resolves the CLI output language from flags or environment.
fn resolve_lang(
    msgs: Localizer<'_>,
    lang: Option<LangArg>,
    env_lang: Option<&str>,
) -> CliResult<LocaleCode> {
    if let Some(lang) = lang {
        return Ok(lang.into());
    }
    if let Some(value) = env_lang.filter(|value| !value.trim().is_empty()) {
        return parse_lang(value).ok_or_else(|| {
            CliError::new(t!(
                msgs,
                "i18n.lang.invalid_env",
                env = LANG_ENV,
                value = value,
                expected = expected_langs()
            ))
        });
    }
    Ok(msgs.locale())
}

// ============================================================================
// SECTION: Locale Commands
// ============================================================================

/// Executes `locales`.
fn command_locales(msgs: Localizer<'_>, command: &LocalesCommand) -> CliResult<ExitCode> {
    let translator = storefront_translator(msgs, &L10nConfig::default(), None)?;
    let options = Localizer::new(&translator, command.locale.resolve()).locale_options();
    let mut text = String::new();
    for option in &options {
        let code = option.code.as_str();
        let name = option.native_name;
        let line = if option.default {
            t!(msgs, "locales.entry_default", code = code, name = name)
        } else {
            t!(msgs, "locales.entry", code = code, name = name)
        };
        text.push_str(if option.active { "* " } else { "  " });
        text.push_str(&line);
        text.push('\n');
    }
    emit_output(msgs, &options, command.output.format, text)
}

/// Executes `resolve`.
fn command_resolve(msgs: Localizer<'_>, command: &ResolveCommand) -> CliResult<ExitCode> {
    let selection = resolve_request_locale(LocaleHints {
        query: command.query.as_deref(),
        session: command.session.as_deref(),
        accept_language: command.accept_language.as_deref(),
    });
    let text = t!(
        msgs,
        "resolve.summary",
        locale = selection.locale,
        source = source_label(selection.source),
        persist = selection.persist
    );
    emit_output(msgs, &selection, command.output.format, text)
}

/// Returns the stable label for a locale source.
const fn source_label(source: LocaleSource) -> &'static str {
    match source {
        LocaleSource::Query => "query",
        LocaleSource::Session => "session",
        LocaleSource::Header => "header",
    }
}

// ============================================================================
// SECTION: Translate Command
// ============================================================================

/// Executes `translate`.
fn command_translate(msgs: Localizer<'_>, command: &TranslateCommand) -> CliResult<ExitCode> {
    let config = load_config(msgs, command.config.config.as_deref())?;
    let translator = storefront_translator(msgs, &config, command.policy)?;
    let locale = command.locale.resolve();
    let args = parse_message_args(msgs, &command.args)?;
    let text = translator
        .try_translate(&command.key, locale, &args)
        .map_err(|err| CliError::new(t!(msgs, "translate.failed", error = err)))?;
    let output = TranslateOutput {
        key: &command.key,
        locale,
        text: &text,
    };
    emit_output(msgs, &output, command.output.format, text.clone())
}

/// Parses repeated `name=value` arguments.
fn parse_message_args(msgs: Localizer<'_>, raw: &[String]) -> CliResult<MessageArgs> {
    let mut args = MessageArgs::new();
    for entry in raw {
        let Some((name, value)) = entry.split_once('=') else {
            return Err(CliError::new(t!(msgs, "translate.arg_invalid", arg = entry)));
        };
        let name = name.trim();
        if name.is_empty() {
            return Err(CliError::new(t!(msgs, "translate.arg_invalid", arg = entry)));
        }
        args.insert(name, value);
    }
    Ok(args)
}

// ============================================================================
// SECTION: Format and Parse Commands
// ============================================================================

/// Dispatches `format` subcommands.
fn command_format(msgs: Localizer<'_>, command: &FormatCommand) -> CliResult<ExitCode> {
    let (locale, format, text) = match command {
        FormatCommand::Number(command) => {
            let config = load_config(msgs, command.config.config.as_deref())?;
            let locale = command.locale.resolve();
            let decimals = command.decimals.unwrap_or(config.formatting.default_decimals);
            let text = format_number(command.value, locale, decimals)
                .map_err(|err| format_error(msgs, command.value, &err))?;
            (locale, command.output.format, text)
        }
        FormatCommand::Currency(command) => {
            let locale = command.locale.resolve();
            let text = format_currency(command.value, locale)
                .map_err(|err| format_error(msgs, command.value, &err))?;
            (locale, command.output.format, text)
        }
        FormatCommand::Date(command) => {
            let locale = command.locale.resolve();
            let date = parse_iso_date(msgs, &command.date)?;
            let text =
                format_date(&date, locale).map_err(|err| format_error(msgs, &command.date, &err))?;
            (locale, command.output.format, text)
        }
    };
    let output = FormatOutput {
        locale,
        text: &text,
    };
    emit_output(msgs, &output, format, text.clone())
}

/// Parses an ISO `YYYY-MM-DD` date.
fn parse_iso_date(msgs: Localizer<'_>, input: &str) -> CliResult<Date> {
    Date::parse(input.trim(), format_description!("[year]-[month]-[day]"))
        .map_err(|_| CliError::new(t!(msgs, "date.invalid", input = input)))
}

/// Builds a localized formatting error.
fn format_error(msgs: Localizer<'_>, value: impl Display, error: &FormatError) -> CliError {
    CliError::new(t!(msgs, "format.failed", value = value, error = error))
}

/// Dispatches `parse` subcommands.
fn command_parse(msgs: Localizer<'_>, command: &ParseCommand) -> CliResult<ExitCode> {
    let (args, parsed) = match command {
        ParseCommand::Number(args) => (args, parse_number(&args.input, args.locale.resolve())),
        ParseCommand::Currency(args) => (args, parse_currency(&args.input, args.locale.resolve())),
    };
    let locale = args.locale.resolve();
    let value = parsed.map_err(|err| {
        CliError::new(t!(msgs, "parse.failed", input = args.input, locale = locale, error = err))
    })?;
    let output = ParseOutput {
        locale,
        value,
    };
    emit_output(msgs, &output, args.output.format, value.to_string())
}

// ============================================================================
// SECTION: Demo and Config Commands
// ============================================================================

/// Executes `demo`.
fn command_demo(msgs: Localizer<'_>, command: &DemoCommand) -> CliResult<ExitCode> {
    let config = load_config(msgs, command.config.config.as_deref())?;
    let translator = storefront_translator(msgs, &config, None)?;
    let demo = Localizer::new(&translator, command.locale.resolve())
        .demo()
        .map_err(|err| format_error(msgs, "demo", &err))?;
    let mut text = demo.title.clone();
    text.push('\n');
    for (label, value) in [
        (&demo.date_label, &demo.date),
        (&demo.number_label, &demo.number),
        (&demo.currency_label, &demo.currency),
    ] {
        text.push_str(&t!(msgs, "demo.line", label = label, value = value));
        text.push('\n');
    }
    emit_output(msgs, &demo, command.output.format, text)
}

/// Dispatches `config` subcommands.
fn command_config(msgs: Localizer<'_>, command: &ConfigCommand) -> CliResult<ExitCode> {
    match command {
        ConfigCommand::Validate(command) => command_config_validate(msgs, command),
    }
}

/// Executes `config validate`.
fn command_config_validate(
    msgs: Localizer<'_>,
    command: &ConfigValidateCommand,
) -> CliResult<ExitCode> {
    let config = load_config(msgs, command.config.config.as_deref())?;
    let policy = match config.translation.placeholder_policy {
        PlaceholderPolicy::Strict => "strict",
        PlaceholderPolicy::Lenient => "lenient",
    };
    let sink = match config.diagnostics.sink {
        DiagnosticsSinkKind::None => "none",
        DiagnosticsSinkKind::Stderr => "stderr",
        DiagnosticsSinkKind::File => "file",
    };
    let mut text = t!(msgs, "config.validate.ok");
    text.push('\n');
    text.push_str(&t!(
        msgs,
        "config.validate.summary",
        policy = policy,
        decimals = config.formatting.default_decimals,
        sink = sink
    ));
    emit_output(msgs, &config, command.output.format, text)
}

// ============================================================================
// SECTION: Engine Helpers
// ============================================================================

/// Loads configuration with localized errors.
fn load_config(msgs: Localizer<'_>, path: Option<&Path>) -> CliResult<L10nConfig> {
    L10nConfig::load(path).map_err(|err| CliError::new(t!(msgs, "config.load_failed", error = err)))
}

/// Builds a translator over the built-in storefront catalog.
fn storefront_translator(
    msgs: Localizer<'_>,
    config: &L10nConfig,
    policy: Option<PolicyArg>,
) -> CliResult<Translator> {
    let catalog = storefront_catalog()
        .map_err(|err| CliError::new(t!(msgs, "catalog.build_failed", error = err)))?;
    let translator = config
        .build_translator(Arc::new(catalog))
        .map_err(|err| CliError::new(t!(msgs, "config.sink_failed", error = err)))?;
    Ok(match policy {
        Some(policy) => translator.with_policy(policy.into()),
        None => translator,
    })
}

// ============================================================================
// SECTION: Output Helpers
// ============================================================================

/// Writes `value` as JSON or `text` as-is, then reports success.
fn emit_output<T: Serialize + ?Sized>(
    msgs: Localizer<'_>,
    value: &T,
    format: OutputFormat,
    text: String,
) -> CliResult<ExitCode> {
    let mut output = match format {
        OutputFormat::Json => serde_json::to_string(value)
            .map_err(|err| CliError::new(t!(msgs, "output.json_failed", error = err)))?,
        OutputFormat::Text => text,
    };
    if !output.ends_with('\n') {
        output.push('\n');
    }
    write_stdout_bytes(output.as_bytes())
        .map_err(|err| CliError::new(output_error(msgs, "stdout", &err)))?;
    Ok(ExitCode::SUCCESS)
}

/// Writes a single line to stdout.
fn write_stdout_line(message: &str) -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    writeln!(&mut stdout, "{message}")
}

/// Writes raw bytes to stdout without adding a newline.
fn write_stdout_bytes(bytes: &[u8]) -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    stdout.write_all(bytes)
}

/// Writes a single line to stderr.
fn write_stderr_line(message: &str) -> std::io::Result<()> {
    let mut stderr = std::io::stderr();
    writeln!(&mut stderr, "{message}")
}

/// Formats a localized output error message.
fn output_error(msgs: Localizer<'_>, stream: &str, error: &std::io::Error) -> String {
    let stream_label = match stream {
        "stderr" => t!(msgs, "output.stream.stderr"),
        _ => t!(msgs, "output.stream.stdout"),
    };
    t!(msgs, "output.write_failed", stream = stream_label, error = error)
}

/// Emits an error message to stderr and returns a failure exit code.
fn emit_error(message: &str) -> ExitCode {
    let _ = write_stderr_line(message);
    ExitCode::FAILURE
}
