//! Field validation tests for storefront-locale-config.
// crates/storefront-locale-config/tests/field_validation.rs
// =============================================================================
// Module: Config Field Validation Tests
// Description: Validate per-field limits and cross-field rules.
// Purpose: Ensure invalid settings are rejected before any translator is built.
// =============================================================================

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

use storefront_locale_config::ConfigError;
use storefront_locale_config::L10nConfig;

type TestResult = Result<(), String>;

fn assert_invalid(content: &str, needle: &str) -> TestResult {
    match L10nConfig::from_toml_str(content) {
        Err(error) => {
            let message = error.to_string();
            if message.contains(needle) {
                Ok(())
            } else {
                Err(format!("error {message} did not contain {needle}"))
            }
        }
        Ok(config) => Err(format!("expected invalid config, got {config:?}")),
    }
}

#[test]
fn unknown_policy_is_rejected() -> TestResult {
    assert_invalid("[translation]\nplaceholder_policy = \"loose\"\n", "config parse error")
}

#[test]
fn unknown_fields_are_rejected() -> TestResult {
    assert_invalid("[formatting]\ndefault_decimals = 2\nrounding = \"up\"\n", "unknown field")?;
    assert_invalid("[server]\nport = 8080\n", "unknown field")?;
    Ok(())
}

#[test]
fn decimals_above_cap_are_rejected() -> TestResult {
    assert_invalid("[formatting]\ndefault_decimals = 13\n", "at most 12")?;
    let config = L10nConfig::from_toml_str("[formatting]\ndefault_decimals = 12\n")
        .map_err(|err| err.to_string())?;
    if config.formatting.default_decimals != 12 {
        return Err("expected twelve decimals".to_string());
    }
    Ok(())
}

#[test]
fn file_sink_requires_path() -> TestResult {
    assert_invalid("[diagnostics]\nsink = \"file\"\n", "diagnostics.path is required")
}

#[test]
fn path_without_file_sink_is_rejected() -> TestResult {
    assert_invalid(
        "[diagnostics]\nsink = \"stderr\"\npath = \"events.jsonl\"\n",
        "only allowed",
    )
}

#[test]
fn blank_file_sink_path_is_rejected() -> TestResult {
    assert_invalid("[diagnostics]\nsink = \"file\"\npath = \"   \"\n", "must be non-empty")
}

#[test]
fn overlong_sink_path_component_is_rejected() -> TestResult {
    let content = format!("[diagnostics]\nsink = \"file\"\npath = \"{}\"\n", "a".repeat(300));
    assert_invalid(&content, "path component too long")
}

#[test]
fn error_variants_carry_context() -> TestResult {
    match L10nConfig::from_toml_str("[diagnostics]\nsink = \"file\"\n") {
        Err(ConfigError::Invalid(_)) => Ok(()),
        other => Err(format!("expected invalid error, got {other:?}")),
    }
}
