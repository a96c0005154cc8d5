// crates/storefront-locale-config/src/lib.rs
// ============================================================================
// Module: Storefront Locale Config Library
// Description: Configuration model and validation for the localization engine.
// Purpose: Single source of truth for storefront-locale.toml semantics.
// Dependencies: storefront-locale-core, serde, toml
// ============================================================================

//! ## Overview
//! `storefront-locale-config` loads the optional TOML file that selects the
//! placeholder policy, default number precision, and diagnostics sink, then
//! wires those choices into a [`storefront_locale_core::Translator`].

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use config::*;
