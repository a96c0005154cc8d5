// crates/storefront-locale-cli/src/lib.rs
// ============================================================================
// Module: Storefront Locale CLI Library
// Description: Shared helpers for the storefront-locale command-line interface.
// Purpose: Provide the CLI's own localized message catalog to the binary and tests.
// Dependencies: storefront-locale-core
// ============================================================================

//! ## Overview
//! This library houses the CLI message catalog. The binary entry point
//! (`src/main.rs`) renders every user-facing line through it, so the tool's
//! own output goes through the same engine it exposes.

// ============================================================================
// SECTION: Modules
// ============================================================================

/// CLI message catalog and locale selection.
pub mod messages;
