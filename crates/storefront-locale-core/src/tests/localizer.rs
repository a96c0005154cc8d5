// crates/storefront-locale-core/src/tests/localizer.rs
// ============================================================================
// Module: Localizer Tests
// Description: Unit tests for the per-request bound localizer.
// Purpose: Ensure page helpers thread the bound locale into every call.
// Dependencies: storefront-locale-core localizer module
// ============================================================================

//! ## Overview
//! Covers the demo block, locale switcher options, and the `t!` macro.

use std::sync::Arc;

use time::macros::date;

use crate::builtin::storefront_catalog;
use crate::locale::LocaleCode;
use crate::localizer::Localizer;
use crate::t;
use crate::translate::Translator;

fn storefront_translator() -> Translator {
    Translator::new(Arc::new(storefront_catalog().unwrap()))
}

#[test]
fn demo_renders_english_values() {
    let translator = storefront_translator();
    let demo = Localizer::new(&translator, LocaleCode::En).demo().unwrap();
    assert_eq!(demo.title, "Locale Formatting Demo");
    assert_eq!(demo.date, "02/16/2026");
    assert_eq!(demo.number, "1,234,567.89");
    assert_eq!(demo.currency, "$1,299.99");
}

#[test]
fn demo_renders_spanish_values() {
    let translator = storefront_translator();
    let demo = Localizer::new(&translator, LocaleCode::Es).demo().unwrap();
    assert_eq!(demo.title, "Demo de Formato por Idioma");
    assert_eq!(demo.date_label, "Fecha");
    assert_eq!(demo.date, "16/02/2026");
    assert_eq!(demo.number, "1.234.567,89");
    assert_eq!(demo.currency, "1.299,99 €");
}

#[test]
fn helpers_use_bound_locale() {
    let translator = storefront_translator();
    let localizer = Localizer::new(&translator, LocaleCode::Es).with_default_decimals(1);
    assert_eq!(localizer.locale(), LocaleCode::Es);
    assert_eq!(localizer.text("nav.cart"), "Carrito");
    assert_eq!(localizer.number(1234.56).unwrap(), "1.234,6");
    assert_eq!(localizer.number_with(1234.56, 3).unwrap(), "1.234,560");
    assert_eq!(localizer.currency(10.0).unwrap(), "10,00 €");
    assert_eq!(localizer.date(&date!(2026 - 12 - 01)).unwrap(), "01/12/2026");
}

#[test]
fn locale_options_mark_active_and_default() {
    let translator = storefront_translator();
    let options = Localizer::new(&translator, LocaleCode::Es).locale_options();
    assert_eq!(options.len(), 2);
    assert_eq!(options[0].code, LocaleCode::En);
    assert!(options[0].default);
    assert!(!options[0].active);
    assert_eq!(options[1].native_name, "Español");
    assert!(options[1].active);
}

#[test]
fn t_macro_passes_named_arguments() {
    let translator = storefront_translator();
    let localizer = Localizer::new(&translator, LocaleCode::En);
    assert_eq!(t!(localizer, "profile.greeting", name = "Ana"), "Welcome back, Ana!");
    assert_eq!(t!(localizer, "cart.items_summary", count = 3), "3 items in your cart");
    assert_eq!(t!(localizer, "nav.home"), "Home");
}
