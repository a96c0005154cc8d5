// crates/storefront-locale-core/src/builtin.rs
// ============================================================================
// Module: Built-in Storefront Catalog
// Description: English and Spanish message tables for the demo storefront.
// Purpose: Ship the storefront's user-facing strings in-memory.
// Dependencies: crate::{catalog, locale}
// ============================================================================

//! ## Overview
//! The storefront ships two locales compiled into the binary. Tables are
//! plain `(key, template)` slices so they can be audited for duplicates
//! before being folded into a [`StaticCatalog`].
//!
//! ## Invariants
//! - Every key exists in both tables.
//! - Translations declare the same placeholders as English.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::catalog::CatalogError;
use crate::catalog::StaticCatalog;
use crate::locale::LocaleCode;

// ============================================================================
// SECTION: Tables
// ============================================================================

/// English storefront messages.
const CATALOG_EN: &[(&str, &str)] = &[
    ("app.title", "Playwright Demo Store"),
    ("nav.home", "Home"),
    ("nav.products", "Products"),
    ("nav.forms", "Forms Demo"),
    ("nav.components", "Components"),
    ("nav.cart", "Cart"),
    ("nav.login", "Login"),
    ("nav.language", "Language"),
    ("footer.privacy", "Privacy Policy"),
    ("footer.terms", "Terms of Service"),
    ("footer.contact", "Contact Us"),
    ("auth.login_title", "Login to Your Account"),
    ("auth.register_title", "Create Your Account"),
    ("auth.username", "Username"),
    ("auth.password", "Password"),
    ("auth.email", "Email"),
    ("auth.confirm_password", "Confirm Password"),
    ("auth.remember_me", "Remember me"),
    ("auth.sign_in", "Sign In"),
    ("auth.create_account", "Create Account"),
    ("auth.no_account", "Don't have an account?"),
    ("auth.register_here", "Register here"),
    ("auth.already_account", "Already have an account?"),
    ("auth.login_here", "Login here"),
    ("auth.forgot_password", "Forgot password?"),
    ("auth.terms_accept", "I agree to the Terms and Conditions"),
    ("auth.test_credentials", "Test Credentials"),
    ("errors.generic", "An error occurred. Please try again."),
    ("errors.password_mismatch", "Passwords do not match"),
    ("errors.accept_terms", "Please accept the terms and conditions"),
    ("api.login.success", "Login successful"),
    ("api.login.invalid", "Invalid username or password"),
    ("api.register.user_exists", "Username already exists"),
    ("api.register.success", "Registration successful"),
    ("api.order.login_required", "Please login"),
    ("api.order.success", "Order placed successfully"),
    ("api.profile.unauthorized", "Unauthorized"),
    ("api.profile.updated", "Profile updated successfully"),
    ("api.product.not_found", "Product not found"),
    ("i18n.demo_title", "Locale Formatting Demo"),
    ("i18n.demo_date", "Date"),
    ("i18n.demo_number", "Number"),
    ("i18n.demo_currency", "Currency"),
    ("cart.items_summary", "{count} items in your cart"),
    ("order.confirmation", "Order {order_id} placed for {total}"),
    ("profile.greeting", "Welcome back, {name}!"),
];

/// Spanish storefront messages.
const CATALOG_ES: &[(&str, &str)] = &[
    ("app.title", "Tienda Demo Playwright"),
    ("nav.home", "Inicio"),
    ("nav.products", "Productos"),
    ("nav.forms", "Demo Formularios"),
    ("nav.components", "Componentes"),
    ("nav.cart", "Carrito"),
    ("nav.login", "Iniciar sesion"),
    ("nav.language", "Idioma"),
    ("footer.privacy", "Politica de Privacidad"),
    ("footer.terms", "Terminos de Servicio"),
    ("footer.contact", "Contactanos"),
    ("auth.login_title", "Inicia sesion en tu cuenta"),
    ("auth.register_title", "Crea tu cuenta"),
    ("auth.username", "Usuario"),
    ("auth.password", "Contrasena"),
    ("auth.email", "Correo"),
    ("auth.confirm_password", "Confirmar Contrasena"),
    ("auth.remember_me", "Recordarme"),
    ("auth.sign_in", "Entrar"),
    ("auth.create_account", "Crear cuenta"),
    ("auth.no_account", "No tienes cuenta?"),
    ("auth.register_here", "Registrate aqui"),
    ("auth.already_account", "Ya tienes cuenta?"),
    ("auth.login_here", "Inicia sesion aqui"),
    ("auth.forgot_password", "Olvidaste tu contrasena?"),
    ("auth.terms_accept", "Acepto los Terminos y Condiciones"),
    ("auth.test_credentials", "Credenciales de prueba"),
    ("errors.generic", "Ocurrio un error. Intenta nuevamente."),
    ("errors.password_mismatch", "Las contrasenas no coinciden"),
    ("errors.accept_terms", "Acepta los terminos y condiciones"),
    ("api.login.success", "Inicio de sesion exitoso"),
    ("api.login.invalid", "Usuario o contrasena invalido"),
    ("api.register.user_exists", "El usuario ya existe"),
    ("api.register.success", "Registro exitoso"),
    ("api.order.login_required", "Por favor inicia sesion"),
    ("api.order.success", "Pedido realizado con exito"),
    ("api.profile.unauthorized", "No autorizado"),
    ("api.profile.updated", "Perfil actualizado con exito"),
    ("api.product.not_found", "Producto no encontrado"),
    ("i18n.demo_title", "Demo de Formato por Idioma"),
    ("i18n.demo_date", "Fecha"),
    ("i18n.demo_number", "Numero"),
    ("i18n.demo_currency", "Moneda"),
    ("cart.items_summary", "{count} articulos en tu carrito"),
    ("order.confirmation", "Pedido {order_id} realizado por {total}"),
    ("profile.greeting", "Bienvenido de nuevo, {name}!"),
];

// ============================================================================
// SECTION: Construction
// ============================================================================

/// Returns the raw table for `locale`, in declaration order.
#[must_use]
pub const fn storefront_entries(locale: LocaleCode) -> &'static [(&'static str, &'static str)] {
    match locale {
        LocaleCode::En => CATALOG_EN,
        LocaleCode::Es => CATALOG_ES,
    }
}

/// Builds the storefront catalog.
///
/// Call once at startup and share the result.
///
/// # Errors
///
/// Returns [`CatalogError`] if a table violates a catalog invariant.
pub fn storefront_catalog() -> Result<StaticCatalog, CatalogError> {
    StaticCatalog::builder()
        .locale(LocaleCode::En, storefront_entries(LocaleCode::En).iter().copied())
        .locale(LocaleCode::Es, storefront_entries(LocaleCode::Es).iter().copied())
        .build()
}
