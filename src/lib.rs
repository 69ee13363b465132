//! # matchboard
//!
//! Leptos + WASM frontend for the MatchBoard job and internship matcher.
//!
//! This crate contains pages, components, application state, the typed REST
//! gateway, and the browser utility layer (session persistence, route
//! guards, theming). All business data lives in the backend; the client
//! holds a persisted session plus per-page fetch state.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point. Installs the panic hook and logger, then hydrates the
/// server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(crate::app::App);
}
