//! # symbols-console
//!
//! Leptos + WASM shell for the symbol server web console.
//!
//! The shell owns the browser session lifecycle: it probes `/api/auth/` on
//! mount, delegates sign-in to the identity provider, signs out through the
//! backend-issued endpoint, and renders navigation and routes from the
//! resulting session state. Sub-pages are thin consumers of that state.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod routes;
pub mod session;
pub mod state;
pub mod util;

/// Browser entry point: installs logging and hydrates the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        leptos::logging::warn!("console logger already initialised");
    }
    leptos::mount::hydrate_body(app::App);
}
