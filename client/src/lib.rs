//! # client
//!
//! Leptos + WASM frontend for the Cashflow personal-finance tracker.
//!
//! This crate owns the session gate (who is signed in, which theme is active,
//! which route tree is reachable), the typed REST client for the backend, and
//! every page and component of the UI. The root `cashflow` host crate renders
//! it on the server and proxies the backend API beside it.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point. Hydrates the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
