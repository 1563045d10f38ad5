//! # knoword-client
//!
//! Leptos + WASM frontend for the KnoWord learning community platform.
//!
//! This crate contains pages, components, the shared session state, and the
//! REST client with its transparent token-refresh layer. Quiz authoring and
//! play rules live in the sibling `quiz` crate so they stay testable without
//! a browser.

// Deeply nested view types exceed the default limit during layout queries.
#![recursion_limit = "256"]

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: takes over the server-rendered DOM.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
