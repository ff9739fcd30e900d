//! # client
//!
//! Leptos + WASM frontend for record search.
//!
//! This crate contains the search page, its view components, the search and
//! alert state stores, the action handle that talks to the records backend,
//! and the small parsing helpers (search syntax, URL query, column bitmask)
//! they share.

pub mod actions;
pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
