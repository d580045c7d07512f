//! # client
//!
//! Leptos + WASM frontend for the Basti Ki Pathshala website.
//!
//! This crate contains the route-level pages, the shared layout chrome
//! (navbar, footer, toast), browser-side UI state, and the HTTP helper that
//! hands a validated volunteer application to the server. Form rules and the
//! form state machine come from the shared `volunteer` crate.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("hydrating pathshala client");
    leptos::mount::hydrate_body(app::App);
}
