//! # paynest-client
//!
//! Leptos + WASM front-end for PayNest, the rental-property and tenant
//! management service.
//!
//! This crate contains pages, components, application state, REST helpers,
//! and browser-storage glue. All business logic lives in the PayNest backend;
//! the UI only renders, routes, and issues REST calls.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("console logger unavailable: {e}").into());
    }
    leptos::mount::hydrate_body(app::App);
}
