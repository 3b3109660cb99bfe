//! # courseapp-client
//!
//! Leptos + WASM frontend for the course-enrollment platform.
//!
//! This crate contains pages, components, the session store and route guard,
//! per-view state, and the typed REST client for the external backend. The
//! backend owns all persistence and authorization; this crate only renders,
//! routes, and keeps the tab-scoped session.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// WASM entry point: installs browser logging and hydrates the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger already installed: {e}");
    }
    leptos::mount::hydrate_body(app::App);
}
