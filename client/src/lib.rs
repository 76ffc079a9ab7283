//! # client
//!
//! Leptos + WASM operator dashboard: a start page with the mission gate and
//! global geofence editor, and a mission page with casualty map, vehicle
//! drawer, and control panel.
//!
//! The map itself is driven imperatively by the `mapsync` crate through the
//! `MapHost` bridge component; everything here is declarative state and view.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install panic and log hooks, then hydrate the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("logger already initialized: {err}");
    }
    leptos::mount::hydrate_body(app::App);
}
