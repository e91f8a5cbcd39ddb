//! Webeltek marketing site
//!
//! A single-page Leptos site: rendered on the server by the `webeltek-site`
//! binary and hydrated in the browser from the WASM build of this library.

pub mod app;
pub mod components;
pub mod config;
pub mod content;
pub mod error;
pub mod model;
pub mod motion;
pub mod pages;
pub mod theme;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    leptos::mount_to_body(app::App);
}
