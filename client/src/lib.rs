//! # client
//!
//! Leptos + WASM single-page front end for taskdeck.
//!
//! Pages bind the `taskdeck` page state machines to signals; all HTTP goes
//! through [`net::api::GlooApi`] and the bearer token lives in the `token`
//! cookie. Browser-only code is gated behind the `csr` feature so the crate
//! still builds and tests natively.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod util;

/// WASM entry point: install console logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
