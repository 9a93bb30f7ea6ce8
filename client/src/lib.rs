//! # client
//!
//! Leptos + WASM single-page frontend for a personal board game shelf:
//! the collection, a wishlist, and play records, backed by a remote REST API.
//!
//! The crate's core is the session pipeline: `state::session` holds the
//! persisted sign-in, `net::channel` attaches it to every API call and reacts
//! to credential rejection, and `routes` gates navigation on it. Pages and
//! components sit on top.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// WASM entry point: install browser logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
