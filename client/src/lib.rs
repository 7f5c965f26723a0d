//! # client
//!
//! Leptos + WASM frontend shell for the matching app's auth flow.
//!
//! This crate wires the `tabguard` session guard into the page lifecycle:
//! one `SessionStore` per tab, a bootstrap component that fetches the
//! session once, a route tracker inside the router, and an auth-page marker
//! mounted by the login and signup pages.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    // `tabguard` emits through `tracing`'s `log` bridge; route it to the console.
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
