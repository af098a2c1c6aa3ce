//! # client
//!
//! Leptos + WASM frontend for the Kancra warehouse-management dashboard.
//!
//! This crate contains the session store and its credential verifiers, the
//! route guard, the backend HTTP wrapper, the layout shell and the pages.
//! Browser-only effects are compiled in with the `hydrate` feature; without
//! it they are inert so the core logic runs in host tests and SSR.

#![recursion_limit = "256"]

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
