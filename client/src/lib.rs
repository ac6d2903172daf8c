//! # client
//!
//! Leptos + WASM frontend for the VizAI sign-in ("register-analyse") screen.
//!
//! This crate contains the router, pages, stateless components, the sign-in
//! form state machine, and the small browser seams (focus, global key
//! listeners, alerts) the page drives. The `ssr` build is rendered by the
//! `vizai` host; the `hydrate` build runs in the browser.

pub mod app;
pub mod components;
pub mod config;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install panic/log hooks and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
