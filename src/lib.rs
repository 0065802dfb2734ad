//! # watchboard
//!
//! Leptos + WASM frontend for the machine monitoring service. It signs a
//! user in against the service's session endpoints, then polls the
//! incidents endpoint while the dashboard is visible and renders the
//! result as a table.
//!
//! The session/view state machine lives in [`controller`], decoupled from
//! the DOM behind the `Collaborator`, `ViewSink`, and `PollScheduler`
//! seams so its rules are testable without a browser.

pub mod app;
pub mod components;
pub mod controller;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install panic/log hooks and hydrate the page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(App);
}
