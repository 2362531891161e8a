//! # libdesk
//!
//! Leptos + WASM frontend root for the library management console.
//!
//! The crate installs the process-wide providers (query cache, theme,
//! tooltip host, auth, notifications, activity log) in a fixed order and
//! mounts a router whose every navigation passes through the route-access
//! guard in [`routing`]: a pure decision between rendering the screen,
//! redirecting to login, showing a spinner, or denying by role.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod providers;
pub mod routing;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
