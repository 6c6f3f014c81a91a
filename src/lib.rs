//! # exam-bank-ui
//!
//! Leptos + WASM frontend for the exam problem bank.
//!
//! This crate contains the tabbed pages (list, search, stats, export,
//! import, distribution), reusable components, application state, the REST
//! client and browser utilities for theme, downloads and Chart.js.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and the panic hook, then mount.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("exam-bank-ui starting, api base {}", config::ClientConfig::from_build_env().api_base);
    leptos::mount::mount_to_body(app::App);
}
