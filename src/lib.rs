//! # xiaohang-client
//!
//! Leptos + WASM frontend for the 小航 civil-aviation QA assistant.
//! Replaces the jQuery single-page client with a Rust-native UI layer.
//!
//! This crate contains the conversation controller, transcript state,
//! keyword annotation, network helpers, and the chart-slot bridge to the
//! echarts rendering surface. The backend QA service is consumed as an
//! opaque HTTP endpoint.

pub mod app;
pub mod components;
pub mod controller;
pub mod error;
pub mod glossary;
pub mod net;
pub mod state;

/// WASM entry point: install panic/log hooks and hydrate the page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
