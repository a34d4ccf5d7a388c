//! # botforge-ui
//!
//! Leptos + WASM single-page application for managing chatbot configurations:
//! authentication flows, a dashboard for creating bots and uploading training
//! sources, API-key management, and a chat preview against the backend
//! question-answering service.
//!
//! This crate contains pages, components, application state, and the
//! session-aware HTTP client. Browser-only behavior is gated behind the
//! `hydrate` feature so the state machines and wire types stay natively
//! testable.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Hydrate entry point invoked by the WASM loader.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(crate::app::App);
}
