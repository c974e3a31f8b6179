//! # civic-feedback
//!
//! Leptos + WASM front-end for a citizen feedback service. Users sign in,
//! pick a district and a public-service category, submit free-text feedback,
//! and read an AI-generated summary of prior feedback for that pair.
//!
//! All business logic (summarization, persistence, routing of feedback)
//! lives in an external backend reached over HTTPS/JSON; this crate renders
//! forms, manages UI state, and calls that backend with a bearer token
//! minted by the external identity provider.

pub mod app;
pub mod components;
pub mod identity;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Hydration entry point for the browser bundle.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(crate::app::App);
}
