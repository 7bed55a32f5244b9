//! # resume-site
//!
//! Leptos + WASM interactive resume: static portfolio content with an
//! embedded conversational assistant panel. Visitors ask free-text questions
//! or click tagged skill/project terms in the resume, which open the panel
//! and auto-submit the question.
//!
//! The chat core detects whether the answering backend is reachable at
//! session start and transparently falls back to built-in responses when it
//! is not. Conversation, session, and panel state live in plain structs
//! under `state/`, wrapped in `RwSignal` contexts by the components.

pub mod app;
pub mod bridge;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point for client-side hydration.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
