//! Shared reactive state provided via Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! `session` is the single source of truth for "who is signed in"; `toast`
//! holds transient notifications rendered by the app-level host component.

pub mod session;
pub mod toast;
