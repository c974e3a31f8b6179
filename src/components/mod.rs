//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render selector and notification chrome while reading/writing
//! shared state from Leptos context providers; pages own route-scoped
//! orchestration.

pub mod district_picker;
pub mod service_card;
pub mod toast_host;
