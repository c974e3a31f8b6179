//! Client for the external identity provider.
//!
//! SYSTEM CONTEXT
//! ==============
//! The provider is an opaque external capability: email/password sign-in and
//! sign-up, popup-based federated sign-in, and bearer-token issuance over a
//! REST surface. `client` owns the persisted credential record and the
//! user-changed subscription registry; everything else in the crate observes
//! identity through the session context.

pub mod client;
pub mod config;
pub mod error;
pub mod rest;
pub mod user;
