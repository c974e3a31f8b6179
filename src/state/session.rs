//! Session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided as `RwSignal<SessionState>` from the app root. The identity
//! subscription installed there is the only writer; route guards and
//! token-attaching requests are the readers.
//!
//! DESIGN
//! ======
//! The state is replaced wholesale on every identity event, never mutated in
//! place. `Unknown` exists only before the first event so guards can defer
//! their redirect decision instead of flash-redirecting on reload.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::identity::user::UserIdentity;

/// Whether the identity provider has reported a user yet, and if so whether
/// one is signed in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionStatus {
    /// No identity event has fired yet.
    #[default]
    Unknown,
    Authenticated,
    Unauthenticated,
}

/// The current session as observed from the identity event stream.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    pub user: Option<UserIdentity>,
    pub status: SessionStatus,
}

impl SessionState {
    /// Build the replacement state for an identity event. After the first
    /// event the status is deterministic from the user field.
    pub fn from_event(user: Option<UserIdentity>) -> Self {
        let status = if user.is_some() {
            SessionStatus::Authenticated
        } else {
            SessionStatus::Unauthenticated
        };
        Self { user, status }
    }

    pub fn is_resolved(&self) -> bool {
        self.status != SessionStatus::Unknown
    }
}
