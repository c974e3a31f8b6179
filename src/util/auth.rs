//! Shared auth route-guard helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected route applies the same redirect contract: defer while
//! the session is unresolved (no flash-redirect on reload), then send the
//! user to the auth page exactly once when it resolves unauthenticated.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::{SessionState, SessionStatus};

/// One-shot decision state for the unauthenticated redirect.
#[derive(Clone, Copy, Debug, Default)]
pub struct RedirectGate {
    fired: bool,
}

impl RedirectGate {
    /// Whether the guard should navigate now. `Unknown` defers the decision
    /// until the first identity event resolves; `Unauthenticated` fires at
    /// most once per page instance.
    pub fn on_status(&mut self, status: SessionStatus) -> bool {
        match status {
            SessionStatus::Unknown | SessionStatus::Authenticated => false,
            SessionStatus::Unauthenticated => {
                if self.fired {
                    false
                } else {
                    self.fired = true;
                    true
                }
            }
        }
    }
}

/// Redirect to `/login` once the session resolves unauthenticated. The
/// check re-runs on every session change.
pub fn install_unauth_redirect<F>(session: RwSignal<SessionState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let gate = StoredValue::new(RedirectGate::default());
    Effect::new(move || {
        let status = session.get().status;
        if gate.try_update_value(|g| g.on_status(status)).unwrap_or(false) {
            navigate(
                "/login",
                NavigateOptions {
                    replace: true,
                    ..NavigateOptions::default()
                },
            );
        }
    });
}
