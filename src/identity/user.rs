//! User identity and the persisted credential record.

#[cfg(test)]
#[path = "user_test.rs"]
mod user_test;

use serde::{Deserialize, Serialize};

/// Refresh this long before the recorded expiry so a token handed to a
/// request does not lapse mid-flight.
pub const TOKEN_EXPIRY_SKEW_MS: f64 = 60_000.0;

/// Opaque handle to the signed-in user as surfaced to the UI.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserIdentity {
    /// Provider-assigned stable user id.
    pub uid: String,
    /// Sign-in email when the provider reports one.
    pub email: Option<String>,
}

/// Credential record persisted to the browser's local storage between tabs
/// and reloads. Replaced wholesale on every token rotation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StoredCredentials {
    pub uid: String,
    pub email: Option<String>,
    /// Current short-lived bearer token.
    pub id_token: String,
    /// Long-lived token used to mint fresh bearer tokens.
    pub refresh_token: String,
    /// Bearer token expiry in milliseconds since the Unix epoch.
    pub expires_at_ms: f64,
}

impl StoredCredentials {
    pub fn user(&self) -> UserIdentity {
        UserIdentity {
            uid: self.uid.clone(),
            email: self.email.clone(),
        }
    }
}

/// Whether a bearer token is still usable, honoring the expiry skew.
pub fn token_is_fresh(now_ms: f64, expires_at_ms: f64) -> bool {
    now_ms + TOKEN_EXPIRY_SKEW_MS < expires_at_ms
}

/// Absolute expiry for a provider `expiresIn` value (seconds, as a string).
/// Unparseable values fall back to one hour.
pub fn expiry_from_now(now_ms: f64, expires_in_secs: &str) -> f64 {
    let secs: f64 = expires_in_secs.parse().unwrap_or(3600.0);
    now_ms + secs * 1000.0
}
