//! Identity provider error taxonomy.
//!
//! ERROR HANDLING
//! ==============
//! Provider failures surface as a machine code embedded in the error body.
//! The mapping here is code → variant; translation to user-facing copy lives
//! with the auth page, which owns the message table.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use thiserror::Error;

/// Failure modes of identity operations.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("invalid email address")]
    InvalidEmail,
    #[error("account disabled")]
    UserDisabled,
    #[error("account not found")]
    UserNotFound,
    #[error("incorrect password")]
    WrongPassword,
    #[error("email already in use")]
    EmailInUse,
    #[error("weak password")]
    WeakPassword,
    /// The federated sign-in popup closed before producing a credential.
    #[error("sign-in popup closed")]
    PopupClosed,
    #[error("network failure: {0}")]
    Network(String),
    /// Provider rejected the request with a code outside the known set.
    #[error("provider rejected the request: {0}")]
    Provider(String),
    /// No browser environment (server-side render paths).
    #[error("identity provider unavailable")]
    Unavailable,
}

impl AuthError {
    /// Map a provider error code to a variant. Unknown codes are carried
    /// through as `Provider` so the UI can fall back to its generic message.
    pub fn from_provider_code(code: &str) -> Self {
        match code {
            "INVALID_EMAIL" => Self::InvalidEmail,
            "USER_DISABLED" => Self::UserDisabled,
            "EMAIL_NOT_FOUND" => Self::UserNotFound,
            // Newer provider deployments collapse wrong-password and
            // unknown-email into one code.
            "INVALID_PASSWORD" | "INVALID_LOGIN_CREDENTIALS" => Self::WrongPassword,
            "EMAIL_EXISTS" => Self::EmailInUse,
            "WEAK_PASSWORD" => Self::WeakPassword,
            other => Self::Provider(other.to_owned()),
        }
    }
}

/// Extract the leading error-code token from a provider error body.
///
/// Bodies look like `{"error": {"message": "WEAK_PASSWORD : Password should
/// be at least 6 characters"}}`; the code is the first token before any
/// space or colon.
pub fn error_code_from_body(body: &serde_json::Value) -> Option<String> {
    let message = body.get("error")?.get("message")?.as_str()?;
    let code = message.split([' ', ':']).next().unwrap_or(message).trim();
    if code.is_empty() {
        None
    } else {
        Some(code.to_owned())
    }
}
