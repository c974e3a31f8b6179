//! Wire shapes and endpoint builders for the identity provider's REST
//! surface.
//!
//! DESIGN
//! ======
//! Everything here is pure so endpoint construction, request shaping, and
//! popup-message parsing stay unit-testable off the wasm target. The actual
//! HTTP calls live in `client`.

#[cfg(test)]
#[path = "rest_test.rs"]
mod rest_test;

use serde::{Deserialize, Serialize};

use crate::identity::config::IdentityConfig;

const IDENTITY_BASE: &str = "https://identitytoolkit.googleapis.com/v1";
const TOKEN_BASE: &str = "https://securetoken.googleapis.com/v1";

/// Federated provider used by the popup flow.
pub const GOOGLE_PROVIDER_ID: &str = "google.com";

pub fn password_sign_in_endpoint(api_key: &str) -> String {
    format!("{IDENTITY_BASE}/accounts:signInWithPassword?key={api_key}")
}

pub fn sign_up_endpoint(api_key: &str) -> String {
    format!("{IDENTITY_BASE}/accounts:signUp?key={api_key}")
}

pub fn idp_sign_in_endpoint(api_key: &str) -> String {
    format!("{IDENTITY_BASE}/accounts:signInWithIdp?key={api_key}")
}

pub fn refresh_endpoint(api_key: &str) -> String {
    format!("{TOKEN_BASE}/token?key={api_key}")
}

/// Origin the federated handler posts its credential message from.
pub fn auth_origin(config: &IdentityConfig) -> String {
    format!("https://{}", config.auth_domain)
}

/// URL opened in the federated sign-in popup.
pub fn federated_popup_url(config: &IdentityConfig, provider_id: &str) -> String {
    format!(
        "https://{}/__/auth/handler?apiKey={}&authType=signInViaPopup&providerId={}",
        config.auth_domain, config.api_key, provider_id
    )
}

/// Form body for the refresh-token exchange.
pub fn refresh_request_body(refresh_token: &str) -> String {
    format!(
        "grant_type=refresh_token&refresh_token={}",
        urlencoding::encode(refresh_token)
    )
}

/// `postBody` payload for the IdP credential exchange.
pub fn idp_post_body(provider_id: &str, id_token: &str) -> String {
    format!("id_token={}&providerId={provider_id}", urlencoding::encode(id_token))
}

/// Password sign-in / sign-up request.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordAuthRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
    pub return_secure_token: bool,
}

/// IdP credential exchange request.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IdpSignInRequest {
    pub post_body: String,
    pub request_uri: String,
    pub return_secure_token: bool,
}

/// Successful response shared by the password and IdP sign-in calls.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthSuccessResponse {
    pub local_id: String,
    #[serde(default)]
    pub email: Option<String>,
    pub id_token: String,
    pub refresh_token: String,
    /// Seconds until `id_token` expires, as a decimal string.
    pub expires_in: String,
}

/// Successful refresh-token exchange. This endpoint speaks snake_case.
#[derive(Debug, Deserialize)]
pub struct RefreshResponse {
    pub user_id: String,
    pub id_token: String,
    pub refresh_token: String,
    pub expires_in: String,
}

/// Credential posted back by the federated popup handler.
#[derive(Debug, Deserialize, PartialEq, Eq)]
pub struct PopupCredential {
    pub kind: String,
    pub provider_id: String,
    pub id_token: String,
}

/// Marker distinguishing credential messages from unrelated window traffic.
pub const POPUP_CREDENTIAL_KIND: &str = "identity-credential";

/// Parse a message posted by the popup handler. Non-credential messages and
/// malformed payloads return `None` and are ignored by the listener.
pub fn parse_popup_message(raw: &str) -> Option<PopupCredential> {
    let credential: PopupCredential = serde_json::from_str(raw).ok()?;
    if credential.kind == POPUP_CREDENTIAL_KIND {
        Some(credential)
    } else {
        None
    }
}
