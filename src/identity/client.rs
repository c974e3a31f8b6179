//! Identity client: sign-in flows, token issuance, and the user-changed
//! subscription registry.
//!
//! The client is a cheap-to-clone handle shared through Leptos context. It
//! owns the persisted credential record (browser local storage, so reloads
//! and sibling tabs converge on the same session) and notifies subscribers
//! whenever the signed-in user changes: sign-in, sign-up, federated
//! completion, sign-out, and the one-shot restore at startup.
//!
//! All provider HTTP and browser interop is gated behind
//! `#[cfg(feature = "hydrate")]`; server-side renders see an inert client
//! whose session stays unresolved.
//!
//! ERROR HANDLING
//! ==============
//! Sign-in operations return `AuthError` for the caller to translate.
//! `get_token` never errors: a missing user or a failed refresh resolves to
//! `None` so callers can proceed unauthenticated or redirect.

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::identity::config::IdentityConfig;
use crate::identity::error::AuthError;
#[cfg(feature = "hydrate")]
use crate::identity::error::error_code_from_body;
#[cfg(feature = "hydrate")]
use crate::identity::rest;
#[cfg(feature = "hydrate")]
use crate::identity::user::expiry_from_now;
use crate::identity::user::{StoredCredentials, UserIdentity, token_is_fresh};

/// Local-storage key for the persisted credential record.
#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "civic_feedback_session";

/// How often the federated flow checks for a posted credential or a closed
/// popup.
#[cfg(feature = "hydrate")]
const POPUP_POLL_INTERVAL_MS: u64 = 200;

/// Subscriber callback for user-changed events.
pub type UserChangedCallback = Arc<dyn Fn(Option<UserIdentity>) + Send + Sync>;

struct Inner {
    config: IdentityConfig,
    credentials: Option<StoredCredentials>,
    listeners: Vec<(u64, UserChangedCallback)>,
    next_listener_id: u64,
}

/// Handle to the external identity provider.
#[derive(Clone)]
pub struct IdentityClient {
    inner: Arc<Mutex<Inner>>,
}

impl IdentityClient {
    pub fn new(config: IdentityConfig) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                config,
                credentials: None,
                listeners: Vec::new(),
                next_listener_id: 0,
            })),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        // Single-threaded event loop; a poisoned lock only means a panic
        // already unwound mid-update, and the state is still usable.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Register a user-changed subscriber. The returned id cancels delivery
    /// via [`IdentityClient::unsubscribe`].
    pub fn subscribe(&self, callback: impl Fn(Option<UserIdentity>) + Send + Sync + 'static) -> u64 {
        let mut inner = self.lock();
        let id = inner.next_listener_id;
        inner.next_listener_id += 1;
        inner.listeners.push((id, Arc::new(callback)));
        id
    }

    /// Remove a subscriber; unknown ids are a no-op.
    pub fn unsubscribe(&self, id: u64) {
        self.lock().listeners.retain(|(listener_id, _)| *listener_id != id);
    }

    pub fn current_user(&self) -> Option<UserIdentity> {
        self.lock().credentials.as_ref().map(StoredCredentials::user)
    }

    #[cfg(test)]
    fn set_credentials_for_test(&self, credentials: Option<StoredCredentials>) {
        self.lock().credentials = credentials;
    }

    /// Fire a user-changed event. Listeners are invoked outside the lock so
    /// a callback may call back into the client.
    fn notify(&self, user: Option<UserIdentity>) {
        let listeners: Vec<UserChangedCallback> =
            self.lock().listeners.iter().map(|(_, cb)| cb.clone()).collect();
        for callback in listeners {
            callback(user.clone());
        }
    }

    /// Kick off the one-shot session restore. Until it completes (or on the
    /// server, where it never runs) no user-changed event has fired and the
    /// session stays unresolved.
    pub fn start(&self) {
        #[cfg(feature = "hydrate")]
        {
            let client = self.clone();
            leptos::task::spawn_local(async move { client.restore().await });
        }
    }

    /// Drop the current session and notify subscribers.
    pub fn sign_out(&self) {
        self.lock().credentials = None;
        #[cfg(feature = "hydrate")]
        clear_stored_credentials();
        self.notify(None);
    }

    /// Sign an existing user in with email and password.
    pub async fn sign_in_with_password(&self, email: &str, password: &str) -> Result<UserIdentity, AuthError> {
        #[cfg(feature = "hydrate")]
        {
            let endpoint = rest::password_sign_in_endpoint(self.lock().config.api_key);
            let request = rest::PasswordAuthRequest {
                email,
                password,
                return_secure_token: true,
            };
            let response = auth_request(&endpoint, &request).await?;
            Ok(self.adopt_auth_response(response))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email, password);
            Err(AuthError::Unavailable)
        }
    }

    /// Create an account with email and password and sign it in.
    pub async fn sign_up_with_password(&self, email: &str, password: &str) -> Result<UserIdentity, AuthError> {
        #[cfg(feature = "hydrate")]
        {
            let endpoint = rest::sign_up_endpoint(self.lock().config.api_key);
            let request = rest::PasswordAuthRequest {
                email,
                password,
                return_secure_token: true,
            };
            let response = auth_request(&endpoint, &request).await?;
            Ok(self.adopt_auth_response(response))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email, password);
            Err(AuthError::Unavailable)
        }
    }

    /// Run the popup-based federated sign-in flow.
    pub async fn sign_in_federated(&self) -> Result<UserIdentity, AuthError> {
        #[cfg(feature = "hydrate")]
        {
            self.federated_popup_flow().await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(AuthError::Unavailable)
        }
    }

    /// Bearer token for the current user, refreshed through the provider
    /// when the recorded one is within the expiry skew. `None` when no user
    /// is signed in or the refresh fails.
    pub async fn get_token(&self) -> Option<String> {
        let (fresh_token, refresh_token) = {
            let inner = self.lock();
            let Some(credentials) = inner.credentials.as_ref() else {
                return None;
            };
            if token_is_fresh(now_ms(), credentials.expires_at_ms) {
                (Some(credentials.id_token.clone()), None)
            } else {
                (None, Some(credentials.refresh_token.clone()))
            }
        };
        if let Some(token) = fresh_token {
            return Some(token);
        }
        #[cfg(feature = "hydrate")]
        {
            let refresh_token = refresh_token?;
            match self.refresh(&refresh_token).await {
                Ok(token) => Some(token),
                Err(error) => {
                    leptos::logging::warn!("token refresh failed: {error}");
                    None
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = refresh_token;
            None
        }
    }

    /// Restore the persisted session, refreshing a stale token before the
    /// first user-changed event so pages never see an already-expired
    /// session.
    #[cfg(feature = "hydrate")]
    async fn restore(&self) {
        let Some(credentials) = read_stored_credentials() else {
            self.notify(None);
            return;
        };

        if token_is_fresh(now_ms(), credentials.expires_at_ms) {
            let user = credentials.user();
            self.lock().credentials = Some(credentials);
            self.notify(Some(user));
            return;
        }

        let refresh_token = credentials.refresh_token.clone();
        self.lock().credentials = Some(credentials);
        match self.refresh(&refresh_token).await {
            Ok(_) => {
                let user = self.current_user();
                self.notify(user);
            }
            Err(error) => {
                leptos::logging::warn!("session restore failed: {error}");
                self.lock().credentials = None;
                clear_stored_credentials();
                self.notify(None);
            }
        }
    }

    /// Exchange the refresh token for a fresh bearer token and rotate the
    /// stored record.
    #[cfg(feature = "hydrate")]
    async fn refresh(&self, refresh_token: &str) -> Result<String, AuthError> {
        let endpoint = rest::refresh_endpoint(self.lock().config.api_key);
        let body = rest::refresh_request_body(refresh_token);
        let response = gloo_net::http::Request::post(&endpoint)
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(body)
            .map_err(|e| AuthError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| AuthError::Network(e.to_string()))?;
        if !response.ok() {
            return Err(provider_error(&response).await);
        }
        let refreshed: rest::RefreshResponse =
            response.json().await.map_err(|e| AuthError::Network(e.to_string()))?;

        let mut inner = self.lock();
        let email = inner.credentials.as_ref().and_then(|c| c.email.clone());
        let rotated = StoredCredentials {
            uid: refreshed.user_id,
            email,
            id_token: refreshed.id_token.clone(),
            refresh_token: refreshed.refresh_token,
            expires_at_ms: expiry_from_now(now_ms(), &refreshed.expires_in),
        };
        inner.credentials = Some(rotated.clone());
        drop(inner);
        write_stored_credentials(&rotated);
        Ok(refreshed.id_token)
    }

    /// Adopt a successful sign-in response: persist credentials and fire the
    /// user-changed event.
    #[cfg(feature = "hydrate")]
    fn adopt_auth_response(&self, response: rest::AuthSuccessResponse) -> UserIdentity {
        let credentials = StoredCredentials {
            uid: response.local_id,
            email: response.email,
            id_token: response.id_token,
            refresh_token: response.refresh_token,
            expires_at_ms: expiry_from_now(now_ms(), &response.expires_in),
        };
        let user = credentials.user();
        self.lock().credentials = Some(credentials.clone());
        write_stored_credentials(&credentials);
        self.notify(Some(user.clone()));
        user
    }

    /// Open the provider's hosted handler in a popup and wait for it to post
    /// a credential back, then exchange that credential for a session.
    ///
    /// The popup closing before a credential arrives maps to
    /// [`AuthError::PopupClosed`]; unrelated window messages are ignored.
    #[cfg(feature = "hydrate")]
    async fn federated_popup_flow(&self) -> Result<UserIdentity, AuthError> {
        use std::cell::RefCell;
        use std::rc::Rc;

        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        let (popup_url, trusted_origin, api_key) = {
            let inner = self.lock();
            (
                rest::federated_popup_url(&inner.config, rest::GOOGLE_PROVIDER_ID),
                rest::auth_origin(&inner.config),
                inner.config.api_key,
            )
        };

        let window = web_sys::window().ok_or(AuthError::Unavailable)?;
        let popup = window
            .open_with_url_and_target(&popup_url, "_blank")
            .map_err(|_| AuthError::PopupClosed)?
            .ok_or(AuthError::PopupClosed)?;

        let (sender, mut receiver) = futures::channel::oneshot::channel::<rest::PopupCredential>();
        let sender = Rc::new(RefCell::new(Some(sender)));
        let sender_for_listener = sender.clone();
        let on_message = Closure::<dyn FnMut(web_sys::MessageEvent)>::new(move |event: web_sys::MessageEvent| {
            if event.origin() != trusted_origin {
                return;
            }
            let Some(raw) = event.data().as_string() else {
                return;
            };
            if let Some(credential) = rest::parse_popup_message(&raw) {
                if let Some(sender) = sender_for_listener.borrow_mut().take() {
                    let _ = sender.send(credential);
                }
            }
        });
        window
            .add_event_listener_with_callback("message", on_message.as_ref().unchecked_ref())
            .map_err(|_| AuthError::Unavailable)?;

        let outcome = loop {
            match receiver.try_recv() {
                Ok(Some(credential)) => break Ok(credential),
                Ok(None) => {}
                Err(_) => break Err(AuthError::PopupClosed),
            }
            if popup.closed() {
                break Err(AuthError::PopupClosed);
            }
            gloo_timers::future::sleep(std::time::Duration::from_millis(POPUP_POLL_INTERVAL_MS)).await;
        };

        let _ = window.remove_event_listener_with_callback("message", on_message.as_ref().unchecked_ref());
        drop(on_message);

        let credential = outcome?;
        let _ = popup.close();

        let request_uri = window.location().origin().map_err(|_| AuthError::Unavailable)?;
        let endpoint = rest::idp_sign_in_endpoint(api_key);
        let request = rest::IdpSignInRequest {
            post_body: rest::idp_post_body(&credential.provider_id, &credential.id_token),
            request_uri,
            return_secure_token: true,
        };
        let response = auth_request(&endpoint, &request).await?;
        Ok(self.adopt_auth_response(response))
    }
}

/// Milliseconds since the Unix epoch; `0` on the server, which keeps every
/// stored token "stale" there.
fn now_ms() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}

/// POST a JSON auth request and parse the shared success shape.
#[cfg(feature = "hydrate")]
async fn auth_request(
    endpoint: &str,
    request: &impl serde::Serialize,
) -> Result<rest::AuthSuccessResponse, AuthError> {
    let response = gloo_net::http::Request::post(endpoint)
        .json(request)
        .map_err(|e| AuthError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| AuthError::Network(e.to_string()))?;
    if !response.ok() {
        return Err(provider_error(&response).await);
    }
    response.json().await.map_err(|e| AuthError::Network(e.to_string()))
}

/// Map a non-success provider response to an [`AuthError`].
#[cfg(feature = "hydrate")]
async fn provider_error(response: &gloo_net::http::Response) -> AuthError {
    let body: serde_json::Value = response.json().await.unwrap_or(serde_json::Value::Null);
    match error_code_from_body(&body) {
        Some(code) => AuthError::from_provider_code(&code),
        None => AuthError::Provider(format!("status {}", response.status())),
    }
}

#[cfg(feature = "hydrate")]
fn read_stored_credentials() -> Option<StoredCredentials> {
    let storage = web_sys::window()?.local_storage().ok()??;
    let raw = storage.get_item(STORAGE_KEY).ok()??;
    serde_json::from_str(&raw).ok()
}

#[cfg(feature = "hydrate")]
fn write_stored_credentials(credentials: &StoredCredentials) {
    if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
        if let Ok(raw) = serde_json::to_string(credentials) {
            let _ = storage.set_item(STORAGE_KEY, &raw);
        }
    }
}

#[cfg(feature = "hydrate")]
fn clear_stored_credentials() {
    if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.remove_item(STORAGE_KEY);
    }
}
