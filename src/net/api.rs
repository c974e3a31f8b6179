//! REST calls to the feedback backend.
//!
//! In the browser (hydrate) these are real `gloo-net` requests; on the
//! server they are inert stubs, since both endpoints only make sense with a
//! live user session.
//!
//! ERROR HANDLING
//! ==============
//! Any non-success status or transport failure is an opaque failure for the
//! caller to surface as a notification. Aborted summary fetches are
//! distinguished so superseded requests can be dropped silently.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use crate::net::types::FeedbackRequest;

const DEFAULT_BACKEND_BASE: &str = "https://publicservice-backend.onrender.com";

/// Backend base URL baked into this build.
pub fn backend_base() -> &'static str {
    option_env!("FEEDBACK_BACKEND_URL").unwrap_or(DEFAULT_BACKEND_BASE)
}

#[cfg(any(test, feature = "hydrate"))]
fn summary_endpoint(base: &str, district: &str, service: &str) -> String {
    format!("{base}/summary/{district}/{}", urlencoding::encode(service))
}

#[cfg(any(test, feature = "hydrate"))]
fn submit_feedback_endpoint(base: &str) -> String {
    format!("{base}/submit_feedback")
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

#[cfg(any(test, feature = "hydrate"))]
fn summary_failed_message(status: u16) -> String {
    format!("summary request failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn submit_failed_message(status: u16) -> String {
    format!("feedback submit failed: {status}")
}

/// Failure modes of the summary fetch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FetchError {
    /// The request was aborted because a newer one superseded it (or the
    /// page unmounted). Callers drop this silently.
    Aborted,
    Failed(String),
}

/// Fetch the feedback summary for a district/service pair.
///
/// The bearer token is attached when present; without one the request goes
/// out unauthenticated and the backend decides. `signal` ties the request to
/// the caller's abort scope.
///
/// # Errors
///
/// `FetchError::Aborted` when the abort signal fired, `FetchError::Failed`
/// for any non-success status or transport failure.
pub async fn fetch_summary(
    token: Option<&str>,
    district: &str,
    service: &str,
    #[cfg(feature = "hydrate")] signal: Option<&web_sys::AbortSignal>,
) -> Result<String, FetchError> {
    #[cfg(feature = "hydrate")]
    {
        let url = summary_endpoint(backend_base(), district, service);
        let mut request = gloo_net::http::Request::get(&url).abort_signal(signal);
        if let Some(token) = token {
            request = request.header("Authorization", &bearer_header(token));
        }
        let response = request.send().await.map_err(classify_fetch_error)?;
        if !response.ok() {
            return Err(FetchError::Failed(summary_failed_message(response.status())));
        }
        let body: crate::net::types::SummaryResponse =
            response.json().await.map_err(classify_fetch_error)?;
        Ok(body.summary)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, district, service);
        Err(FetchError::Failed("not available on server".to_owned()))
    }
}

/// Submit feedback text for a district/service pair.
///
/// # Errors
///
/// Returns an error string for any non-success status or transport failure;
/// the typed text stays with the caller for retry.
pub async fn submit_feedback(token: Option<&str>, request: &FeedbackRequest) -> Result<String, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = submit_feedback_endpoint(backend_base());
        let mut builder = gloo_net::http::Request::post(&url);
        if let Some(token) = token {
            builder = builder.header("Authorization", &bearer_header(token));
        }
        let response = builder
            .json(request)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !response.ok() {
            return Err(submit_failed_message(response.status()));
        }
        let body: crate::net::types::FeedbackResponse = response.json().await.map_err(|e| e.to_string())?;
        Ok(body.response)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, request);
        Err("not available on server".to_owned())
    }
}

/// Distinguish an abort (signal fired) from a genuine transport failure.
#[cfg(feature = "hydrate")]
fn classify_fetch_error(error: gloo_net::Error) -> FetchError {
    if let gloo_net::Error::JsError(js_error) = &error {
        if js_error.name == "AbortError" {
            return FetchError::Aborted;
        }
    }
    FetchError::Failed(error.to_string())
}
