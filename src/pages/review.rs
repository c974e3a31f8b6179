//! Review page — feedback entry and the AI summary for one
//! district/service pair.
//!
//! DESIGN
//! ======
//! The summary fetch is tied to the `(district, service, session)` triple:
//! whenever it changes, the in-flight request is aborted and a new fetch
//! ticket is issued. Completions holding a stale ticket are dropped, so the
//! rendered summary always corresponds to the current triple regardless of
//! network completion order. Feedback submission is gated by a submitting
//! flag, one attempt in flight per page instance.

#[cfg(test)]
#[path = "review_test.rs"]
mod review_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::identity::client::IdentityClient;
use crate::net::types::FeedbackRequest;
use crate::state::session::SessionState;
use crate::state::toast::ToastState;
use crate::util::auth::install_unauth_redirect;
use crate::util::catalog::{district_display_name, service_icon};

/// Issues fetch tickets and decides which completion may publish. Starting
/// a new fetch or invalidating the page supersedes everything in flight.
#[cfg(any(test, feature = "hydrate"))]
#[derive(Clone, Copy, Debug, Default)]
struct FetchTracker {
    current: u64,
}

#[cfg(any(test, feature = "hydrate"))]
impl FetchTracker {
    fn begin(&mut self) -> u64 {
        self.current += 1;
        self.current
    }

    fn may_publish(self, ticket: u64) -> bool {
        self.current == ticket
    }

    fn invalidate(&mut self) {
        self.current += 1;
    }
}

fn feedback_is_empty(text: &str) -> bool {
    text.trim().is_empty()
}

/// Split a summary into displayable paragraphs on blank lines.
fn summary_paragraphs(summary: &str) -> Vec<String> {
    summary
        .split("\n\n")
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_owned)
        .collect()
}

#[component]
pub fn ReviewPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let client = expect_context::<IdentityClient>();
    let navigate = use_navigate();
    let params = use_params_map();

    install_unauth_redirect(session, navigate.clone());

    // Route params arrive percent-decoded.
    let district = move || params.read().get("district").unwrap_or_default();
    let service = move || params.read().get("service").unwrap_or_default();

    let summary = RwSignal::new(None::<String>);
    let summary_loading = RwSignal::new(false);
    let feedback = RwSignal::new(String::new());
    let submitting = RwSignal::new(false);
    let response = RwSignal::new(None::<String>);

    // Summary fetch, re-run whenever the (district, service, session)
    // triple changes. Superseded requests are aborted and their completions
    // dropped by ticket mismatch.
    #[cfg(feature = "hydrate")]
    {
        let tracker = StoredValue::new(FetchTracker::default());
        let controller = StoredValue::new_local(None::<web_sys::AbortController>);
        let fetch_client = client.clone();

        Effect::new(move || {
            let district_value = district();
            let service_value = service();
            let session_state = session.get();
            if district_value.is_empty() || service_value.is_empty() || !session_state.is_resolved() {
                return;
            }

            if let Some(previous) = controller.try_update_value(Option::take).flatten() {
                previous.abort();
            }
            let ticket = tracker.try_update_value(FetchTracker::begin).unwrap_or(0);
            let next_controller = web_sys::AbortController::new().ok();
            let abort_signal = next_controller.as_ref().map(web_sys::AbortController::signal);
            controller.try_set_value(next_controller);

            summary_loading.set(true);
            let client = fetch_client.clone();
            leptos::task::spawn_local(async move {
                let token = client.get_token().await;
                let result = crate::net::api::fetch_summary(
                    token.as_deref(),
                    &district_value,
                    &service_value,
                    abort_signal.as_ref(),
                )
                .await;

                if !tracker.try_get_value().unwrap_or_default().may_publish(ticket) {
                    return;
                }
                match result {
                    Ok(text) => {
                        summary.set(Some(text));
                        summary_loading.set(false);
                    }
                    Err(crate::net::api::FetchError::Aborted) => {}
                    Err(crate::net::api::FetchError::Failed(message)) => {
                        leptos::logging::warn!("summary fetch failed: {message}");
                        summary.set(None);
                        summary_loading.set(false);
                        toasts.update(|t| {
                            t.push_destructive(
                                "Error fetching summary",
                                "Could not load the feedback summary. Please try again later.",
                            );
                        });
                    }
                }
            });
        });

        on_cleanup(move || {
            tracker.try_update_value(FetchTracker::invalidate);
            if let Some(previous) = controller.try_update_value(Option::take).flatten() {
                previous.abort();
            }
        });
    }

    let submit_client = client.clone();
    let on_submit = move |_| {
        if submitting.get() {
            return;
        }
        let text = feedback.get();
        if feedback_is_empty(&text) {
            toasts.update(|t| {
                t.push_destructive("Empty feedback", "Please provide some feedback before submitting");
            });
            return;
        }
        submitting.set(true);

        let request = FeedbackRequest {
            district_name: district(),
            service_type: service(),
            user_feedback: text,
        };
        let client = submit_client.clone();
        leptos::task::spawn_local(async move {
            let token = client.get_token().await;
            match crate::net::api::submit_feedback(token.as_deref(), &request).await {
                Ok(ack) => {
                    response.set(Some(ack));
                    feedback.set(String::new());
                    toasts.update(|t| {
                        t.push_default("Feedback submitted", "Thank you for your feedback!");
                    });
                }
                Err(message) => {
                    leptos::logging::warn!("feedback submit failed: {message}");
                    toasts.update(|t| {
                        t.push_destructive(
                            "Submission failed",
                            "Could not submit your feedback. Please try again later.",
                        );
                    });
                }
            }
            submitting.set(false);
        });
    };

    let back_navigate = navigate.clone();

    view! {
        <div class="review-page">
            <button class="btn review-page__back" on:click=move |_| back_navigate("/", NavigateOptions::default())>
                "← Back to Services"
            </button>

            <section class="review-card">
                <header class="review-card__header">
                    <div>
                        <h1 class="review-card__title">{move || service()}</h1>
                        <p class="review-card__subtitle">
                            {move || format!("Provide feedback for {}", district_display_name(&district()))}
                        </p>
                    </div>
                    <span class="review-card__icon">{move || service_icon(&service()).unwrap_or_default()}</span>
                </header>
                <textarea
                    class="review-card__input"
                    placeholder="Share your experience, concerns, or suggestions about this service in your district..."
                    prop:value=move || feedback.get()
                    on:input=move |ev| feedback.set(event_target_value(&ev))
                ></textarea>
                <footer class="review-card__footer">
                    <button class="btn btn--primary" disabled=move || submitting.get() on:click=on_submit>
                        {move || if submitting.get() { "Submitting..." } else { "Submit Feedback" }}
                    </button>
                </footer>
            </section>

            <Show when=move || response.get().is_some()>
                <section class="review-response">
                    <h2>"Response from the department"</h2>
                    <p>{move || response.get().unwrap_or_default()}</p>
                </section>
            </Show>

            <section class="review-summary">
                <h2>"Feedback Summary"</h2>
                {move || {
                    if summary_loading.get() {
                        view! {
                            <div class="review-summary__skeleton">
                                <div class="skeleton-row"></div>
                                <div class="skeleton-row"></div>
                                <div class="skeleton-row"></div>
                                <div class="skeleton-row"></div>
                            </div>
                        }
                            .into_any()
                    } else if let Some(text) = summary.get() {
                        view! {
                            <div class="review-summary__body">
                                {summary_paragraphs(&text)
                                    .into_iter()
                                    .map(|paragraph| view! { <p>{paragraph}</p> })
                                    .collect::<Vec<_>>()}
                            </div>
                        }
                            .into_any()
                    } else {
                        view! {
                            <p class="review-summary__empty">
                                "No summary available for this service in your district."
                            </p>
                        }
                            .into_any()
                    }
                }}
            </section>
        </div>
    }
}
