//! Home page — district and service selection.
//!
//! Lets the user pick a district manually or via geolocation, then pick a
//! service, and navigates to the review page for that pair. Selecting a
//! service without a district is rejected with a notification.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::district_picker::DistrictPicker;
use crate::components::service_card::ServiceCard;
use crate::identity::client::IdentityClient;
use crate::state::session::{SessionState, SessionStatus};
use crate::state::toast::ToastState;
use crate::util::auth::install_unauth_redirect;
use crate::util::catalog::{District, SERVICES, Service};
use crate::util::geo::detect_district;

/// Route of the review page for a district/service pair.
fn review_path(district_code: &str, service_name: &str) -> String {
    format!("/review/{district_code}/{}", urlencoding::encode(service_name))
}

#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let client = expect_context::<IdentityClient>();
    let navigate = use_navigate();

    install_unauth_redirect(session, navigate.clone());

    let selected_district = RwSignal::new(None::<&'static District>);
    let locating = RwSignal::new(false);

    let run_locate = move || {
        if locating.get() {
            return;
        }
        locating.set(true);
        detect_district(move |result| {
            locating.set(false);
            match result {
                Ok(district) => {
                    selected_district.set(Some(district));
                    toasts.update(|t| {
                        t.push_default(
                            "Location detected",
                            &format!("We've set your district to {}", district.name),
                        );
                    });
                }
                Err(reason) => {
                    leptos::logging::warn!("location detection failed: {reason}");
                    toasts.update(|t| {
                        t.push_destructive("Location detection failed", "Please select your district manually");
                    });
                }
            }
        });
    };

    // Detect the district once after the session resolves signed-in, unless
    // the user already picked one.
    let auto_located = StoredValue::new(false);
    Effect::new(move || {
        if session.get().status != SessionStatus::Authenticated {
            return;
        }
        if selected_district.get_untracked().is_some() || auto_located.get_value() {
            return;
        }
        auto_located.set_value(true);
        run_locate();
    });

    let select_navigate = navigate.clone();
    let on_service_select = Callback::new(move |service: &'static Service| {
        let Some(district) = selected_district.get() else {
            toasts.update(|t| {
                t.push_destructive("No district selected", "Please select a district first");
            });
            return;
        };
        select_navigate(&review_path(district.code, service.name), NavigateOptions::default());
    });

    let email_label = move || {
        session
            .get()
            .user
            .and_then(|u| u.email)
            .unwrap_or_default()
    };
    let sign_out_client = client.clone();
    let on_sign_out = move |_| sign_out_client.sign_out();

    view! {
        <div class="home-page">
            <header class="home-page__header">
                <h1>"Public Services Feedback"</h1>
                <div class="home-page__session">
                    <span class="home-page__email">{email_label}</span>
                    <button class="btn" on:click=on_sign_out>
                        "Sign Out"
                    </button>
                </div>
            </header>

            <p class="home-page__intro">
                "Help improve your community by providing feedback on public services in your district."
            </p>

            <div class="home-page__selector">
                <DistrictPicker selected=selected_district/>
                <button
                    class="btn home-page__locate"
                    title="Detect location"
                    disabled=move || locating.get()
                    on:click=move |_| run_locate()
                >
                    {move || if locating.get() { "Locating..." } else { "Detect location" }}
                </button>
            </div>

            <div class="home-page__services">
                {SERVICES
                    .iter()
                    .map(|service| view! { <ServiceCard service=service on_select=on_service_select/> })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}
