//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::toast_host::ToastHost;
use crate::identity::client::IdentityClient;
use crate::identity::config::IdentityConfig;
use crate::pages::{home::HomePage, login::LoginPage, review::ReviewPage};
use crate::state::session::SessionState;
use crate::state::toast::ToastState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the identity client and the session/toast contexts, and sets up
/// client-side routing. The session signal has exactly one writer: the
/// identity subscription installed here, released again on cleanup.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    let toasts = RwSignal::new(ToastState::default());
    let identity = IdentityClient::new(IdentityConfig::from_build_env());

    let subscription = identity.subscribe(move |user| session.set(SessionState::from_event(user)));
    identity.start();
    {
        let identity = identity.clone();
        on_cleanup(move || identity.unsubscribe(subscription));
    }

    provide_context(session);
    provide_context(toasts);
    provide_context(identity);

    view! {
        <Stylesheet id="leptos" href="/pkg/civic-feedback.css"/>
        <Title text="Public Services Feedback"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("") view=HomePage/>
                <Route
                    path=(StaticSegment("review"), ParamSegment("district"), ParamSegment("service"))
                    view=ReviewPage
                />
            </Routes>
        </Router>
        <ToastHost/>
    }
}
