//! Auth page driving password sign-in/sign-up and federated sign-in.
//!
//! DESIGN
//! ======
//! Both credential flows run through one `AuthFlow` state machine, so a
//! password attempt and a federated attempt can never be in flight at the
//! same time; each button still derives its own loading label from the flow
//! variant. Validation runs before any identity call, and exactly one error
//! message is visible at a time.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::identity::client::IdentityClient;
use crate::identity::error::AuthError;

/// Which credential flow the form drives.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    Login,
    Register,
}

/// Serializes auth attempts: at most one may be in flight.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthFlow {
    #[default]
    Idle,
    SubmittingPassword,
    SubmittingFederated,
}

impl AuthFlow {
    pub fn is_busy(self) -> bool {
        self != Self::Idle
    }
}

pub const MIN_PASSWORD_LEN: usize = 6;

const GENERIC_AUTH_MESSAGE: &str = "Authentication failed. Please try again.";

/// Basic `local@domain.tld` shape; any whitespace disqualifies.
fn is_valid_email(email: &str) -> bool {
    if email.is_empty() || email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() {
        return false;
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !host.is_empty() && !tld.is_empty()
}

/// Validate the form ahead of any identity call.
fn validate_form(mode: AuthMode, email: &str, password: &str, confirm: &str) -> Result<(), &'static str> {
    if !is_valid_email(email) {
        return Err("Enter a valid email address");
    }
    if password.len() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 6 characters");
    }
    if mode == AuthMode::Register && password != confirm {
        return Err("Passwords do not match");
    }
    Ok(())
}

/// Fixed table from identity errors to user-facing copy; everything outside
/// the table falls back to the generic message.
fn auth_error_message(error: &AuthError) -> &'static str {
    match error {
        AuthError::InvalidEmail => "Invalid email address",
        AuthError::UserDisabled => "Account disabled",
        AuthError::UserNotFound => "Account not found",
        AuthError::WrongPassword => "Incorrect password",
        AuthError::EmailInUse => "Email already in use",
        AuthError::WeakPassword => "Password should be at least 6 characters",
        AuthError::PopupClosed => "Sign-in cancelled",
        AuthError::Network(_) | AuthError::Provider(_) | AuthError::Unavailable => GENERIC_AUTH_MESSAGE,
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let client = expect_context::<IdentityClient>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let show_password = RwSignal::new(false);
    let error = RwSignal::new(String::new());
    let mode = RwSignal::new(AuthMode::Login);
    let flow = RwSignal::new(AuthFlow::Idle);

    let password_client = client.clone();
    let password_navigate = navigate.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if flow.get().is_busy() {
            return;
        }
        error.set(String::new());

        let current_mode = mode.get();
        let email_value = email.get().trim().to_owned();
        let password_value = password.get();
        if let Err(reason) = validate_form(current_mode, &email_value, &password_value, &confirm.get()) {
            error.set(reason.to_owned());
            return;
        }
        flow.set(AuthFlow::SubmittingPassword);

        let client = password_client.clone();
        let navigate = password_navigate.clone();
        leptos::task::spawn_local(async move {
            let result = match current_mode {
                AuthMode::Login => client.sign_in_with_password(&email_value, &password_value).await,
                AuthMode::Register => client.sign_up_with_password(&email_value, &password_value).await,
            };
            match result {
                Ok(_) => navigate("/", NavigateOptions::default()),
                Err(auth_error) => {
                    error.set(auth_error_message(&auth_error).to_owned());
                    flow.set(AuthFlow::Idle);
                }
            }
        });
    };

    let google_client = client.clone();
    let google_navigate = navigate.clone();
    let on_google = move |_| {
        if flow.get().is_busy() {
            return;
        }
        error.set(String::new());
        flow.set(AuthFlow::SubmittingFederated);

        let client = google_client.clone();
        let navigate = google_navigate.clone();
        leptos::task::spawn_local(async move {
            match client.sign_in_federated().await {
                Ok(_) => navigate("/", NavigateOptions::default()),
                Err(auth_error) => {
                    error.set(auth_error_message(&auth_error).to_owned());
                    flow.set(AuthFlow::Idle);
                }
            }
        });
    };

    // Keeps the typed email/password; only the error resets.
    let on_toggle_mode = move |_| {
        mode.update(|m| {
            *m = match m {
                AuthMode::Login => AuthMode::Register,
                AuthMode::Register => AuthMode::Login,
            };
        });
        error.set(String::new());
    };

    let heading = move || match mode.get() {
        AuthMode::Login => "Welcome Back",
        AuthMode::Register => "Create Account",
    };
    let submit_label = move || match (flow.get(), mode.get()) {
        (AuthFlow::SubmittingPassword, AuthMode::Login) => "Signing in...",
        (AuthFlow::SubmittingPassword, AuthMode::Register) => "Creating account...",
        (_, AuthMode::Login) => "Sign In",
        (_, AuthMode::Register) => "Sign Up",
    };
    let google_label = move || {
        if flow.get() == AuthFlow::SubmittingFederated {
            "Signing in..."
        } else {
            "Continue with Google"
        }
    };
    let toggle_label = move || match mode.get() {
        AuthMode::Login => "Don't have an account? Sign Up",
        AuthMode::Register => "Already have an account? Sign In",
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <header class="login-card__header">
                    <h1>{heading}</h1>
                    <p class="login-card__subtitle">"Sign in to continue"</p>
                </header>

                <Show when=move || !error.get().is_empty()>
                    <p class="login-error">{move || error.get()}</p>
                </Show>

                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="Email address"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <div class="login-password-row">
                        <input
                            class="login-input"
                            type=move || if show_password.get() { "text" } else { "password" }
                            placeholder="Password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                        <button
                            class="login-password-toggle"
                            type="button"
                            on:click=move |_| show_password.update(|s| *s = !*s)
                        >
                            {move || if show_password.get() { "Hide" } else { "Show" }}
                        </button>
                    </div>
                    <Show when=move || mode.get() == AuthMode::Register>
                        <input
                            class="login-input"
                            type="password"
                            placeholder="Confirm password"
                            prop:value=move || confirm.get()
                            on:input=move |ev| confirm.set(event_target_value(&ev))
                        />
                    </Show>
                    <button class="login-button" type="submit" disabled=move || flow.get().is_busy()>
                        {submit_label}
                    </button>
                </form>

                <div class="login-divider">
                    <span>"OR"</span>
                </div>

                <button class="login-button login-button--google" on:click=on_google disabled=move || flow.get().is_busy()>
                    {google_label}
                </button>

                <div class="login-card__links">
                    <button class="login-link" type="button" on:click=on_toggle_mode disabled=move || flow.get().is_busy()>
                        {toggle_label}
                    </button>
                    <a class="login-link" href="/reset-password">
                        "Forgot password?"
                    </a>
                </div>

                <footer class="login-card__footer">
                    <p>"By signing in, you agree to our Terms of Service and Privacy Policy"</p>
                </footer>
            </div>
        </div>
    }
}
