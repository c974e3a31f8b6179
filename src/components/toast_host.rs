//! App-level host for the transient notification stack.
//!
//! Pages push onto the shared `ToastState`; this component renders the
//! stack and expires each toast after a fixed interval.

use leptos::prelude::*;

use crate::state::toast::{ToastState, ToastVariant};

#[cfg(feature = "hydrate")]
const TOAST_DISMISS_MS: u64 = 5_000;

#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    // Auto-dismiss: schedule an expiry task for every newly pushed id.
    #[cfg(feature = "hydrate")]
    {
        let watermark = StoredValue::new(0u64);
        Effect::new(move || {
            let state = toasts.get();
            for toast in &state.toasts {
                let id = toast.id;
                if id < watermark.get_value() {
                    continue;
                }
                watermark.set_value(id + 1);
                leptos::task::spawn_local(async move {
                    gloo_timers::future::sleep(std::time::Duration::from_millis(TOAST_DISMISS_MS)).await;
                    toasts.update(|t| t.dismiss(id));
                });
            }
        });
    }

    view! {
        <div class="toast-host">
            {move || {
                toasts
                    .get()
                    .toasts
                    .into_iter()
                    .map(|toast| {
                        let class = match toast.variant {
                            ToastVariant::Default => "toast",
                            ToastVariant::Destructive => "toast toast--destructive",
                        };
                        let id = toast.id;
                        let description = (!toast.description.is_empty())
                            .then(|| view! { <p class="toast__description">{toast.description.clone()}</p> });
                        view! {
                            <div class=class>
                                <div class="toast__body">
                                    <p class="toast__title">{toast.title.clone()}</p>
                                    {description}
                                </div>
                                <button class="toast__dismiss" on:click=move |_| toasts.update(|t| t.dismiss(id))>
                                    "×"
                                </button>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
