//! Clickable card for one public-service category.

use leptos::prelude::*;

use crate::util::catalog::Service;

/// A service card on the selector grid; clicking anywhere selects it.
#[component]
pub fn ServiceCard(service: &'static Service, on_select: Callback<&'static Service>) -> impl IntoView {
    view! {
        <div class="service-card" on:click=move |_| on_select.run(service)>
            <header class="service-card__header">
                <span class="service-card__icon">{service.icon}</span>
                <h3 class="service-card__title">{service.name}</h3>
            </header>
            <p class="service-card__description">{service.description}</p>
            <footer class="service-card__footer">
                <span>"Provide Feedback"</span>
                <span class="service-card__arrow">"→"</span>
            </footer>
        </div>
    }
}
