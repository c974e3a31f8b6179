//! Searchable district dropdown.

use leptos::prelude::*;

use crate::util::catalog::{District, filter_districts};

/// Combobox over the static district table with a substring search input.
#[component]
pub fn DistrictPicker(selected: RwSignal<Option<&'static District>>) -> impl IntoView {
    let open = RwSignal::new(false);
    let query = RwSignal::new(String::new());

    let label = move || {
        selected
            .get()
            .map_or_else(|| "Select district...".to_owned(), |d| d.name.to_owned())
    };

    view! {
        <div class="district-picker">
            <button
                class="district-picker__trigger"
                on:click=move |_| {
                    query.set(String::new());
                    open.update(|o| *o = !*o);
                }
            >
                {label}
            </button>
            <Show when=move || open.get()>
                <div class="district-picker__menu">
                    <input
                        class="district-picker__search"
                        type="text"
                        placeholder="Search district..."
                        prop:value=move || query.get()
                        on:input=move |ev| query.set(event_target_value(&ev))
                    />
                    {move || {
                        let hits = filter_districts(&query.get());
                        if hits.is_empty() {
                            view! { <p class="district-picker__empty">"No district found."</p> }.into_any()
                        } else {
                            view! {
                                <ul class="district-picker__list">
                                    {hits
                                        .into_iter()
                                        .map(|district| {
                                            view! {
                                                <li>
                                                    <button
                                                        class="district-picker__item"
                                                        on:click=move |_| {
                                                            selected.set(Some(district));
                                                            open.set(false);
                                                        }
                                                    >
                                                        {district.name}
                                                    </button>
                                                </li>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </ul>
                            }
                                .into_any()
                        }
                    }}
                </div>
            </Show>
        </div>
    }
}
