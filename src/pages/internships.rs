//! Internships page: the internship board, filtered client-side.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::chat_widget::ChatWidget;
use crate::components::internship_card::InternshipCard;
use crate::components::navbar::Navbar;
use crate::state::listings::{filter_internships, InternshipsState};
use crate::state::session::SessionState;
use crate::util::guard;

/// Internship board. Redirects to `/login` if the user is not authenticated.
#[component]
pub fn InternshipsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    guard::install_protected_redirect(session, navigate);

    let internships = RwSignal::new(InternshipsState::default());
    let search = RwSignal::new(String::new());
    let location = RwSignal::new(String::new());
    let work_type = RwSignal::new("all".to_owned());

    let fetched = RwSignal::new(false);
    Effect::new(move || {
        if fetched.get() {
            return;
        }
        let state = session.get();
        if !state.is_authenticated() {
            return;
        }
        let Some(token) = state.token else {
            return;
        };
        fetched.set(true);
        internships.update(|i| i.loading = true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_internships(&token).await {
                Ok(list) => internships.update(|i| {
                    i.items = list.internships;
                    i.loading = false;
                    i.error = None;
                }),
                Err(e) => internships.update(|i| {
                    i.loading = false;
                    i.error = Some(e.to_string());
                }),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
        }
    });

    let visible = move || {
        filter_internships(
            &internships.get().items,
            &search.get(),
            &location.get(),
            &work_type.get(),
        )
    };

    view! {
        <Show
            when=move || session.get().is_authenticated()
            fallback=move || {
                view! {
                    <div class="internships-page">
                        <p>
                            {move || {
                                if session.get().loading {
                                    "Loading..."
                                } else {
                                    "Redirecting to login..."
                                }
                            }}
                        </p>
                    </div>
                }
            }
        >
            <div class="internships-page">
                <Navbar/>
                <main class="internships-page__content">
                    <h1 class="internships-page__title">"Internships"</h1>

                    <div class="listing-filters">
                        <input
                            class="listing-filters__search"
                            type="search"
                            placeholder="Search title, company, or keywords"
                            prop:value=move || search.get()
                            on:input=move |ev| search.set(event_target_value(&ev))
                        />
                        <input
                            class="listing-filters__location"
                            type="text"
                            placeholder="Location"
                            prop:value=move || location.get()
                            on:input=move |ev| location.set(event_target_value(&ev))
                        />
                        <select
                            class="listing-filters__type"
                            prop:value=move || work_type.get()
                            on:change=move |ev| work_type.set(event_target_value(&ev))
                        >
                            <option value="all">"All types"</option>
                            <option value="remote">"Remote"</option>
                            <option value="hybrid">"Hybrid"</option>
                            <option value="onsite">"On-site"</option>
                        </select>
                    </div>

                    <Show when=move || internships.get().error.is_some()>
                        <p class="internships-page__error">
                            {move || internships.get().error.unwrap_or_default()}
                        </p>
                    </Show>

                    <Show
                        when=move || !internships.get().loading
                        fallback=move || view! { <p>"Loading internships..."</p> }
                    >
                        <p class="internships-page__count">
                            {move || {
                                let shown = visible().len();
                                let total = internships.get().items.len();
                                format!("Showing {shown} of {total} internships")
                            }}
                        </p>
                        <div class="internships-page__cards">
                            {move || {
                                let items = visible();
                                if items.is_empty() {
                                    return view! {
                                        <p class="internships-page__empty">
                                            "No internships match your filters."
                                        </p>
                                    }
                                        .into_any();
                                }

                                items
                                    .into_iter()
                                    .map(|internship| view! { <InternshipCard internship=internship/> })
                                    .collect::<Vec<_>>()
                                    .into_any()
                            }}
                        </div>
                    </Show>
                </main>
                <ChatWidget/>
            </div>
        </Show>
    }
}
