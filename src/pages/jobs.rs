//! Jobs page: the full listing board, filtered client-side.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::chat_widget::ChatWidget;
use crate::components::job_card::JobCard;
use crate::components::navbar::Navbar;
use crate::state::listings::{filter_jobs, JobsState};
use crate::state::session::SessionState;
use crate::util::guard;

/// Job board. Redirects to `/login` if the user is not authenticated.
///
/// The backend list is fetched once per visit; search, location, and work
/// type filters narrow it without further requests.
#[component]
pub fn JobsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    guard::install_protected_redirect(session, navigate);

    let jobs = RwSignal::new(JobsState::default());
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
        jobs.update(|j| j.loading = true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_jobs(&token).await {
                Ok(list) => jobs.update(|j| {
                    j.items = list.jobs;
                    j.loading = false;
                    j.error = None;
                }),
                Err(e) => jobs.update(|j| {
                    j.loading = false;
                    j.error = Some(e.to_string());
                }),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
        }
    });

    let visible = move || {
        filter_jobs(
            &jobs.get().items,
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
                    <div class="jobs-page">
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
            <div class="jobs-page">
                <Navbar/>
                <main class="jobs-page__content">
                    <h1 class="jobs-page__title">"Jobs"</h1>

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

                    <Show when=move || jobs.get().error.is_some()>
                        <p class="jobs-page__error">{move || jobs.get().error.unwrap_or_default()}</p>
                    </Show>

                    <Show
                        when=move || !jobs.get().loading
                        fallback=move || view! { <p>"Loading jobs..."</p> }
                    >
                        <p class="jobs-page__count">
                            {move || {
                                let shown = visible().len();
                                let total = jobs.get().items.len();
                                format!("Showing {shown} of {total} jobs")
                            }}
                        </p>
                        <div class="jobs-page__cards">
                            {move || {
                                let items = visible();
                                if items.is_empty() {
                                    return view! {
                                        <p class="jobs-page__empty">"No jobs match your filters."</p>
                                    }
                                        .into_any();
                                }

                                items
                                    .into_iter()
                                    .map(|job| view! { <JobCard job=job/> })
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
