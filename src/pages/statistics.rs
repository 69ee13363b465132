//! Statistics page: platform totals and the user's application funnel.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
#[cfg(feature = "hydrate")]
use log::warn;

use crate::components::chat_widget::ChatWidget;
use crate::components::navbar::Navbar;
use crate::components::stat_bar::StatBar;
use crate::state::session::SessionState;
use crate::state::stats::{bar_percent, StatsState};
use crate::util::guard;

/// Statistics page. Redirects to `/login` if the user is not authenticated.
///
/// The overview and per-user requests run concurrently; either half renders
/// on its own if the other fails.
#[component]
pub fn StatisticsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    guard::install_protected_redirect(session, navigate);

    let stats = RwSignal::new(StatsState::default());

    let fetched = RwSignal::new(false);
    Effect::new(move || {
        if fetched.get() {
            return;
        }
        let state = session.get();
        if !state.is_authenticated() {
            return;
        }
        let user_id = state.user_id();
        let (Some(token), Some(user_id)) = (state.token, user_id) else {
            return;
        };
        fetched.set(true);
        stats.update(|s| s.loading = true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let (overview_result, user_result) = futures::join!(
                crate::net::api::fetch_overview_stats(&token),
                crate::net::api::fetch_user_stats(&token, &user_id),
            );
            stats.update(|s| {
                s.loading = false;
                match overview_result {
                    Ok(overview) => s.overview = Some(overview),
                    Err(e) => s.error = Some(e.to_string()),
                }
                match user_result {
                    Ok(user) => s.user = Some(user),
                    Err(e) => {
                        warn!("user statistics fetch failed: {e}");
                        if s.error.is_none() {
                            s.error = Some(e.to_string());
                        }
                    }
                }
            });
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (token, user_id);
        }
    });

    let overview_section = move || {
        let Some(overview) = stats.get().overview else {
            return view! {
                <p class="statistics-page__placeholder">"Platform totals are unavailable."</p>
            }
                .into_any();
        };
        let sources = overview.job_sources;
        let total_jobs = overview.total_jobs;
        view! {
            <div class="statistics-page__overview-body">
                <div class="statistics-page__totals">
                    <div class="stat-card">
                        <span class="stat-card__value">{total_jobs}</span>
                        <span class="stat-card__label">"Jobs indexed"</span>
                    </div>
                    <div class="stat-card">
                        <span class="stat-card__value">{overview.total_internships}</span>
                        <span class="stat-card__label">"Internships indexed"</span>
                    </div>
                </div>
                <div class="statistics-page__bars">
                    <StatBar
                        label="Adzuna"
                        value=sources.adzuna
                        percent=bar_percent(sources.adzuna, total_jobs)
                    />
                    <StatBar
                        label="JSearch"
                        value=sources.jsearch
                        percent=bar_percent(sources.jsearch, total_jobs)
                    />
                    <StatBar
                        label="Manual"
                        value=sources.manual
                        percent=bar_percent(sources.manual, total_jobs)
                    />
                </div>
            </div>
        }
            .into_any()
    };

    let user_section = move || {
        let Some(user) = stats.get().user else {
            return view! {
                <p class="statistics-page__placeholder">"Your statistics are unavailable."</p>
            }
                .into_any();
        };
        let total = user.total_applications;
        view! {
            <div class="statistics-page__user-body">
                <p class="statistics-page__summary">
                    {format!(
                        "{} applications, {:.1}% success rate",
                        total,
                        user.success_rate,
                    )}
                </p>
                <div class="statistics-page__bars">
                    <StatBar
                        label="Accepted"
                        value=user.accepted
                        percent=bar_percent(user.accepted, total)
                    />
                    <StatBar
                        label="Rejected"
                        value=user.rejected
                        percent=bar_percent(user.rejected, total)
                    />
                    <StatBar
                        label="Pending"
                        value=user.pending
                        percent=bar_percent(user.pending, total)
                    />
                </div>
            </div>
        }
            .into_any()
    };

    view! {
        <Show
            when=move || session.get().is_authenticated()
            fallback=move || {
                view! {
                    <div class="statistics-page">
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
            <div class="statistics-page">
                <Navbar/>
                <main class="statistics-page__content">
                    <h1 class="statistics-page__title">"Statistics"</h1>

                    <Show when=move || stats.get().error.is_some()>
                        <p class="statistics-page__error">
                            {move || stats.get().error.unwrap_or_default()}
                        </p>
                    </Show>

                    <Show
                        when=move || !stats.get().loading
                        fallback=move || view! { <p>"Loading statistics..."</p> }
                    >
                        <section class="statistics-page__overview">
                            <h2>"Across the platform"</h2>
                            {overview_section}
                        </section>
                        <section class="statistics-page__user">
                            <h2>"Your applications"</h2>
                            {user_section}
                        </section>
                    </Show>
                </main>
                <ChatWidget/>
            </div>
        </Show>
    }
}
