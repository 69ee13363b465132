//! Dashboard page: welcome header, quick statistics, and ranked matches.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. Its three fetches (profile
//! refresh, matches, user statistics) run concurrently and each lands on
//! its own signal; one failing fetch does not blank the others.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
#[cfg(feature = "hydrate")]
use log::warn;

use crate::components::chat_widget::ChatWidget;
use crate::components::match_card::MatchCard;
use crate::components::navbar::Navbar;
use crate::net::types::{MatchKind, UserStatistics};
use crate::state::matches::MatchesState;
use crate::state::session::SessionState;
use crate::util::guard;

/// How many matches one dashboard fetch requests.
#[cfg(feature = "hydrate")]
const MATCH_LIMIT: u32 = 10;

fn tab_class(current: MatchKind, tab: MatchKind) -> &'static str {
    if current == tab { "tab tab--active" } else { "tab" }
}

/// Dashboard page. Redirects to `/login` if the user is not authenticated.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    guard::install_protected_redirect(session, navigate);

    let matches = RwSignal::new(MatchesState::default());
    let stats = RwSignal::new(None::<UserStatistics>);

    // Refetch matches alone; used by the kind tabs after the initial load.
    let load_matches = move |kind: MatchKind| {
        if matches.get_untracked().loading {
            return;
        }
        let state = session.get_untracked();
        let user_id = state.user_id();
        let (Some(token), Some(user_id)) = (state.token, user_id) else {
            return;
        };
        matches.update(|m| m.begin(kind));

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let request = crate::net::types::MatchRequest {
                user_id,
                match_type: kind,
                limit: MATCH_LIMIT,
            };
            match crate::net::api::fetch_matches(&token, &request).await {
                Ok(response) => matches.update(|m| m.absorb(response)),
                Err(e) => matches.update(|m| m.fail(e.to_string())),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (token, user_id);
        }
    };

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
        matches.update(|m| m.begin(MatchKind::Jobs));

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let request = crate::net::types::MatchRequest {
                user_id: user_id.clone(),
                match_type: MatchKind::Jobs,
                limit: MATCH_LIMIT,
            };
            let (match_result, stats_result, ()) = futures::join!(
                crate::net::api::fetch_matches(&token, &request),
                crate::net::api::fetch_user_stats(&token, &user_id),
                crate::state::session::refresh_user(session),
            );
            match match_result {
                Ok(response) => matches.update(|m| m.absorb(response)),
                Err(e) => matches.update(|m| m.fail(e.to_string())),
            }
            match stats_result {
                Ok(user_stats) => stats.set(Some(user_stats)),
                Err(e) => warn!("user statistics fetch failed: {e}"),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (token, user_id);
        }
    });

    let welcome = move || {
        session.get().user.map_or_else(
            || "Welcome back".to_owned(),
            |user| {
                if user.full_name.is_empty() {
                    "Welcome back".to_owned()
                } else {
                    format!("Welcome back, {}", user.full_name)
                }
            },
        )
    };

    let stat_value = move |f: fn(&UserStatistics) -> String| {
        stats.get().map_or_else(|| "-".to_owned(), |s| f(&s))
    };

    view! {
        <Show
            when=move || session.get().is_authenticated()
            fallback=move || {
                view! {
                    <div class="dashboard-page">
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
            <div class="dashboard-page">
                <Navbar/>
                <main class="dashboard-page__content">
                    <h1 class="dashboard-page__welcome">{welcome}</h1>

                    <section class="dashboard-page__stats">
                        <div class="stat-card">
                            <span class="stat-card__value">
                                {move || stat_value(|s| s.skills_count.to_string())}
                            </span>
                            <span class="stat-card__label">"Skills"</span>
                        </div>
                        <div class="stat-card">
                            <span class="stat-card__value">
                                {move || stat_value(|s| s.total_applications.to_string())}
                            </span>
                            <span class="stat-card__label">"Applications"</span>
                        </div>
                        <div class="stat-card">
                            <span class="stat-card__value">
                                {move || stat_value(|s| format!("{:.1}%", s.success_rate))}
                            </span>
                            <span class="stat-card__label">"Success rate"</span>
                        </div>
                    </section>

                    <section class="dashboard-page__matches">
                        <div class="dashboard-page__tabs">
                            <button
                                class=move || tab_class(matches.get().kind, MatchKind::Jobs)
                                on:click=move |_| load_matches(MatchKind::Jobs)
                            >
                                "Jobs"
                            </button>
                            <button
                                class=move || tab_class(matches.get().kind, MatchKind::Internships)
                                on:click=move |_| load_matches(MatchKind::Internships)
                            >
                                "Internships"
                            </button>
                            <button
                                class=move || tab_class(matches.get().kind, MatchKind::All)
                                on:click=move |_| load_matches(MatchKind::All)
                            >
                                "All"
                            </button>
                        </div>
                        <Show when=move || matches.get().error.is_some()>
                            <p class="dashboard-page__error">
                                {move || matches.get().error.unwrap_or_default()}
                            </p>
                        </Show>
                        <Show when=move || matches.get().note.is_some()>
                            <p class="dashboard-page__note">
                                {move || matches.get().note.unwrap_or_default()}
                            </p>
                        </Show>
                        <Show
                            when=move || !matches.get().loading
                            fallback=move || view! { <p>"Finding your matches..."</p> }
                        >
                            <div class="dashboard-page__cards">
                                {move || {
                                    let items = matches.get().items;
                                    if items.is_empty() {
                                        return view! {
                                            <p class="dashboard-page__empty">
                                                "No matches yet. Add skills to your profile for better results."
                                            </p>
                                        }
                                            .into_any();
                                    }

                                    items
                                        .into_iter()
                                        .map(|hit| view! { <MatchCard hit=hit/> })
                                        .collect::<Vec<_>>()
                                        .into_any()
                                }}
                            </div>
                        </Show>
                    </section>
                </main>
                <ChatWidget/>
            </div>
        </Show>
    }
}
