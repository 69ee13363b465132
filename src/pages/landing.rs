//! Public landing page.

use leptos::prelude::*;

use crate::state::session::SessionState;

/// Landing page with sign-in and sign-up entry points.
///
/// Deliberately unguarded: signed-in users can still read it, they just get
/// a dashboard link instead of the sign-in button.
#[component]
pub fn LandingPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    view! {
        <div class="landing-page">
            <header class="landing-page__header">
                <span class="landing-page__brand">"MatchBoard"</span>
                <Show
                    when=move || session.get().is_authenticated()
                    fallback=|| view! { <a class="btn" href="/login">"Sign in"</a> }
                >
                    <a class="btn" href="/dashboard">"Open dashboard"</a>
                </Show>
            </header>
            <main class="landing-page__hero">
                <h1>"Find work that fits you"</h1>
                <p>
                    "MatchBoard ranks jobs and internships against your skills \
                     and tells you where you actually stand."
                </p>
                <div class="landing-page__actions">
                    <a class="btn btn--primary" href="/register">"Get started"</a>
                    <a class="btn" href="/login">"I have an account"</a>
                </div>
            </main>
        </div>
    }
}
