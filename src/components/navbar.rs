//! Top navigation bar shown on authenticated pages.

use leptos::prelude::*;

use crate::state::session::{self, SessionState};
use crate::state::ui::UiState;

/// Navigation bar with section links, theme toggle, and sign-out.
///
/// Sign-out only clears the session; the protected-route guard observes the
/// change and performs the redirect.
#[component]
pub fn Navbar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let display_name = move || {
        session
            .get()
            .user
            .map(|user| {
                if user.full_name.is_empty() {
                    user.email
                } else {
                    user.full_name
                }
            })
            .unwrap_or_default()
    };

    view! {
        <nav class="navbar">
            <a class="navbar__brand" href="/dashboard">
                "MatchBoard"
            </a>
            <div class="navbar__links">
                <a class="navbar__link" href="/dashboard">"Dashboard"</a>
                <a class="navbar__link" href="/jobs">"Jobs"</a>
                <a class="navbar__link" href="/internships">"Internships"</a>
                <a class="navbar__link" href="/statistics">"Statistics"</a>
                <a class="navbar__link" href="/profile">"Profile"</a>
            </div>
            <div class="navbar__actions">
                <button
                    class="btn navbar__dark-toggle"
                    on:click=move |_| {
                        let current = ui.get().dark_mode;
                        let next = crate::util::dark_mode::toggle(current);
                        ui.update(|u| u.dark_mode = next);
                    }
                    title="Toggle dark mode"
                >
                    {move || if ui.get().dark_mode { "☀" } else { "☾" }}
                </button>
                <span class="navbar__user">{display_name}</span>
                <button class="btn navbar__logout" on:click=move |_| session::logout(session)>
                    "Sign out"
                </button>
            </div>
        </nav>
    }
}
