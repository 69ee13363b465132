//! Profile page: edit account details and replace the stored resume.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::chat_widget::ChatWidget;
use crate::components::navbar::Navbar;
use crate::net::types::{ProfileUpdate, UserProfile};
use crate::state::session::SessionState;
use crate::util::guard;

/// Split a comma-separated skills field into clean entries.
fn parse_skills(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|skill| !skill.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Render skills the way the form edits them.
fn join_skills(skills: &[String]) -> String {
    skills.join(", ")
}

/// Profile editor. Redirects to `/login` if the user is not authenticated.
///
/// The form is filled once from the session user, then again from the
/// refreshed record after a save or upload succeeds.
#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    guard::install_protected_redirect(session, navigate);

    let full_name = RwSignal::new(String::new());
    let skills_text = RwSignal::new(String::new());
    let experience_level = RwSignal::new("entry".to_owned());
    let interests = RwSignal::new(String::new());
    let career_goals = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let location = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let uploading = RwSignal::new(false);
    let file_ref = NodeRef::<leptos::html::Input>::new();

    let fill_form = move |user: &UserProfile| {
        full_name.set(user.full_name.clone());
        skills_text.set(join_skills(&user.skills));
        experience_level.set(user.experience_level.clone());
        interests.set(user.interests.clone());
        career_goals.set(user.career_goals.clone());
        phone.set(user.phone.clone());
        location.set(user.location.clone());
    };

    let filled = RwSignal::new(false);
    Effect::new(move || {
        if filled.get() {
            return;
        }
        let Some(user) = session.get().user else {
            return;
        };
        filled.set(true);
        fill_form(&user);
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let state = session.get_untracked();
        let user_id = state.user_id();
        let (Some(token), Some(user_id)) = (state.token, user_id) else {
            return;
        };
        let update = ProfileUpdate {
            full_name: Some(full_name.get().trim().to_owned()),
            skills: Some(parse_skills(&skills_text.get())),
            experience_level: Some(experience_level.get()),
            interests: Some(interests.get()),
            career_goals: Some(career_goals.get()),
            phone: Some(phone.get()),
            location: Some(location.get()),
        };
        busy.set(true);
        info.set(String::new());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::update_user(&token, &user_id, &update).await {
                Ok(ack) => {
                    crate::state::session::refresh_user(session).await;
                    if let Some(user) = session.get_untracked().user {
                        fill_form(&user);
                    }
                    info.set(if ack.message.is_empty() {
                        "Profile saved.".to_owned()
                    } else {
                        ack.message
                    });
                }
                Err(e) => info.set(e.to_string()),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (token, user_id, update);
        }
    };

    let on_upload = move |_| {
        if uploading.get() {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let Some(file) = file_ref
                .get()
                .and_then(|input| input.files())
                .and_then(|files| files.get(0))
            else {
                info.set("Choose a PDF file first.".to_owned());
                return;
            };
            if let Err(message) =
                crate::util::validate::validate_resume_file(&file.name(), file.size())
            {
                info.set(message.to_owned());
                return;
            }
            let state = session.get_untracked();
            let user_id = state.user_id();
            let (Some(token), Some(user_id)) = (state.token, user_id) else {
                return;
            };
            uploading.set(true);
            info.set(String::new());

            leptos::task::spawn_local(async move {
                match crate::net::api::upload_resume(&token, &user_id, &file).await {
                    Ok(upload) => {
                        // The parser may have found new skills; show them.
                        crate::state::session::refresh_user(session).await;
                        if let Some(user) = session.get_untracked().user {
                            fill_form(&user);
                        }
                        info.set(if upload.message.is_empty() {
                            "Resume uploaded.".to_owned()
                        } else {
                            upload.message
                        });
                    }
                    Err(e) => info.set(e.to_string()),
                }
                uploading.set(false);
            });
        }
    };

    view! {
        <Show
            when=move || session.get().is_authenticated()
            fallback=move || {
                view! {
                    <div class="profile-page">
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
            <div class="profile-page">
                <Navbar/>
                <main class="profile-page__content">
                    <h1 class="profile-page__title">"Your profile"</h1>

                    <form class="profile-form" on:submit=on_submit>
                        <label class="profile-form__field">
                            "Email"
                            <input
                                class="profile-form__input"
                                type="email"
                                disabled=true
                                prop:value=move || {
                                    session.get().user.map(|user| user.email).unwrap_or_default()
                                }
                            />
                        </label>
                        <label class="profile-form__field">
                            "Full name"
                            <input
                                class="profile-form__input"
                                type="text"
                                prop:value=move || full_name.get()
                                on:input=move |ev| full_name.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="profile-form__field">
                            "Skills (comma-separated)"
                            <input
                                class="profile-form__input"
                                type="text"
                                placeholder="Rust, SQL, Docker"
                                prop:value=move || skills_text.get()
                                on:input=move |ev| skills_text.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="profile-form__field">
                            "Experience level"
                            <select
                                class="profile-form__input"
                                prop:value=move || experience_level.get()
                                on:change=move |ev| experience_level.set(event_target_value(&ev))
                            >
                                <option value="entry">"Entry level"</option>
                                <option value="mid">"Mid level"</option>
                                <option value="senior">"Senior"</option>
                            </select>
                        </label>
                        <label class="profile-form__field">
                            "Interests"
                            <input
                                class="profile-form__input"
                                type="text"
                                prop:value=move || interests.get()
                                on:input=move |ev| interests.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="profile-form__field">
                            "Career goals"
                            <textarea
                                class="profile-form__input profile-form__input--multiline"
                                prop:value=move || career_goals.get()
                                on:input=move |ev| career_goals.set(event_target_value(&ev))
                            ></textarea>
                        </label>
                        <label class="profile-form__field">
                            "Phone"
                            <input
                                class="profile-form__input"
                                type="tel"
                                prop:value=move || phone.get()
                                on:input=move |ev| phone.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="profile-form__field">
                            "Location"
                            <input
                                class="profile-form__input"
                                type="text"
                                prop:value=move || location.get()
                                on:input=move |ev| location.set(event_target_value(&ev))
                            />
                        </label>
                        <button class="profile-form__save" type="submit" disabled=move || busy.get()>
                            {move || if busy.get() { "Saving..." } else { "Save changes" }}
                        </button>
                    </form>

                    <section class="profile-page__resume">
                        <h2>"Resume"</h2>
                        <p class="profile-page__resume-status">
                            {move || {
                                let has_resume = session
                                    .get()
                                    .user
                                    .is_some_and(|user| !user.resume_url.is_empty());
                                if has_resume {
                                    "A resume is on file."
                                } else {
                                    "No resume uploaded yet."
                                }
                            }}
                        </p>
                        <label class="profile-form__field">
                            "Replace resume (PDF)"
                            <input
                                class="profile-form__input profile-form__input--file"
                                type="file"
                                accept=".pdf"
                                node_ref=file_ref
                            />
                        </label>
                        <button
                            class="profile-page__upload"
                            type="button"
                            disabled=move || uploading.get()
                            on:click=on_upload
                        >
                            {move || if uploading.get() { "Uploading..." } else { "Upload resume" }}
                        </button>
                    </section>

                    <Show when=move || !info.get().is_empty()>
                        <p class="profile-page__message">{move || info.get()}</p>
                    </Show>
                </main>
                <ChatWidget/>
            </div>
        </Show>
    }
}
