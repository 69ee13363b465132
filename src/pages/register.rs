//! Registration page creating an account, with an optional resume upload.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
#[cfg(feature = "hydrate")]
use log::warn;

use crate::state::session::SessionState;
use crate::util::guard;
use crate::util::validate::validate_registration;

/// Registration form. Signed-in visitors are bounced to the dashboard.
///
/// The resume is optional; a failed upload is logged and does not undo the
/// new account or block the redirect.
#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    guard::install_public_redirect(session, navigate);

    let full_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let file_ref = NodeRef::<leptos::html::Input>::new();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let form = match validate_registration(
            &full_name.get(),
            &email.get(),
            &password.get(),
            &confirm.get(),
        ) {
            Ok(form) => form,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };

        #[cfg(feature = "hydrate")]
        {
            // A chosen file must pass validation before any request goes out.
            let resume = file_ref
                .get()
                .and_then(|input| input.files())
                .and_then(|files| files.get(0));
            if let Some(file) = &resume {
                if let Err(message) =
                    crate::util::validate::validate_resume_file(&file.name(), file.size())
                {
                    info.set(message.to_owned());
                    return;
                }
            }

            busy.set(true);
            info.set(String::new());

            // On success the public-route guard performs the navigation.
            leptos::task::spawn_local(async move {
                match crate::state::session::register(
                    session,
                    &form.full_name,
                    &form.email,
                    &form.password,
                )
                .await
                {
                    Ok(()) => {
                        if let Some(file) = resume {
                            let state = session.get_untracked();
                            let user_id = state.user_id();
                            if let (Some(token), Some(user_id)) = (state.token, user_id) {
                                match crate::net::api::upload_resume(&token, &user_id, &file).await
                                {
                                    // The parser fills in skills; pick them up.
                                    Ok(_) => crate::state::session::refresh_user(session).await,
                                    Err(e) => warn!("resume upload failed: {e}"),
                                }
                            }
                        }
                    }
                    Err(e) => info.set(e.to_string()),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = form;
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1 class="auth-card__title">"Create your account"</h1>
                <p class="auth-card__subtitle">"Get matched with jobs and internships"</p>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="text"
                        placeholder="Full name"
                        prop:value=move || full_name.get()
                        on:input=move |ev| full_name.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Password (6+ characters)"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Confirm password"
                        prop:value=move || confirm.get()
                        on:input=move |ev| confirm.set(event_target_value(&ev))
                    />
                    <label class="auth-label">
                        "Resume (PDF, optional)"
                        <input
                            class="auth-input auth-input--file"
                            type="file"
                            accept=".pdf"
                            node_ref=file_ref
                        />
                    </label>
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating account..." } else { "Create account" }}
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-message">{move || info.get()}</p>
                </Show>
                <div class="auth-links">
                    <a href="/login">"Already have an account? Sign in"</a>
                </div>
            </div>
        </div>
    }
}
