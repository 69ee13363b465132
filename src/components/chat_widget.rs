//! Floating career-assistant chat widget for authenticated pages.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use log::warn;

use crate::state::chat::{ChatRole, ChatState};
use crate::state::session::SessionState;

/// Reply line shown when the assistant call fails or answers empty.
#[cfg(feature = "hydrate")]
const FALLBACK_REPLY: &str = "Something went wrong. Please try again.";

/// Floating chat widget: a toggle button plus a message panel backed by the
/// assistant endpoint.
#[component]
pub fn ChatWidget() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let chat = expect_context::<RwSignal<ChatState>>();

    let input = RwSignal::new(String::new());
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    // Keep the newest message in view.
    Effect::new(move || {
        let _ = chat.get().entries.len();

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    let do_send = move || {
        let text = input.get().trim().to_owned();
        if text.is_empty() || chat.get().busy {
            return;
        }
        let state = session.get_untracked();
        let Some(user_id) = state.user_id() else {
            return;
        };
        let Some(token) = state.token else {
            return;
        };

        // History excludes the outgoing message; it travels in its own field.
        let history = chat.get_untracked().history_payload();
        chat.update(|c| {
            c.push(ChatRole::User, text.clone());
            c.busy = true;
        });
        input.set(String::new());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let request = crate::net::types::ChatRequest {
                user_id,
                message: text,
                messages: history,
            };
            let reply = match crate::net::api::send_chat_message(&token, &request).await {
                Ok(reply) => reply
                    .text()
                    .filter(|t| !t.is_empty())
                    .unwrap_or(FALLBACK_REPLY)
                    .to_owned(),
                Err(e) => {
                    warn!("assistant request failed: {e}");
                    FALLBACK_REPLY.to_owned()
                }
            };
            chat.update(|c| {
                c.push(ChatRole::Assistant, reply);
                c.busy = false;
            });
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (user_id, token, history);
        }
    };

    let on_click = move |_| do_send();

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            do_send();
        }
    };

    let can_send = move || !input.get().trim().is_empty() && !chat.get().busy;

    view! {
        <div class="chat-widget">
            <Show when=move || chat.get().open>
                <div class="chat-widget__panel">
                    <div class="chat-widget__header">"Career Assistant"</div>
                    <div class="chat-widget__messages" node_ref=messages_ref>
                        {move || {
                            let entries = chat.get().entries;
                            if entries.is_empty() {
                                return view! {
                                    <div class="chat-widget__empty">
                                        "Ask about jobs, skills, or your applications."
                                    </div>
                                }
                                    .into_any();
                            }

                            entries
                                .iter()
                                .map(|entry| {
                                    let role_class = match entry.role {
                                        ChatRole::User => {
                                            "chat-widget__message chat-widget__message--user"
                                        }
                                        ChatRole::Assistant => {
                                            "chat-widget__message chat-widget__message--assistant"
                                        }
                                    };
                                    let text = entry.text.clone();
                                    view! { <div class=role_class>{text}</div> }
                                })
                                .collect::<Vec<_>>()
                                .into_any()
                        }}
                        <Show when=move || chat.get().busy>
                            <div class="chat-widget__message chat-widget__message--pending">
                                "Thinking..."
                            </div>
                        </Show>
                    </div>
                    <div class="chat-widget__input-row">
                        <input
                            class="chat-widget__input"
                            type="text"
                            placeholder="Ask the assistant..."
                            prop:value=move || input.get()
                            on:input=move |ev| input.set(event_target_value(&ev))
                            on:keydown=on_keydown
                        />
                        <button
                            class="btn btn--primary chat-widget__send"
                            on:click=on_click
                            disabled=move || !can_send()
                        >
                            "Send"
                        </button>
                    </div>
                </div>
            </Show>
            <button
                class="chat-widget__toggle"
                on:click=move |_| chat.update(|c| c.open = !c.open)
                title="Career assistant"
            >
                {move || if chat.get().open { "×" } else { "💬" }}
            </button>
        </div>
    }
}
