//! Chat panel body: conversation view, mode switch, and the send flow.

use leptos::prelude::*;

use crate::state::conversation::Role;
use crate::state::session::{SessionMode, SessionState};
use crate::state::ui::UiState;

/// Conversation panel showing message history and an input for asking about
/// Jason's experience.
///
/// Dispatches sends either to the backend (live mode) or to the built-in
/// responder (mock mode), and consumes questions seeded through the ask
/// bridge. A startup probe decides backend availability once per session.
#[component]
pub fn ChatPanel() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let input = RwSignal::new(String::new());
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    // One-shot reachability probe. Skipped when it already ran during an
    // earlier open of the panel; the mode never re-probes mid-session.
    Effect::new(move || {
        if session.get_untracked().backend_reachable().is_some() {
            return;
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let outcome = crate::net::api::probe_backend().await;
            session.update(|s| s.apply_probe(outcome));
        });
    });

    // Keep the newest message in view.
    Effect::new(move || {
        let _ = session.get().conversation.len();

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    let dispatch = move |text: String| {
        let mut accepted = None;
        session.update(|s| accepted = s.begin_send(&text));
        let Some(ticket) = accepted else {
            return;
        };
        input.set(String::new());

        if ticket.mock {
            let reply = crate::net::mock::reply(&ticket.history);
            session.update(|s| s.finish_send(ticket.generation, Ok(reply)));
            return;
        }

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let outcome = crate::net::api::send_chat(&ticket.history).await;
            if let Err(e) = &outcome {
                leptos::logging::warn!("chat send failed: {e}");
            }
            session.update(|s| s.finish_send(ticket.generation, outcome));
        });
        #[cfg(not(feature = "hydrate"))]
        session.update(|s| {
            s.finish_send(
                ticket.generation,
                Err(crate::net::types::SendError::Network(
                    "not available on server".to_owned(),
                )),
            );
        });
    };

    // Question handed over by a clicked resume term: submit it exactly like
    // a manual send.
    Effect::new(move || {
        if ui.get().seeded_query.is_none() {
            return;
        }
        let mut seeded = None;
        ui.update(|u| seeded = u.take_seeded_query());
        if let Some(query) = seeded {
            dispatch(query);
        }
    });

    let do_send = move || dispatch(input.get());

    let on_click = move |_| do_send();

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            do_send();
        }
    };

    let is_mock = move || session.get().mode() == SessionMode::Mock;
    let pending = move || session.get().is_pending();
    let can_send = move || !pending() && !input.get().trim().is_empty();

    let on_mode_change = move |ev: leptos::ev::Event| {
        let mock = event_target_checked(&ev);
        session.update(|s| {
            s.set_mode(if mock { SessionMode::Mock } else { SessionMode::Live });
        });
    };

    view! {
        <div class="chat-panel">
            <div class="chat-panel__messages" node_ref=messages_ref>
                {move || {
                    session
                        .get()
                        .conversation
                        .messages()
                        .iter()
                        .map(|msg| {
                            let content = msg.content.clone();
                            let is_user = msg.role == Role::User;
                            view! {
                                <div
                                    class="chat-panel__message"
                                    class:chat-panel__message--user=is_user
                                >
                                    <p class="chat-panel__text">{content}</p>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
                {move || {
                    pending()
                        .then(|| view! { <div class="chat-panel__loading">"Thinking..."</div> })
                }}
            </div>

            <div class="chat-panel__controls">
                <label class="chat-panel__mode">
                    <input
                        type="checkbox"
                        prop:checked=is_mock
                        on:change=on_mode_change
                    />
                    "Use mock mode"
                </label>
                {move || {
                    is_mock()
                        .then(|| {
                            view! {
                                <span class="chat-panel__mode-hint">
                                    "Using built-in responses (no backend)"
                                </span>
                            }
                        })
                }}
            </div>

            <div class="chat-panel__input-row">
                <input
                    class="chat-panel__input"
                    type="text"
                    placeholder="Type your message..."
                    prop:value=move || input.get()
                    prop:disabled=pending
                    on:input=move |ev| input.set(event_target_value(&ev))
                    on:keydown=on_keydown
                />
                <button
                    class="btn btn--primary chat-panel__send"
                    on:click=on_click
                    disabled=move || !can_send()
                >
                    "Send"
                </button>
            </div>
        </div>
    }
}
