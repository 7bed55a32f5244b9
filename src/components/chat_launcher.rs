//! Floating chat launcher and the dialog chrome around the chat panel.

use leptos::prelude::*;

use crate::bridge::AskBridge;
use crate::components::chat_panel::ChatPanel;
use crate::state::session::SessionState;
use crate::state::ui::UiState;

/// Floating button that opens the chat dialog, plus the dialog itself.
///
/// Registers the ask-bridge handler on mount so resume terms can open the
/// panel with a pre-filled question, and clears it on cleanup so late
/// invocations are no-ops. Closing the dialog tears the conversation down to
/// the seeded greeting.
#[component]
pub fn ChatLauncher() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let bridge = expect_context::<AskBridge>();

    bridge.register(move |query: String| {
        ui.update(|u| u.open_with_query(&query));
    });
    on_cleanup({
        let bridge = bridge.clone();
        move || bridge.clear()
    });

    let on_open = move |_| ui.update(UiState::open_chat);

    let on_close = move |_| {
        session.update(|s| ui.update(|u| u.close_chat(s)));
    };

    view! {
        <div class="chat-launcher">
            {move || {
                ui.get()
                    .chat_open
                    .then(|| {
                        view! {
                            <div class="chat-dialog">
                                <div class="chat-dialog__header">
                                    <h2 class="chat-dialog__title">"Ask me about my experience"</h2>
                                    <button class="chat-dialog__close" on:click=on_close title="Close">
                                        "\u{2715}"
                                    </button>
                                </div>
                                <ChatPanel/>
                            </div>
                        }
                    })
            }}
            <button class="chat-launcher__button" on:click=on_open title="Ask about my experience">
                <svg
                    viewBox="0 0 24 24"
                    fill="none"
                    stroke="currentColor"
                    stroke-width="2"
                    stroke-linecap="round"
                    stroke-linejoin="round"
                    class="chat-launcher__icon"
                    aria-hidden="true"
                >
                    <path d="M21 15a2 2 0 0 1-2 2H7l-4 4V5a2 2 0 0 1 2-2h14a2 2 0 0 1 2 2z"/>
                </svg>
            </button>
        </div>
    }
}
