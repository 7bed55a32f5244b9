#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::state::session::SessionState;

/// UI state for the page chrome and the chat panel lifecycle.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub dark_mode: bool,
    pub chat_open: bool,
    /// Question handed over by the invocation bridge, waiting for the panel
    /// to pick it up and submit it.
    pub seeded_query: Option<String>,
}

impl UiState {
    /// Open the chat panel. Opening an already-open panel is a no-op.
    pub fn open_chat(&mut self) {
        self.chat_open = true;
    }

    /// Open the panel with a question to auto-submit. Blank queries only
    /// open the panel.
    pub fn open_with_query(&mut self, query: &str) {
        self.chat_open = true;
        if query.trim().is_empty() {
            self.seeded_query = None;
        } else {
            self.seeded_query = Some(query.to_owned());
        }
    }

    /// Close the panel. The seeded query is dropped and the conversation is
    /// torn down to the greeting, so the next open starts fresh.
    pub fn close_chat(&mut self, session: &mut SessionState) {
        self.chat_open = false;
        self.seeded_query = None;
        session.reset();
    }

    /// Consume the seeded query, if any.
    pub fn take_seeded_query(&mut self) -> Option<String> {
        self.seeded_query.take()
    }
}
