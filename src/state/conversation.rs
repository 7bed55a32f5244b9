#[cfg(test)]
#[path = "conversation_test.rs"]
mod conversation_test;

use serde::{Deserialize, Serialize};

/// Fixed assistant message present at the start of every conversation.
pub const GREETING: &str = "Hi there! I can tell you about Jason's professional experience, \
skills, and projects. What would you like to know about? You can ask about specific \
technologies like \"Python\" or \"React\", or projects like \"Project Sentinel\" or \"AIQA\".";

/// Author of a chat message. Matches the backend wire contract, which only
/// knows these two roles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// A single chat message as rendered and as sent to the backend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self { role: Role::User, content: content.into() }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self { role: Role::Assistant, content: content.into() }
    }
}

/// Append-only conversation log.
///
/// `append` and `reset` are the only mutation primitives: messages are never
/// edited in place or removed individually, so readers always see a prefix of
/// what any later reader sees.
#[derive(Clone, Debug)]
pub struct Conversation {
    messages: Vec<ChatMessage>,
}

impl Default for Conversation {
    fn default() -> Self {
        Self::seeded()
    }
}

impl Conversation {
    /// A fresh conversation holding only the seeded greeting.
    pub fn seeded() -> Self {
        Self { messages: vec![ChatMessage::assistant(GREETING)] }
    }

    pub fn append(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }

    /// Replace the log with the single seeded greeting.
    pub fn reset(&mut self) {
        self.messages = vec![ChatMessage::assistant(GREETING)];
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn last(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }

    /// Snapshot of the full history, in append order.
    pub fn to_vec(&self) -> Vec<ChatMessage> {
        self.messages.clone()
    }
}
