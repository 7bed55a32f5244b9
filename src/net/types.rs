#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

use crate::state::conversation::ChatMessage;

/// Request body for `POST /api/chat`: the full conversation history,
/// including the user message being asked about.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChatRequest {
    pub messages: Vec<ChatMessage>,
}

/// Success response body from `POST /api/chat`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}

/// Why a live send failed. Used verbatim in the diagnostic message shown to
/// the visitor, so wording stays short and free of internals.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SendError {
    #[error("network error: {0}")]
    Network(String),
    #[error("backend returned HTTP {0}")]
    Status(u16),
    #[error("malformed response body")]
    MalformedBody,
}
