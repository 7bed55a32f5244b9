use super::*;
use crate::state::conversation::Role;

// =============================================================
// Wire shapes
// =============================================================

#[test]
fn chat_request_serializes_roles_lowercase() {
    let request = ChatRequest {
        messages: vec![ChatMessage::assistant("hi"), ChatMessage::user("tell me more")],
    };
    let json = serde_json::to_value(&request).expect("serialize");
    assert_eq!(
        json,
        serde_json::json!({
            "messages": [
                {"role": "assistant", "content": "hi"},
                {"role": "user", "content": "tell me more"},
            ]
        })
    );
}

#[test]
fn chat_message_round_trips_through_json() {
    let json = r#"{"role":"user","content":"What about Docker?"}"#;
    let msg: ChatMessage = serde_json::from_str(json).expect("deserialize");
    assert_eq!(msg.role, Role::User);
    assert_eq!(msg.content, "What about Docker?");
}

#[test]
fn chat_response_deserializes_response_field() {
    let body: ChatResponse =
        serde_json::from_str(r#"{"response":"Jason knows Rust."}"#).expect("deserialize");
    assert_eq!(body.response, "Jason knows Rust.");
}

#[test]
fn chat_response_rejects_missing_field() {
    let result = serde_json::from_str::<ChatResponse>(r#"{"answer":"nope"}"#);
    assert!(result.is_err());
}

// =============================================================
// SendError display
// =============================================================

#[test]
fn send_error_display_is_short_and_specific() {
    assert_eq!(
        SendError::Network("connection refused".to_owned()).to_string(),
        "network error: connection refused"
    );
    assert_eq!(SendError::Status(500).to_string(), "backend returned HTTP 500");
    assert_eq!(SendError::MalformedBody.to_string(), "malformed response body");
}
