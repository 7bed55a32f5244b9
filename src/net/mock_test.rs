use super::*;

fn history(inputs: &[&str]) -> Vec<ChatMessage> {
    let mut messages = vec![ChatMessage::assistant("greeting")];
    for input in inputs {
        messages.push(ChatMessage::user(*input));
        messages.push(ChatMessage::assistant("earlier reply"));
    }
    messages.pop(); // latest user message is unanswered
    messages
}

// =============================================================
// Keyword matching
// =============================================================

#[test]
fn matches_known_keywords() {
    let reply = reply(&history(&["Does he know Python?"]));
    assert!(reply.contains("Python"));
}

#[test]
fn matching_is_case_insensitive() {
    let lower = reply(&history(&["tell me about docker"]));
    let upper = reply(&history(&["Tell me about DOCKER"]));
    assert_eq!(lower, upper);
    assert!(lower.contains("Docker"));
}

#[test]
fn uses_the_latest_user_message() {
    let messages = history(&["What about Python?", "And NGINX?"]);
    let reply = reply(&messages);
    assert!(reply.contains("NGINX"));
    assert!(!reply.contains("Python"));
}

// =============================================================
// Fallbacks
// =============================================================

#[test]
fn unknown_topics_get_the_default_summary() {
    let reply = reply(&history(&["Do you like sailing?"]));
    assert!(reply.contains("Software Engineer III"));
}

#[test]
fn history_without_user_messages_gets_the_no_question_reply() {
    let messages = vec![ChatMessage::assistant("greeting only")];
    assert_eq!(reply(&messages), "I didn't receive a question. How can I help you?");
}

#[test]
fn reply_is_never_empty() {
    for input in ["", "  ", "python", "zzz", "llm and gpu"] {
        assert!(!reply(&history(&[input])).is_empty());
    }
    assert!(!reply(&[]).is_empty());
}
