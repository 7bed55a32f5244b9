use super::*;

// =============================================================
// Seeding
// =============================================================

#[test]
fn seeded_conversation_holds_only_the_greeting() {
    let convo = Conversation::seeded();
    assert_eq!(convo.len(), 1);
    assert_eq!(convo.messages()[0].role, Role::Assistant);
    assert_eq!(convo.messages()[0].content, GREETING);
}

#[test]
fn default_is_seeded() {
    let convo = Conversation::default();
    assert_eq!(convo.len(), 1);
    assert_eq!(convo.last().map(|m| m.content.as_str()), Some(GREETING));
}

// =============================================================
// Append ordering
// =============================================================

#[test]
fn append_preserves_insertion_order() {
    let mut convo = Conversation::seeded();
    convo.append(ChatMessage::user("first"));
    convo.append(ChatMessage::assistant("second"));
    convo.append(ChatMessage::user("third"));

    let contents: Vec<&str> = convo.messages().iter().map(|m| m.content.as_str()).collect();
    assert_eq!(contents, vec![GREETING, "first", "second", "third"]);
}

#[test]
fn to_vec_matches_messages() {
    let mut convo = Conversation::seeded();
    convo.append(ChatMessage::user("hello"));
    assert_eq!(convo.to_vec(), convo.messages().to_vec());
}

// =============================================================
// Reset
// =============================================================

#[test]
fn reset_restores_the_single_greeting() {
    let mut convo = Conversation::seeded();
    convo.append(ChatMessage::user("q1"));
    convo.append(ChatMessage::assistant("a1"));
    convo.append(ChatMessage::user("q2"));

    convo.reset();

    assert_eq!(convo.len(), 1);
    assert_eq!(convo.messages()[0].content, GREETING);
    assert_eq!(convo.messages()[0].role, Role::Assistant);
}

#[test]
fn conversation_is_never_empty() {
    let mut convo = Conversation::seeded();
    assert!(!convo.is_empty());
    convo.reset();
    assert!(!convo.is_empty());
}
