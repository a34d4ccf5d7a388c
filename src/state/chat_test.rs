use super::*;

fn ts() -> String {
    "2024-11-03 10:15".to_owned()
}

// =============================================================
// Initialization and reset
// =============================================================

#[test]
fn new_transcript_contains_only_the_greeting() {
    let chat = ChatTranscript::new(ts());
    assert_eq!(chat.turns.len(), 1);
    assert_eq!(chat.turns[0].speaker, Speaker::Assistant);
    assert_eq!(chat.turns[0].content, GREETING);
    assert!(!chat.awaiting_reply);
}

#[test]
fn reset_discards_everything_and_reseeds_the_greeting() {
    let mut chat = ChatTranscript::new(ts());
    let request = chat.begin_send("Hello", ts());
    assert!(request.is_some());
    chat.complete("Hi there".to_owned(), ts());
    chat.reset(ts());
    assert_eq!(chat.turns.len(), 1);
    assert_eq!(chat.turns[0].content, GREETING);
    assert!(!chat.awaiting_reply);
}

// =============================================================
// Sending
// =============================================================

#[test]
fn sending_hello_appends_exactly_two_turns_after_resolution() {
    let mut chat = ChatTranscript::new(ts());
    let before = chat.turns.len();
    let request = chat.begin_send("Hello", ts()).unwrap();
    assert_eq!(request.question, "Hello");
    chat.complete("Hi! Ask me anything.".to_owned(), ts());

    assert_eq!(chat.turns.len(), before + 2);
    assert_eq!(chat.turns[before].speaker, Speaker::Human);
    assert_eq!(chat.turns[before].content, "Hello");
    assert_eq!(chat.turns[before + 1].speaker, Speaker::Assistant);
    assert_eq!(chat.turns[before + 1].content, "Hi! Ask me anything.");
    assert!(!chat.awaiting_reply);
}

#[test]
fn begin_send_trims_the_question() {
    let mut chat = ChatTranscript::new(ts());
    let request = chat.begin_send("  Hello  ", ts()).unwrap();
    assert_eq!(request.question, "Hello");
    assert_eq!(chat.turns.last().unwrap().content, "Hello");
}

#[test]
fn empty_input_is_rejected_without_changes() {
    let mut chat = ChatTranscript::new(ts());
    assert!(chat.begin_send("", ts()).is_none());
    assert!(chat.begin_send("   \t\n", ts()).is_none());
    assert_eq!(chat.turns.len(), 1);
    assert!(!chat.awaiting_reply);
}

#[test]
fn second_send_while_awaiting_reply_is_a_no_op() {
    let mut chat = ChatTranscript::new(ts());
    assert!(chat.begin_send("first", ts()).is_some());
    let turns_before = chat.turns.len();
    assert!(chat.begin_send("second", ts()).is_none());
    assert_eq!(chat.turns.len(), turns_before);
    assert!(chat.awaiting_reply);
}

#[test]
fn history_captures_turns_before_the_new_question() {
    let mut chat = ChatTranscript::new(ts());
    let first = chat.begin_send("Hello", ts()).unwrap();
    assert_eq!(
        first.history,
        vec![HistoryEntry {
            role: "assistant".to_owned(),
            content: GREETING.to_owned(),
        }]
    );
    chat.complete("Hi!".to_owned(), ts());

    let second = chat.begin_send("And again", ts()).unwrap();
    let roles: Vec<&str> = second.history.iter().map(|h| h.role.as_str()).collect();
    assert_eq!(roles, vec!["assistant", "human", "assistant"]);
    // The new question itself is not part of the history payload.
    assert!(second.history.iter().all(|h| h.content != "And again"));
}

// =============================================================
// Failure
// =============================================================

#[test]
fn fail_appends_apology_and_keeps_the_optimistic_human_turn() {
    let mut chat = ChatTranscript::new(ts());
    chat.begin_send("Hello", ts());
    chat.fail(ts());

    assert_eq!(chat.turns.len(), 3);
    assert_eq!(chat.turns[1].speaker, Speaker::Human);
    assert_eq!(chat.turns[1].content, "Hello");
    assert_eq!(chat.turns[2].speaker, Speaker::Assistant);
    assert_eq!(chat.turns[2].content, FAILURE_REPLY);
    assert!(!chat.awaiting_reply);
}

#[test]
fn send_is_possible_again_after_failure() {
    let mut chat = ChatTranscript::new(ts());
    chat.begin_send("Hello", ts());
    chat.fail(ts());
    assert!(chat.begin_send("retry", ts()).is_some());
}

// =============================================================
// Speaker metadata
// =============================================================

#[test]
fn speaker_roles_match_the_wire_format() {
    assert_eq!(Speaker::Human.role(), "human");
    assert_eq!(Speaker::Assistant.role(), "assistant");
}

#[test]
fn speaker_labels_for_display() {
    assert_eq!(Speaker::Human.label(), "You");
    assert_eq!(Speaker::Assistant.label(), "Agent");
}
