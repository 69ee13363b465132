use super::*;

#[test]
fn chat_state_defaults_closed_and_empty() {
    let state = ChatState::default();
    assert!(!state.open);
    assert!(state.entries.is_empty());
    assert!(!state.busy);
}

#[test]
fn push_appends_in_order_with_distinct_ids() {
    let mut state = ChatState::default();
    state.push(ChatRole::User, "hello".to_owned());
    state.push(ChatRole::Assistant, "hi there".to_owned());

    assert_eq!(state.entries.len(), 2);
    assert_eq!(state.entries[0].role, ChatRole::User);
    assert_eq!(state.entries[1].role, ChatRole::Assistant);
    assert_ne!(state.entries[0].id, state.entries[1].id);
}

#[test]
fn history_payload_maps_roles_to_wire_names() {
    let mut state = ChatState::default();
    state.push(ChatRole::User, "what jobs fit me?".to_owned());
    state.push(ChatRole::Assistant, "tell me your skills".to_owned());

    let turns = state.history_payload();
    assert_eq!(turns.len(), 2);
    assert_eq!(turns[0].role, "user");
    assert_eq!(turns[0].content, "what jobs fit me?");
    assert_eq!(turns[1].role, "assistant");
}

#[test]
fn history_payload_of_fresh_chat_is_empty() {
    assert!(ChatState::default().history_payload().is_empty());
}
