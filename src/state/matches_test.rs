use super::*;
use serde_json::json;

fn ranked_response() -> MatchResponse {
    serde_json::from_value(json!({
        "matches": [{
            "job": { "id": "j1", "title": "Backend Engineer", "company": "Acme" },
            "match_score": 82.5,
            "rejection_probability": 20.0,
        }],
        "total_matches": 1,
        "message": null,
    }))
    .unwrap()
}

#[test]
fn matches_state_defaults() {
    let state = MatchesState::default();
    assert!(state.items.is_empty());
    assert_eq!(state.kind, MatchKind::Jobs);
    assert!(!state.loading);
    assert!(state.error.is_none());
    assert!(state.note.is_none());
}

#[test]
fn begin_switches_kind_and_drops_stale_items() {
    let mut state = MatchesState::default();
    state.absorb(ranked_response());
    assert_eq!(state.items.len(), 1);

    state.begin(MatchKind::Internships);
    assert_eq!(state.kind, MatchKind::Internships);
    assert!(state.items.is_empty());
    assert!(state.loading);
}

#[test]
fn absorb_lands_items_and_clears_loading() {
    let mut state = MatchesState::default();
    state.begin(MatchKind::Jobs);
    state.absorb(ranked_response());

    assert_eq!(state.items.len(), 1);
    assert!(!state.loading);
    assert!(state.error.is_none());
}

#[test]
fn absorb_keeps_advisory_note() {
    let mut state = MatchesState::default();
    state.absorb(
        serde_json::from_value(json!({
            "matches": [],
            "total_matches": 0,
            "message": "Add skills to your profile to get matches",
        }))
        .unwrap(),
    );

    assert!(state.items.is_empty());
    assert_eq!(
        state.note.as_deref(),
        Some("Add skills to your profile to get matches")
    );
}

#[test]
fn fail_records_message_and_stops_loading() {
    let mut state = MatchesState::default();
    state.begin(MatchKind::Jobs);
    state.fail("Network error. Check your connection and try again.".to_owned());

    assert!(!state.loading);
    assert_eq!(
        state.error.as_deref(),
        Some("Network error. Check your connection and try again.")
    );
}
