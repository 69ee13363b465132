use super::*;
use serde_json::json;

fn signed_in_state() -> SessionState {
    let mut state = SessionState::booting();
    state.apply(
        "tok123".to_owned(),
        UserProfile {
            id: "u1".to_owned(),
            email: "dev@example.com".to_owned(),
            ..UserProfile::default()
        },
    );
    state
}

#[test]
fn booting_state_is_loading_and_signed_out() {
    let state = SessionState::booting();
    assert!(state.loading);
    assert!(!state.is_authenticated());
    assert_eq!(state.user_id(), None);
}

#[test]
fn authenticated_requires_token_and_user_together() {
    let mut token_only = SessionState::booting();
    token_only.token = Some("tok123".to_owned());
    token_only.loading = false;
    assert!(!token_only.is_authenticated());

    let mut user_only = SessionState::booting();
    user_only.user = Some(UserProfile::default());
    user_only.loading = false;
    assert!(!user_only.is_authenticated());

    assert!(signed_in_state().is_authenticated());
}

#[test]
fn apply_sets_both_fields_and_finishes_loading() {
    let state = signed_in_state();
    assert_eq!(state.token.as_deref(), Some("tok123"));
    assert_eq!(state.user_id().as_deref(), Some("u1"));
    assert!(!state.loading);
}

#[test]
fn auth_response_becomes_authenticated_state() {
    let auth: AuthSession = serde_json::from_value(json!({
        "access_token": "tok123",
        "token_type": "bearer",
        "user_id": "u1",
        "user_data": { "email": "dev@example.com", "full_name": "Dev One" },
    }))
    .unwrap();

    let mut state = SessionState::booting();
    let token = auth.access_token.clone();
    state.apply(token, auth.into_profile());

    assert!(state.is_authenticated());
    assert_eq!(state.token.as_deref(), Some("tok123"));
    assert_eq!(state.user_id().as_deref(), Some("u1"));
    assert_eq!(
        state.user.as_ref().map(|u| u.email.as_str()),
        Some("dev@example.com")
    );
}

#[test]
fn reset_clears_session_and_is_idempotent() {
    let mut state = signed_in_state();
    state.reset();
    assert!(!state.is_authenticated());
    assert_eq!(state.token, None);
    assert_eq!(state.user, None);
    assert!(!state.loading);

    // Signing out while signed out changes nothing.
    let snapshot = state.clone();
    state.reset();
    assert_eq!(state, snapshot);
}

#[test]
fn stale_profile_response_is_not_absorbed() {
    // A profile refresh issued under tok123 may only commit while the
    // session still holds tok123.
    let state = signed_in_state();
    assert!(state.owns_token("tok123"));

    // Signed out while the fetch was in flight.
    let mut signed_out = state.clone();
    signed_out.reset();
    assert!(!signed_out.owns_token("tok123"));

    // A different account signed in while the fetch was in flight.
    let mut replaced = state;
    replaced.apply("tok456".to_owned(), UserProfile::default());
    assert!(!replaced.owns_token("tok123"));
    assert!(replaced.owns_token("tok456"));
}
