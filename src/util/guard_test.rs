use super::*;
use crate::net::types::UserProfile;

fn loading_session() -> SessionState {
    SessionState::booting()
}

fn signed_out_session() -> SessionState {
    SessionState {
        token: None,
        user: None,
        loading: false,
    }
}

fn signed_in_session() -> SessionState {
    SessionState {
        token: Some("tok123".to_owned()),
        user: Some(UserProfile {
            id: "u1".to_owned(),
            ..UserProfile::default()
        }),
        loading: false,
    }
}

#[test]
fn loading_wins_over_other_answers() {
    assert_eq!(guard_state(&loading_session()), GuardState::Loading);

    // Even a fully populated session stays Loading until the flag clears.
    let mut populated = signed_in_session();
    populated.loading = true;
    assert_eq!(guard_state(&populated), GuardState::Loading);
}

#[test]
fn loaded_sessions_project_onto_auth_predicate() {
    assert_eq!(guard_state(&signed_in_session()), GuardState::Authenticated);
    assert_eq!(
        guard_state(&signed_out_session()),
        GuardState::Unauthenticated
    );

    // Token without user is not authenticated.
    let mut half = signed_out_session();
    half.token = Some("tok123".to_owned());
    assert_eq!(guard_state(&half), GuardState::Unauthenticated);
}

#[test]
fn protected_routes_redirect_only_signed_out_visitors() {
    assert_eq!(protected_redirect(GuardState::Loading), None);
    assert_eq!(protected_redirect(GuardState::Authenticated), None);
    assert_eq!(
        protected_redirect(GuardState::Unauthenticated),
        Some("/login")
    );
}

#[test]
fn public_routes_redirect_only_signed_in_visitors() {
    assert_eq!(public_redirect(GuardState::Loading), None);
    assert_eq!(public_redirect(GuardState::Unauthenticated), None);
    assert_eq!(
        public_redirect(GuardState::Authenticated),
        Some("/dashboard")
    );
}

#[test]
fn guard_navigation_replaces_history() {
    assert!(replace_history().replace);
}
