//! Route guards projecting session state onto navigation decisions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Guarded pages install one of the redirect effects and gate their body on
//! the same predicate, so every route applies identical behavior in one of
//! two polarities: protected pages bounce signed-out visitors to the login
//! form, public auth pages bounce signed-in users to the dashboard.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::SessionState;

/// What the session currently implies for routing.
///
/// A pure projection of [`SessionState`]; guards hold no state of their own.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardState {
    /// Persisted session not read yet; guards wait instead of deciding.
    Loading,
    Authenticated,
    Unauthenticated,
}

/// Project a session onto the guard state machine.
///
/// Loading takes precedence over both answers: a guard only decides once
/// the stored session has been read.
pub fn guard_state(session: &SessionState) -> GuardState {
    if session.loading {
        GuardState::Loading
    } else if session.is_authenticated() {
        GuardState::Authenticated
    } else {
        GuardState::Unauthenticated
    }
}

/// Redirect target for a protected route, if one applies.
pub fn protected_redirect(state: GuardState) -> Option<&'static str> {
    match state {
        GuardState::Unauthenticated => Some("/login"),
        GuardState::Loading | GuardState::Authenticated => None,
    }
}

/// Redirect target for a public auth route, if one applies.
pub fn public_redirect(state: GuardState) -> Option<&'static str> {
    match state {
        GuardState::Authenticated => Some("/dashboard"),
        GuardState::Loading | GuardState::Unauthenticated => None,
    }
}

/// Navigation options that replace the current history entry; back does not
/// return to the page the guard rejected.
pub fn replace_history() -> NavigateOptions {
    NavigateOptions {
        replace: true,
        ..NavigateOptions::default()
    }
}

/// Redirect to `/login` whenever the session has loaded with no user.
pub fn install_protected_redirect<F>(session: RwSignal<SessionState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let Some(target) = protected_redirect(guard_state(&session.get())) {
            navigate(target, replace_history());
        }
    });
}

/// Redirect to `/dashboard` whenever the session has loaded signed in.
pub fn install_public_redirect<F>(session: RwSignal<SessionState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let Some(target) = public_redirect(guard_state(&session.get())) {
            navigate(target, replace_history());
        }
    });
}
