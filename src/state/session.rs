//! Auth-session state and its lifecycle operations.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided via context as `RwSignal<SessionState>`. Route guards and
//! user-aware components read it; only the operations in this module mutate
//! it. Every mutation writes durable storage and the in-memory signal in the
//! same operation, so the two never disagree about who is signed in.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;
use log::warn;

use crate::net::api::{self, ApiError};
use crate::net::types::{AuthSession, UserProfile};
use crate::util::session_storage;

/// The current authentication session.
///
/// `authenticated` means token and user are both present; the operations
/// below never set one without the other.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionState {
    pub token: Option<String>,
    pub user: Option<UserProfile>,
    /// True until the persisted session has been read at startup.
    pub loading: bool,
}

impl SessionState {
    /// Startup state: nothing known yet, storage not consulted.
    pub fn booting() -> Self {
        Self {
            token: None,
            user: None,
            loading: true,
        }
    }

    /// Whether a signed-in user is present.
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some() && self.user.is_some()
    }

    /// Id of the signed-in user, if any.
    pub fn user_id(&self) -> Option<String> {
        self.user.as_ref().map(|user| user.id.clone())
    }

    /// Whether this session still holds the given token; a response fetched
    /// under a token the session no longer holds is stale.
    fn owns_token(&self, token: &str) -> bool {
        self.token.as_deref() == Some(token)
    }

    fn apply(&mut self, token: String, user: UserProfile) {
        self.token = Some(token);
        self.user = Some(user);
        self.loading = false;
    }

    fn reset(&mut self) {
        self.token = None;
        self.user = None;
        self.loading = false;
    }
}

/// Read the persisted session into memory.
///
/// Called once from the application root before any guarded route renders.
/// On the server there is no storage to consult, so the state stays in its
/// loading form and guards keep showing their neutral indicator.
pub fn initialize(session: RwSignal<SessionState>) {
    #[cfg(feature = "hydrate")]
    {
        let next = match session_storage::load() {
            Some(stored) => SessionState {
                token: Some(stored.token),
                user: Some(stored.user),
                loading: false,
            },
            None => SessionState {
                token: None,
                user: None,
                loading: false,
            },
        };
        session.set(next);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = session;
    }
}

/// Persist an auth response and publish it to the signal, token and user
/// together.
fn commit(session: RwSignal<SessionState>, auth: AuthSession) {
    let token = auth.access_token.clone();
    let user = auth.into_profile();
    session_storage::save(&token, &user);
    session.update(|state| state.apply(token, user));
}

/// Sign in with credentials.
///
/// # Errors
///
/// On any failure the session is left untouched and the error carries the
/// backend's message ([`ApiError::Server`]) or names the transport problem
/// ([`ApiError::Network`]).
pub async fn login(
    session: RwSignal<SessionState>,
    email: &str,
    password: &str,
) -> Result<(), ApiError> {
    let auth = api::login(email, password).await?;
    commit(session, auth);
    Ok(())
}

/// Create an account and sign in as it.
///
/// # Errors
///
/// Same contract as [`login`]; a taken email comes back as
/// [`ApiError::Server`] with the backend's message.
pub async fn register(
    session: RwSignal<SessionState>,
    full_name: &str,
    email: &str,
    password: &str,
) -> Result<(), ApiError> {
    let auth = api::register(full_name, email, password).await?;
    commit(session, auth);
    Ok(())
}

/// Sign out: wipe storage and the in-memory session.
///
/// Idempotent; calling while already signed out is a no-op.
pub fn logout(session: RwSignal<SessionState>) {
    session_storage::clear();
    session.update(SessionState::reset);
}

/// Re-fetch the signed-in user's profile and refresh both copies.
///
/// Leaves the session untouched when signed out or when the fetch fails;
/// the stale profile copy is still a valid session. A response that lands
/// after the token changed (sign-out, or a different account signing in)
/// is dropped instead of absorbed.
pub async fn refresh_user(session: RwSignal<SessionState>) {
    let state = session.get_untracked();
    let Some(user_id) = state.user_id() else {
        return;
    };
    let Some(token) = state.token else {
        return;
    };
    match api::fetch_user(&token, &user_id).await {
        Ok(user) => {
            // The session may have been signed out or replaced mid-flight.
            if !session.with_untracked(|state| state.owns_token(&token)) {
                return;
            }
            session_storage::save(&token, &user);
            session.update(|state| state.user = Some(user));
        }
        Err(e) => warn!("profile refresh failed: {e}"),
    }
}
