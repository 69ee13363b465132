//! Browser localStorage persistence for the authenticated session.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session store is the sole writer of these keys. `token`, `user`, and
//! `user_id` move as one unit: saved together on login/register, removed
//! together on logout, so storage never holds a token without its user.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort browser-only behavior; SSR paths no-op and a
//! corrupt stored record reads back as signed-out rather than failing
//! hydration.

#[cfg(test)]
#[path = "session_storage_test.rs"]
mod session_storage_test;

#[cfg(any(test, feature = "hydrate"))]
use log::warn;

use crate::net::types::UserProfile;

#[cfg(feature = "hydrate")]
const TOKEN_KEY: &str = "token";
#[cfg(feature = "hydrate")]
const USER_KEY: &str = "user";
#[cfg(feature = "hydrate")]
const USER_ID_KEY: &str = "user_id";

/// A session read back from durable storage.
#[derive(Clone, Debug, PartialEq)]
pub struct StoredSession {
    pub token: String,
    pub user: UserProfile,
}

/// Interpret raw storage values as a session.
///
/// Returns `None` unless a non-empty token and a parseable user record are
/// both present. An unreadable user record is logged and dropped so startup
/// lands on signed-out instead of panicking inside hydration.
#[cfg(any(test, feature = "hydrate"))]
fn decode_stored(token: Option<String>, raw_user: Option<String>) -> Option<StoredSession> {
    let token = token.filter(|t| !t.is_empty())?;
    let raw_user = raw_user?;
    match serde_json::from_str::<UserProfile>(&raw_user) {
        Ok(user) => Some(StoredSession { token, user }),
        Err(e) => {
            warn!("stored user record unreadable ({e}); starting signed out");
            None
        }
    }
}

#[cfg(feature = "hydrate")]
fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Load the persisted session, if any.
pub fn load() -> Option<StoredSession> {
    #[cfg(feature = "hydrate")]
    {
        let storage = storage()?;
        let token = storage.get_item(TOKEN_KEY).ok().flatten();
        let raw_user = storage.get_item(USER_KEY).ok().flatten();
        decode_stored(token, raw_user)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist a session. All three keys are written in one pass.
pub fn save(token: &str, user: &UserProfile) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = storage() else {
            return;
        };
        let Ok(raw_user) = serde_json::to_string(user) else {
            warn!("user record not serializable; session not persisted");
            return;
        };
        let _ = storage.set_item(TOKEN_KEY, token);
        let _ = storage.set_item(USER_KEY, &raw_user);
        let _ = storage.set_item(USER_ID_KEY, &user.id);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, user);
    }
}

/// Remove every persisted session key. Safe to call when nothing is stored.
pub fn clear() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = storage() {
            let _ = storage.remove_item(TOKEN_KEY);
            let _ = storage.remove_item(USER_KEY);
            let _ = storage.remove_item(USER_ID_KEY);
        }
    }
}
