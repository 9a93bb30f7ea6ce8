//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! `SessionStore` is the single source of truth for "who is signed in". The
//! request pipeline reads the token from it on every dispatch and the route
//! guard reads the authenticated flag on every navigation. Only `establish`
//! and `evict` mutate it.
//!
//! DESIGN
//! ======
//! The token and identity live together in one `Credentials` value, so a
//! session can never hold one without the other. `is_authenticated` is derived
//! from the token rather than stored. In-memory state is an `ArcRwSignal` so
//! views re-render on login/logout, and every mutation is mirrored to durable
//! storage under fixed keys so a reload rebuilds the same session.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::Arc;

use leptos::logging::warn;
use leptos::prelude::*;

use super::storage::{BrowserStorage, KeyValueStore, StorageError};

/// Storage key holding the bearer token.
pub const TOKEN_KEY: &str = "boardgame_token";
/// Storage key holding the display name.
pub const DISPLAY_NAME_KEY: &str = "boardgame_user";
/// Storage key holding the numeric user id as a decimal string.
pub const USER_ID_KEY: &str = "boardgame_userId";

const SESSION_KEYS: [&str; 3] = [TOKEN_KEY, DISPLAY_NAME_KEY, USER_ID_KEY];

/// Who the signed-in user is, as reported by the last login/register.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Identity {
    pub display_name: String,
    /// `None` when the persisted id was missing or unparseable.
    pub user_id: Option<i64>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct Credentials {
    token: String,
    identity: Identity,
}

/// Snapshot of the authentication state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    credentials: Option<Credentials>,
}

impl Session {
    fn signed_in(token: String, identity: Identity) -> Self {
        Self { credentials: Some(Credentials { token, identity }) }
    }

    /// Rebuild a session from durable storage. Never fails: anything
    /// missing or malformed reads as absent.
    pub fn restore(storage: &dyn KeyValueStore) -> Self {
        let Some(token) = storage.get(TOKEN_KEY).filter(|t| !t.is_empty()) else {
            return Self::default();
        };
        let identity = Identity {
            display_name: storage.get(DISPLAY_NAME_KEY).unwrap_or_default(),
            user_id: storage.get(USER_ID_KEY).as_deref().and_then(parse_user_id),
        };
        Self::signed_in(token, identity)
    }

    pub fn token(&self) -> Option<&str> {
        self.credentials.as_ref().map(|c| c.token.as_str())
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.credentials.as_ref().map(|c| &c.identity)
    }

    pub fn is_authenticated(&self) -> bool {
        self.credentials.is_some()
    }
}

/// Parse a persisted user id. Anything but a plain decimal integer is `None`.
pub(crate) fn parse_user_id(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}

/// Shared handle to the process-wide session. Clones observe the same state.
#[derive(Clone)]
pub struct SessionStore {
    state: ArcRwSignal<Session>,
    storage: Arc<dyn KeyValueStore>,
}

impl SessionStore {
    /// Initialize from `storage`, restoring any persisted session.
    pub fn load(storage: impl KeyValueStore + 'static) -> Self {
        let initial = Session::restore(&storage);
        Self { state: ArcRwSignal::new(initial), storage: Arc::new(storage) }
    }

    /// Initialize from the browser's `localStorage`.
    pub fn browser() -> Self {
        Self::load(BrowserStorage)
    }

    /// Current session without subscribing the caller to changes.
    pub fn snapshot(&self) -> Session {
        self.state.get_untracked()
    }

    /// Current bearer token, read untracked. Used at request dispatch time.
    pub fn current_token(&self) -> Option<String> {
        self.state.with_untracked(|s| s.token().map(str::to_owned))
    }

    /// Reactive authenticated flag.
    pub fn is_authenticated(&self) -> bool {
        self.state.with(Session::is_authenticated)
    }

    /// Reactive identity of the signed-in user.
    pub fn identity(&self) -> Option<Identity> {
        self.state.with(|s| s.identity().cloned())
    }

    /// Record a successful login/register.
    ///
    /// An empty token cannot authenticate anything, so it clears the session
    /// instead. If storage rejects a write, all session keys are removed so a
    /// reload never sees a partial triple; the in-memory session is still set.
    pub fn establish(&self, token: &str, display_name: &str, user_id: i64) {
        if token.is_empty() {
            warn!("session: refusing empty token, clearing session");
            self.evict();
            return;
        }
        if let Err(e) = self.persist(token, display_name, user_id) {
            warn!("session: not persisted ({e}); will not survive reload");
            self.erase();
        }
        let identity = Identity { display_name: display_name.to_owned(), user_id: Some(user_id) };
        self.state.set(Session::signed_in(token.to_owned(), identity));
    }

    /// Clear the session in memory and in storage. Idempotent.
    pub fn evict(&self) {
        self.erase();
        if self.state.with_untracked(Session::is_authenticated) {
            self.state.set(Session::default());
        }
    }

    fn persist(&self, token: &str, display_name: &str, user_id: i64) -> Result<(), StorageError> {
        self.storage.set(TOKEN_KEY, token)?;
        self.storage.set(DISPLAY_NAME_KEY, display_name)?;
        self.storage.set(USER_ID_KEY, &user_id.to_string())
    }

    fn erase(&self) {
        for key in SESSION_KEYS {
            self.storage.remove(key);
        }
    }
}
