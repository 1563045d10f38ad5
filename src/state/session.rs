//! Session state for the signed-in user.
//!
//! SYSTEM CONTEXT
//! ==============
//! One [`Session`] handle is provided via context at the app root. The route
//! guard reads it to gate protected pages, the API client reads and writes
//! the bearer token through it, and pages render identity from it. Nothing
//! reaches for globals; everything that needs the session is handed this
//! handle.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::net::types::UserProfile;
use crate::util::cookies;
use crate::util::storage;

/// localStorage key holding the profile snapshot for optimistic rehydration.
pub const SESSION_SNAPSHOT_KEY: &str = "knoword.session";

/// Client-side session: the signed-in user and the private-API bearer token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionState {
    /// The signed-in user, absent when anonymous.
    pub user: Option<UserProfile>,
    /// Short-lived bearer token. Never persisted; renewed via the refresh
    /// cookie.
    pub access_token: Option<String>,
    /// True until the initial rehydration attempt resolves. The guard shows
    /// a loading indicator instead of redirecting while this holds.
    pub loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self { user: None, access_token: None, loading: true }
    }
}

/// Handle to the shared session signal.
///
/// `Copy` like the signal it wraps, so it can be captured by closures and
/// handed to the API client without reference-counting ceremony.
#[derive(Clone, Copy)]
pub struct Session(RwSignal<SessionState>);

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    #[must_use]
    pub fn new() -> Self {
        Self(RwSignal::new(SessionState::default()))
    }

    /// Reactive read of the whole state, for views.
    #[must_use]
    pub fn state(&self) -> SessionState {
        self.0.get()
    }

    /// Reactive: whether a user is signed in.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.0.with(|state| state.user.is_some())
    }

    /// Reactive: whether the initial rehydration attempt is still pending.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.0.with(|state| state.loading)
    }

    /// Reactive read of the signed-in user.
    #[must_use]
    pub fn user(&self) -> Option<UserProfile> {
        self.0.with(|state| state.user.clone())
    }

    /// Untracked token read for request dispatch. Async send paths must not
    /// subscribe to the signal.
    #[must_use]
    pub fn access_token(&self) -> Option<String> {
        self.0.with_untracked(|state| state.access_token.clone())
    }

    /// Install a signed-in user after login, registration, or rehydration.
    /// Persists the profile snapshot and resolves the loading gate.
    pub fn sign_in(&self, user: UserProfile, access_token: String) {
        save_snapshot(&user);
        self.0.update(|state| {
            state.user = Some(user);
            state.access_token = Some(access_token);
            state.loading = false;
        });
    }

    /// Replace the bearer token after a successful refresh.
    pub fn store_access_token(&self, token: &str) {
        self.0.update(|state| state.access_token = Some(token.to_owned()));
    }

    /// Update the cached profile after the user edits it.
    pub fn update_user(&self, user: UserProfile) {
        save_snapshot(&user);
        self.0.update(|state| state.user = Some(user));
    }

    /// Optimistically show the snapshot profile while rehydration runs.
    /// Returns false when no snapshot exists. Does not resolve the loading
    /// gate; only a live refresh outcome does that.
    pub fn restore_snapshot(&self) -> bool {
        match load_snapshot() {
            Some(user) => {
                self.0.update(|state| state.user = Some(user));
                true
            }
            None => false,
        }
    }

    /// Resolve the initial loading gate without signing anyone in.
    pub fn finish_loading(&self) {
        self.0.update(|state| state.loading = false);
    }

    /// Tear the session down everywhere: signal, snapshot, cookies.
    ///
    /// Used by explicit logout and by the refresh owner when renewal fails.
    pub fn expire(&self) {
        clear_snapshot();
        cookies::clear_session_cookies();
        self.0.update(|state| {
            state.user = None;
            state.access_token = None;
            state.loading = false;
        });
    }
}

fn load_snapshot() -> Option<UserProfile> {
    storage::load_json(SESSION_SNAPSHOT_KEY)
}

fn save_snapshot(user: &UserProfile) {
    storage::save_json(SESSION_SNAPSHOT_KEY, user);
}

fn clear_snapshot() {
    storage::remove_key(SESSION_SNAPSHOT_KEY);
}
