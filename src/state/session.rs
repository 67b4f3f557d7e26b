//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Single source of truth for the bearer token. The store is provided via
//! context at the application root and consumed by the route guard and the
//! API client; nothing else is allowed to mutate the token. Writers are the
//! login flow, explicit logout, and the client's 401 handling.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::util::token_storage;

/// Snapshot of the current session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    pub token: Option<String>,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

/// Owned token slot shared through context.
///
/// Reads after `set_token`/`clear` always observe the committed value;
/// reactive consumers (the guard) re-run via signal subscription.
#[derive(Clone, Copy)]
pub struct SessionStore {
    inner: RwSignal<Session>,
}

impl SessionStore {
    /// Empty store with no token.
    pub fn new() -> Self {
        Self { inner: RwSignal::new(Session::default()) }
    }

    /// Store seeded from durable storage, so a reload keeps the user
    /// signed in.
    pub fn restore() -> Self {
        Self { inner: RwSignal::new(Session { token: token_storage::load() }) }
    }

    pub fn get(&self) -> Session {
        self.inner.get()
    }

    pub fn token(&self) -> Option<String> {
        self.inner.with(|session| session.token.clone())
    }

    /// Overwrite the token and persist it. Subscribers observe the new
    /// value before this call returns.
    pub fn set_token(&self, token: String) {
        token_storage::save(&token);
        self.inner.set(Session { token: Some(token) });
    }

    /// Drop the token and its persisted copy. Idempotent.
    pub fn clear(&self) {
        token_storage::clear();
        self.inner.set(Session::default());
    }

    /// Commit a credential-exchange parse outcome: a token signs the
    /// session in, a failed parse leaves it signed out.
    pub fn apply_credential(&self, token: Option<String>) {
        match token {
            Some(token) => self.set_token(token),
            None => self.clear(),
        }
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}
