//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! `AuthState` is published through a `RwSignal` in context; route guards and
//! user-aware components subscribe by reading it. `AuthSession` owns the
//! token bookkeeping and produces the next `AuthState` for each transition.
//!
//! TRADE-OFFS
//! ==========
//! The token is opaque. Presence is the only check made locally; signature,
//! expiry, and refresh are left to the server.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::{AuthResponse, User};
use crate::util::token_store::TokenStore;

/// Authentication state tracking the current user and token presence.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    /// User returned by the last login/register. `None` after a reload until
    /// the next login, even when a token is stored.
    pub user: Option<User>,
    /// Whether a token is persisted.
    pub token_present: bool,
}

impl AuthState {
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token_present
    }
}

/// Token persistence plus the state transitions it drives.
#[derive(Clone, Debug)]
pub struct AuthSession<S> {
    store: S,
}

impl<S: TokenStore> AuthSession<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Current token, if one is stored.
    pub fn current_token(&self) -> Option<String> {
        self.store.load()
    }

    /// Pure presence check; the token is not validated.
    pub fn is_authenticated(&self) -> bool {
        self.current_token().is_some()
    }

    /// State to publish at startup.
    pub fn restore(&self) -> AuthState {
        AuthState { user: None, token_present: self.is_authenticated() }
    }

    /// Persist the token from a successful login/register and return the
    /// state to publish.
    pub fn establish(&self, response: AuthResponse) -> AuthState {
        self.store.save(&response.access_token);
        log::debug!("session established for user {}", response.user.id);
        AuthState { user: Some(response.user), token_present: self.is_authenticated() }
    }

    /// Remove the token and return the "no user" state.
    pub fn logout(&self) -> AuthState {
        self.store.clear();
        log::debug!("session cleared");
        AuthState::default()
    }
}
