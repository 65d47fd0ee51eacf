//! Shared auth helpers: route guard and session flows.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components apply identical unauthenticated redirect behavior, and the
//! login/register pages share one path from API response to persisted token
//! and published `AuthState`.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::config::TOKEN_STORAGE_KEY;
use crate::net::api::ApiClient;
use crate::net::error::ApiError;
use crate::net::types::{RegisterRequest, User};
use crate::state::auth::{AuthSession, AuthState};
use crate::util::token_store::BrowserTokenStore;

/// Whether a guarded route should bounce to `/login`.
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.is_authenticated()
}

/// Redirect to `/login` whenever no token is present.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&auth.get()) {
            navigate("/login", NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}

/// Session store backed by `localStorage`.
pub fn browser_session() -> AuthSession<BrowserTokenStore> {
    AuthSession::new(BrowserTokenStore::new(TOKEN_STORAGE_KEY))
}

/// Log in, persist the token, and publish the user.
///
/// # Errors
///
/// Returns the API failure untouched so the page can show its message.
pub async fn login(api: &ApiClient, auth: RwSignal<AuthState>, email: &str, password: &str) -> Result<User, ApiError> {
    let response = api.login(email, password).await?;
    let user = response.user.clone();
    auth.set(browser_session().establish(response));
    Ok(user)
}

/// Register, persist the token, and publish the user.
///
/// # Errors
///
/// Returns the API failure untouched so the page can show its message.
pub async fn register(api: &ApiClient, auth: RwSignal<AuthState>, request: &RegisterRequest) -> Result<User, ApiError> {
    let response = api.register(request).await?;
    let user = response.user.clone();
    auth.set(browser_session().establish(response));
    Ok(user)
}

/// Clear the stored token and publish "no user".
pub fn logout(auth: RwSignal<AuthState>) {
    auth.set(browser_session().logout());
}
