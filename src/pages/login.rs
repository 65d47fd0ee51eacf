//! Login page for email + password auth.
//!
//! SYSTEM CONTEXT
//! ==============
//! Entry point for signed-out users. A successful login persists the token,
//! publishes the user into `AuthState`, and lands on `/boards`. Failures keep
//! the user on the page with the server's message.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api::ApiClient;
use crate::state::auth::AuthState;
use crate::state::form::{FormError, FormStatus, required};

/// Shown when a failed login carries no server message.
pub const LOGIN_FALLBACK: &str = "Login failed. Please try again.";

#[component]
pub fn LoginPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let status = RwSignal::new(FormStatus::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let (email_value, password_value) =
            match validate_login_input(&email.get_untracked(), &password.get_untracked()) {
                Ok(values) => values,
                Err(err) => {
                    status.update(|s| s.reject(err));
                    return;
                }
            };
        if !status.try_update(FormStatus::begin).unwrap_or(false) {
            return;
        }

        let api = api.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let result = crate::util::auth::login(&api, auth, &email_value, &password_value).await;
            if let Err(err) = &result {
                leptos::logging::warn!("login failed: {err}");
            }
            if let Some(user) = status.try_update(|s| s.settle(result, LOGIN_FALLBACK)).flatten() {
                leptos::logging::log!("signed in as {}", user.email);
                navigate("/boards", NavigateOptions::default());
            }
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Kanban"</h1>
                <p class="auth-card__subtitle">"Sign in to your boards"</p>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary auth-button" type="submit" disabled=move || status.get().loading>
                        {move || if status.get().loading { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>
                <Show when=move || status.get().error.is_some()>
                    <p class="auth-message auth-message--error">{move || status.get().error.unwrap_or_default()}</p>
                </Show>
                <p class="auth-card__footer">
                    "No account? "
                    <a href="/register">"Register"</a>
                </p>
            </div>
        </div>
    }
}

/// Trim the email and require both fields. The password is sent as typed.
fn validate_login_input(email: &str, password: &str) -> Result<(String, String), FormError> {
    let email = required("Email", email)?;
    if password.trim().is_empty() {
        return Err(FormError::Required("Password"));
    }
    Ok((email, password.to_owned()))
}

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;
