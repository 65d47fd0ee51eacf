//! Registration page creating an account and signing it in.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api::ApiClient;
use crate::net::types::RegisterRequest;
use crate::state::auth::AuthState;
use crate::state::form::{FormError, FormStatus, required};

/// Shown when a failed registration carries no server message.
pub const REGISTER_FALLBACK: &str = "Registration failed. Please try again.";

#[component]
pub fn RegisterPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let status = RwSignal::new(FormStatus::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let request = match validate_register_input(
            &email.get_untracked(),
            &password.get_untracked(),
            &first_name.get_untracked(),
            &last_name.get_untracked(),
        ) {
            Ok(request) => request,
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
            let result = crate::util::auth::register(&api, auth, &request).await;
            if let Err(err) = &result {
                leptos::logging::warn!("registration failed: {err}");
            }
            if let Some(user) = status.try_update(|s| s.settle(result, REGISTER_FALLBACK)).flatten() {
                leptos::logging::log!("registered {}", user.email);
                navigate("/boards", NavigateOptions::default());
            }
        });
    };

    let text_input = move |field: RwSignal<String>, kind: &'static str, placeholder: &'static str| {
        view! {
            <input
                class="auth-input"
                type=kind
                placeholder=placeholder
                prop:value=move || field.get()
                on:input=move |ev| field.set(event_target_value(&ev))
            />
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Kanban"</h1>
                <p class="auth-card__subtitle">"Create an account"</p>
                <form class="auth-form" on:submit=on_submit>
                    {text_input(first_name, "text", "First name")}
                    {text_input(last_name, "text", "Last name")}
                    {text_input(email, "email", "you@example.com")}
                    {text_input(password, "password", "Password")}
                    <button class="btn btn--primary auth-button" type="submit" disabled=move || status.get().loading>
                        {move || if status.get().loading { "Creating account..." } else { "Register" }}
                    </button>
                </form>
                <Show when=move || status.get().error.is_some()>
                    <p class="auth-message auth-message--error">{move || status.get().error.unwrap_or_default()}</p>
                </Show>
                <p class="auth-card__footer">
                    "Already registered? "
                    <a href="/login">"Sign in"</a>
                </p>
            </div>
        </div>
    }
}

/// Require every field, trimming all but the password.
fn validate_register_input(
    email: &str,
    password: &str,
    first_name: &str,
    last_name: &str,
) -> Result<RegisterRequest, FormError> {
    let email = required("Email", email)?;
    if password.trim().is_empty() {
        return Err(FormError::Required("Password"));
    }
    Ok(RegisterRequest {
        email,
        password: password.to_owned(),
        first_name: required("First name", first_name)?,
        last_name: required("Last name", last_name)?,
    })
}

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;
