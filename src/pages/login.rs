//! Login page exchanging credentials for a bearer token.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

#[cfg(feature = "hydrate")]
use crate::net::client::use_api;
#[cfg(feature = "hydrate")]
use crate::state::session::SessionStore;
use crate::util::auth::use_session_guard;

/// Validate the login form: a plausible email and a password of at least
/// 4 characters.
pub(crate) fn validate_login_input(
    email: &str,
    password: &str,
) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    if password.chars().count() < 4 {
        return Err("Password must be at least 4 characters.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

/// Login page — submits credentials and commits the parsed token.
///
/// A response whose credential string fails to parse leaves the session
/// anonymous; the guard then bounces the follow-up navigation back here.
#[component]
pub fn LoginPage() -> impl IntoView {
    use_session_guard();

    #[cfg(feature = "hydrate")]
    let session = expect_context::<SessionStore>();
    #[cfg(feature = "hydrate")]
    let client = use_api();
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value) =
            match validate_login_input(&email.get(), &password.get()) {
                Ok(values) => values,
                Err(message) => {
                    error.set(message.to_owned());
                    return;
                }
            };
        error.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            busy.set(true);
            let client = client.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::login(&client, &email_value, &password_value).await {
                    Ok(token) => {
                        session.apply_credential(token);
                        navigate("/", NavigateOptions::default());
                    }
                    Err(e) => error.set(format!("Login failed: {e}")),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email_value, password_value);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Kindergarten Admin"</h1>
                <p class="login-card__subtitle">"Sign in"</p>
                <form class="login-form" on:submit=on_submit>
                    <label class="login-form__label">
                        "Email"
                        <input
                            class="login-input"
                            type="email"
                            placeholder="you@example.com"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="login-form__label">
                        "Password"
                        <input
                            class="login-input"
                            type="password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign In"
                    </button>
                </form>
                <Show when=move || !error.get().is_empty()>
                    <p class="login-message">{move || error.get()}</p>
                </Show>
            </div>
        </div>
    }
}
