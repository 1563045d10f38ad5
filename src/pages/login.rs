//! Login page: username-or-email plus password sign-in.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::net::api;
use crate::net::session_client::SessionClient;
use crate::state::session::Session;

/// Trimmed credentials ready to submit.
pub(crate) fn validate_login_input(
    identifier: &str,
    password: &str,
) -> Result<(String, String), &'static str> {
    let identifier = identifier.trim();
    if identifier.is_empty() {
        return Err("Enter your username or email.");
    }
    if password.is_empty() {
        return Err("Enter your password.");
    }
    Ok((identifier.to_owned(), password.to_owned()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let client = expect_context::<SessionClient>();
    let identifier = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    // On success the route guard sees an authenticated session on a
    // public-only path and redirects to the landing path itself.
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (identifier_value, password_value) =
            match validate_login_input(&identifier.get(), &password.get()) {
                Ok(values) => values,
                Err(message) => {
                    info.set(message.to_owned());
                    return;
                }
            };
        busy.set(true);
        info.set("Signing in...".to_owned());
        client.spawn(move |_| async move {
            match api::login(&identifier_value, &password_value).await {
                Ok(auth) => session.sign_in(auth.user, auth.access_token),
                Err(e) => {
                    info.set(format!("Sign-in failed: {e}"));
                    busy.set(false);
                }
            }
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Sign in"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <label class="form-field">
                        <span class="form-field__label">"Username or email"</span>
                        <input
                            class="form-field__input"
                            type="text"
                            autocomplete="username"
                            prop:value=move || identifier.get()
                            on:input=move |ev| identifier.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="form-field">
                        <span class="form-field__label">"Password"</span>
                        <input
                            class="form-field__input"
                            type="password"
                            autocomplete="current-password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        "Sign in"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-message">{move || info.get()}</p>
                </Show>
                <p class="auth-card__links">
                    <a href="/reset-password">"Forgot your password?"</a>
                    <a href="/register">"New here? Create an account"</a>
                </p>
            </div>
        </div>
    }
}
