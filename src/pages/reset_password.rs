//! Password reset page: request a reset email, or set a new password when
//! arriving with a reset token in the query string.

#[cfg(test)]
#[path = "reset_password_test.rs"]
mod reset_password_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::components::availability_field::looks_like_email;
use crate::net::api;
use crate::net::session_client::SessionClient;

pub(crate) fn validate_reset_request(email: &str) -> Result<String, &'static str> {
    let email = email.trim();
    if !looks_like_email(email) {
        return Err("Enter the email address you signed up with.");
    }
    Ok(email.to_owned())
}

pub(crate) fn validate_reset_confirm(
    password: &str,
    confirm: &str,
) -> Result<String, &'static str> {
    if password.len() < 8 {
        return Err("Password must be at least 8 characters.");
    }
    if password != confirm {
        return Err("Passwords do not match.");
    }
    Ok(password.to_owned())
}

#[component]
pub fn ResetPasswordPage() -> impl IntoView {
    let client = expect_context::<SessionClient>();
    let query = use_query_map();
    let token = Memo::new(move |_| query.read().get("token"));

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let navigate = use_navigate();

    let request_client = client.clone();
    let on_request = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let email_value = match validate_reset_request(&email.get()) {
            Ok(value) => value,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        request_client.spawn(move |_| async move {
            match api::request_password_reset(&email_value).await {
                // Deliberately the same message whether or not the address
                // exists; this endpoint must not leak account presence.
                Ok(()) => info.set("If that address has an account, a reset link is on its way.".to_owned()),
                Err(e) => info.set(format!("Could not request a reset: {e}")),
            }
            busy.set(false);
        });
    };

    let on_confirm = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let Some(token_value) = token.get_untracked() else {
            return;
        };
        let password_value = match validate_reset_confirm(&password.get(), &confirm.get()) {
            Ok(value) => value,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        let navigate = navigate.clone();
        client.spawn(move |_| async move {
            match api::confirm_password_reset(&token_value, &password_value).await {
                Ok(()) => navigate("/login", NavigateOptions::default()),
                Err(e) => {
                    info.set(format!("Could not reset your password: {e}"));
                    busy.set(false);
                }
            }
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Reset password"</h1>
                <Show
                    when=move || token.get().is_some()
                    fallback=move || {
                        view! {
                            <form class="auth-form" on:submit=on_request.clone()>
                                <label class="form-field">
                                    <span class="form-field__label">"Email"</span>
                                    <input
                                        class="form-field__input"
                                        type="email"
                                        autocomplete="email"
                                        prop:value=move || email.get()
                                        on:input=move |ev| email.set(event_target_value(&ev))
                                    />
                                </label>
                                <button
                                    class="btn btn--primary"
                                    type="submit"
                                    disabled=move || busy.get()
                                >
                                    "Send reset link"
                                </button>
                            </form>
                        }
                    }
                >
                    <form class="auth-form" on:submit=on_confirm.clone()>
                        <label class="form-field">
                            <span class="form-field__label">"New password"</span>
                            <input
                                class="form-field__input"
                                type="password"
                                autocomplete="new-password"
                                prop:value=move || password.get()
                                on:input=move |ev| password.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="form-field">
                            <span class="form-field__label">"Confirm new password"</span>
                            <input
                                class="form-field__input"
                                type="password"
                                autocomplete="new-password"
                                prop:value=move || confirm.get()
                                on:input=move |ev| confirm.set(event_target_value(&ev))
                            />
                        </label>
                        <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                            "Set new password"
                        </button>
                    </form>
                </Show>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-message">{move || info.get()}</p>
                </Show>
                <p class="auth-card__links">
                    <a href="/login">"Back to sign in"</a>
                </p>
            </div>
        </div>
    }
}
