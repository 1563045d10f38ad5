//! Registration page with live username and email availability probes.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::availability_field::{AvailabilityField, ProbeKind, looks_like_email};
use crate::net::api;
use crate::net::session_client::SessionClient;
use crate::state::availability::Availability;

/// Trimmed `(username, email, password)` ready to submit.
pub(crate) fn validate_registration(
    username: &str,
    email: &str,
    password: &str,
    confirm: &str,
) -> Result<(String, String, String), &'static str> {
    let username = username.trim();
    if username.len() < 3 {
        return Err("Username must be at least 3 characters.");
    }
    let email = email.trim();
    if !looks_like_email(email) {
        return Err("Enter a valid email address.");
    }
    if password.len() < 8 {
        return Err("Password must be at least 8 characters.");
    }
    if password != confirm {
        return Err("Passwords do not match.");
    }
    Ok((username.to_owned(), email.to_owned(), password.to_owned()))
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let client = expect_context::<SessionClient>();
    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let username_status = RwSignal::new(Availability::Unknown);
    let email_status = RwSignal::new(Availability::Unknown);
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (username_value, email_value, password_value) = match validate_registration(
            &username.get(),
            &email.get(),
            &password.get(),
            &confirm.get(),
        ) {
            Ok(values) => values,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        // A check in flight or a failed probe blocks submission outright.
        if !username_status.get().allows_submit() || !email_status.get().allows_submit() {
            info.set("Wait for the availability checks to pass.".to_owned());
            return;
        }
        busy.set(true);
        info.set("Creating your account...".to_owned());
        let navigate = navigate.clone();
        client.spawn(move |_| async move {
            match api::register(&username_value, &email_value, &password_value).await {
                Ok(()) => navigate("/login", NavigateOptions::default()),
                Err(e) => {
                    info.set(format!("Registration failed: {e}"));
                    busy.set(false);
                }
            }
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Create your account"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <AvailabilityField
                        kind=ProbeKind::Username
                        value=username
                        status=username_status
                    />
                    <AvailabilityField kind=ProbeKind::Email value=email status=email_status />
                    <label class="form-field">
                        <span class="form-field__label">"Password"</span>
                        <input
                            class="form-field__input"
                            type="password"
                            autocomplete="new-password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="form-field">
                        <span class="form-field__label">"Confirm password"</span>
                        <input
                            class="form-field__input"
                            type="password"
                            autocomplete="new-password"
                            prop:value=move || confirm.get()
                            on:input=move |ev| confirm.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        "Create account"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-message">{move || info.get()}</p>
                </Show>
                <p class="auth-card__links">
                    <a href="/login">"Already have an account? Sign in"</a>
                </p>
            </div>
        </div>
    }
}
