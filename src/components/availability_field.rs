//! Registration input with a debounced uniqueness probe.
//!
//! DESIGN
//! ======
//! One component serves both probed fields; the differences (label, input
//! type, which endpoint to hit, when a value is worth probing) hang off the
//! `ProbeKind` tag rather than a bag of closure props. Typing claims a fresh
//! debounce ticket, so a slow stale probe can never overwrite the state for
//! a newer value.

#[cfg(test)]
#[path = "availability_field_test.rs"]
mod availability_field_test;

use leptos::prelude::*;

use crate::net::api;
use crate::state::availability::{AVAILABILITY_QUIET_MS, Availability};
use crate::util::debounce::{self, DebounceGate};

/// Which uniqueness-checked field a component instance renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProbeKind {
    Username,
    Email,
}

impl ProbeKind {
    pub(crate) fn label(self) -> &'static str {
        match self {
            Self::Username => "Username",
            Self::Email => "Email",
        }
    }

    fn input_type(self) -> &'static str {
        match self {
            Self::Username => "text",
            Self::Email => "email",
        }
    }

    fn autocomplete(self) -> &'static str {
        match self {
            Self::Username => "username",
            Self::Email => "email",
        }
    }

    /// Whether a trimmed value is well-formed enough to be worth a round
    /// trip. Malformed values stay [`Availability::Unknown`].
    pub(crate) fn probe_worthy(self, value: &str) -> bool {
        match self {
            Self::Username => value.len() >= 3,
            Self::Email => looks_like_email(value),
        }
    }
}

/// Cheap shape check: one `@` with a non-empty local part and a dotted
/// domain. The backend stays the authority on real deliverability.
pub(crate) fn looks_like_email(value: &str) -> bool {
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && domain.len() >= 3
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    }
}

pub(crate) fn hint_copy(kind: ProbeKind, status: Availability) -> &'static str {
    match status {
        Availability::Unknown => "",
        Availability::Checking => "Checking availability...",
        Availability::Available => match kind {
            ProbeKind::Username => "Username is available",
            ProbeKind::Email => "Email is available",
        },
        Availability::Taken => match kind {
            ProbeKind::Username => "That username is taken",
            ProbeKind::Email => "An account with that email already exists",
        },
        Availability::Failed => "Could not check availability, keep typing to retry",
    }
}

/// Text input whose value is probed for uniqueness after a quiet period.
/// The caller owns both signals so the surrounding form can gate submission
/// on [`Availability::allows_submit`].
#[component]
pub fn AvailabilityField(
    kind: ProbeKind,
    value: RwSignal<String>,
    status: RwSignal<Availability>,
) -> impl IntoView {
    let gate = DebounceGate::new();

    let on_input = move |ev: leptos::ev::Event| {
        let next = event_target_value(&ev);
        value.set(next.clone());
        let candidate = next.trim().to_owned();
        if !kind.probe_worthy(&candidate) {
            gate.invalidate();
            status.set(Availability::Unknown);
            return;
        }
        status.set(Availability::Checking);
        debounce::run_after_quiet(&gate, AVAILABILITY_QUIET_MS, move |ticket| async move {
            let result = match kind {
                ProbeKind::Username => api::username_available(&candidate).await,
                ProbeKind::Email => api::email_available(&candidate).await,
            };
            if ticket.is_current() {
                status.set(Availability::from_result(&result));
            }
        });
    };

    view! {
        <label class="form-field">
            <span class="form-field__label">{kind.label()}</span>
            <input
                class="form-field__input"
                type=kind.input_type()
                autocomplete=kind.autocomplete()
                prop:value=move || value.get()
                on:input=on_input
            />
            <span
                class="form-field__hint"
                class:form-field__hint--ok=move || status.get() == Availability::Available
                class:form-field__hint--error=move || {
                    matches!(status.get(), Availability::Taken | Availability::Failed)
                }
            >
                {move || hint_copy(kind, status.get())}
            </span>
        </label>
    }
}
