use super::*;

// ============================================================================
// Probe gating
// ============================================================================

#[test]
fn short_usernames_are_not_probed() {
    assert!(!ProbeKind::Username.probe_worthy(""));
    assert!(!ProbeKind::Username.probe_worthy("ab"));
    assert!(ProbeKind::Username.probe_worthy("abc"));
}

#[test]
fn malformed_emails_are_not_probed() {
    assert!(!ProbeKind::Email.probe_worthy("nope"));
    assert!(!ProbeKind::Email.probe_worthy("@example.com"));
    assert!(!ProbeKind::Email.probe_worthy("user@"));
    assert!(!ProbeKind::Email.probe_worthy("user@nodot"));
    assert!(!ProbeKind::Email.probe_worthy("user@.com"));
    assert!(!ProbeKind::Email.probe_worthy("user@com."));
    assert!(ProbeKind::Email.probe_worthy("user@example.com"));
}

#[test]
fn plus_addressing_and_subdomains_look_like_email() {
    assert!(looks_like_email("a+b@mail.example.co"));
    assert!(looks_like_email("x@e.io"));
}

// ============================================================================
// Hint copy
// ============================================================================

#[test]
fn hints_track_status_per_kind() {
    assert_eq!(hint_copy(ProbeKind::Username, Availability::Unknown), "");
    assert_eq!(
        hint_copy(ProbeKind::Username, Availability::Checking),
        "Checking availability..."
    );
    assert_eq!(
        hint_copy(ProbeKind::Username, Availability::Available),
        "Username is available"
    );
    assert_eq!(hint_copy(ProbeKind::Username, Availability::Taken), "That username is taken");
    assert_eq!(
        hint_copy(ProbeKind::Email, Availability::Taken),
        "An account with that email already exists"
    );
    assert_eq!(
        hint_copy(ProbeKind::Email, Availability::Failed),
        "Could not check availability, keep typing to retry"
    );
}

#[test]
fn labels_name_the_field() {
    assert_eq!(ProbeKind::Username.label(), "Username");
    assert_eq!(ProbeKind::Email.label(), "Email");
}
