use super::*;

// =============================================================
// Ticket currency
// =============================================================

#[test]
fn fresh_ticket_is_current() {
    let gate = DebounceGate::new();
    let ticket = gate.begin();
    assert!(ticket.is_current());
}

#[test]
fn newer_ticket_supersedes_older_ones() {
    // Three keystrokes inside the quiet window: "a", "ab", "abc".
    let gate = DebounceGate::new();
    let a = gate.begin();
    let ab = gate.begin();
    let abc = gate.begin();

    assert!(!a.is_current());
    assert!(!ab.is_current());
    assert!(abc.is_current());
}

#[test]
fn only_latest_quiet_timer_would_fire() {
    let gate = DebounceGate::new();
    let tickets: Vec<_> = (0..5).map(|_| gate.begin()).collect();
    let firing: Vec<_> = tickets.iter().filter(|t| t.is_current()).collect();
    assert_eq!(firing.len(), 1);
}

#[test]
fn stale_response_is_discarded_after_newer_input() {
    let gate = DebounceGate::new();
    let ab = gate.begin();

    // "ab" request is in flight when "abc" is typed; its response arrives
    // second but must not apply.
    let abc = gate.begin();
    let abc_applied = abc.is_current();
    let ab_applied = ab.is_current();

    assert!(abc_applied);
    assert!(!ab_applied);
}

#[test]
fn invalidate_cancels_without_claiming() {
    let gate = DebounceGate::new();
    let pending = gate.begin();
    gate.invalidate();
    assert!(!pending.is_current());
}

#[test]
fn gates_are_independent() {
    let username = DebounceGate::new();
    let email = DebounceGate::new();
    let u = username.begin();
    let _ = email.begin();
    assert!(u.is_current());
}

#[test]
fn clones_share_the_counter() {
    let gate = DebounceGate::new();
    let view = gate.clone();
    let old = gate.begin();
    let new = view.begin();
    assert!(!old.is_current());
    assert!(new.is_current());
}
