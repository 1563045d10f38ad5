use super::*;

fn make_user(username: &str) -> UserProfile {
    UserProfile {
        id: format!("u-{username}"),
        username: username.to_owned(),
        email: format!("{username}@example.com"),
        real_name: None,
        bio: None,
        avatar_url: None,
    }
}

// ============================================================================
// SessionState
// ============================================================================

#[test]
fn default_state_is_anonymous_and_loading() {
    let state = SessionState::default();
    assert_eq!(state.user, None);
    assert_eq!(state.access_token, None);
    assert!(state.loading);
}

// ============================================================================
// Snapshot persistence
// ============================================================================

#[test]
fn snapshot_round_trips_the_profile() {
    clear_snapshot();
    assert_eq!(load_snapshot(), None);

    let user = make_user("alice");
    save_snapshot(&user);
    assert_eq!(load_snapshot(), Some(user));
}

#[test]
fn saving_again_overwrites_the_previous_snapshot() {
    clear_snapshot();
    save_snapshot(&make_user("alice"));
    save_snapshot(&make_user("bob"));

    let restored = load_snapshot();
    assert_eq!(restored.map(|user| user.username), Some("bob".to_owned()));
}

#[test]
fn clearing_removes_the_snapshot() {
    save_snapshot(&make_user("alice"));
    clear_snapshot();
    assert_eq!(load_snapshot(), None);
}
