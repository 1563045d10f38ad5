use super::*;

// =============================================================
// Helpers
// =============================================================

fn make_user() -> UserProfile {
    UserProfile {
        id: "u-1".to_owned(),
        username: "alice".to_owned(),
        email: "alice@example.com".to_owned(),
        real_name: Some("Alice Liddell".to_owned()),
        bio: None,
        avatar_url: Some("https://img.example.com/alice.png".to_owned()),
    }
}

fn make_community() -> Community {
    Community {
        id: "c-1".to_owned(),
        slug: "rustaceans".to_owned(),
        name: "Rustaceans".to_owned(),
        description: "Systems programming study group".to_owned(),
        avatar_url: None,
        banner_url: None,
        is_private: false,
        tags: vec!["programming".to_owned(), "rust".to_owned()],
        member_count: 42,
        owner_id: "u-1".to_owned(),
        is_member: true,
        is_owner: false,
    }
}

// =============================================================
// UserProfile serde
// =============================================================

#[test]
fn user_profile_round_trips() {
    let user = make_user();
    let json = serde_json::to_string(&user).unwrap();
    let back: UserProfile = serde_json::from_str(&json).unwrap();
    assert_eq!(back, user);
}

#[test]
fn user_profile_optional_fields_default_when_absent() {
    let json = r#"{"id":"u-2","username":"bob","email":"bob@example.com"}"#;
    let user: UserProfile = serde_json::from_str(json).unwrap();
    assert_eq!(user.username, "bob");
    assert_eq!(user.real_name, None);
    assert_eq!(user.bio, None);
    assert_eq!(user.avatar_url, None);
}

// =============================================================
// Community serde
// =============================================================

#[test]
fn community_round_trips() {
    let community = make_community();
    let json = serde_json::to_string(&community).unwrap();
    let back: Community = serde_json::from_str(&json).unwrap();
    assert_eq!(back, community);
}

#[test]
fn community_membership_flags_default_to_false() {
    let json = r#"{"id":"c-2","slug":"poets","name":"Poets","owner_id":"u-9"}"#;
    let community: Community = serde_json::from_str(json).unwrap();
    assert!(!community.is_member);
    assert!(!community.is_owner);
    assert!(!community.is_private);
    assert!(community.tags.is_empty());
    assert_eq!(community.member_count, 0);
    assert_eq!(community.description, "");
}

#[test]
fn community_member_count_accepts_whole_floats() {
    let json = r#"{"id":"c-3","slug":"mathy","name":"Mathy","owner_id":"u-9","member_count":7.0}"#;
    let community: Community = serde_json::from_str(json).unwrap();
    assert_eq!(community.member_count, 7);
}

#[test]
fn community_member_count_rejects_fractional_values() {
    let json = r#"{"id":"c-4","slug":"mathy","name":"Mathy","owner_id":"u-9","member_count":7.5}"#;
    assert!(serde_json::from_str::<Community>(json).is_err());
}

// =============================================================
// BlogPost serde
// =============================================================

#[test]
fn blog_post_defaults_subtitle_and_quiz_flag() {
    let json = r#"{
        "id": "p-1",
        "title": "Borrow checker field notes",
        "content_html": "<p>Lifetimes are regions.</p>",
        "community_slug": "rustaceans",
        "community_name": "Rustaceans",
        "author_id": "u-1",
        "author_username": "alice",
        "created_at": "2025-06-01T12:00:00Z"
    }"#;
    let post: BlogPost = serde_json::from_str(json).unwrap();
    assert_eq!(post.subtitle, None);
    assert!(!post.has_quiz);
    assert_eq!(post.community_slug, "rustaceans");
}

// =============================================================
// Auth payloads
// =============================================================

#[test]
fn auth_response_carries_token_and_user() {
    let json = r#"{
        "access_token": "jwt-abc",
        "user": {"id":"u-1","username":"alice","email":"alice@example.com"}
    }"#;
    let resp: AuthResponse = serde_json::from_str(json).unwrap();
    assert_eq!(resp.access_token, "jwt-abc");
    assert_eq!(resp.user.username, "alice");
}

#[test]
fn availability_response_round_trips() {
    let json = serde_json::to_string(&AvailabilityResponse { available: true }).unwrap();
    assert_eq!(json, r#"{"available":true}"#);
    let back: AvailabilityResponse = serde_json::from_str(&json).unwrap();
    assert!(back.available);
}
