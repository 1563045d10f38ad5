use super::{MAX_TAGS, add_tag, normalize_tag, validate_community_form};

// ============================================================================
// normalize_tag
// ============================================================================

#[test]
fn normalize_tag_lowercases_and_trims() {
    assert_eq!(normalize_tag("  RustLang  "), "rustlang");
}

#[test]
fn normalize_tag_strips_leading_hash() {
    assert_eq!(normalize_tag("#history"), "history");
    assert_eq!(normalize_tag(" #History "), "history");
}

#[test]
fn normalize_tag_joins_whitespace_with_dashes() {
    assert_eq!(normalize_tag("machine   learning"), "machine-learning");
    assert_eq!(normalize_tag("# Ancient  Rome"), "ancient-rome");
}

#[test]
fn normalize_tag_empty_inputs_stay_empty() {
    assert_eq!(normalize_tag(""), "");
    assert_eq!(normalize_tag("   "), "");
    assert_eq!(normalize_tag("#"), "");
}

// ============================================================================
// add_tag
// ============================================================================

#[test]
fn add_tag_pushes_normalized_value() {
    let mut tags = Vec::new();
    assert!(add_tag(&mut tags, " #Rust Lang "));
    assert_eq!(tags, vec!["rust-lang".to_owned()]);
}

#[test]
fn add_tag_rejects_duplicates_after_normalization() {
    let mut tags = vec!["rust".to_owned()];
    assert!(!add_tag(&mut tags, "#RUST"));
    assert_eq!(tags.len(), 1);
}

#[test]
fn add_tag_rejects_empty_input() {
    let mut tags = Vec::new();
    assert!(!add_tag(&mut tags, "  # "));
    assert!(tags.is_empty());
}

#[test]
fn add_tag_enforces_the_cap() {
    let mut tags: Vec<String> = (0..MAX_TAGS).map(|n| format!("tag{n}")).collect();
    assert!(!add_tag(&mut tags, "overflow"));
    assert_eq!(tags.len(), MAX_TAGS);
}

// ============================================================================
// validate_community_form
// ============================================================================

#[test]
fn validate_community_form_trims_and_accepts() {
    assert_eq!(validate_community_form("  Book Club  "), Ok("Book Club".to_owned()));
}

#[test]
fn validate_community_form_accepts_three_characters() {
    assert_eq!(validate_community_form("abc"), Ok("abc".to_owned()));
}

#[test]
fn validate_community_form_rejects_short_names() {
    assert!(validate_community_form("ab").is_err());
    assert!(validate_community_form("  a  ").is_err());
    assert!(validate_community_form("").is_err());
}
