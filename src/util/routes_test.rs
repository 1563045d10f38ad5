use super::*;

// =============================================================
// Classification
// =============================================================

#[test]
fn protected_prefixes_classify_protected() {
    assert_eq!(classify("/profile"), RouteClass::Protected);
    assert_eq!(classify("/profile/me"), RouteClass::Protected);
    assert_eq!(classify("/compose/rust-lang"), RouteClass::Protected);
    assert_eq!(classify("/communities/new"), RouteClass::Protected);
}

#[test]
fn public_only_prefixes_classify_public_only() {
    assert_eq!(classify("/login"), RouteClass::PublicOnly);
    assert_eq!(classify("/register"), RouteClass::PublicOnly);
    assert_eq!(classify("/reset-password"), RouteClass::PublicOnly);
}

#[test]
fn unlisted_paths_are_neutral() {
    assert_eq!(classify("/"), RouteClass::Neutral);
    assert_eq!(classify("/explore"), RouteClass::Neutral);
    assert_eq!(classify("/c/rust-lang"), RouteClass::Neutral);
    assert_eq!(classify("/p/42"), RouteClass::Neutral);
}

#[test]
fn prefix_match_respects_segment_boundaries() {
    assert_eq!(classify("/profiles"), RouteClass::Neutral);
    assert_eq!(classify("/composer"), RouteClass::Neutral);
    assert_eq!(classify("/loginhelp"), RouteClass::Neutral);
    assert_eq!(classify("/profile/"), RouteClass::Protected);
}

// =============================================================
// Redirect outcomes
// =============================================================

#[test]
fn anonymous_on_protected_path_goes_to_login() {
    assert_eq!(redirect_for("/profile/me", false), Some("/login"));
    assert_eq!(redirect_for("/compose/rust-lang", false), Some("/login"));
}

#[test]
fn authenticated_on_public_only_path_goes_to_landing() {
    assert_eq!(redirect_for("/login", true), Some("/explore"));
    assert_eq!(redirect_for("/register", true), Some("/explore"));
}

#[test]
fn neutral_paths_never_redirect() {
    assert_eq!(redirect_for("/", false), None);
    assert_eq!(redirect_for("/", true), None);
    assert_eq!(redirect_for("/c/rust-lang", false), None);
    assert_eq!(redirect_for("/p/42", true), None);
}

#[test]
fn matching_session_states_render_in_place() {
    assert_eq!(redirect_for("/profile/me", true), None);
    assert_eq!(redirect_for("/login", false), None);
}
