use super::*;

#[test]
fn communities_endpoint_without_search_is_bare() {
    assert_eq!(communities_endpoint(""), "/api/communities");
    assert_eq!(communities_endpoint("   "), "/api/communities");
}

#[test]
fn communities_endpoint_encodes_the_search_text() {
    assert_eq!(communities_endpoint("rust lang"), "/api/communities?search=rust%20lang");
}

#[test]
fn communities_endpoint_trims_before_encoding() {
    assert_eq!(communities_endpoint("  poetry "), "/api/communities?search=poetry");
}

#[test]
fn community_endpoint_uses_the_slug() {
    assert_eq!(community_endpoint("rustaceans"), "/api/communities/rustaceans");
}

#[test]
fn members_endpoint_extends_the_community_path() {
    assert_eq!(members_endpoint("rustaceans"), "/api/communities/rustaceans/members");
}

#[test]
fn tags_endpoint_encodes_the_prefix() {
    assert_eq!(tags_endpoint("sci fi"), "/api/communities/tags?q=sci%20fi");
    assert_eq!(tags_endpoint(""), "/api/communities/tags?q=");
}
