use super::*;

#[test]
fn availability_endpoint_formats_expected_path() {
    assert_eq!(
        availability_endpoint("username", "alice"),
        "/api/auth/availability/username/alice"
    );
}

#[test]
fn availability_endpoint_encodes_the_probed_value() {
    assert_eq!(
        availability_endpoint("email", "a+b@example.com"),
        "/api/auth/availability/email/a%2Bb%40example.com"
    );
}

#[test]
fn encode_segment_passes_unreserved_characters() {
    assert_eq!(encode_segment("Alice_1-2.3~x"), "Alice_1-2.3~x");
}

#[test]
fn encode_segment_encodes_reserved_ascii() {
    assert_eq!(encode_segment("a/b c?"), "a%2Fb%20c%3F");
}

#[test]
fn encode_segment_encodes_utf8_bytes() {
    // é is 0xC3 0xA9 in UTF-8.
    assert_eq!(encode_segment("é"), "%C3%A9");
}
