use super::*;

#[test]
fn bearer_header_prefixes_the_token() {
    assert_eq!(bearer_header("jwt-abc"), "Bearer jwt-abc");
}

#[test]
fn bearer_header_keeps_the_token_verbatim() {
    // Tokens are opaque; nothing must be trimmed or escaped.
    assert_eq!(bearer_header(" a.b.c "), "Bearer  a.b.c ");
}
