use super::*;

// =============================================================
// Header parsing
// =============================================================

#[test]
fn cookie_value_finds_named_cookie() {
    let header = "knoword_access=abc123; knoword_refresh=def456";
    assert_eq!(cookie_value(header, "knoword_access"), Some("abc123".to_owned()));
    assert_eq!(cookie_value(header, "knoword_refresh"), Some("def456".to_owned()));
}

#[test]
fn cookie_value_tolerates_spacing() {
    let header = " theme=dark ;  knoword_access=tok ";
    assert_eq!(cookie_value(header, "knoword_access"), Some("tok".to_owned()));
}

#[test]
fn cookie_value_misses_return_none() {
    assert_eq!(cookie_value("theme=dark", "knoword_access"), None);
    assert_eq!(cookie_value("", "knoword_access"), None);
}

#[test]
fn cookie_value_requires_exact_name() {
    let header = "knoword_access_old=stale; knoword_access=fresh";
    assert_eq!(cookie_value(header, "knoword_access"), Some("fresh".to_owned()));
}

#[test]
fn cookie_value_handles_empty_values() {
    assert_eq!(cookie_value("knoword_access=", "knoword_access"), Some(String::new()));
}

// =============================================================
// Expiry format
// =============================================================

#[test]
fn expiry_cookie_uses_epoch_date_and_root_path() {
    assert_eq!(
        expiry_cookie("knoword_access"),
        "knoword_access=; Path=/; Expires=Thu, 01 Jan 1970 00:00:00 GMT"
    );
}

// =============================================================
// Browser stubs
// =============================================================

#[test]
fn cookie_reads_are_none_off_browser() {
    assert_eq!(read_cookie(ACCESS_COOKIE), None);
    assert!(!has_session_cookies());
}
