use super::*;

// ============================================================================
// Display
// ============================================================================

#[test]
fn status_display_is_the_server_message() {
    let err = ApiError::Status { status: 409, message: "username is taken".to_owned() };
    assert_eq!(err.to_string(), "username is taken");
}

#[test]
fn network_display_names_the_transport() {
    let err = ApiError::Network("connection refused".to_owned());
    assert_eq!(err.to_string(), "network error: connection refused");
}

#[test]
fn decode_display_names_the_payload() {
    let err = ApiError::Decode("missing field `id`".to_owned());
    assert_eq!(err.to_string(), "malformed payload: missing field `id`");
}

#[test]
fn session_expired_display_tells_the_user_to_sign_in() {
    assert_eq!(
        ApiError::SessionExpired.to_string(),
        "your session has expired, please sign in again"
    );
}

// ============================================================================
// Access-denied detection
// ============================================================================

#[test]
fn access_denied_matches_401_and_403_only() {
    let unauthorized = ApiError::Status { status: 401, message: "expired".to_owned() };
    let forbidden = ApiError::Status { status: 403, message: "members only".to_owned() };
    let missing = ApiError::Status { status: 404, message: "no such community".to_owned() };
    assert!(unauthorized.is_access_denied());
    assert!(forbidden.is_access_denied());
    assert!(!missing.is_access_denied());
    assert!(!ApiError::SessionExpired.is_access_denied());
    assert!(!ApiError::Network("down".to_owned()).is_access_denied());
}

// ============================================================================
// Body message extraction
// ============================================================================

#[test]
fn status_error_prefers_the_message_field() {
    let err = status_error(400, r#"{"message":"title is required"}"#);
    assert_eq!(err, ApiError::Status { status: 400, message: "title is required".to_owned() });
}

#[test]
fn status_error_falls_back_to_the_error_field() {
    let err = status_error(409, r#"{"error":"slug already exists"}"#);
    assert_eq!(err, ApiError::Status { status: 409, message: "slug already exists".to_owned() });
}

#[test]
fn status_error_ignores_non_string_message_values() {
    let err = status_error(500, r#"{"message":42}"#);
    assert_eq!(err, ApiError::Status { status: 500, message: "request failed: 500".to_owned() });
}

#[test]
fn status_error_handles_non_json_bodies() {
    let err = status_error(502, "<html>Bad Gateway</html>");
    assert_eq!(err, ApiError::Status { status: 502, message: "request failed: 502".to_owned() });
}

#[test]
fn status_error_handles_empty_bodies() {
    let err = status_error(404, "");
    assert_eq!(err, ApiError::Status { status: 404, message: "request failed: 404".to_owned() });
}
