//! Error type shared by all REST client modules.
//!
//! ERROR HANDLING
//! ==============
//! Every request helper returns `Result<T, ApiError>` so pages can branch on
//! status (notably 401/403 for membership-gated content) while still having a
//! user-facing message via `Display`. Errors are `Clone` because a single
//! refresh failure is fanned out to every request parked behind it.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Error returned by the REST client.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced an HTTP response (offline, DNS, CORS).
    #[error("network error: {0}")]
    Network(String),
    /// A request or response body could not be (de)serialized.
    #[error("malformed payload: {0}")]
    Decode(String),
    /// The server answered with a non-success status.
    #[error("{message}")]
    Status {
        /// HTTP status code of the response.
        status: u16,
        /// Server-provided message, or a generic fallback.
        message: String,
    },
    /// The session could not be renewed; the user must sign in again.
    #[error("your session has expired, please sign in again")]
    SessionExpired,
}

impl ApiError {
    /// True when the server refused access (401 or 403) rather than failing.
    ///
    /// Private communities answer their post listing with one of these for
    /// anyone who is not a member.
    #[must_use]
    pub fn is_access_denied(&self) -> bool {
        matches!(self, Self::Status { status: 401 | 403, .. })
    }
}

/// Build a [`ApiError::Status`] from a response status and raw body text.
///
/// Prefers a `message` or `error` string field from a JSON body; falls back
/// to a generic `request failed: {status}` line for non-JSON bodies.
pub(crate) fn status_error(status: u16, body: &str) -> ApiError {
    let message = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| pick_str(&value, &["message", "error"]).map(str::to_owned))
        .unwrap_or_else(|| format!("request failed: {status}"));
    ApiError::Status { status, message }
}

fn pick_str<'a>(data: &'a serde_json::Value, keys: &[&str]) -> Option<&'a str> {
    for key in keys {
        if let Some(value) = data.get(key).and_then(serde_json::Value::as_str) {
            return Some(value);
        }
    }
    None
}
