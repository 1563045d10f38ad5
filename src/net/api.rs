//! Public auth endpoints: login, registration, availability, password reset.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`. Server-side (SSR):
//! stubs returning errors, since these endpoints are only meaningful in the
//! browser. None of these calls carry a bearer token or participate in the
//! refresh protocol; that is [`super::session_client`] territory.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use crate::net::error::ApiError;
#[cfg(feature = "hydrate")]
use crate::net::session_client::{read_json, read_ok};
#[cfg(not(feature = "hydrate"))]
use crate::net::session_client::not_in_browser;
use crate::net::types::AuthResponse;
#[cfg(feature = "hydrate")]
use crate::net::types::AvailabilityResponse;

#[cfg(any(test, feature = "hydrate"))]
fn availability_endpoint(field: &str, value: &str) -> String {
    format!("/api/auth/availability/{field}/{}", encode_segment(value))
}

/// Percent-encode one path or query segment. RFC 3986 unreserved characters
/// pass through; everything else is encoded as UTF-8 bytes.
pub(super) fn encode_segment(value: &str) -> String {
    const HEX: &[u8; 16] = b"0123456789ABCDEF";
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                out.push(byte as char);
            }
            _ => {
                out.push('%');
                out.push(HEX[usize::from(byte >> 4)] as char);
                out.push(HEX[usize::from(byte & 0x0f)] as char);
            }
        }
    }
    out
}

/// Sign in with a username or email plus password via `POST /api/auth/login`.
///
/// On success the server also sets the access/refresh cookie pair.
///
/// # Errors
///
/// Returns an [`ApiError`] for transport failures, rejected credentials, and
/// undecodable bodies.
pub async fn login(identifier: &str, password: &str) -> Result<AuthResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "identifier": identifier, "password": password });
        let response = gloo_net::http::Request::post("/api/auth/login")
            .json(&payload)
            .map_err(|e| ApiError::Decode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read_json(response).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (identifier, password);
        Err(not_in_browser())
    }
}

/// Create an account via `POST /api/auth/register`.
///
/// Registration does not sign the user in; the register page routes to the
/// login form on success.
///
/// # Errors
///
/// Returns an [`ApiError`] for transport failures and rejected registrations
/// (taken username or email, weak password).
pub async fn register(username: &str, email: &str, password: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload =
            serde_json::json!({ "username": username, "email": email, "password": password });
        let response = gloo_net::http::Request::post("/api/auth/register")
            .json(&payload)
            .map_err(|e| ApiError::Decode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read_ok(response).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (username, email, password);
        Err(not_in_browser())
    }
}

/// Revoke the refresh cookie via `POST /api/auth/logout`. Best-effort: local
/// session teardown proceeds regardless of the response.
pub async fn logout() {
    #[cfg(feature = "hydrate")]
    {
        let _ = gloo_net::http::Request::post("/api/auth/logout").send().await;
    }
}

/// Probe whether a username is free via
/// `GET /api/auth/availability/username/{value}`.
///
/// # Errors
///
/// Returns an [`ApiError`] for transport failures and undecodable bodies.
pub async fn username_available(value: &str) -> Result<bool, ApiError> {
    availability("username", value).await
}

/// Probe whether an email is free via
/// `GET /api/auth/availability/email/{value}`.
///
/// # Errors
///
/// Returns an [`ApiError`] for transport failures and undecodable bodies.
pub async fn email_available(value: &str) -> Result<bool, ApiError> {
    availability("email", value).await
}

async fn availability(field: &str, value: &str) -> Result<bool, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = availability_endpoint(field, value);
        let response = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let body: AvailabilityResponse = read_json(response).await?;
        Ok(body.available)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (field, value);
        Err(not_in_browser())
    }
}

/// Ask for a password-reset email via `POST /api/auth/password-reset`.
///
/// # Errors
///
/// Returns an [`ApiError`] for transport failures and rejected requests.
pub async fn request_password_reset(email: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email });
        let response = gloo_net::http::Request::post("/api/auth/password-reset")
            .json(&payload)
            .map_err(|e| ApiError::Decode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read_ok(response).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = email;
        Err(not_in_browser())
    }
}

/// Set a new password with an emailed token via
/// `PUT /api/auth/password-reset`.
///
/// # Errors
///
/// Returns an [`ApiError`] for transport failures, expired tokens, and
/// rejected passwords.
pub async fn confirm_password_reset(token: &str, new_password: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "token": token, "new_password": new_password });
        let response = gloo_net::http::Request::put("/api/auth/password-reset")
            .json(&payload)
            .map_err(|e| ApiError::Decode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read_ok(response).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, new_password);
        Err(not_in_browser())
    }
}
