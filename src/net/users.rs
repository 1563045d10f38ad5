//! Profile endpoints for the signed-in user.

use crate::net::error::ApiError;
use crate::net::session_client::SessionClient;
use crate::net::types::{ProfilePayload, UserProfile};

const ME_ENDPOINT: &str = "/api/users/me";

/// Fetch the signed-in user's profile.
///
/// # Errors
///
/// Returns an [`ApiError`] when the request or decoding fails.
pub async fn fetch_me(client: &SessionClient) -> Result<UserProfile, ApiError> {
    client.get_json(ME_ENDPOINT).await
}

/// Update the signed-in user's profile. Returns the stored profile.
///
/// # Errors
///
/// Returns an [`ApiError`] when the request fails or the payload is rejected.
pub async fn update_me(
    client: &SessionClient,
    payload: &ProfilePayload,
) -> Result<UserProfile, ApiError> {
    client.put_json(ME_ENDPOINT, payload).await
}
