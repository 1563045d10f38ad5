//! Community endpoints: discovery, CRUD, membership, tag suggestions.
//!
//! Thin wrappers over [`SessionClient`]; anonymous reads work because the
//! client only attaches a bearer token when one is present.

#[cfg(test)]
#[path = "communities_test.rs"]
mod communities_test;

use crate::net::api::encode_segment;
use crate::net::error::ApiError;
use crate::net::session_client::SessionClient;
use crate::net::types::{Community, CommunityPayload};

fn communities_endpoint(search: &str) -> String {
    let trimmed = search.trim();
    if trimmed.is_empty() {
        "/api/communities".to_owned()
    } else {
        format!("/api/communities?search={}", encode_segment(trimmed))
    }
}

fn community_endpoint(slug: &str) -> String {
    format!("/api/communities/{slug}")
}

fn members_endpoint(slug: &str) -> String {
    format!("/api/communities/{slug}/members")
}

fn tags_endpoint(prefix: &str) -> String {
    format!("/api/communities/tags?q={}", encode_segment(prefix.trim()))
}

/// List communities, optionally filtered by a search string.
///
/// # Errors
///
/// Returns an [`ApiError`] when the request or decoding fails.
pub async fn fetch_communities(
    client: &SessionClient,
    search: &str,
) -> Result<Vec<Community>, ApiError> {
    client.get_json(&communities_endpoint(search)).await
}

/// Fetch one community by slug.
///
/// # Errors
///
/// Returns an [`ApiError`] when the request or decoding fails, including 404
/// for unknown slugs.
pub async fn fetch_community(client: &SessionClient, slug: &str) -> Result<Community, ApiError> {
    client.get_json(&community_endpoint(slug)).await
}

/// Create a community. The server derives the slug from the name.
///
/// # Errors
///
/// Returns an [`ApiError`] when the request fails or the name is rejected.
pub async fn create_community(
    client: &SessionClient,
    payload: &CommunityPayload,
) -> Result<Community, ApiError> {
    client.post_json("/api/communities", payload).await
}

/// Update a community the caller owns.
///
/// # Errors
///
/// Returns an [`ApiError`] when the request fails or the caller is not the
/// owner.
pub async fn update_community(
    client: &SessionClient,
    slug: &str,
    payload: &CommunityPayload,
) -> Result<Community, ApiError> {
    client.put_json(&community_endpoint(slug), payload).await
}

/// Delete a community the caller owns.
///
/// # Errors
///
/// Returns an [`ApiError`] when the request fails or the caller is not the
/// owner.
pub async fn delete_community(client: &SessionClient, slug: &str) -> Result<(), ApiError> {
    client.delete(&community_endpoint(slug)).await
}

/// Join a community. Returns the community with refreshed membership fields.
///
/// # Errors
///
/// Returns an [`ApiError`] when the request fails.
pub async fn join_community(client: &SessionClient, slug: &str) -> Result<Community, ApiError> {
    client.post_empty(&members_endpoint(slug)).await
}

/// Leave a community.
///
/// # Errors
///
/// Returns an [`ApiError`] when the request fails.
pub async fn leave_community(client: &SessionClient, slug: &str) -> Result<(), ApiError> {
    client.delete(&members_endpoint(slug)).await
}

/// Suggest existing tags for a typed prefix, for the community form.
///
/// # Errors
///
/// Returns an [`ApiError`] when the request or decoding fails.
pub async fn fetch_tag_suggestions(
    client: &SessionClient,
    prefix: &str,
) -> Result<Vec<String>, ApiError> {
    client.get_json(&tags_endpoint(prefix)).await
}
