//! Post endpoints: CRUD plus the per-post quiz question collection.
//!
//! Quiz questions are saved and fetched in bulk: the editor always writes the
//! whole set for a post, and the player always reads the whole set.

#[cfg(test)]
#[path = "posts_test.rs"]
mod posts_test;

use quiz::question::Question;

use crate::net::error::ApiError;
use crate::net::session_client::SessionClient;
use crate::net::types::{BlogPost, PostPayload};

fn community_posts_endpoint(slug: &str) -> String {
    format!("/api/communities/{slug}/posts")
}

fn post_endpoint(id: &str) -> String {
    format!("/api/posts/{id}")
}

fn questions_endpoint(post_id: &str) -> String {
    format!("/api/posts/{post_id}/questions")
}

/// List the posts of one community, newest first.
///
/// # Errors
///
/// Returns an [`ApiError`] when the request or decoding fails.
pub async fn fetch_community_posts(
    client: &SessionClient,
    slug: &str,
) -> Result<Vec<BlogPost>, ApiError> {
    client.get_json(&community_posts_endpoint(slug)).await
}

/// Fetch one post by id.
///
/// # Errors
///
/// Returns an [`ApiError`] when the request or decoding fails, including 404
/// for unknown ids.
pub async fn fetch_post(client: &SessionClient, id: &str) -> Result<BlogPost, ApiError> {
    client.get_json(&post_endpoint(id)).await
}

/// List the signed-in user's own posts, for the profile page.
///
/// # Errors
///
/// Returns an [`ApiError`] when the request or decoding fails.
pub async fn fetch_my_posts(client: &SessionClient) -> Result<Vec<BlogPost>, ApiError> {
    client.get_json("/api/posts/mine").await
}

/// Publish a new post into a community.
///
/// # Errors
///
/// Returns an [`ApiError`] when the request fails or the payload is rejected.
pub async fn create_post(
    client: &SessionClient,
    slug: &str,
    payload: &PostPayload,
) -> Result<BlogPost, ApiError> {
    client.post_json(&community_posts_endpoint(slug), payload).await
}

/// Update a post the caller authored.
///
/// # Errors
///
/// Returns an [`ApiError`] when the request fails or the caller is not the
/// author.
pub async fn update_post(
    client: &SessionClient,
    id: &str,
    payload: &PostPayload,
) -> Result<BlogPost, ApiError> {
    client.put_json(&post_endpoint(id), payload).await
}

/// Delete a post the caller authored.
///
/// # Errors
///
/// Returns an [`ApiError`] when the request fails or the caller is not the
/// author.
pub async fn delete_post(client: &SessionClient, id: &str) -> Result<(), ApiError> {
    client.delete(&post_endpoint(id)).await
}

/// Replace the whole question set attached to a post.
///
/// # Errors
///
/// Returns an [`ApiError`] when the request fails or the caller is not the
/// author.
pub async fn save_questions(
    client: &SessionClient,
    post_id: &str,
    questions: &[Question],
) -> Result<Vec<Question>, ApiError> {
    client.put_json(&questions_endpoint(post_id), &questions).await
}

/// Fetch the question set attached to a post, for the quiz player.
///
/// # Errors
///
/// Returns an [`ApiError`] when the request or decoding fails.
pub async fn fetch_questions(
    client: &SessionClient,
    post_id: &str,
) -> Result<Vec<Question>, ApiError> {
    client.get_json(&questions_endpoint(post_id)).await
}
