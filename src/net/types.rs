//! Shared DTOs for the REST client/server boundary.
//!
//! DESIGN
//! ======
//! These types mirror the backend's JSON payloads so serde round-trips stay
//! lossless. Fields the backend may omit carry `#[serde(default)]` so older
//! payload shapes keep deserializing.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// A user account as returned by the auth and profile endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Unique user identifier (UUID string).
    pub id: String,
    /// Unique handle used for login and attribution.
    pub username: String,
    /// Account email address.
    pub email: String,
    /// Optional display name shown alongside the username.
    #[serde(default)]
    pub real_name: Option<String>,
    /// Optional free-form profile text.
    #[serde(default)]
    pub bio: Option<String>,
    /// Avatar image URL, if set.
    #[serde(default)]
    pub avatar_url: Option<String>,
}

/// A community as returned by the communities endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Community {
    /// Unique community identifier (UUID string).
    pub id: String,
    /// URL-safe identifier used in routes (`/c/{slug}`).
    pub slug: String,
    /// Display name.
    pub name: String,
    /// Short description shown on cards and the community header.
    #[serde(default)]
    pub description: String,
    /// Avatar image URL, if set.
    #[serde(default)]
    pub avatar_url: Option<String>,
    /// Banner image URL, if set.
    #[serde(default)]
    pub banner_url: Option<String>,
    /// Whether posts are visible to members only.
    #[serde(default)]
    pub is_private: bool,
    /// Topic tags used for discovery.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Number of members.
    #[serde(default, deserialize_with = "deserialize_i64_from_number")]
    pub member_count: i64,
    /// User who owns the community (UUID string).
    pub owner_id: String,
    /// Whether the requesting user is a member. Absent for anonymous requests.
    #[serde(default)]
    pub is_member: bool,
    /// Whether the requesting user owns the community. Absent for anonymous requests.
    #[serde(default)]
    pub is_owner: bool,
}

/// A published blog post as returned by the posts endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BlogPost {
    /// Unique post identifier (UUID string).
    pub id: String,
    /// Post title.
    pub title: String,
    /// Optional subtitle shown under the title.
    #[serde(default)]
    pub subtitle: Option<String>,
    /// Sanitized HTML body. Rendered as-is; see `util::sanitize`.
    pub content_html: String,
    /// Community the post belongs to (slug, for linking).
    pub community_slug: String,
    /// Community display name (for attribution).
    pub community_name: String,
    /// Author identifier (UUID string).
    pub author_id: String,
    /// Author handle (for attribution).
    pub author_username: String,
    /// ISO 8601 creation timestamp.
    pub created_at: String,
    /// Whether quiz questions are attached to this post.
    #[serde(default)]
    pub has_quiz: bool,
    /// Markdown source. Only present when the requesting user is the author
    /// (needed to edit the post).
    #[serde(default)]
    pub content_markdown: Option<String>,
}

/// Request payload for creating or updating a community.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommunityPayload {
    /// Display name.
    pub name: String,
    /// Short description.
    pub description: String,
    /// Whether posts are visible to members only.
    pub is_private: bool,
    /// Topic tags used for discovery.
    pub tags: Vec<String>,
    /// Avatar image URL from the upload collaborator, if set.
    pub avatar_url: Option<String>,
    /// Banner image URL from the upload collaborator, if set.
    pub banner_url: Option<String>,
}

/// Request payload for creating or updating a post.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostPayload {
    /// Post title.
    pub title: String,
    /// Optional subtitle.
    pub subtitle: Option<String>,
    /// Markdown source, kept for later edits.
    pub content_markdown: String,
    /// Sanitized HTML rendering of `content_markdown`.
    pub content_html: String,
}

/// Request payload for editing the signed-in user's profile.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfilePayload {
    /// Display name shown alongside the username, cleared when `None`.
    pub real_name: Option<String>,
    /// Free-form profile text, cleared when `None`.
    pub bio: Option<String>,
    /// Avatar image URL from the upload collaborator, cleared when `None`.
    pub avatar_url: Option<String>,
}

/// Response to a successful login or registration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    /// Short-lived bearer token for the private API.
    pub access_token: String,
    /// The authenticated user.
    pub user: UserProfile,
}

/// Response to a successful token refresh.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshResponse {
    /// Replacement bearer token.
    pub access_token: String,
}

/// Response to a username/email availability probe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityResponse {
    /// True when the probed value is free to register.
    pub available: bool,
}

/// Accept `7` and `7.0` alike for count fields. Some backend queries surface
/// aggregate counts as floats; fractional or out-of-range values stay errors.
fn deserialize_i64_from_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let serde_json::Value::Number(number) = serde_json::Value::deserialize(deserializer)? else {
        return Err(D::Error::custom("count field must be a JSON number"));
    };
    if let Some(int) = number.as_i64() {
        return Ok(int);
    }
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    let whole = number
        .as_f64()
        .filter(|f| f.is_finite() && f.fract() == 0.0)
        .filter(|f| (i64::MIN as f64..=i64::MAX as f64).contains(f))
        .map(|f| f as i64);
    whole.ok_or_else(|| D::Error::custom("count field must be a whole number"))
}
