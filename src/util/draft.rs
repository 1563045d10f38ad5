//! Client-side blog draft persistence.
//!
//! SYSTEM CONTEXT
//! ==============
//! The composer autosaves into `localStorage` after a quiet period. Drafts
//! are keyed by post identity (a new post drafts under its community slug,
//! an edit drafts under the post id) so working on one post can never
//! clobber the draft of another. Within one key each save overwrites the
//! previous draft.
//!
//! Draft content is stored sanitized: the markdown source is kept verbatim
//! for resuming the editor, and the HTML alongside it has already been
//! through the allow-list filter.

#[cfg(test)]
#[path = "draft_test.rs"]
mod draft_test;

use quiz::question::Question;
use serde::{Deserialize, Serialize};

use crate::util::sanitize::render_post_html;
use crate::util::storage;

/// Quiet period between the last edit and an autosave, in milliseconds.
pub const AUTOSAVE_QUIET_MS: u64 = 1500;

/// A locally persisted, unpublished version of a post.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BlogDraft {
    pub title: String,
    pub subtitle: String,
    /// Markdown source as the composer holds it.
    pub content_markdown: String,
    /// Sanitized render of `content_markdown`, safe to display as-is.
    pub content_html: String,
    /// Quiz attached to the draft, already committed in the builder.
    #[serde(default)]
    pub questions: Vec<Question>,
    /// Milliseconds since the Unix epoch at the last save.
    pub updated_at_ms: f64,
}

/// Storage key for the draft of one post identity.
#[must_use]
pub fn draft_key(community_slug: &str, post_id: Option<&str>) -> String {
    match post_id {
        Some(id) => format!("knoword.draft.post.{id}"),
        None => format!("knoword.draft.new.{community_slug}"),
    }
}

/// Serialize the composer state under `key`, overwriting any previous draft.
/// Returns the draft as stored, with its content sanitized.
pub fn save_draft(
    key: &str,
    title: &str,
    subtitle: &str,
    content_markdown: &str,
    questions: &[Question],
) -> BlogDraft {
    let draft = BlogDraft {
        title: title.to_owned(),
        subtitle: subtitle.to_owned(),
        content_markdown: content_markdown.to_owned(),
        content_html: render_post_html(content_markdown),
        questions: questions.to_vec(),
        updated_at_ms: now_ms(),
    };
    storage::save_json(key, &draft);
    draft
}

/// Load whatever draft is stored under `key`.
#[must_use]
pub fn load_draft(key: &str) -> Option<BlogDraft> {
    storage::load_json(key)
}

/// Load a draft worth offering to resume: it must carry a non-empty title.
#[must_use]
pub fn resumable_draft(key: &str) -> Option<BlogDraft> {
    load_draft(key).filter(|draft| !draft.title.trim().is_empty())
}

/// Drop the draft under `key`. Called on publish and on explicit discard.
pub fn discard_draft(key: &str) {
    storage::remove_key(key);
}

fn now_ms() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}
