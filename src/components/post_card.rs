//! Reusable card component for blog post list items.

#[cfg(test)]
#[path = "post_card_test.rs"]
mod post_card_test;

use leptos::prelude::*;

use crate::net::types::BlogPost;

/// A clickable card summarizing a post. `show_community` adds the community
/// name to the byline for cross-community lists (profile, search).
#[component]
pub fn PostCard(post: BlogPost, #[prop(optional)] show_community: bool) -> impl IntoView {
    let href = format!("/p/{}", post.id);
    let date = display_date(&post.created_at).to_owned();
    let BlogPost { title, subtitle, author_username, community_name, has_quiz, .. } = post;

    view! {
        <a class="post-card" href=href>
            <span class="post-card__title">{title}</span>
            {subtitle.map(|text| view! { <span class="post-card__subtitle">{text}</span> })}
            <span class="post-card__meta">
                <span class="post-card__author">{format!("by {author_username}")}</span>
                <Show when=move || show_community>
                    <span class="post-card__community">{community_name.clone()}</span>
                </Show>
                <span class="post-card__date">{date}</span>
                <Show when=move || has_quiz>
                    <span class="post-card__quiz-badge" title="This post has a quiz">
                        "Quiz"
                    </span>
                </Show>
            </span>
        </a>
    }
}

/// Trim an RFC 3339 timestamp down to its date part for display. Anything
/// that does not look like a timestamp passes through untouched.
pub(crate) fn display_date(iso: &str) -> &str {
    match iso.split_once('T') {
        Some((date, _)) if date.len() == 10 => date,
        _ => iso,
    }
}
