//! Reusable card component for community list items on the explore page.
//!
//! DESIGN
//! ======
//! Keeps community presentation consistent between the explore grid and
//! search results while centralizing the navigation affordance.

use leptos::prelude::*;

use crate::net::types::Community;

/// A clickable card summarizing a community. `on_join` adds a join shortcut
/// for signed-in visitors who are not members yet.
#[component]
pub fn CommunityCard(
    community: Community,
    #[prop(optional)] on_join: Option<Callback<String>>,
) -> impl IntoView {
    let Community {
        slug,
        name,
        description,
        avatar_url,
        is_private,
        tags,
        member_count,
        is_member,
        ..
    } = community;
    let href = format!("/c/{slug}");
    let members = member_count_label(member_count);

    view! {
        <a class="community-card" class:community-card--member=is_member href=href>
            <span class="community-card__avatar">
                {avatar_url
                    .map(|url| view! { <img class="community-card__avatar-img" src=url alt="" /> })}
            </span>
            <span class="community-card__name">{name}</span>
            <Show when=move || is_private>
                <span class="community-card__badge">"Private"</span>
            </Show>
            {on_join
                .map(|join| {
                    view! {
                        <button
                            class="btn community-card__join"
                            on:click=move |ev: leptos::ev::MouseEvent| {
                                ev.prevent_default();
                                ev.stop_propagation();
                                join.run(slug.clone());
                            }
                        >
                            "Join"
                        </button>
                    }
                })}
            <span class="community-card__description">{description}</span>
            <span class="community-card__meta">
                <span class="community-card__members">{members}</span>
                <span class="community-card__tags">
                    {tags
                        .into_iter()
                        .map(|tag| view! { <span class="community-card__tag">{tag}</span> })
                        .collect_view()}
                </span>
            </span>
        </a>
    }
}

fn member_count_label(count: i64) -> String {
    if count == 1 { "1 member".to_owned() } else { format!("{count} members") }
}
