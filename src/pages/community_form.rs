//! Create/edit form for communities.
//!
//! One page serves both `/communities/new` and `/communities/:slug/edit`;
//! the presence of a `slug` route param selects edit mode. The server derives
//! slugs from names at creation, so edit mode never offers a slug field.

#[cfg(test)]
#[path = "community_form_test.rs"]
mod community_form_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::image_upload::ImageUpload;
use crate::net::communities::{
    create_community, fetch_community, fetch_tag_suggestions, update_community,
};
use crate::net::session_client::SessionClient;
use crate::net::types::CommunityPayload;
use crate::util::debounce::{self, DebounceGate};

/// Cap on topic tags per community.
pub(crate) const MAX_TAGS: usize = 5;

/// Milliseconds of input quiet before asking the server for tag suggestions.
const SUGGESTION_QUIET_MS: u64 = 300;

#[component]
pub fn CommunityFormPage() -> impl IntoView {
    let client = expect_context::<SessionClient>();
    let params = use_params_map();
    let navigate = use_navigate();

    // Present only on the edit route.
    let editing_slug = Memo::new(move |_| params.read().get("slug"));

    let name = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let is_private = RwSignal::new(false);
    let tags = RwSignal::new(Vec::<String>::new());
    let tag_input = RwSignal::new(String::new());
    let suggestions = RwSignal::new(Vec::<String>::new());
    let avatar_url = RwSignal::new(None::<String>);
    let banner_url = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);
    let error = RwSignal::new(String::new());

    // Seed the form when editing. The memo dedupes param churn, so this only
    // refetches when the slug itself changes.
    let load_gate = DebounceGate::new();
    {
        let client = client.clone();
        Effect::new(move || {
            let Some(slug) = editing_slug.get() else {
                return;
            };
            let client = client.clone();
            debounce::run_after_quiet(&load_gate, 0, move |ticket| async move {
                let found = fetch_community(&client, &slug).await;
                if !ticket.is_current() {
                    return;
                }
                match found {
                    Ok(community) => {
                        if !community.is_owner {
                            error.set("Only the owner can edit this community.".to_owned());
                        }
                        name.set(community.name);
                        description.set(community.description);
                        is_private.set(community.is_private);
                        tags.set(community.tags);
                        avatar_url.set(community.avatar_url);
                        banner_url.set(community.banner_url);
                    }
                    Err(err) => error.set(format!("Could not load this community: {err}")),
                }
            });
        });
    }

    let suggest_gate = DebounceGate::new();
    let request_suggestions = {
        let client = client.clone();
        let gate = suggest_gate.clone();
        move |prefix: String| {
            if prefix.trim().chars().count() < 2 {
                gate.invalidate();
                suggestions.set(Vec::new());
                return;
            }
            let client = client.clone();
            debounce::run_after_quiet(&gate, SUGGESTION_QUIET_MS, move |ticket| async move {
                let found = fetch_tag_suggestions(&client, &prefix).await;
                if !ticket.is_current() {
                    return;
                }
                if let Ok(list) = found {
                    suggestions.set(list);
                }
            });
        }
    };
    let on_tag_input = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        tag_input.set(value.clone());
        request_suggestions(value);
    };

    let commit_tag = {
        let gate = suggest_gate.clone();
        move |raw: String| {
            tags.update(|list| {
                add_tag(list, &raw);
            });
            tag_input.set(String::new());
            suggestions.set(Vec::new());
            gate.invalidate();
        }
    };
    let on_tag_key = {
        let commit_tag = commit_tag.clone();
        move |ev: leptos::ev::KeyboardEvent| {
            if ev.key() != "Enter" {
                return;
            }
            ev.prevent_default();
            commit_tag(tag_input.get_untracked());
        }
    };
    let on_tag_add = {
        let commit_tag = commit_tag.clone();
        move |ev: leptos::ev::MouseEvent| {
            ev.prevent_default();
            commit_tag(tag_input.get_untracked());
        }
    };

    let on_avatar = Callback::new(move |url: String| avatar_url.set(Some(url)));
    let on_banner = Callback::new(move |url: String| banner_url.set(Some(url)));

    let on_submit = {
        let client = client.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            if busy.get_untracked() {
                return;
            }
            let trimmed_name = match validate_community_form(&name.get_untracked()) {
                Ok(value) => value,
                Err(message) => {
                    error.set(message.to_owned());
                    return;
                }
            };
            busy.set(true);
            error.set(String::new());
            let payload = CommunityPayload {
                name: trimmed_name,
                description: description.get_untracked().trim().to_owned(),
                is_private: is_private.get_untracked(),
                tags: tags.get_untracked(),
                avatar_url: avatar_url.get_untracked(),
                banner_url: banner_url.get_untracked(),
            };
            let editing = editing_slug.get_untracked();
            let navigate = navigate.clone();
            client.spawn(move |client| async move {
                let saved = match editing.as_deref() {
                    Some(slug) => update_community(&client, slug, &payload).await,
                    None => create_community(&client, &payload).await,
                };
                match saved {
                    Ok(community) => {
                        navigate(&format!("/c/{}", community.slug), NavigateOptions::default());
                    }
                    Err(err) => {
                        error.set(format!("Could not save: {err}"));
                        busy.set(false);
                    }
                }
            });
        }
    };

    view! {
        <div class="community-form-page">
            <h1>
                {move || {
                    if editing_slug.get().is_some() { "Edit community" } else { "Create a community" }
                }}
            </h1>
            <Show when=move || !error.get().is_empty()>
                <p class="banner banner--error">{move || error.get()}</p>
            </Show>
            <form class="community-form" on:submit=on_submit>
                <label class="community-form__label" for="community-name">
                    "Name"
                </label>
                <input
                    class="community-form__input"
                    id="community-name"
                    type="text"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
                <label class="community-form__label" for="community-description">
                    "Description"
                </label>
                <textarea
                    class="community-form__textarea"
                    id="community-description"
                    prop:value=move || description.get()
                    on:input=move |ev| description.set(event_target_value(&ev))
                ></textarea>
                <label class="community-form__checkbox">
                    <input
                        type="checkbox"
                        prop:checked=move || is_private.get()
                        on:change=move |ev| is_private.set(event_target_checked(&ev))
                    />
                    "Members-only posts"
                </label>
                <label class="community-form__label" for="community-tag">
                    {format!("Tags (up to {MAX_TAGS})")}
                </label>
                <div class="community-form__tags">
                    {move || {
                        tags.get()
                            .into_iter()
                            .map(|tag| {
                                let remove = tag.clone();
                                view! {
                                    <span class="community-form__tag">
                                        {format!("#{tag}")}
                                        <button
                                            type="button"
                                            class="community-form__tag-remove"
                                            on:click=move |_| {
                                                tags.update(|list| {
                                                    list.retain(|existing| existing != &remove);
                                                });
                                            }
                                        >
                                            "Remove"
                                        </button>
                                    </span>
                                }
                            })
                            .collect_view()
                    }}
                </div>
                <div class="community-form__tag-entry">
                    <input
                        class="community-form__input"
                        id="community-tag"
                        type="text"
                        placeholder="Add a tag"
                        prop:value=move || tag_input.get()
                        on:input=on_tag_input
                        on:keydown=on_tag_key
                    />
                    <button type="button" class="btn community-form__tag-add" on:click=on_tag_add>
                        "Add"
                    </button>
                </div>
                <Show when=move || !suggestions.with(Vec::is_empty)>
                    <div class="community-form__suggestions">
                        {
                            let commit_tag = commit_tag.clone();
                            move || {
                                let chosen = tags.get();
                                suggestions
                                    .get()
                                    .into_iter()
                                    .filter(|tag| !chosen.contains(tag))
                                    .map(|tag| {
                                        let pick = tag.clone();
                                        let commit_tag = commit_tag.clone();
                                        view! {
                                            <button
                                                type="button"
                                                class="community-form__suggestion"
                                                on:click=move |_| commit_tag(pick.clone())
                                            >
                                                {format!("#{tag}")}
                                            </button>
                                        }
                                    })
                                    .collect_view()
                            }
                        }
                    </div>
                </Show>
                <ImageUpload input_id="community-avatar" label="Avatar" on_uploaded=on_avatar />
                {move || {
                    avatar_url
                        .get()
                        .map(|url| view! { <img class="community-form__preview" src=url alt="" /> })
                }}
                <ImageUpload input_id="community-banner" label="Banner" on_uploaded=on_banner />
                {move || {
                    banner_url
                        .get()
                        .map(|url| {
                            view! {
                                <img class="community-form__preview community-form__preview--wide" src=url alt="" />
                            }
                        })
                }}
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Saving..." } else { "Save" }}
                </button>
            </form>
        </div>
    }
}

/// Normalize a raw tag for storage: trim, drop a leading '#', lowercase, and
/// join internal whitespace runs with single dashes.
pub(crate) fn normalize_tag(raw: &str) -> String {
    raw.trim()
        .trim_start_matches('#')
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

/// Add `raw` to `tags` if it normalizes to something new and the cap allows.
/// Returns whether the list changed.
pub(crate) fn add_tag(tags: &mut Vec<String>, raw: &str) -> bool {
    let tag = normalize_tag(raw);
    if tag.is_empty() || tags.len() >= MAX_TAGS || tags.iter().any(|existing| existing == &tag) {
        return false;
    }
    tags.push(tag);
    true
}

/// Check the form before submitting. Returns the trimmed name.
pub(crate) fn validate_community_form(name: &str) -> Result<String, &'static str> {
    let trimmed = name.trim();
    if trimmed.chars().count() < 3 {
        return Err("Community names need at least three characters.");
    }
    Ok(trimmed.to_owned())
}
