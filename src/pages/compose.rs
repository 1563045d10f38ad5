//! Post composer: write, autosave, attach a quiz, publish.
//!
//! SYSTEM CONTEXT
//! ==============
//! One page serves `/compose/:slug` (new post) and `/compose/:slug/:post_id`
//! (edit). Its state has three sources with a fixed precedence: a resumable
//! local draft beats the published post, which beats a blank form. Autosave
//! writes into `localStorage` after a quiet period under a key derived from
//! the post identity, so drafts for different posts never collide.
//!
//! Publishing is two requests (the post, then its question set). When the
//! second fails the composer stays open with the returned post id, so a retry
//! updates the already-created post instead of duplicating it.

#[cfg(test)]
#[path = "compose_test.rs"]
mod compose_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use quiz::builder::BuilderCore;
use quiz::question::Question;

use crate::components::editor::MarkdownEditor;
use crate::components::modal::{ConfirmKind, ConfirmModal};
use crate::components::quiz_builder::QuizBuilder;
use crate::net::posts::{create_post, fetch_post, fetch_questions, save_questions, update_post};
use crate::net::session_client::SessionClient;
use crate::net::types::{BlogPost, PostPayload};
use crate::util::debounce::{self, DebounceGate};
use crate::util::draft;
use crate::util::sanitize::render_post_html;

#[component]
pub fn ComposePage() -> impl IntoView {
    let client = expect_context::<SessionClient>();
    let params = use_params_map();
    let navigate = use_navigate();

    let slug = Memo::new(move |_| params.read().get("slug").unwrap_or_default());
    let route_post_id = Memo::new(move |_| params.read().get("post_id"));
    let key = Memo::new(move |_| draft::draft_key(&slug.get(), route_post_id.get().as_deref()));

    let title = RwSignal::new(String::new());
    let subtitle = RwSignal::new(String::new());
    let content = RwSignal::new(String::new());
    let builder = RwSignal::new(BuilderCore::new());
    // Post id to publish against. Seeded from the route; set after a create
    // so a retry updates instead of creating twice.
    let post_id = RwSignal::new(None::<String>);
    let published = RwSignal::new(None::<BlogPost>);
    let published_questions = RwSignal::new(Vec::<Question>::new());
    let resumed = RwSignal::new(false);
    let draft_note = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let error = RwSignal::new(String::new());
    let confirm_discard = RwSignal::new(false);

    let autosave_gate = DebounceGate::new();
    let load_gate = DebounceGate::new();

    // Reset and reseed whenever the route points at a different post. The
    // memos dedupe, so this does not rerun on unrelated state changes.
    {
        let client = client.clone();
        let autosave_gate = autosave_gate.clone();
        Effect::new(move || {
            let slug_value = slug.get();
            let route_post = route_post_id.get();
            if slug_value.is_empty() {
                return;
            }

            // A pending autosave from the previous identity must not write
            // under the new key.
            autosave_gate.invalidate();
            title.set(String::new());
            subtitle.set(String::new());
            content.set(String::new());
            builder.set(BuilderCore::new());
            published.set(None);
            published_questions.set(Vec::new());
            resumed.set(false);
            draft_note.set(String::new());
            error.set(String::new());
            post_id.set(route_post.clone());

            let key_value = draft::draft_key(&slug_value, route_post.as_deref());
            if let Some(found) = draft::resumable_draft(&key_value) {
                title.set(found.title);
                subtitle.set(found.subtitle);
                content.set(found.content_markdown);
                builder.set(BuilderCore::with_questions(found.questions));
                resumed.set(true);
            }

            let Some(id) = route_post else {
                return;
            };
            let client = client.clone();
            debounce::run_after_quiet(&load_gate, 0, move |ticket| async move {
                let found = fetch_post(&client, &id).await;
                let quiz_found = match &found {
                    Ok(post) if post.has_quiz => fetch_questions(&client, &id).await,
                    _ => Ok(Vec::new()),
                };
                if !ticket.is_current() {
                    return;
                }
                match (found, quiz_found) {
                    (Ok(post), Ok(questions)) => {
                        // A resumed draft takes precedence over the published
                        // content; the fetch still fills the discard target.
                        if !resumed.get_untracked() {
                            title.set(post.title.clone());
                            subtitle.set(post.subtitle.clone().unwrap_or_default());
                            content.set(post.content_markdown.clone().unwrap_or_default());
                            builder.set(BuilderCore::with_questions(questions.clone()));
                        }
                        published.set(Some(post));
                        published_questions.set(questions);
                    }
                    (Err(err), _) | (_, Err(err)) => {
                        error.set(format!("Could not load this post: {err}"));
                    }
                }
            });
        });
    }

    let schedule_autosave = {
        let gate = autosave_gate.clone();
        move || {
            let key_value = key.get_untracked();
            debounce::run_after_quiet(&gate, draft::AUTOSAVE_QUIET_MS, move |_| async move {
                let questions = builder.with_untracked(BuilderCore::snapshot);
                draft::save_draft(
                    &key_value,
                    &title.get_untracked(),
                    &subtitle.get_untracked(),
                    &content.get_untracked(),
                    &questions,
                );
                draft_note.set("Draft saved".to_owned());
            });
        }
    };
    let autosave_cb = {
        let schedule_autosave = schedule_autosave.clone();
        Callback::new(move |()| schedule_autosave())
    };
    let on_title_input = {
        let schedule_autosave = schedule_autosave.clone();
        move |ev: leptos::ev::Event| {
            title.set(event_target_value(&ev));
            schedule_autosave();
        }
    };
    let on_subtitle_input = {
        let schedule_autosave = schedule_autosave.clone();
        move |ev: leptos::ev::Event| {
            subtitle.set(event_target_value(&ev));
            schedule_autosave();
        }
    };

    let on_discard_request = Callback::new(move |()| confirm_discard.set(true));
    let on_discard_cancel = Callback::new(move |()| confirm_discard.set(false));
    let on_discard_confirm = {
        let gate = autosave_gate.clone();
        Callback::new(move |()| {
            gate.invalidate();
            draft::discard_draft(&key.get_untracked());
            match published.get_untracked() {
                Some(post) => {
                    title.set(post.title);
                    subtitle.set(post.subtitle.unwrap_or_default());
                    content.set(post.content_markdown.unwrap_or_default());
                    builder.set(BuilderCore::with_questions(published_questions.get_untracked()));
                }
                None => {
                    title.set(String::new());
                    subtitle.set(String::new());
                    content.set(String::new());
                    builder.set(BuilderCore::new());
                }
            }
            resumed.set(false);
            draft_note.set(String::new());
            confirm_discard.set(false);
        })
    };

    let on_publish = {
        let client = client.clone();
        let gate = autosave_gate.clone();
        move |ev: leptos::ev::MouseEvent| {
            ev.prevent_default();
            if busy.get_untracked() {
                return;
            }
            let (post_title, post_subtitle, markdown) = match validate_post(
                &title.get_untracked(),
                &subtitle.get_untracked(),
                &content.get_untracked(),
            ) {
                Ok(parts) => parts,
                Err(message) => {
                    error.set(message.to_owned());
                    return;
                }
            };
            busy.set(true);
            error.set(String::new());
            gate.invalidate();
            let content_html = render_post_html(&markdown);
            let payload = PostPayload {
                title: post_title,
                subtitle: post_subtitle,
                content_markdown: markdown,
                content_html,
            };
            let questions = builder.with_untracked(BuilderCore::snapshot);
            let slug_value = slug.get_untracked();
            let existing = post_id.get_untracked();
            let key_value = key.get_untracked();
            let navigate = navigate.clone();
            client.spawn(move |client| async move {
                let saved = match existing.as_deref() {
                    Some(id) => update_post(&client, id, &payload).await,
                    None => create_post(&client, &slug_value, &payload).await,
                };
                let post = match saved {
                    Ok(post) => post,
                    Err(err) => {
                        error.set(format!("Could not publish: {err}"));
                        busy.set(false);
                        return;
                    }
                };
                post_id.set(Some(post.id.clone()));
                // The question set is always written, even when empty, so
                // removing every question from an edited post clears its quiz.
                if let Err(err) = save_questions(&client, &post.id, &questions).await {
                    error.set(format!(
                        "The post is published, but its quiz failed to save: {err}"
                    ));
                    busy.set(false);
                    return;
                }
                draft::discard_draft(&key_value);
                navigate(&format!("/p/{}", post.id), NavigateOptions::default());
            });
        }
    };

    view! {
        <div class="compose-page">
            <header class="compose-page__header">
                <h1>
                    {move || if route_post_id.get().is_some() { "Edit post" } else { "Write a post" }}
                </h1>
                <span class="compose-page__note">{move || draft_note.get()}</span>
            </header>
            <Show when=move || resumed.get()>
                <div class="banner banner--info compose-page__resumed">
                    <span>"Resumed a local draft."</span>
                    <button class="btn compose-page__discard" on:click=move |_| on_discard_request.run(())>
                        "Discard draft"
                    </button>
                </div>
            </Show>
            <Show when=move || !error.get().is_empty()>
                <p class="banner banner--error">{move || error.get()}</p>
            </Show>
            <input
                class="compose-page__title"
                type="text"
                placeholder="Title"
                prop:value=move || title.get()
                on:input=on_title_input
            />
            <input
                class="compose-page__subtitle"
                type="text"
                placeholder="Subtitle (optional)"
                prop:value=move || subtitle.get()
                on:input=on_subtitle_input
            />
            <MarkdownEditor content=content on_change=autosave_cb />
            <QuizBuilder builder=builder on_change=autosave_cb />
            <div class="compose-page__actions">
                <a class="btn compose-page__cancel" href=move || format!("/c/{}", slug.get())>
                    "Cancel"
                </a>
                <button
                    class="btn btn--primary compose-page__publish"
                    disabled=move || busy.get()
                    on:click=on_publish
                >
                    {move || {
                        if busy.get() {
                            "Publishing..."
                        } else if route_post_id.get().is_some() {
                            "Save changes"
                        } else {
                            "Publish"
                        }
                    }}
                </button>
            </div>
            <Show when=move || confirm_discard.get()>
                <ConfirmModal
                    kind=ConfirmKind::DiscardDraft
                    on_confirm=on_discard_confirm
                    on_cancel=on_discard_cancel
                />
            </Show>
        </div>
    }
}

/// Check the composer fields before publishing. Returns the trimmed title,
/// the subtitle (`None` when blank), and the markdown source.
pub(crate) fn validate_post(
    title: &str,
    subtitle: &str,
    content: &str,
) -> Result<(String, Option<String>, String), &'static str> {
    let title = title.trim();
    if title.is_empty() {
        return Err("Give your post a title.");
    }
    let content = content.trim();
    if content.is_empty() {
        return Err("Write something before publishing.");
    }
    let subtitle = subtitle.trim();
    let subtitle = if subtitle.is_empty() { None } else { Some(subtitle.to_owned()) };
    Ok((title.to_owned(), subtitle, content.to_owned()))
}
