//! Post reader page: sanitized article body, byline, attached quiz, and the
//! author's edit/delete controls.
//!
//! The body arrives from the server as already-sanitized HTML, but it is run
//! through the allow-list filter once more before being injected, so a
//! compromised or stale payload still cannot script this page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use quiz::player::PlayerCore;

use crate::components::modal::{ConfirmKind, ConfirmModal};
use crate::components::post_card::display_date;
use crate::components::quiz_player::QuizPlayer;
use crate::net::posts::{delete_post, fetch_post, fetch_questions};
use crate::net::session_client::SessionClient;
use crate::net::types::BlogPost;
use crate::state::session::Session;
use crate::util::debounce::{self, DebounceGate};
use crate::util::sanitize::sanitize_html;

#[component]
pub fn PostPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let client = expect_context::<SessionClient>();
    let params = use_params_map();
    let navigate = use_navigate();

    let post = RwSignal::new(None::<BlogPost>);
    let player = RwSignal::new(PlayerCore::default());
    let has_questions = RwSignal::new(false);
    let loading = RwSignal::new(true);
    let error = RwSignal::new(String::new());
    let confirm = RwSignal::new(None::<ConfirmKind>);
    let delete_busy = RwSignal::new(false);

    let id = Memo::new(move |_| params.read().get("id").unwrap_or_default());

    let load_gate = DebounceGate::new();
    {
        let client = client.clone();
        Effect::new(move || {
            let id_value = id.get();
            if id_value.is_empty() {
                return;
            }
            loading.set(true);
            let client = client.clone();
            debounce::run_after_quiet(&load_gate, 0, move |ticket| async move {
                let found = fetch_post(&client, &id_value).await;
                let quiz_found = match &found {
                    Ok(value) if value.has_quiz => fetch_questions(&client, &id_value).await,
                    _ => Ok(Vec::new()),
                };
                if !ticket.is_current() {
                    return;
                }
                match found {
                    Ok(value) => {
                        post.set(Some(value));
                        match quiz_found {
                            Ok(questions) => {
                                has_questions.set(!questions.is_empty());
                                player.set(PlayerCore::new(questions));
                                error.set(String::new());
                            }
                            Err(err) => {
                                has_questions.set(false);
                                error.set(format!("Could not load the quiz: {err}"));
                            }
                        }
                    }
                    Err(err) => {
                        post.set(None);
                        error.set(format!("Could not load this post: {err}"));
                    }
                }
                loading.set(false);
            });
        });
    }

    let rendered = Memo::new(move |_| {
        post.with(|maybe| {
            maybe.as_ref().map(|found| sanitize_html(&found.content_html)).unwrap_or_default()
        })
    });
    let is_author = Memo::new(move |_| {
        let author = post.with(|maybe| maybe.as_ref().map(|found| found.author_id.clone()));
        author.is_some() && author == session.user().map(|user| user.id)
    });

    let on_delete_request = Callback::new(move |()| {
        let post_title = post
            .with_untracked(|maybe| maybe.as_ref().map(|found| found.title.clone()))
            .unwrap_or_default();
        confirm.set(Some(ConfirmKind::DeletePost { title: post_title }));
    });
    let on_confirm_cancel = Callback::new(move |()| confirm.set(None));
    let on_confirm_delete = Callback::new({
        let client = client.clone();
        let navigate = navigate.clone();
        move |()| {
            if delete_busy.get_untracked() {
                return;
            }
            delete_busy.set(true);
            let id_value = id.get_untracked();
            let community = post
                .with_untracked(|maybe| {
                    maybe.as_ref().map(|found| found.community_slug.clone())
                })
                .unwrap_or_default();
            let navigate = navigate.clone();
            client.spawn(move |client| async move {
                match delete_post(&client, &id_value).await {
                    Ok(()) => {
                        confirm.set(None);
                        navigate(&format!("/c/{community}"), NavigateOptions::default());
                    }
                    Err(err) => {
                        confirm.set(None);
                        error.set(format!("Could not delete this post: {err}"));
                    }
                }
                delete_busy.set(false);
            });
        }
    });

    view! {
        <article class="post-page">
            <Show when=move || !error.get().is_empty()>
                <p class="banner banner--error">{move || error.get()}</p>
            </Show>
            <Show
                when=move || !loading.get()
                fallback=|| view! { <p class="post-page__loading">"Loading post..."</p> }
            >
                {move || {
                    post.get()
                        .map(|found| {
                            let community_href = format!("/c/{}", found.community_slug);
                            let edit_href = format!(
                                "/compose/{}/{}",
                                found.community_slug,
                                found.id,
                            );
                            let date = display_date(&found.created_at).to_owned();
                            view! {
                                <header class="post-page__header">
                                    <h1>{found.title}</h1>
                                    {found
                                        .subtitle
                                        .map(|text| {
                                            view! { <p class="post-page__subtitle">{text}</p> }
                                        })}
                                    <p class="post-page__byline">
                                        <span class="post-page__author">
                                            {format!("by {}", found.author_username)}
                                        </span>
                                        <a class="post-page__community" href=community_href>
                                            {found.community_name}
                                        </a>
                                        <span class="post-page__date">{date}</span>
                                    </p>
                                    <Show when=move || is_author.get()>
                                        <div class="post-page__controls">
                                            <a class="btn post-page__edit" href=edit_href.clone()>
                                                "Edit"
                                            </a>
                                            <button
                                                class="btn btn--danger post-page__delete"
                                                on:click=move |_| on_delete_request.run(())
                                            >
                                                "Delete"
                                            </button>
                                        </div>
                                    </Show>
                                </header>
                            }
                        })
                }}
                <div class="post-page__body" inner_html=move || rendered.get()></div>
                <Show when=move || has_questions.get()>
                    <QuizPlayer player=player />
                </Show>
            </Show>
            {move || {
                confirm
                    .get()
                    .map(|kind| {
                        view! {
                            <ConfirmModal
                                kind=kind
                                busy=delete_busy
                                on_confirm=on_confirm_delete
                                on_cancel=on_confirm_cancel
                            />
                        }
                    })
            }}
        </article>
    }
}
