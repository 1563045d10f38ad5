//! Community detail page: header, membership actions, owner menu, post list.
//!
//! SYSTEM CONTEXT
//! ==============
//! The client never holds a canonical community record, so this page refetches
//! on every visit and whenever the route slug changes. A debounce ticket
//! guards the fetch: when the slug changes mid-flight, the slower response
//! for the previous slug is discarded instead of overwriting the new view.
//!
//! Private communities expose their header to everyone but answer the post
//! listing with 401/403 for outsiders. The page renders that as a
//! members-only notice, not an error.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::modal::{ConfirmKind, ConfirmModal};
use crate::components::post_card::PostCard;
use crate::net::communities::{delete_community, fetch_community, join_community, leave_community};
use crate::net::posts::fetch_community_posts;
use crate::net::session_client::SessionClient;
use crate::net::types::{BlogPost, Community};
use crate::state::session::Session;
use crate::util::debounce::{self, DebounceGate};

#[component]
pub fn CommunityPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let client = expect_context::<SessionClient>();
    let params = use_params_map();
    let navigate = use_navigate();

    let community = RwSignal::new(None::<Community>);
    let posts = RwSignal::new(Vec::<BlogPost>::new());
    let members_only = RwSignal::new(false);
    let loading = RwSignal::new(true);
    let error = RwSignal::new(String::new());
    let membership_busy = RwSignal::new(false);
    let confirm = RwSignal::new(None::<ConfirmKind>);
    let delete_busy = RwSignal::new(false);

    let slug = Memo::new(move |_| params.read().get("slug").unwrap_or_default());

    let load_gate = DebounceGate::new();
    {
        let client = client.clone();
        Effect::new(move || {
            let slug_value = slug.get();
            if slug_value.is_empty() {
                return;
            }
            loading.set(true);
            let client = client.clone();
            debounce::run_after_quiet(&load_gate, 0, move |ticket| async move {
                let found = fetch_community(&client, &slug_value).await;
                let listed = match &found {
                    Ok(_) => fetch_community_posts(&client, &slug_value).await,
                    Err(_) => Ok(Vec::new()),
                };
                if !ticket.is_current() {
                    return;
                }
                match found {
                    Ok(value) => {
                        let private = value.is_private;
                        community.set(Some(value));
                        match listed {
                            Ok(list) => {
                                posts.set(list);
                                members_only.set(false);
                                error.set(String::new());
                            }
                            Err(err) if private && err.is_access_denied() => {
                                posts.set(Vec::new());
                                members_only.set(true);
                                error.set(String::new());
                            }
                            Err(err) => error.set(format!("Could not load posts: {err}")),
                        }
                    }
                    Err(err) => {
                        community.set(None);
                        posts.set(Vec::new());
                        members_only.set(false);
                        error.set(format!("Could not load this community: {err}"));
                    }
                }
                loading.set(false);
            });
        });
    }

    let on_join = Callback::new({
        let client = client.clone();
        move |()| {
            if membership_busy.get_untracked() {
                return;
            }
            membership_busy.set(true);
            let slug_value = slug.get_untracked();
            client.spawn(move |client| async move {
                match join_community(&client, &slug_value).await {
                    Ok(updated) => {
                        community.set(Some(updated));
                        error.set(String::new());
                        // Joining unlocks the post listing on private
                        // communities.
                        if members_only.get_untracked() {
                            match fetch_community_posts(&client, &slug_value).await {
                                Ok(list) => {
                                    posts.set(list);
                                    members_only.set(false);
                                }
                                Err(err) => error.set(format!("Could not load posts: {err}")),
                            }
                        }
                    }
                    Err(err) => error.set(format!("Could not join: {err}")),
                }
                membership_busy.set(false);
            });
        }
    });

    let on_leave = Callback::new({
        let client = client.clone();
        move |()| {
            if membership_busy.get_untracked() {
                return;
            }
            membership_busy.set(true);
            let slug_value = slug.get_untracked();
            client.spawn(move |client| async move {
                match leave_community(&client, &slug_value).await {
                    // The endpoint returns no body; adjust the cached header
                    // optimistically rather than refetching the whole page.
                    Ok(()) => {
                        let mut private = false;
                        community.update(|maybe| {
                            if let Some(found) = maybe {
                                found.is_member = false;
                                found.member_count = (found.member_count - 1).max(0);
                                private = found.is_private;
                            }
                        });
                        // Leaving a private community drops post access
                        // with it.
                        if private {
                            posts.set(Vec::new());
                            members_only.set(true);
                        }
                    }
                    Err(err) => error.set(format!("Could not leave: {err}")),
                }
                membership_busy.set(false);
            });
        }
    });

    let on_delete_request = Callback::new(move |()| {
        let name = community
            .with_untracked(|maybe| maybe.as_ref().map(|found| found.name.clone()))
            .unwrap_or_default();
        confirm.set(Some(ConfirmKind::DeleteCommunity { name }));
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
            let slug_value = slug.get_untracked();
            let navigate = navigate.clone();
            client.spawn(move |client| async move {
                match delete_community(&client, &slug_value).await {
                    Ok(()) => {
                        confirm.set(None);
                        navigate("/explore", NavigateOptions::default());
                    }
                    Err(err) => {
                        confirm.set(None);
                        error.set(format!("Could not delete this community: {err}"));
                    }
                }
                delete_busy.set(false);
            });
        }
    });

    view! {
        <div class="community-page">
            <Show when=move || !error.get().is_empty()>
                <p class="banner banner--error">{move || error.get()}</p>
            </Show>
            <Show
                when=move || !loading.get()
                fallback=|| view! { <p class="community-page__loading">"Loading community..."</p> }
            >
                {move || {
                    community
                        .get()
                        .map(|found| {
                            view! {
                                <CommunityHeader
                                    community=found
                                    authenticated=session.is_authenticated()
                                    membership_busy=membership_busy
                                    on_join=on_join
                                    on_leave=on_leave
                                    on_delete=on_delete_request
                                />
                            }
                        })
                }}
                <section class="community-page__posts">
                    <h2>"Posts"</h2>
                    <Show when=move || members_only.get()>
                        <p class="community-page__locked">
                            "Posts in this community are visible to members only."
                        </p>
                    </Show>
                    <Show when=move || !members_only.get() && posts.with(Vec::is_empty)>
                        <p class="community-page__empty">"Nothing posted here yet."</p>
                    </Show>
                    {move || {
                        posts
                            .get()
                            .into_iter()
                            .map(|post| view! { <PostCard post /> })
                            .collect_view()
                    }}
                </section>
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
        </div>
    }
}

/// Community banner, description, and the action row for the visitor's
/// relationship to it (owner, member, signed-in outsider, anonymous).
#[component]
fn CommunityHeader(
    community: Community,
    authenticated: bool,
    membership_busy: RwSignal<bool>,
    on_join: Callback<()>,
    on_leave: Callback<()>,
    on_delete: Callback<()>,
) -> impl IntoView {
    let Community {
        slug,
        name,
        description,
        avatar_url,
        banner_url,
        is_private,
        tags,
        member_count,
        is_member,
        is_owner,
        ..
    } = community;
    let members =
        if member_count == 1 { "1 member".to_owned() } else { format!("{member_count} members") };
    let edit_href = format!("/communities/{slug}/edit");
    let compose_href = format!("/compose/{slug}");
    let can_post = is_member || is_owner;

    view! {
        <header class="community-header">
            {banner_url.map(|url| view! { <img class="community-header__banner" src=url alt="" /> })}
            <div class="community-header__row">
                {avatar_url
                    .map(|url| view! { <img class="community-header__avatar" src=url alt="" /> })}
                <h1>{name}</h1>
                <Show when=move || is_private>
                    <span class="community-header__badge">"Private"</span>
                </Show>
            </div>
            <p class="community-header__description">{description}</p>
            <div class="community-header__meta">
                <span class="community-header__members">{members}</span>
                <span class="community-header__tags">
                    {tags
                        .into_iter()
                        .map(|tag| view! { <span class="community-header__tag">{tag}</span> })
                        .collect_view()}
                </span>
            </div>
            <div class="community-header__actions">
                <Show when=move || can_post>
                    <a class="btn btn--primary community-header__compose" href=compose_href.clone()>
                        "Write a post"
                    </a>
                </Show>
                <Show when=move || is_owner>
                    <a class="btn community-header__edit" href=edit_href.clone()>
                        "Edit"
                    </a>
                    <button
                        class="btn btn--danger community-header__delete"
                        on:click=move |_| on_delete.run(())
                    >
                        "Delete"
                    </button>
                </Show>
                <Show when=move || is_member && !is_owner>
                    <button
                        class="btn community-header__leave"
                        disabled=move || membership_busy.get()
                        on:click=move |_| on_leave.run(())
                    >
                        "Leave"
                    </button>
                </Show>
                <Show when=move || authenticated && !is_member && !is_owner>
                    <button
                        class="btn btn--primary community-header__join"
                        disabled=move || membership_busy.get()
                        on:click=move |_| on_join.run(())
                    >
                        "Join"
                    </button>
                </Show>
                <Show when=move || !authenticated>
                    <a class="btn community-header__signin" href="/login">
                        "Sign in to join"
                    </a>
                </Show>
            </div>
        </header>
    }
}
