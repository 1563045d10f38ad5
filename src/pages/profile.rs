//! Profile page for the signed-in user: identity card, edit form, own posts.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;

use crate::components::image_upload::ImageUpload;
use crate::components::post_card::PostCard;
use crate::net::posts::fetch_my_posts;
use crate::net::session_client::SessionClient;
use crate::net::types::{BlogPost, ProfilePayload};
use crate::net::users::update_me;
use crate::state::session::Session;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = expect_context::<Session>();
    let client = expect_context::<SessionClient>();

    let editing = RwSignal::new(false);
    let real_name = RwSignal::new(String::new());
    let bio = RwSignal::new(String::new());
    let avatar_url = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);
    let error = RwSignal::new(String::new());
    let posts = RwSignal::new(Vec::<BlogPost>::new());
    let posts_loading = RwSignal::new(true);

    {
        let client = client.clone();
        let mut requested = false;
        Effect::new(move || {
            if requested || !session.is_authenticated() {
                return;
            }
            requested = true;
            client.spawn(move |client| async move {
                match fetch_my_posts(&client).await {
                    Ok(list) => posts.set(list),
                    Err(err) => error.set(format!("Could not load your posts: {err}")),
                }
                posts_loading.set(false);
            });
        });
    }

    let on_edit = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        if let Some(user) = session.user() {
            real_name.set(user.real_name.unwrap_or_default());
            bio.set(user.bio.unwrap_or_default());
            avatar_url.set(user.avatar_url);
        }
        error.set(String::new());
        editing.set(true);
    };
    let on_cancel = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        editing.set(false);
    };
    let on_avatar = Callback::new(move |url: String| avatar_url.set(Some(url)));

    let on_save = {
        let client = client.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            if busy.get_untracked() {
                return;
            }
            busy.set(true);
            error.set(String::new());
            let payload = profile_payload(
                &real_name.get_untracked(),
                &bio.get_untracked(),
                avatar_url.get_untracked(),
            );
            client.spawn(move |client| async move {
                match update_me(&client, &payload).await {
                    Ok(user) => {
                        session.update_user(user);
                        editing.set(false);
                    }
                    Err(err) => error.set(format!("Could not save your profile: {err}")),
                }
                busy.set(false);
            });
        }
    };

    view! {
        <div class="profile-page">
            <Show when=move || !error.get().is_empty()>
                <p class="banner banner--error">{move || error.get()}</p>
            </Show>
            <Show
                when=move || editing.get()
                fallback=move || {
                    view! {
                        <section class="profile-card">
                            {move || {
                                session
                                    .user()
                                    .map(|user| {
                                        view! {
                                            {user
                                                .avatar_url
                                                .map(|url| {
                                                    view! {
                                                        <img class="profile-card__avatar" src=url alt="" />
                                                    }
                                                })}
                                            <h1>{user.username.clone()}</h1>
                                            {user
                                                .real_name
                                                .map(|name| {
                                                    view! { <p class="profile-card__name">{name}</p> }
                                                })}
                                            <p class="profile-card__email">{user.email.clone()}</p>
                                            {user
                                                .bio
                                                .map(|text| {
                                                    view! { <p class="profile-card__bio">{text}</p> }
                                                })}
                                        }
                                    })
                            }}
                            <button class="btn profile-card__edit" on:click=on_edit>
                                "Edit profile"
                            </button>
                        </section>
                    }
                }
            >
                <form class="profile-form" on:submit=on_save.clone()>
                    <label class="profile-form__label" for="profile-real-name">
                        "Display name"
                    </label>
                    <input
                        class="profile-form__input"
                        id="profile-real-name"
                        type="text"
                        prop:value=move || real_name.get()
                        on:input=move |ev| real_name.set(event_target_value(&ev))
                    />
                    <label class="profile-form__label" for="profile-bio">
                        "Bio"
                    </label>
                    <textarea
                        class="profile-form__textarea"
                        id="profile-bio"
                        prop:value=move || bio.get()
                        on:input=move |ev| bio.set(event_target_value(&ev))
                    ></textarea>
                    <ImageUpload input_id="profile-avatar" label="Avatar" on_uploaded=on_avatar />
                    {move || {
                        avatar_url
                            .get()
                            .map(|url| {
                                view! { <img class="profile-form__preview" src=url alt="" /> }
                            })
                    }}
                    <div class="profile-form__actions">
                        <button class="btn" on:click=on_cancel>
                            "Cancel"
                        </button>
                        <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                            {move || if busy.get() { "Saving..." } else { "Save" }}
                        </button>
                    </div>
                </form>
            </Show>
            <section class="profile-page__posts">
                <h2>"Your posts"</h2>
                <Show when=move || !posts_loading.get()>
                    <Show when=move || posts.with(Vec::is_empty)>
                        <p class="profile-page__empty">"You have not published anything yet."</p>
                    </Show>
                </Show>
                {move || {
                    posts
                        .get()
                        .into_iter()
                        .map(|post| view! { <PostCard post show_community=true /> })
                        .collect_view()
                }}
            </section>
        </div>
    }
}

/// Build the update payload from the form fields. Blank fields clear the
/// stored value rather than writing empty strings.
pub(crate) fn profile_payload(
    real_name: &str,
    bio: &str,
    avatar_url: Option<String>,
) -> ProfilePayload {
    ProfilePayload {
        real_name: normalized(real_name),
        bio: normalized(bio),
        avatar_url: avatar_url.filter(|url| !url.trim().is_empty()),
    }
}

fn normalized(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() { None } else { Some(trimmed.to_owned()) }
}
