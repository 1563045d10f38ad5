//! Explore page: community discovery grid with a debounced search box.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the default landing route for a signed-in session and stays open
//! to anonymous visitors. Every keystroke in the search box claims a fresh
//! debounce ticket, so the grid only ever shows results for the latest query
//! even when an older, slower response arrives late.

use leptos::prelude::*;

use crate::components::community_card::CommunityCard;
use crate::net::communities::{fetch_communities, join_community};
use crate::net::session_client::SessionClient;
use crate::net::types::Community;
use crate::state::session::Session;
use crate::util::debounce::{self, DebounceGate};

/// Quiet period between the last search keystroke and the request.
const SEARCH_QUIET_MS: u64 = 300;

#[component]
pub fn ExplorePage() -> impl IntoView {
    let session = expect_context::<Session>();
    let client = expect_context::<SessionClient>();
    let query = RwSignal::new(String::new());
    let communities = RwSignal::new(Vec::<Community>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(String::new());
    let gate = DebounceGate::new();

    let run_search = {
        let gate = gate.clone();
        let client = client.clone();
        move |term: String, quiet_ms: u64| {
            let client = client.clone();
            debounce::run_after_quiet(&gate, quiet_ms, move |ticket| async move {
                let result = fetch_communities(&client, &term).await;
                if !ticket.is_current() {
                    return;
                }
                match result {
                    Ok(list) => {
                        communities.set(list);
                        error.set(String::new());
                    }
                    Err(err) => error.set(format!("Could not load communities: {err}")),
                }
                loading.set(false);
            });
        }
    };

    // Initial load, no quiet period.
    run_search(String::new(), 0);

    let on_search = {
        let run_search = run_search.clone();
        move |ev: leptos::ev::Event| {
            let term = event_target_value(&ev);
            query.set(term.clone());
            loading.set(true);
            run_search(term.trim().to_owned(), SEARCH_QUIET_MS);
        }
    };

    // Join shortcut on a card: swap in the refreshed community so the badge
    // and member count update in place.
    let on_join = Callback::new({
        let client = client.clone();
        move |slug: String| {
            client.spawn(move |client| async move {
                match join_community(&client, &slug).await {
                    Ok(updated) => {
                        communities.update(|list| {
                            if let Some(entry) =
                                list.iter_mut().find(|community| community.slug == updated.slug)
                            {
                                *entry = updated;
                            }
                        });
                        error.set(String::new());
                    }
                    Err(err) => error.set(format!("Could not join: {err}")),
                }
            });
        }
    });

    view! {
        <div class="explore-page">
            <header class="explore-page__header">
                <h1>"Explore communities"</h1>
                <Show when=move || session.is_authenticated()>
                    <a class="btn btn--primary explore-page__new" href="/communities/new">
                        "New community"
                    </a>
                </Show>
            </header>
            <input
                class="explore-page__search"
                type="search"
                placeholder="Search by name, topic, or tag"
                prop:value=move || query.get()
                on:input=on_search
            />
            <Show when=move || !error.get().is_empty()>
                <p class="banner banner--error">{move || error.get()}</p>
            </Show>
            <Show
                when=move || !loading.get()
                fallback=|| view! { <p class="explore-page__loading">"Loading communities..."</p> }
            >
                <div class="explore-page__grid">
                    {move || {
                        let authenticated = session.is_authenticated();
                        communities
                            .get()
                            .into_iter()
                            .map(|community| {
                                if authenticated && !community.is_member {
                                    view! { <CommunityCard community on_join=on_join /> }
                                        .into_any()
                                } else {
                                    view! { <CommunityCard community /> }.into_any()
                                }
                            })
                            .collect_view()
                    }}
                </div>
                <Show when=move || communities.with(Vec::is_empty)>
                    <p class="explore-page__empty">
                        {move || {
                            if query.get().trim().is_empty() {
                                "No communities yet. Start the first one!"
                            } else {
                                "No communities match that search."
                            }
                        }}
                    </p>
                </Show>
            </Show>
        </div>
    }
}
