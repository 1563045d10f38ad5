//! Top navigation bar, session-aware.

use leptos::prelude::*;

use crate::state::session::Session;

/// Site-wide navigation. Shows sign-in / join links to anonymous visitors
/// and profile / sign-out controls once a session is live.
#[component]
pub fn Navbar() -> impl IntoView {
    let session = expect_context::<Session>();

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            crate::net::api::logout().await;
            session.expire();
        });
    };

    view! {
        <header class="navbar">
            <a class="navbar__brand" href="/">
                "KnoWord"
            </a>
            <nav class="navbar__links">
                <a class="navbar__link" href="/explore">
                    "Explore"
                </a>
                <Show
                    when=move || session.is_authenticated()
                    fallback=|| {
                        view! {
                            <a class="navbar__link" href="/login">
                                "Sign in"
                            </a>
                            <a class="navbar__link navbar__link--cta" href="/register">
                                "Join"
                            </a>
                        }
                    }
                >
                    <a class="navbar__link" href="/profile/me">
                        {move || session.user().map(|user| user.username).unwrap_or_default()}
                    </a>
                    <button class="btn navbar__logout" on:click=on_logout>
                        "Sign out"
                    </button>
                </Show>
            </nav>
        </header>
    }
}
