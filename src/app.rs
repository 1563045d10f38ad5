//! Application root: route table, shared contexts, and the SSR shell.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::guard::RouteGuard;
use crate::components::navbar::Navbar;
use crate::net::session_client::SessionClient;
use crate::pages::{
    community::CommunityPage, community_form::CommunityFormPage, compose::ComposePage,
    explore::ExplorePage, landing::LandingPage, login::LoginPage, post::PostPage,
    profile::ProfilePage, register::RegisterPage, reset_password::ResetPasswordPage,
};
use crate::state::session::Session;

/// Server-rendered HTML document that the hydrating client takes over.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Top-level component mounted into the shell.
///
/// Provides the shared session and API client contexts and sets up routing.
/// The session starts in its loading state; the rehydration task spawned here
/// resolves it, and the route guard holds protected pages until it does.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = Session::new();
    let client = SessionClient::new(session);
    provide_context(session);
    provide_context(client.clone());

    #[cfg(feature = "hydrate")]
    {
        let boot = client.clone();
        leptos::task::spawn_local(async move { boot.rehydrate().await });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = client;

    view! {
        <Stylesheet id="leptos" href="/pkg/knoword.css"/>
        <Title text="KnoWord"/>

        <Router>
            <Navbar/>
            <main class="app-main">
                <RouteGuard>
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=StaticSegment("") view=LandingPage/>
                        <Route path=StaticSegment("login") view=LoginPage/>
                        <Route path=StaticSegment("register") view=RegisterPage/>
                        <Route path=StaticSegment("reset-password") view=ResetPasswordPage/>
                        <Route path=StaticSegment("explore") view=ExplorePage/>
                        <Route path=(StaticSegment("c"), ParamSegment("slug")) view=CommunityPage/>
                        <Route
                            path=(StaticSegment("communities"), StaticSegment("new"))
                            view=CommunityFormPage
                        />
                        <Route
                            path=(
                                StaticSegment("communities"),
                                ParamSegment("slug"),
                                StaticSegment("edit"),
                            )
                            view=CommunityFormPage
                        />
                        <Route
                            path=(StaticSegment("compose"), ParamSegment("slug"))
                            view=ComposePage
                        />
                        <Route
                            path=(
                                StaticSegment("compose"),
                                ParamSegment("slug"),
                                ParamSegment("post_id"),
                            )
                            view=ComposePage
                        />
                        <Route path=(StaticSegment("p"), ParamSegment("id")) view=PostPage/>
                        <Route
                            path=(StaticSegment("profile"), StaticSegment("me"))
                            view=ProfilePage
                        />
                    </Routes>
                </RouteGuard>
            </main>
        </Router>
    }
}
