//! Route guard enforcing the protected / public-only path classification.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps the route outlet once, at the app root. Neutral paths render
//! immediately; protected and public-only paths hold a loading indicator
//! until the initial session rehydration resolves, then either render or
//! redirect. Protected content is never flashed before a redirect fires.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::state::session::Session;
use crate::util::routes::{self, RouteClass};

/// Gate the wrapped routes behind the session-aware route classification.
#[component]
pub fn RouteGuard(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<Session>();
    let location = use_location();

    let allowed = Memo::new(move |_| {
        let path = location.pathname.get();
        match routes::classify(&path) {
            RouteClass::Neutral => true,
            RouteClass::Protected | RouteClass::PublicOnly => {
                !session.is_loading()
                    && routes::redirect_for(&path, session.is_authenticated()).is_none()
            }
        }
    });

    let navigate = use_navigate();
    Effect::new(move || {
        if session.is_loading() {
            return;
        }
        let path = location.pathname.get();
        if let Some(target) = routes::redirect_for(&path, session.is_authenticated()) {
            navigate(target, NavigateOptions::default());
        }
    });

    view! {
        <Show
            when=move || allowed.get()
            fallback=|| {
                view! { <div class="route-guard__loading">"Loading..."</div> }
            }
        >
            {children()}
        </Show>
    }
}
