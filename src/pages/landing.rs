//! Public landing page.

use leptos::prelude::*;

use crate::state::session::Session;

#[component]
pub fn LandingPage() -> impl IntoView {
    let session = expect_context::<Session>();

    view! {
        <div class="landing-page">
            <section class="landing-hero">
                <h1>"KnoWord"</h1>
                <p class="landing-hero__tagline">
                    "Communities that write to learn. Read a post, take its quiz, keep what you learned."
                </p>
                <div class="landing-hero__actions">
                    <a class="btn btn--primary" href="/explore">
                        "Browse communities"
                    </a>
                    <Show when=move || !session.is_authenticated()>
                        <a class="btn" href="/register">
                            "Join KnoWord"
                        </a>
                    </Show>
                </div>
            </section>
        </div>
    }
}
