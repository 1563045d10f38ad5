//! Markdown editor with a live sanitized preview.
//!
//! The preview renders through the same sanitizer pipeline as the published
//! post, so what the author sees is exactly what readers will get.

use leptos::prelude::*;

use crate::util::sanitize;

/// Two-tab markdown editor. The caller owns the content signal; the preview
/// tab re-renders it through the post sanitizer on every switch. `on_change`
/// fires on every keystroke, after the content signal has been updated.
#[component]
pub fn MarkdownEditor(
    content: RwSignal<String>,
    #[prop(optional)] on_change: Option<Callback<()>>,
) -> impl IntoView {
    let preview_open = RwSignal::new(false);
    let rendered = Memo::new(move |_| sanitize::render_post_html(&content.get()));

    view! {
        <div class="editor">
            <div class="editor__tabs">
                <button
                    class="editor__tab"
                    class:editor__tab--active=move || !preview_open.get()
                    on:click=move |ev: leptos::ev::MouseEvent| {
                        ev.prevent_default();
                        preview_open.set(false);
                    }
                >
                    "Write"
                </button>
                <button
                    class="editor__tab"
                    class:editor__tab--active=move || preview_open.get()
                    on:click=move |ev: leptos::ev::MouseEvent| {
                        ev.prevent_default();
                        preview_open.set(true);
                    }
                >
                    "Preview"
                </button>
            </div>
            <Show
                when=move || preview_open.get()
                fallback=move || {
                    view! {
                        <textarea
                            class="editor__input"
                            placeholder="Write your post in Markdown"
                            prop:value=move || content.get()
                            on:input=move |ev| {
                                content.set(event_target_value(&ev));
                                if let Some(on_change) = on_change {
                                    on_change.run(());
                                }
                            }
                        ></textarea>
                    }
                }
            >
                <div class="editor__preview" inner_html=move || rendered.get()></div>
            </Show>
        </div>
    }
}
