//! File-pick-and-upload widget for avatar and banner images.
//!
//! The widget owns its own busy and error state; the page only learns the
//! hosted URL through `on_uploaded`. A failed upload resets the busy flag so
//! the control never sticks in its uploading state.

use leptos::prelude::*;

use crate::net::upload;

/// A file input plus upload button. `input_id` must be unique per instance
/// since the file is read back out of the DOM by id.
#[component]
pub fn ImageUpload(
    input_id: &'static str,
    label: &'static str,
    on_uploaded: Callback<String>,
) -> impl IntoView {
    let picked = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);
    let error = RwSignal::new(String::new());

    let on_pick = move |_| {
        picked.set(upload::selected_file_name(input_id));
        error.set(String::new());
    };

    let on_upload = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        busy.set(true);
        error.set(String::new());
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match upload::upload_image(input_id).await {
                Ok(Some(url)) => {
                    picked.set(None);
                    on_uploaded.run(url);
                }
                Ok(None) => error.set("Choose an image first.".to_owned()),
                Err(err) => error.set(err.to_string()),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &on_uploaded;
            busy.set(false);
        }
    };

    view! {
        <div class="image-upload">
            <label class="image-upload__label" for=input_id>
                {label}
            </label>
            <input
                class="image-upload__file"
                id=input_id
                type="file"
                accept="image/*"
                on:change=on_pick
            />
            <span class="image-upload__picked">{move || picked.get().unwrap_or_default()}</span>
            <button class="btn image-upload__submit" disabled=move || busy.get() on:click=on_upload>
                {move || if busy.get() { "Uploading..." } else { "Upload" }}
            </button>
            <Show when=move || !error.get().is_empty()>
                <span class="image-upload__error">{move || error.get()}</span>
            </Show>
        </div>
    }
}
