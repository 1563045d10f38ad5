//! Confirmation dialog rendered from a fixed set of modal kinds.
//!
//! DESIGN
//! ======
//! Pages hold `RwSignal<Option<ConfirmKind>>` and render one dialog from it.
//! A closed enum over every confirmation the app can show keeps dialog copy
//! in one place instead of spreading per-dialog boolean flags and optional
//! props across pages.

#[cfg(test)]
#[path = "modal_test.rs"]
mod modal_test;

use leptos::prelude::*;

/// Every confirmation dialog the app can show.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfirmKind {
    /// Deleting a community and everything posted in it.
    DeleteCommunity {
        /// Community display name, quoted in the message.
        name: String,
    },
    /// Deleting a single post.
    DeletePost {
        /// Post title, quoted in the message.
        title: String,
    },
    /// Throwing away the stored draft for the post being composed.
    DiscardDraft,
}

struct ConfirmCopy {
    title: &'static str,
    message: String,
    confirm_label: &'static str,
}

fn confirm_copy(kind: &ConfirmKind) -> ConfirmCopy {
    match kind {
        ConfirmKind::DeleteCommunity { name } => ConfirmCopy {
            title: "Delete community",
            message: format!("This permanently deletes \"{name}\" and every post in it."),
            confirm_label: "Delete",
        },
        ConfirmKind::DeletePost { title } => ConfirmCopy {
            title: "Delete post",
            message: format!("This permanently deletes \"{title}\"."),
            confirm_label: "Delete",
        },
        ConfirmKind::DiscardDraft => ConfirmCopy {
            title: "Discard draft",
            message: "This throws away your saved draft.".to_owned(),
            confirm_label: "Discard",
        },
    }
}

/// Modal dialog asking the user to confirm a destructive action.
#[component]
pub fn ConfirmModal(
    kind: ConfirmKind,
    #[prop(optional)] busy: Option<RwSignal<bool>>,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let copy = confirm_copy(&kind);
    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>{copy.title}</h2>
                <p class="dialog__message">{copy.message}</p>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button
                        class="btn btn--danger"
                        disabled=move || busy.is_some_and(|flag| flag.get())
                        on:click=move |_| on_confirm.run(())
                    >
                        {copy.confirm_label}
                    </button>
                </div>
            </div>
        </div>
    }
}
