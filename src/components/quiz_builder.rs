//! Leptos bridge around the quiz authoring engine.
//!
//! Every authoring rule lives in the `quiz` crate where it is testable
//! without a browser; this component only forwards edits into the shared
//! [`BuilderCore`] signal and renders the result back out.

use leptos::prelude::*;

use quiz::builder::BuilderCore;
use quiz::consts::{MAX_QUESTIONS, OPTION_SLOTS};
use quiz::question::QuestionId;

/// Quiz authoring panel. The caller owns the builder signal so publish and
/// autosave can snapshot the committed questions; `on_change` fires whenever
/// the committed list changes.
#[component]
pub fn QuizBuilder(
    builder: RwSignal<BuilderCore>,
    #[prop(optional)] on_change: Option<Callback<()>>,
) -> impl IntoView {
    let error = RwSignal::new(String::new());

    let changed = move || {
        if let Some(on_change) = on_change {
            on_change.run(());
        }
    };

    let on_commit = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        let mut outcome = Ok(());
        builder.update(|b| outcome = b.commit_question());
        match outcome {
            Ok(()) => {
                error.set(String::new());
                changed();
            }
            Err(err) => error.set(err.to_string()),
        }
    };

    let on_edit = move |id: QuestionId| {
        builder.update(|b| {
            b.edit_question(id);
        });
        error.set(String::new());
        changed();
    };

    let on_remove = move |id: QuestionId| {
        builder.update(|b| {
            b.remove_question(id);
        });
        changed();
    };

    let on_clear = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        builder.update(|b| b.clear_form());
        error.set(String::new());
    };

    view! {
        <section class="quiz-builder">
            <header class="quiz-builder__header">
                <h3>"Quiz"</h3>
                <span class="quiz-builder__count">
                    {move || builder.with(|b| format!("{} of {MAX_QUESTIONS} questions", b.len()))}
                </span>
            </header>
            <Show
                when=move || !builder.with(BuilderCore::is_empty)
                fallback=|| view! { <p class="quiz-builder__empty">"No questions yet."</p> }
            >
                <ul class="quiz-builder__questions">
                    {move || {
                        builder
                            .with(|b| b.questions().to_vec())
                            .into_iter()
                            .map(|question| {
                                let id = question.id;
                                view! {
                                    <li class="quiz-builder__question">
                                        <span class="quiz-builder__question-title">
                                            {question.title.clone()}
                                        </span>
                                        <button
                                            class="btn quiz-builder__edit"
                                            on:click=move |ev: leptos::ev::MouseEvent| {
                                                ev.prevent_default();
                                                on_edit(id);
                                            }
                                        >
                                            "Edit"
                                        </button>
                                        <button
                                            class="btn btn--danger quiz-builder__remove"
                                            on:click=move |ev: leptos::ev::MouseEvent| {
                                                ev.prevent_default();
                                                on_remove(id);
                                            }
                                        >
                                            "Remove"
                                        </button>
                                    </li>
                                }
                            })
                            .collect_view()
                    }}
                </ul>
            </Show>
            <div class="quiz-builder__form">
                <input
                    class="quiz-builder__title"
                    type="text"
                    placeholder="Question"
                    prop:value=move || builder.with(|b| b.form().title.clone())
                    on:input=move |ev| builder.update(|b| b.set_title(&event_target_value(&ev)))
                />
                {(0..OPTION_SLOTS)
                    .map(|slot| {
                        view! {
                            <div class="quiz-builder__option">
                                <input
                                    type="radio"
                                    name="quiz-builder-correct"
                                    prop:checked=move || {
                                        builder.with(|b| b.form().correct == Some(slot))
                                    }
                                    on:change=move |_| builder.update(|b| b.mark_correct(slot))
                                />
                                <input
                                    class="quiz-builder__option-text"
                                    type="text"
                                    placeholder=format!("Option {}", slot + 1)
                                    prop:value=move || {
                                        builder.with(|b| b.form().options[slot].clone())
                                    }
                                    on:input=move |ev| {
                                        builder.update(|b| b.set_option(slot, &event_target_value(&ev)))
                                    }
                                />
                            </div>
                        }
                    })
                    .collect_view()}
                <Show when=move || !error.get().is_empty()>
                    <p class="quiz-builder__error">{move || error.get()}</p>
                </Show>
                <div class="quiz-builder__actions">
                    <button class="btn btn--primary quiz-builder__commit" on:click=on_commit>
                        {move || {
                            if builder.with(|b| b.form().id.is_some()) {
                                "Update question"
                            } else {
                                "Add question"
                            }
                        }}
                    </button>
                    <button class="btn quiz-builder__clear" on:click=on_clear>
                        "Clear form"
                    </button>
                </div>
            </div>
        </section>
    }
}
