//! Leptos bridge around the quiz play engine.
//!
//! Selection, the submit freeze, and scoring all live in the `quiz` crate;
//! this component renders questions and forwards clicks.

use leptos::prelude::*;

use quiz::player::PlayerCore;

/// Interactive quiz attached to a post. Owns its play state internally since
/// nothing outside the post page cares about it.
#[component]
pub fn QuizPlayer(player: RwSignal<PlayerCore>) -> impl IntoView {
    let on_submit = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        player.update(|p| {
            p.submit();
        });
    };

    let on_reset = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        player.update(PlayerCore::reset);
    };

    let score_line = move || {
        let score = player.with(PlayerCore::score);
        format!("You scored {} of {} ({}%)", score.correct, score.total, score.percent)
    };

    view! {
        <section class="quiz-player">
            <h3 class="quiz-player__heading">"Test yourself"</h3>
            <ol class="quiz-player__questions">
                {move || {
                    let submitted = player.with(PlayerCore::is_submitted);
                    player
                        .with(|p| p.questions().to_vec())
                        .into_iter()
                        .enumerate()
                        .map(|(index, question)| {
                            let selected = player.with(|p| p.selection(index));
                            view! {
                                <li class="quiz-player__question">
                                    <span class="quiz-player__title">{question.title.clone()}</span>
                                    <div class="quiz-player__options">
                                        {question
                                            .options
                                            .iter()
                                            .enumerate()
                                            .map(|(slot, option)| {
                                                let chosen = selected == Some(slot);
                                                let reveal_correct = submitted && option.is_correct;
                                                let reveal_wrong = submitted && chosen
                                                    && !option.is_correct;
                                                view! {
                                                    <button
                                                        class="quiz-player__option"
                                                        class:quiz-player__option--chosen=chosen
                                                        class:quiz-player__option--correct=reveal_correct
                                                        class:quiz-player__option--wrong=reveal_wrong
                                                        disabled=submitted
                                                        on:click=move |ev: leptos::ev::MouseEvent| {
                                                            ev.prevent_default();
                                                            player
                                                                .update(|p| {
                                                                    p.select(index, slot);
                                                                });
                                                        }
                                                    >
                                                        {option.text.clone()}
                                                    </button>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                </li>
                            }
                        })
                        .collect_view()
                }}
            </ol>
            <div class="quiz-player__footer">
                <Show
                    when=move || player.with(PlayerCore::is_submitted)
                    fallback=move || {
                        view! {
                            <button
                                class="btn btn--primary quiz-player__submit"
                                disabled=move || !player.with(PlayerCore::is_complete)
                                on:click=on_submit
                            >
                                "Submit answers"
                            </button>
                        }
                    }
                >
                    <span class="quiz-player__score">{score_line}</span>
                    <button class="btn quiz-player__reset" on:click=on_reset>
                        "Try again"
                    </button>
                </Show>
            </div>
        </section>
    }
}
