//! Play state: selection tracking, submit freeze, and scoring.
//!
//! DESIGN
//! ======
//! `PlayerCore` is deliberately forgiving about the questions it is given
//! (the backend owns them) but strict about the play contract: one selection
//! per question, nothing changes after submission, and reset returns to a
//! fully unanswered state.

#[cfg(test)]
#[path = "player_test.rs"]
mod player_test;

use crate::question::Question;

/// Result of submitting a quiz.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Score {
    /// Questions whose selected option was marked correct.
    pub correct: usize,
    /// All questions in the quiz, answered or not.
    pub total: usize,
    /// `correct / total`, rounded to the nearest whole percent. Zero for an
    /// empty quiz.
    pub percent: u8,
}

/// Play-through state for one quiz.
#[derive(Clone, Debug, Default)]
pub struct PlayerCore {
    questions: Vec<Question>,
    selections: Vec<Option<usize>>,
    submitted: bool,
}

impl PlayerCore {
    #[must_use]
    pub fn new(questions: Vec<Question>) -> Self {
        let selections = vec![None; questions.len()];
        Self { questions, selections, submitted: false }
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// The option currently selected for a question, if any.
    #[must_use]
    pub fn selection(&self, question: usize) -> Option<usize> {
        self.selections.get(question).copied().flatten()
    }

    #[must_use]
    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    /// Whether every question has a selection.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.selections.iter().all(Option::is_some)
    }

    /// Record a selection. Re-selecting replaces the previous choice.
    ///
    /// Returns `false` without mutating when the quiz was already submitted
    /// or either index is out of range.
    pub fn select(&mut self, question: usize, option: usize) -> bool {
        if self.submitted {
            return false;
        }
        let Some(target) = self.questions.get(question) else {
            return false;
        };
        if option >= target.options.len() {
            return false;
        }
        self.selections[question] = Some(option);
        true
    }

    /// Freeze selections and return the score. Idempotent: a second call
    /// returns the same score without changing anything.
    pub fn submit(&mut self) -> Score {
        self.submitted = true;
        self.score()
    }

    /// Current score. Meaningful to callers after [`Self::submit`]; unanswered
    /// questions count as incorrect.
    #[must_use]
    pub fn score(&self) -> Score {
        let total = self.questions.len();
        let correct = self
            .questions
            .iter()
            .zip(&self.selections)
            .filter(|(question, selection)| {
                selection.is_some_and(|index| {
                    question.options.get(index).is_some_and(|option| option.is_correct)
                })
            })
            .count();
        Score { correct, total, percent: percent_of(correct, total) }
    }

    /// Return to the fully unanswered state.
    pub fn reset(&mut self) {
        self.selections = vec![None; self.questions.len()];
        self.submitted = false;
    }
}

/// `correct / total` as a whole percent, rounded to nearest, zero when empty.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
fn percent_of(correct: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    ((correct as f64 / total as f64) * 100.0).round() as u8
}
