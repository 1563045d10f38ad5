//! Committed question model and its correctness invariant.
//!
//! DESIGN
//! ======
//! A [`Question`] value in a committed quiz always has exactly
//! [`OPTION_SLOTS`] options and exactly one of them marked correct. The
//! builder guarantees this for locally authored questions; [`Question::validate`]
//! re-checks data that arrives over the wire or from a stored draft, since the
//! backend and localStorage are outside this crate's control.

#[cfg(test)]
#[path = "question_test.rs"]
mod question_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::consts::OPTION_SLOTS;

/// Unique identifier for a question.
///
/// Assigned client-side when a question is first committed; the backend keeps
/// it across saves so edit-in-place round-trips preserve identity.
pub type QuestionId = Uuid;

/// One answer option on a question.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizOption {
    /// Display text, stored trimmed.
    pub text: String,
    /// Whether selecting this option counts as a correct answer.
    pub is_correct: bool,
}

/// A committed multiple-choice question.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Stable identity across edit-in-place cycles.
    pub id: QuestionId,
    /// Prompt shown above the options, stored trimmed.
    pub title: String,
    /// Exactly [`OPTION_SLOTS`] options, exactly one marked correct.
    pub options: Vec<QuizOption>,
}

/// Why a question (or question form) was rejected.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum QuestionError {
    /// The question title is empty after trimming.
    #[error("question needs a title")]
    EmptyTitle,
    /// An option slot is empty after trimming (0-based slot index).
    #[error("option {} needs text", .slot + 1)]
    EmptyOption { slot: usize },
    /// Two options collide after trimming and case-folding.
    #[error("options must be distinct: \"{text}\" appears twice")]
    DuplicateOption { text: String },
    /// The wire/stored form did not carry exactly [`OPTION_SLOTS`] options.
    #[error("expected {OPTION_SLOTS} options, found {found}")]
    WrongOptionCount { found: usize },
    /// No option is marked correct.
    #[error("mark one option as the correct answer")]
    NoCorrectOption,
    /// More than one option is marked correct.
    #[error("only one option may be correct, found {found}")]
    MultipleCorrectOptions { found: usize },
}

impl Question {
    /// Index of the option marked correct, if any.
    #[must_use]
    pub fn correct_index(&self) -> Option<usize> {
        self.options.iter().position(|option| option.is_correct)
    }

    /// Re-check the committed-question invariant on externally sourced data.
    ///
    /// # Errors
    ///
    /// Returns the first violated [`QuestionError`] rule: option count, title,
    /// option texts, duplicate collision, then correct-mark count.
    pub fn validate(&self) -> Result<(), QuestionError> {
        if self.options.len() != OPTION_SLOTS {
            return Err(QuestionError::WrongOptionCount { found: self.options.len() });
        }
        if self.title.trim().is_empty() {
            return Err(QuestionError::EmptyTitle);
        }
        for (slot, option) in self.options.iter().enumerate() {
            if option.text.trim().is_empty() {
                return Err(QuestionError::EmptyOption { slot });
            }
        }
        if let Some(text) = first_duplicate(self.options.iter().map(|option| option.text.as_str())) {
            return Err(QuestionError::DuplicateOption { text });
        }
        match self.options.iter().filter(|option| option.is_correct).count() {
            1 => Ok(()),
            0 => Err(QuestionError::NoCorrectOption),
            found => Err(QuestionError::MultipleCorrectOptions { found }),
        }
    }
}

/// Collision key for option texts: trimmed, case-folded.
pub(crate) fn collision_key(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Text of the first option that collides with an earlier one, trimmed.
pub(crate) fn first_duplicate<'a>(texts: impl Iterator<Item = &'a str>) -> Option<String> {
    let mut seen: Vec<String> = Vec::with_capacity(OPTION_SLOTS);
    for text in texts {
        let key = collision_key(text);
        if seen.contains(&key) {
            return Some(text.trim().to_owned());
        }
        seen.push(key);
    }
    None
}
