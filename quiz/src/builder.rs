//! Authoring state: the in-progress question form and the committed list.
//!
//! DESIGN
//! ======
//! `BuilderCore` owns everything the quiz-builder UI needs to decide: the
//! current form slots, the committed questions, and the validation rules for
//! moving one into the other. The Leptos bridge component only forwards input
//! events in and renders the state back out, so every rule here is testable
//! without a browser.
//!
//! Correctness is radio-style exclusive: `mark_correct` clears any previous
//! mark, and commit rejects a form with no mark. A committed [`Question`]
//! therefore always satisfies the exactly-one-correct invariant.

#[cfg(test)]
#[path = "builder_test.rs"]
mod builder_test;

use uuid::Uuid;

use crate::consts::{MAX_QUESTIONS, OPTION_SLOTS};
use crate::question::{Question, QuestionError, QuestionId, QuizOption, first_duplicate};

/// Why the builder refused to commit the current form.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BuilderError {
    /// The form content violates a question rule.
    #[error(transparent)]
    Question(#[from] QuestionError),
    /// The quiz already holds [`MAX_QUESTIONS`] questions.
    #[error("a quiz holds at most {MAX_QUESTIONS} questions")]
    QuizFull,
}

/// The in-progress question form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QuestionForm {
    /// Identity carried through an edit-in-place cycle; `None` for a fresh
    /// question until commit assigns one.
    pub id: Option<QuestionId>,
    pub title: String,
    pub options: [String; OPTION_SLOTS],
    /// Slot currently marked correct, if any.
    pub correct: Option<usize>,
}

impl QuestionForm {
    /// Whether the author has typed anything into the form yet.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.title.trim().is_empty()
            && self.correct.is_none()
            && self.options.iter().all(|option| option.trim().is_empty())
    }
}

/// Authoring engine for one quiz.
#[derive(Clone, Debug, Default)]
pub struct BuilderCore {
    committed: Vec<Question>,
    form: QuestionForm,
}

impl BuilderCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the committed list from an existing quiz (editing a published
    /// post). Questions beyond [`MAX_QUESTIONS`] are dropped.
    #[must_use]
    pub fn with_questions(mut questions: Vec<Question>) -> Self {
        questions.truncate(MAX_QUESTIONS);
        Self { committed: questions, form: QuestionForm::default() }
    }

    // --- Form edits ---

    pub fn set_title(&mut self, title: &str) {
        self.form.title = title.to_owned();
    }

    /// Replace the text in one option slot. Out-of-range slots are ignored.
    pub fn set_option(&mut self, slot: usize, text: &str) {
        if let Some(option) = self.form.options.get_mut(slot) {
            *option = text.to_owned();
        }
    }

    /// Mark one slot as the correct answer, clearing any previous mark.
    /// Out-of-range slots are ignored.
    pub fn mark_correct(&mut self, slot: usize) {
        if slot < OPTION_SLOTS {
            self.form.correct = Some(slot);
        }
    }

    /// Discard the form content, including any edit-in-place identity.
    pub fn clear_form(&mut self) {
        self.form = QuestionForm::default();
    }

    // --- Commit / edit / remove ---

    /// Validate the form and move it into the committed list.
    ///
    /// On success the form is cleared for the next question. On failure the
    /// form is left untouched so the author can fix it.
    ///
    /// # Errors
    ///
    /// [`BuilderError::QuizFull`] when the quiz is at capacity, otherwise the
    /// first violated [`QuestionError`] rule.
    pub fn commit_question(&mut self) -> Result<(), BuilderError> {
        if self.committed.len() >= MAX_QUESTIONS {
            return Err(BuilderError::QuizFull);
        }
        let question = self.validated_form_question()?;
        self.committed.push(question);
        self.form = QuestionForm::default();
        Ok(())
    }

    /// Move a committed question back into the form for editing.
    ///
    /// Whatever was in the form is discarded; the question leaves the
    /// committed list until it is committed again. Returns `false` when no
    /// committed question has the given id.
    pub fn edit_question(&mut self, id: QuestionId) -> bool {
        let Some(index) = self.committed.iter().position(|question| question.id == id) else {
            return false;
        };
        let question = self.committed.remove(index);
        let mut options: [String; OPTION_SLOTS] = Default::default();
        for (slot, option) in question.options.iter().enumerate().take(OPTION_SLOTS) {
            options[slot] = option.text.clone();
        }
        self.form = QuestionForm {
            id: Some(question.id),
            correct: question.correct_index(),
            title: question.title,
            options,
        };
        true
    }

    /// Delete a committed question. Returns `false` when the id is unknown.
    pub fn remove_question(&mut self, id: QuestionId) -> bool {
        let before = self.committed.len();
        self.committed.retain(|question| question.id != id);
        self.committed.len() != before
    }

    // --- Queries ---

    #[must_use]
    pub fn form(&self) -> &QuestionForm {
        &self.form
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.committed
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.committed.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.committed.is_empty()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.committed.len() >= MAX_QUESTIONS
    }

    /// Clone the committed questions for publishing or draft storage.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Question> {
        self.committed.clone()
    }

    fn validated_form_question(&self) -> Result<Question, QuestionError> {
        if self.form.title.trim().is_empty() {
            return Err(QuestionError::EmptyTitle);
        }
        for (slot, option) in self.form.options.iter().enumerate() {
            if option.trim().is_empty() {
                return Err(QuestionError::EmptyOption { slot });
            }
        }
        if let Some(text) = first_duplicate(self.form.options.iter().map(String::as_str)) {
            return Err(QuestionError::DuplicateOption { text });
        }
        let Some(correct) = self.form.correct else {
            return Err(QuestionError::NoCorrectOption);
        };
        let options = self
            .form
            .options
            .iter()
            .enumerate()
            .map(|(slot, text)| QuizOption { text: text.trim().to_owned(), is_correct: slot == correct })
            .collect();
        Ok(Question {
            id: self.form.id.unwrap_or_else(Uuid::new_v4),
            title: self.form.title.trim().to_owned(),
            options,
        })
    }
}
