use uuid::Uuid;

use super::*;

fn fill_form(core: &mut BuilderCore, title: &str, options: [&str; OPTION_SLOTS], correct: usize) {
    core.set_title(title);
    for (slot, text) in options.iter().enumerate() {
        core.set_option(slot, text);
    }
    core.mark_correct(correct);
}

fn fill_capital_form(core: &mut BuilderCore) {
    fill_form(
        core,
        "What is the capital of France?",
        ["Paris", "London", "Berlin", "Madrid"],
        0,
    );
}

// =============================================================
// Form edits
// =============================================================

#[test]
fn new_builder_starts_blank() {
    let core = BuilderCore::new();
    assert!(core.is_empty());
    assert!(!core.is_full());
    assert!(core.form().is_blank());
}

#[test]
fn mark_correct_is_exclusive() {
    let mut core = BuilderCore::new();
    core.mark_correct(1);
    assert_eq!(core.form().correct, Some(1));
    core.mark_correct(3);
    assert_eq!(core.form().correct, Some(3));
}

#[test]
fn out_of_range_slots_are_ignored() {
    let mut core = BuilderCore::new();
    core.set_option(OPTION_SLOTS, "nope");
    core.mark_correct(OPTION_SLOTS);
    assert!(core.form().is_blank());
}

#[test]
fn is_blank_notices_any_field() {
    let mut core = BuilderCore::new();
    core.set_option(2, "x");
    assert!(!core.form().is_blank());
    core.clear_form();
    assert!(core.form().is_blank());
}

// =============================================================
// Commit
// =============================================================

#[test]
fn commit_moves_form_into_committed_list() {
    let mut core = BuilderCore::new();
    fill_capital_form(&mut core);

    core.commit_question().unwrap();

    assert_eq!(core.len(), 1);
    assert!(core.form().is_blank());
    let question = &core.questions()[0];
    assert_eq!(question.title, "What is the capital of France?");
    assert_eq!(question.correct_index(), Some(0));
    assert!(question.validate().is_ok());
}

#[test]
fn commit_trims_title_and_options() {
    let mut core = BuilderCore::new();
    fill_form(&mut core, "  2 + 2?  ", [" 4 ", "5", "6", "7"], 0);

    core.commit_question().unwrap();

    let question = &core.questions()[0];
    assert_eq!(question.title, "2 + 2?");
    assert_eq!(question.options[0].text, "4");
}

#[test]
fn commit_rejects_empty_title() {
    let mut core = BuilderCore::new();
    fill_form(&mut core, "   ", ["a", "b", "c", "d"], 0);
    assert_eq!(
        core.commit_question(),
        Err(BuilderError::Question(QuestionError::EmptyTitle))
    );
    assert!(core.is_empty());
}

#[test]
fn commit_rejects_empty_option_with_slot() {
    let mut core = BuilderCore::new();
    fill_form(&mut core, "Title", ["a", "b", "  ", "d"], 0);
    assert_eq!(
        core.commit_question(),
        Err(BuilderError::Question(QuestionError::EmptyOption { slot: 2 }))
    );
}

#[test]
fn commit_rejects_case_insensitive_duplicate_options() {
    let mut core = BuilderCore::new();
    fill_form(&mut core, "Capital of France?", ["Paris", "paris ", "Berlin", "Madrid"], 0);
    assert_eq!(
        core.commit_question(),
        Err(BuilderError::Question(QuestionError::DuplicateOption {
            text: "paris".to_string(),
        }))
    );
    assert!(core.is_empty());
}

#[test]
fn commit_rejects_unmarked_form() {
    let mut core = BuilderCore::new();
    core.set_title("Title");
    for slot in 0..OPTION_SLOTS {
        core.set_option(slot, &format!("option {slot}"));
    }
    assert_eq!(
        core.commit_question(),
        Err(BuilderError::Question(QuestionError::NoCorrectOption))
    );
}

#[test]
fn failed_commit_leaves_form_untouched() {
    let mut core = BuilderCore::new();
    fill_form(&mut core, "", ["a", "b", "c", "d"], 1);

    assert!(core.commit_question().is_err());

    assert_eq!(core.form().options[0], "a");
    assert_eq!(core.form().correct, Some(1));
}

#[test]
fn commit_refuses_when_full() {
    let mut core = BuilderCore::new();
    for n in 0..MAX_QUESTIONS {
        fill_form(&mut core, &format!("Question {n}"), ["a", "b", "c", "d"], 0);
        core.commit_question().unwrap();
    }
    assert!(core.is_full());

    // Capacity is checked before the form content.
    assert_eq!(core.commit_question(), Err(BuilderError::QuizFull));
    assert_eq!(core.len(), MAX_QUESTIONS);
}

// =============================================================
// Edit in place
// =============================================================

#[test]
fn edit_question_preserves_identity() {
    let mut core = BuilderCore::new();
    fill_capital_form(&mut core);
    core.commit_question().unwrap();
    let id = core.questions()[0].id;

    assert!(core.edit_question(id));
    assert!(core.is_empty());
    assert_eq!(core.form().id, Some(id));
    assert_eq!(core.form().title, "What is the capital of France?");
    assert_eq!(core.form().correct, Some(0));

    core.set_title("Which city is the capital of France?");
    core.commit_question().unwrap();
    assert_eq!(core.questions()[0].id, id);
    assert_eq!(core.questions()[0].title, "Which city is the capital of France?");
}

#[test]
fn edit_unknown_id_is_a_no_op() {
    let mut core = BuilderCore::new();
    fill_capital_form(&mut core);
    core.commit_question().unwrap();

    assert!(!core.edit_question(Uuid::new_v4()));
    assert_eq!(core.len(), 1);
    assert!(core.form().is_blank());
}

#[test]
fn clear_form_drops_edit_identity() {
    let mut core = BuilderCore::new();
    fill_capital_form(&mut core);
    core.commit_question().unwrap();
    let id = core.questions()[0].id;

    core.edit_question(id);
    core.clear_form();
    fill_capital_form(&mut core);
    core.commit_question().unwrap();

    // The edited question was discarded, so the recommit is a new question.
    assert_eq!(core.len(), 1);
    assert_ne!(core.questions()[0].id, id);
}

// =============================================================
// Remove / seed / snapshot
// =============================================================

#[test]
fn remove_question_by_id() {
    let mut core = BuilderCore::new();
    fill_capital_form(&mut core);
    core.commit_question().unwrap();
    fill_form(&mut core, "2 + 2?", ["4", "5", "6", "7"], 0);
    core.commit_question().unwrap();
    let first = core.questions()[0].id;

    assert!(core.remove_question(first));
    assert_eq!(core.len(), 1);
    assert_eq!(core.questions()[0].title, "2 + 2?");

    assert!(!core.remove_question(first));
}

#[test]
fn with_questions_truncates_to_capacity() {
    let questions: Vec<Question> = (0..MAX_QUESTIONS + 3)
        .map(|n| Question {
            id: Uuid::new_v4(),
            title: format!("Question {n}"),
            options: vec![
                QuizOption { text: "a".to_string(), is_correct: true },
                QuizOption { text: "b".to_string(), is_correct: false },
                QuizOption { text: "c".to_string(), is_correct: false },
                QuizOption { text: "d".to_string(), is_correct: false },
            ],
        })
        .collect();

    let core = BuilderCore::with_questions(questions);
    assert_eq!(core.len(), MAX_QUESTIONS);
    assert!(core.is_full());
}

#[test]
fn snapshot_clones_committed_questions() {
    let mut core = BuilderCore::new();
    fill_capital_form(&mut core);
    core.commit_question().unwrap();

    let snapshot = core.snapshot();
    assert_eq!(snapshot.len(), 1);
    assert_eq!(snapshot[0].id, core.questions()[0].id);
}

// =============================================================
// Errors
// =============================================================

#[test]
fn quiz_full_message_names_the_limit() {
    assert_eq!(
        BuilderError::QuizFull.to_string(),
        "a quiz holds at most 10 questions"
    );
}

#[test]
fn question_errors_pass_through_transparently() {
    let err = BuilderError::from(QuestionError::EmptyTitle);
    assert_eq!(err.to_string(), "question needs a title");
}
