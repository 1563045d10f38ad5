use uuid::Uuid;

use super::*;

fn option(text: &str, is_correct: bool) -> QuizOption {
    QuizOption { text: text.to_string(), is_correct }
}

fn capital_question() -> Question {
    Question {
        id: Uuid::new_v4(),
        title: "What is the capital of France?".to_string(),
        options: vec![
            option("Paris", true),
            option("London", false),
            option("Berlin", false),
            option("Madrid", false),
        ],
    }
}

// =============================================================
// Validation
// =============================================================

#[test]
fn valid_question_passes() {
    assert!(capital_question().validate().is_ok());
}

#[test]
fn empty_title_rejected() {
    let mut q = capital_question();
    q.title = "   ".to_string();
    assert_eq!(q.validate(), Err(QuestionError::EmptyTitle));
}

#[test]
fn wrong_option_count_rejected() {
    let mut q = capital_question();
    q.options.pop();
    assert_eq!(q.validate(), Err(QuestionError::WrongOptionCount { found: 3 }));

    q.options.push(option("Rome", false));
    q.options.push(option("Lisbon", false));
    assert_eq!(q.validate(), Err(QuestionError::WrongOptionCount { found: 5 }));
}

#[test]
fn empty_option_rejected_with_slot() {
    let mut q = capital_question();
    q.options[2].text = String::new();
    assert_eq!(q.validate(), Err(QuestionError::EmptyOption { slot: 2 }));
}

#[test]
fn whitespace_option_counts_as_empty() {
    let mut q = capital_question();
    q.options[1].text = " \t ".to_string();
    assert_eq!(q.validate(), Err(QuestionError::EmptyOption { slot: 1 }));
}

#[test]
fn duplicate_option_rejected() {
    let mut q = capital_question();
    q.options[1].text = "Paris".to_string();
    assert_eq!(
        q.validate(),
        Err(QuestionError::DuplicateOption { text: "Paris".to_string() })
    );
}

#[test]
fn duplicate_detection_ignores_case_and_whitespace() {
    let mut q = capital_question();
    q.options[3].text = " paris ".to_string();
    assert_eq!(
        q.validate(),
        Err(QuestionError::DuplicateOption { text: "paris".to_string() })
    );
}

#[test]
fn no_correct_option_rejected() {
    let mut q = capital_question();
    q.options[0].is_correct = false;
    assert_eq!(q.validate(), Err(QuestionError::NoCorrectOption));
}

#[test]
fn multiple_correct_options_rejected() {
    let mut q = capital_question();
    q.options[1].is_correct = true;
    assert_eq!(q.validate(), Err(QuestionError::MultipleCorrectOptions { found: 2 }));
}

#[test]
fn option_count_checked_before_content() {
    // A short option list with other problems reports the count first.
    let q = Question {
        id: Uuid::new_v4(),
        title: String::new(),
        options: vec![option("", false)],
    };
    assert_eq!(q.validate(), Err(QuestionError::WrongOptionCount { found: 1 }));
}

// =============================================================
// Queries
// =============================================================

#[test]
fn correct_index_finds_marked_option() {
    let q = capital_question();
    assert_eq!(q.correct_index(), Some(0));

    let mut shuffled = capital_question();
    shuffled.options[0].is_correct = false;
    shuffled.options[2].is_correct = true;
    assert_eq!(shuffled.correct_index(), Some(2));
}

#[test]
fn correct_index_none_when_unmarked() {
    let mut q = capital_question();
    q.options[0].is_correct = false;
    assert_eq!(q.correct_index(), None);
}

// =============================================================
// Collision key
// =============================================================

#[test]
fn collision_key_normalizes() {
    assert_eq!(collision_key("Paris"), "paris");
    assert_eq!(collision_key(" paris "), "paris");
    assert_eq!(collision_key("PARIS"), "paris");
}

#[test]
fn first_duplicate_reports_colliding_text() {
    let texts = ["Paris", "London", " paris "];
    assert_eq!(
        first_duplicate(texts.iter().copied()),
        Some("paris".to_string())
    );
}

#[test]
fn first_duplicate_none_for_distinct() {
    let texts = ["Paris", "London", "Berlin", "Madrid"];
    assert_eq!(first_duplicate(texts.iter().copied()), None);
}

// =============================================================
// Error display
// =============================================================

#[test]
fn error_messages_are_user_facing() {
    assert_eq!(QuestionError::EmptyTitle.to_string(), "question needs a title");
    assert_eq!(
        QuestionError::EmptyOption { slot: 2 }.to_string(),
        "option 3 needs text"
    );
    assert_eq!(
        QuestionError::DuplicateOption { text: "Paris".to_string() }.to_string(),
        "options must be distinct: \"Paris\" appears twice"
    );
    assert_eq!(
        QuestionError::NoCorrectOption.to_string(),
        "mark one option as the correct answer"
    );
    assert_eq!(
        QuestionError::WrongOptionCount { found: 3 }.to_string(),
        "expected 4 options, found 3"
    );
}

// =============================================================
// Serde
// =============================================================

#[test]
fn question_serde_roundtrip() {
    let q = capital_question();
    let json = serde_json::to_string(&q).unwrap();
    let back: Question = serde_json::from_str(&json).unwrap();
    assert_eq!(back.id, q.id);
    assert_eq!(back.title, q.title);
    assert_eq!(back.options.len(), 4);
    assert!(back.options[0].is_correct);
    assert!(!back.options[1].is_correct);
}

#[test]
fn option_serde_uses_snake_case_fields() {
    let json = serde_json::to_string(&option("Paris", true)).unwrap();
    assert_eq!(json, "{\"text\":\"Paris\",\"is_correct\":true}");
}
