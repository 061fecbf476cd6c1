// src/questionnaire/error.rs
use thiserror::Error;

/// The question source is malformed or inconsistent. No bank is produced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Failed to load question bank: {reason}{}", offending_suffix(.offending_id))]
pub struct LoadError {
    pub reason: String,
    /// Id of the record that caused the failure, when attributable to one
    pub offending_id: Option<String>,
}

impl LoadError {
    pub fn new<S: Into<String>>(reason: S) -> Self {
        Self {
            reason: reason.into(),
            offending_id: None,
        }
    }

    pub fn for_question<S: Into<String>, I: Into<String>>(reason: S, id: I) -> Self {
        Self {
            reason: reason.into(),
            offending_id: Some(id.into()),
        }
    }
}

fn offending_suffix(id: &Option<String>) -> String {
    match id {
        Some(id) => format!(" (question {})", id),
        None => String::new(),
    }
}

/// Lookup by id found no question
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Question not found: {id}")]
pub struct NotFound {
    pub id: String,
}

/// The respondent's answers cannot be scored against the bank
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScoreError {
    #[error("Incomplete answers: missing [{}], unknown [{}]", .missing_ids.join(", "), .extra_ids.join(", "))]
    IncompleteAnswers {
        missing_ids: Vec<String>,
        extra_ids: Vec<String>,
    },

    #[error("Invalid option index {index} for question {question_id}")]
    InvalidOptionIndex { question_id: String, index: usize },
}
