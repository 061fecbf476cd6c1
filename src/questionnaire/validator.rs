// src/questionnaire/validator.rs
use crate::questionnaire::error::LoadError;
use crate::questionnaire::schema::{Question, OPTION_COUNT};
use std::collections::HashSet;

/// Validate a full list of question records before they become a bank
pub fn validate_questions(questions: &[Question]) -> ValidationResult {
    let mut result = ValidationResult::new();

    if questions.is_empty() {
        result.add_error(None, "Question source contains no questions");
        return result;
    }

    let mut seen_ids = HashSet::new();

    for question in questions {
        // Check ID
        if question.id.trim().is_empty() {
            result.add_error(None, "Question ID is empty");
            continue;
        }

        // Check for duplicate IDs
        if !seen_ids.insert(question.id.as_str()) {
            result.add_error(Some(&question.id), format!("Duplicate question ID: {}", question.id));
        }

        validate_pillar_prefix(question, &mut result);
        validate_text(question, &mut result);
        validate_options(question, &mut result);
        validate_frameworks(question, &mut result);
    }

    result
}

/// The leading letter of the id must name the question's pillar
fn validate_pillar_prefix(question: &Question, result: &mut ValidationResult) {
    let expected = question.pillar.id_prefix();
    if !question.id.starts_with(expected) {
        result.add_error(
            Some(&question.id),
            format!(
                "Question {} is in pillar {} but its ID does not start with '{}'",
                question.id, question.pillar, expected
            ),
        );
    }
}

fn validate_text(question: &Question, result: &mut ValidationResult) {
    if question.question.trim().is_empty() {
        result.add_error(Some(&question.id), format!("Question {} has empty text", question.id));
    }
}

/// Options form a uniform 0-5 maturity scale across the bank
fn validate_options(question: &Question, result: &mut ValidationResult) {
    if question.options.is_empty() {
        result.add_error(Some(&question.id), format!("Question {} has no options", question.id));
        return;
    }

    if question.options.len() != OPTION_COUNT {
        result.add_error(
            Some(&question.id),
            format!(
                "Question {} has {} options, expected {}",
                question.id,
                question.options.len(),
                OPTION_COUNT
            ),
        );
    }

    for (level, option) in question.options.iter().enumerate() {
        if option.trim().is_empty() {
            result.add_error(
                Some(&question.id),
                format!("Question {} has empty option text at level {}", question.id, level),
            );
        }
    }
}

/// Framework citations are opaque display strings; only cosmetic issues are flagged
fn validate_frameworks(question: &Question, result: &mut ValidationResult) {
    if question.frameworks.is_empty() {
        result.add_warning(format!("Question {} cites no frameworks", question.id));
        return;
    }

    let mut seen = HashSet::new();
    for framework in &question.frameworks {
        if !seen.insert(framework.as_str()) {
            result.add_warning(format!(
                "Question {} cites framework {} more than once",
                question.id, framework
            ));
        }
    }
}

/// A single validation failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    pub offending_id: Option<String>,
    pub message: String,
}

/// Result of bank validation containing errors and warnings
#[derive(Debug, Default)]
pub struct ValidationResult {
    pub errors: Vec<ValidationIssue>,
    pub warnings: Vec<String>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Add an error message, optionally attributed to a question id
    pub fn add_error<S: Into<String>>(&mut self, offending_id: Option<&str>, message: S) {
        self.errors.push(ValidationIssue {
            offending_id: offending_id.map(str::to_string),
            message: message.into(),
        });
    }

    pub fn add_warning<S: Into<String>>(&mut self, message: S) {
        self.warnings.push(message.into());
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Convert to a load result; the first error in source order is reported
    pub fn into_result(self) -> Result<(), LoadError> {
        match self.errors.into_iter().next() {
            Some(issue) => Err(LoadError {
                reason: issue.message,
                offending_id: issue.offending_id,
            }),
            None => Ok(()),
        }
    }

    /// Get a summary of validation issues
    pub fn summary(&self) -> String {
        let mut summary = String::new();

        if self.has_errors() {
            summary.push_str(&format!("Errors ({}):\n", self.errors.len()));
            for (i, error) in self.errors.iter().enumerate() {
                summary.push_str(&format!("  {}. {}\n", i + 1, error.message));
            }
        }

        if self.has_warnings() {
            if !summary.is_empty() {
                summary.push('\n');
            }
            summary.push_str(&format!("Warnings ({}):\n", self.warnings.len()));
            for (i, warning) in self.warnings.iter().enumerate() {
                summary.push_str(&format!("  {}. {}\n", i + 1, warning));
            }
        }

        if summary.is_empty() {
            summary.push_str("Question bank validation passed without issues.");
        }

        summary
    }
}
