// src/questionnaire/bank.rs
use crate::questionnaire::error::{LoadError, NotFound};
use crate::questionnaire::schema::{Pillar, Question};
use crate::questionnaire::validator::validate_questions;
use serde_json::Value;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

/// Fixture shipped with the crate
const BUILTIN_QUESTIONS: &str = include_str!("../../data/esg_questions.json");

/// Immutable, ordered collection of questions.
///
/// Built once through one of the load functions and only read afterwards, so a
/// single instance can be shared by reference (or `Arc`) between any number
/// of respondent sessions.
#[derive(Debug, Clone)]
pub struct QuestionBank {
    questions: Vec<Question>,
    /// id -> position in `questions`
    index: HashMap<String, usize>,
    /// pillar -> positions in `questions`, in source order
    pillar_index: HashMap<Pillar, Vec<usize>>,
}

impl QuestionBank {
    /// Build a bank from decoded records, validating every record first
    pub fn load(questions: Vec<Question>) -> Result<Self, LoadError> {
        let validation = validate_questions(&questions);
        for warning in &validation.warnings {
            warn!("{}", warning);
        }
        validation.into_result()?;

        let mut index = HashMap::with_capacity(questions.len());
        let mut pillar_index: HashMap<Pillar, Vec<usize>> = HashMap::new();
        for (position, question) in questions.iter().enumerate() {
            index.insert(question.id.clone(), position);
            pillar_index.entry(question.pillar).or_default().push(position);
        }

        debug!("Question bank loaded with {} questions", questions.len());

        Ok(Self {
            questions,
            index,
            pillar_index,
        })
    }

    /// Decode a JSON array of question records and load it
    pub fn from_json_str(json: &str) -> Result<Self, LoadError> {
        Self::load(decode_questions(json)?)
    }

    /// Read and load a question file
    pub fn from_path(path: &Path) -> Result<Self, LoadError> {
        info!("Loading question bank from file: {}", path.display());

        let json = fs::read_to_string(path).map_err(|e| {
            LoadError::new(format!("Failed to read file {}: {}", path.display(), e))
        })?;

        let bank = Self::from_json_str(&json)?;
        info!("Question bank loaded: {} questions from {}", bank.len(), path.display());
        Ok(bank)
    }

    /// The 15-question ESG readiness bank embedded in the crate
    pub fn builtin() -> Result<Self, LoadError> {
        Self::from_json_str(BUILTIN_QUESTIONS)
    }

    /// Raw JSON of the embedded bank
    pub fn builtin_source() -> &'static str {
        BUILTIN_QUESTIONS
    }

    /// All questions in source order
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Question> {
        self.questions.iter()
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Exact, case-sensitive lookup by id
    pub fn by_id(&self, id: &str) -> Result<&Question, NotFound> {
        self.index
            .get(id)
            .map(|&position| &self.questions[position])
            .ok_or_else(|| NotFound { id: id.to_string() })
    }

    /// Questions of one pillar in source order; empty when none match
    pub fn by_pillar(&self, pillar: Pillar) -> Vec<&Question> {
        self.pillar_index
            .get(&pillar)
            .map(|positions| positions.iter().map(|&p| &self.questions[p]).collect())
            .unwrap_or_default()
    }

    /// Number of questions per pillar, zero for pillars with no questions
    pub fn pillar_counts(&self) -> Vec<(Pillar, usize)> {
        Pillar::ALL
            .iter()
            .map(|pillar| {
                let count = self.pillar_index.get(pillar).map_or(0, Vec::len);
                (*pillar, count)
            })
            .collect()
    }
}

/// Decode a JSON array into question records without validating them
pub fn decode_questions(json: &str) -> Result<Vec<Question>, LoadError> {
    let records: Vec<Value> = serde_json::from_str(json)
        .map_err(|e| LoadError::new(format!("Failed to parse question JSON: {}", e)))?;

    let mut questions = Vec::with_capacity(records.len());
    for (position, record) in records.into_iter().enumerate() {
        // Keep the id around so decode failures can name the record
        let id = record.get("id").and_then(Value::as_str).map(str::to_string);

        let question: Question = serde_json::from_value(record).map_err(|e| {
            let reason = format!("Invalid question record at position {}: {}", position, e);
            match &id {
                Some(id) => LoadError::for_question(reason, id.clone()),
                None => LoadError::new(reason),
            }
        })?;
        questions.push(question);
    }

    Ok(questions)
}

impl<'a> IntoIterator for &'a QuestionBank {
    type Item = &'a Question;
    type IntoIter = std::slice::Iter<'a, Question>;

    fn into_iter(self) -> Self::IntoIter {
        self.questions.iter()
    }
}
