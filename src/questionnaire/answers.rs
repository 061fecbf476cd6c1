// src/questionnaire/answers.rs
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Answers being collected during a respondent session
#[derive(Debug, Clone, Default)]
pub struct AnswerSheet {
    selections: BTreeMap<String, usize>,
}

impl AnswerSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the selected option index for a question; re-selecting overwrites.
    /// Indices are checked against the bank only when scoring.
    pub fn select<S: Into<String>>(&mut self, question_id: S, index: usize) -> &mut Self {
        self.selections.insert(question_id.into(), index);
        self
    }

    /// Remove a selection, returning the previous index if there was one
    pub fn clear(&mut self, question_id: &str) -> Option<usize> {
        self.selections.remove(question_id)
    }

    pub fn get(&self, question_id: &str) -> Option<usize> {
        self.selections.get(question_id).copied()
    }

    pub fn len(&self) -> usize {
        self.selections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selections.is_empty()
    }

    /// Finish the session; the returned answers can no longer change
    pub fn freeze(self) -> Answers {
        Answers {
            selections: self.selections,
        }
    }
}

/// A frozen answer set: question id -> selected option index
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Answers {
    selections: BTreeMap<String, usize>,
}

impl Answers {
    pub fn get(&self, question_id: &str) -> Option<usize> {
        self.selections.get(question_id).copied()
    }

    pub fn contains(&self, question_id: &str) -> bool {
        self.selections.contains_key(question_id)
    }

    /// Selections ordered by question id
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.selections.iter().map(|(id, index)| (id.as_str(), *index))
    }

    pub fn len(&self) -> usize {
        self.selections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selections.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, usize)> for Answers {
    fn from_iter<T: IntoIterator<Item = (S, usize)>>(iter: T) -> Self {
        Self {
            selections: iter.into_iter().map(|(id, index)| (id.into(), index)).collect(),
        }
    }
}
