// src/questionnaire/mod.rs
pub mod schema;
pub mod error;
pub mod validator;
pub mod bank;
pub mod answers;
pub mod evaluator;
pub mod report;
pub mod import_export;
pub mod cli_handler;

pub use answers::{AnswerSheet, Answers};
pub use bank::QuestionBank;
pub use error::{LoadError, NotFound, ScoreError};
pub use evaluator::{ScoreEvaluator, ScoreReport};
pub use schema::{MaturityBand, Pillar, Question, MAX_LEVEL, OPTION_COUNT};
