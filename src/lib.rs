// Questionnaire core: bank loading, validation and scoring
pub mod questionnaire;

// Command-line front end
pub mod cli;
pub mod config;
pub mod utils;

pub use questionnaire::{
    AnswerSheet, Answers, LoadError, MaturityBand, NotFound, Pillar, Question, QuestionBank,
    ScoreError, ScoreReport,
};
