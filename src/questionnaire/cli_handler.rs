// src/questionnaire/cli_handler.rs
use crate::cli::Commands;
use crate::config::AppConfig;
use crate::questionnaire::bank::{decode_questions, QuestionBank};
use crate::questionnaire::import_export::{export_report_to_file, import_answers_from_file};
use crate::questionnaire::report::{recommendation_prompt, render_report};
use crate::questionnaire::schema::{Pillar, Question};
use crate::questionnaire::validator::{validate_questions, ValidationResult};
use crate::utils::truncate_string;
use anyhow::{anyhow, bail, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Load the bank from an explicit path, the configured path, or the embedded fixture
pub fn load_bank(path: Option<&Path>) -> Result<QuestionBank> {
    match path {
        // LoadError already names the path and the offending question
        Some(path) => Ok(QuestionBank::from_path(path)?),
        None => {
            info!("Using embedded question bank");
            QuestionBank::builtin().context("Embedded question bank is invalid")
        }
    }
}

/// Decode a question source and run every load-time check on it, collecting
/// all issues instead of stopping at the first
pub fn validate_source(path: Option<&Path>) -> Result<(Vec<Question>, ValidationResult)> {
    let questions = match path {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("Failed to read file: {}", path.display()))?;
            decode_questions(&json)?
        }
        None => decode_questions(QuestionBank::builtin_source())?,
    };

    let validation = validate_questions(&questions);
    Ok((questions, validation))
}

/// Format a question for the listing table
fn format_question_for_display(question: &Question) -> String {
    format!(
        "{:<4} | {:<14} | {}",
        question.id,
        question.pillar.as_str(),
        truncate_string(&question.question, 60)
    )
}

fn print_question(question: &Question) {
    println!("\n=== QUESTION {} ===", question.id);
    println!("Pillar: {}", question.pillar);
    println!("Question: {}", question.question);
    if question.frameworks.is_empty() {
        println!("Frameworks: -");
    } else {
        println!("Frameworks: {}", question.frameworks.join(", "));
    }

    println!("\n=== OPTIONS ({}) ===", question.options.len());
    for (level, option) in question.options.iter().enumerate() {
        println!("  {}. {}", level, option);
    }
}

/// Execute a command from the CLI.
///
/// `questions` is the global `--questions` flag; it wins over the configured path.
pub fn execute_command(command: Commands, questions: Option<PathBuf>, config: &AppConfig) -> Result<()> {
    let bank_path = questions.or_else(|| config.questions_path.clone());

    match command {
        Commands::Validate { file } => {
            let path = file.or(bank_path);
            let (questions, validation) = validate_source(path.as_deref())?;

            println!("Read {} questions:", questions.len());
            for pillar in Pillar::ALL {
                let count = questions.iter().filter(|q| q.pillar == pillar).count();
                println!("  {:<14} {}", pillar.as_str(), count);
            }
            println!("\n{}", validation.summary());

            if validation.has_errors() {
                bail!("Question bank validation failed with {} errors", validation.errors.len());
            }
        }

        Commands::List { pillar } => {
            let bank = load_bank(bank_path.as_deref())?;

            let questions: Vec<&Question> = match pillar {
                Some(name) => {
                    let pillar: Pillar = name.parse().map_err(|e: String| anyhow!(e))?;
                    bank.by_pillar(pillar)
                }
                None => bank.iter().collect(),
            };

            println!("Found {} questions:", questions.len());
            println!("{:<4} | {:<14} | {}", "ID", "Pillar", "Question");
            println!("{:-<4}-+-{:-<14}-+-{:-<60}", "", "", "");
            for question in questions {
                println!("{}", format_question_for_display(question));
            }
        }

        Commands::Show { id } => {
            let bank = load_bank(bank_path.as_deref())?;
            let question = bank.by_id(&id)?;
            print_question(question);
        }

        Commands::Score { answers, export } => {
            let bank = load_bank(bank_path.as_deref())?;
            let answers = import_answers_from_file(&answers)?;
            let report = bank.score(&answers)?;

            print!("{}", render_report(&report));

            if let Some(export_path) = export {
                export_report_to_file(&report, &export_path)?;
                println!("\nReport exported to: {}", export_path.display());
            }
        }

        Commands::Prompt { answers } => {
            let bank = load_bank(bank_path.as_deref())?;
            let answers = import_answers_from_file(&answers)?;
            let report = bank.score(&answers)?;

            println!("{}", recommendation_prompt(&report));
        }
    }

    Ok(())
}
