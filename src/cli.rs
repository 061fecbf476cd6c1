// src/cli.rs
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "esg-readiness")]
#[command(about = "ESG readiness questionnaire CLI", long_about = None)]
pub struct Cli {
    /// Question file to use instead of the embedded bank
    #[arg(long, global = true)]
    pub questions: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Load and validate a question file
    Validate {
        /// Question file (defaults to the configured or embedded bank)
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// List questions
    List {
        /// Only show one pillar (Environmental, Social, Governance or E/S/G)
        #[arg(short, long)]
        pillar: Option<String>,
    },

    /// Show a question with its frameworks and options
    Show {
        /// Question ID (e.g. "E1")
        #[arg(short, long)]
        id: String,
    },

    /// Score an answers file
    Score {
        /// JSON object mapping question IDs to option indices
        #[arg(short, long)]
        answers: PathBuf,

        /// Export the report to a JSON file
        #[arg(long)]
        export: Option<PathBuf>,
    },

    /// Print the improvement-tips prompt for an answers file
    Prompt {
        /// JSON object mapping question IDs to option indices
        #[arg(short, long)]
        answers: PathBuf,
    },
}
