// src/questionnaire/import_export.rs
use crate::questionnaire::answers::Answers;
use crate::questionnaire::evaluator::ScoreReport;
use crate::questionnaire::schema::{MaturityBand, Pillar};
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;
use tracing::info;

/// Report as written to disk
#[derive(Debug, Serialize)]
pub struct ExportedReport<'a> {
    pub generated_at: DateTime<Utc>,
    #[serde(flatten)]
    pub report: &'a ScoreReport,
    pub pillar_bands: BTreeMap<Pillar, Option<MaturityBand>>,
}

impl<'a> ExportedReport<'a> {
    pub fn new(report: &'a ScoreReport, generated_at: DateTime<Utc>) -> Self {
        let pillar_bands = Pillar::ALL
            .iter()
            .map(|pillar| (*pillar, report.pillar_band(*pillar)))
            .collect();

        Self {
            generated_at,
            report,
            pillar_bands,
        }
    }
}

/// Import an answer set from a JSON object of question id -> option index
pub fn import_answers_from_file(file_path: &Path) -> Result<Answers> {
    info!("Importing answers from file: {}", file_path.display());

    let file = File::open(file_path)
        .context(format!("Failed to open file: {}", file_path.display()))?;

    let mut reader = BufReader::new(file);
    let mut json_str = String::new();
    reader
        .read_to_string(&mut json_str)
        .context(format!("Failed to read file: {}", file_path.display()))?;

    let answers: Answers =
        serde_json::from_str(&json_str).context("Failed to parse answers JSON")?;

    info!("Imported {} answers", answers.len());
    Ok(answers)
}

/// Export a score report to a JSON file
pub fn export_report_to_file(report: &ScoreReport, file_path: &Path) -> Result<()> {
    info!("Exporting score report to file: {}", file_path.display());

    let exported = ExportedReport::new(report, Utc::now());
    let json = serde_json::to_string_pretty(&exported)
        .context("Failed to serialize score report to JSON")?;

    let file = File::create(file_path)
        .context(format!("Failed to create file: {}", file_path.display()))?;

    let mut writer = BufWriter::new(file);
    writer
        .write_all(json.as_bytes())
        .context(format!("Failed to write to file: {}", file_path.display()))?;
    writer
        .flush()
        .context(format!("Failed to write to file: {}", file_path.display()))?;

    info!("Score report exported successfully to: {}", file_path.display());
    Ok(())
}
