// src/questionnaire/report.rs
use crate::questionnaire::evaluator::ScoreReport;
use crate::questionnaire::schema::Pillar;

fn format_pillar_score(score: Option<f64>) -> String {
    match score {
        Some(value) => format!("{:.2}", value),
        None => "no data".to_string(),
    }
}

/// Prompt asking a language model for improvement tips, built from pillar means.
/// The crate never sends it anywhere.
pub fn recommendation_prompt(report: &ScoreReport) -> String {
    let mut prompt = String::from("A startup has these ESG scores (0-5 scale):\n");
    for pillar in Pillar::ALL {
        prompt.push_str(&format!(
            "{}: {}\n",
            pillar,
            format_pillar_score(report.pillar_score(pillar))
        ));
    }
    prompt.push_str(
        "Provide 2 beginner-friendly improvement tips per pillar to improve ESG maturity.",
    );
    prompt
}

/// Human-readable report for terminal output
pub fn render_report(report: &ScoreReport) -> String {
    let mut out = String::new();

    out.push_str("\n=== ESG READINESS SCORE ===\n");
    out.push_str(&format!("GreenScore: {}/100\n", report.green_score));
    out.push_str(&format!("Overall: {:.2} / 5 ({})\n", report.overall, report.band));

    out.push_str("\n=== PILLARS ===\n");
    for pillar in Pillar::ALL {
        let band = report
            .pillar_band(pillar)
            .map(|b| b.to_string())
            .unwrap_or_else(|| "-".to_string());
        out.push_str(&format!(
            "{:<14} | {:>7} | {}\n",
            pillar.as_str(),
            format_pillar_score(report.pillar_score(pillar)),
            band
        ));
    }

    out
}
