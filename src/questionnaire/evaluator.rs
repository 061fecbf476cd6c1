// src/questionnaire/evaluator.rs
use crate::questionnaire::answers::Answers;
use crate::questionnaire::bank::QuestionBank;
use crate::questionnaire::error::ScoreError;
use crate::questionnaire::schema::{MaturityBand, Pillar, MAX_LEVEL};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// Outcome of scoring one respondent's answers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreReport {
    /// Mean selected level across all questions (0-5)
    pub overall: f64,
    /// Band of the overall mean
    pub band: MaturityBand,
    /// Mean selected level per pillar; `None` when the pillar has no questions
    pub per_pillar: BTreeMap<Pillar, Option<f64>>,
    /// Headline 0-100 score: total selected levels as a share of the maximum,
    /// rounded half to even
    pub green_score: u32,
}

impl ScoreReport {
    /// Mean for a pillar, `None` when there was no data
    pub fn pillar_score(&self, pillar: Pillar) -> Option<f64> {
        self.per_pillar.get(&pillar).copied().flatten()
    }

    /// Band of a single pillar's mean
    pub fn pillar_band(&self, pillar: Pillar) -> Option<MaturityBand> {
        self.pillar_score(pillar).map(MaturityBand::from_score)
    }
}

/// Scores answer sets against a bank.
///
/// Every question weighs the same in the overall mean, so pillars with more
/// questions carry more weight. Pillar-equal weighting would be a different
/// policy and is not offered here.
pub struct ScoreEvaluator<'a> {
    bank: &'a QuestionBank,
}

impl<'a> ScoreEvaluator<'a> {
    pub fn new(bank: &'a QuestionBank) -> Self {
        Self { bank }
    }

    /// Score a frozen answer set. Pure: same inputs, same report.
    pub fn evaluate(&self, answers: &Answers) -> Result<ScoreReport, ScoreError> {
        self.check_coverage(answers)?;

        let mut totals: BTreeMap<Pillar, (usize, usize)> = BTreeMap::new();
        let mut overall_sum = 0usize;

        for question in self.bank.iter() {
            // Coverage was checked above
            let index = answers.get(&question.id).unwrap_or_default();
            if index > question.max_level() {
                return Err(ScoreError::InvalidOptionIndex {
                    question_id: question.id.clone(),
                    index,
                });
            }

            let entry = totals.entry(question.pillar).or_insert((0, 0));
            entry.0 += index;
            entry.1 += 1;
            overall_sum += index;
        }

        let per_pillar = Pillar::ALL
            .iter()
            .map(|pillar| {
                let mean = totals
                    .get(pillar)
                    .filter(|(_, count)| *count > 0)
                    .map(|(sum, count)| *sum as f64 / *count as f64);
                (*pillar, mean)
            })
            .collect();

        // A loaded bank always has at least one question
        let question_count = self.bank.len().max(1);
        let overall = overall_sum as f64 / question_count as f64;
        let band = MaturityBand::from_score(overall);
        let green_score = green_score(overall_sum, question_count);

        debug!("Scored {} answers: overall {:.2} ({})", answers.len(), overall, band);

        Ok(ScoreReport {
            overall,
            band,
            per_pillar,
            green_score,
        })
    }

    /// Every bank question answered, nothing answered that the bank lacks
    fn check_coverage(&self, answers: &Answers) -> Result<(), ScoreError> {
        let missing_ids: Vec<String> = self
            .bank
            .iter()
            .filter(|q| !answers.contains(&q.id))
            .map(|q| q.id.clone())
            .collect();

        // Answers iterate in id order, so extras come out sorted
        let extra_ids: Vec<String> = answers
            .iter()
            .filter(|(id, _)| !self.bank.contains(id))
            .map(|(id, _)| id.to_string())
            .collect();

        if missing_ids.is_empty() && extra_ids.is_empty() {
            return Ok(());
        }

        Err(ScoreError::IncompleteAnswers {
            missing_ids,
            extra_ids,
        })
    }
}

/// Integer division keeps exact halves exact, so ties round to even
fn green_score(level_sum: usize, question_count: usize) -> u32 {
    let share = (level_sum * 100) as f64 / (MAX_LEVEL * question_count) as f64;
    share.round_ties_even() as u32
}

impl QuestionBank {
    /// Score answers with equal per-question weighting
    pub fn score(&self, answers: &Answers) -> Result<ScoreReport, ScoreError> {
        ScoreEvaluator::new(self).evaluate(answers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::questionnaire::schema::Question;

    fn uniform_answers(bank: &QuestionBank, level: usize) -> Answers {
        bank.iter().map(|q| (q.id.clone(), level)).collect()
    }

    fn worked_example() -> Answers {
        let mut answers: Vec<(String, usize)> = vec![
            ("E1".to_string(), 2),
            ("E2".to_string(), 3),
            ("E3".to_string(), 1),
            ("E4".to_string(), 4),
            ("E5".to_string(), 0),
        ];
        for i in 1..=5 {
            answers.push((format!("S{}", i), 3));
            answers.push((format!("G{}", i), 2));
        }
        answers.into_iter().collect()
    }

    #[test]
    fn test_all_top_level_is_leading() {
        let bank = QuestionBank::builtin().unwrap();
        let report = bank.score(&uniform_answers(&bank, 5)).unwrap();
        assert_eq!(report.overall, 5.0);
        assert_eq!(report.band, MaturityBand::Leading);
        assert_eq!(report.green_score, 100);
    }

    #[test]
    fn test_all_zero_is_nascent() {
        let bank = QuestionBank::builtin().unwrap();
        let report = bank.score(&uniform_answers(&bank, 0)).unwrap();
        assert_eq!(report.overall, 0.0);
        assert_eq!(report.band, MaturityBand::Nascent);
        assert_eq!(report.green_score, 0);
    }

    #[test]
    fn test_worked_example() {
        let bank = QuestionBank::builtin().unwrap();
        let report = bank.score(&worked_example()).unwrap();

        assert_eq!(report.pillar_score(Pillar::Environmental), Some(2.0));
        assert_eq!(report.pillar_score(Pillar::Social), Some(3.0));
        assert_eq!(report.pillar_score(Pillar::Governance), Some(2.0));
        assert_eq!(report.pillar_band(Pillar::Environmental), Some(MaturityBand::Defined));
        assert_eq!(report.pillar_band(Pillar::Social), Some(MaturityBand::Managed));
        assert!((report.overall - 35.0 / 15.0).abs() < 1e-9);
        assert_eq!(report.band, MaturityBand::Defined);
        assert_eq!(report.green_score, 47);
    }

    #[test]
    fn test_missing_and_extra_ids() {
        let bank = QuestionBank::builtin().unwrap();
        let mut answers: Vec<(String, usize)> = bank
            .iter()
            .filter(|q| q.id != "S3")
            .map(|q| (q.id.clone(), 1))
            .collect();
        answers.push(("X2".to_string(), 1));
        answers.push(("X1".to_string(), 1));

        let err = bank.score(&answers.into_iter().collect::<Answers>()).unwrap_err();
        assert_eq!(
            err,
            ScoreError::IncompleteAnswers {
                missing_ids: vec!["S3".to_string()],
                extra_ids: vec!["X1".to_string(), "X2".to_string()],
            }
        );
    }

    #[test]
    fn test_index_out_of_range() {
        let bank = QuestionBank::builtin().unwrap();
        let answers: Answers = bank
            .iter()
            .map(|q| (q.id.clone(), if q.id == "G4" { 6 } else { 2 }))
            .collect();

        let err = bank.score(&answers).unwrap_err();
        assert_eq!(
            err,
            ScoreError::InvalidOptionIndex {
                question_id: "G4".to_string(),
                index: 6,
            }
        );
    }

    #[test]
    fn test_coverage_is_checked_before_indices() {
        let bank = QuestionBank::builtin().unwrap();
        let answers: Answers = vec![("E1", 9)].into_iter().collect();
        assert!(matches!(
            bank.score(&answers),
            Err(ScoreError::IncompleteAnswers { .. })
        ));
    }

    #[test]
    fn test_pillar_without_questions_has_no_data() {
        let questions: Vec<Question> = (1..=2)
            .map(|i| Question {
                id: format!("E{}", i),
                pillar: Pillar::Environmental,
                question: "Prompt".to_string(),
                frameworks: vec!["GRI 305".to_string()],
                options: (0..6).map(|l| format!("Level {}", l)).collect(),
            })
            .collect();
        let bank = QuestionBank::load(questions).unwrap();
        let answers: Answers = vec![("E1", 1), ("E2", 4)].into_iter().collect();

        let report = bank.score(&answers).unwrap();
        assert_eq!(report.pillar_score(Pillar::Environmental), Some(2.5));
        assert_eq!(report.per_pillar.get(&Pillar::Social), Some(&None));
        assert_eq!(report.pillar_band(Pillar::Governance), None);
        assert_eq!(report.overall, 2.5);
    }

    #[test]
    fn test_overall_weighs_questions_not_pillars() {
        let mut questions = Vec::new();
        for (id, pillar) in [
            ("E1", Pillar::Environmental),
            ("E2", Pillar::Environmental),
            ("E3", Pillar::Environmental),
            ("S1", Pillar::Social),
        ] {
            questions.push(Question {
                id: id.to_string(),
                pillar,
                question: "Prompt".to_string(),
                frameworks: Vec::new(),
                options: (0..6).map(|l| format!("Level {}", l)).collect(),
            });
        }
        let bank = QuestionBank::load(questions).unwrap();
        let answers: Answers = vec![("E1", 4), ("E2", 4), ("E3", 4), ("S1", 0)]
            .into_iter()
            .collect();

        let report = bank.score(&answers).unwrap();
        // Pillar-equal weighting would give 2.0
        assert_eq!(report.overall, 3.0);
        assert_eq!(report.band, MaturityBand::Managed);
    }

    #[test]
    fn test_green_score_rounds_half_to_even() {
        // 8 questions: maximum total is 40, so each level point is 2.5
        assert_eq!(green_score(1, 8), 2);
        assert_eq!(green_score(3, 8), 8);
        assert_eq!(green_score(5, 8), 12);
        assert_eq!(green_score(35, 15), 47);
        assert_eq!(green_score(40, 8), 100);
    }

    #[test]
    fn test_report_green_score_on_small_bank() {
        let questions: Vec<Question> = (1..=8)
            .map(|i| Question {
                id: format!("S{}", i),
                pillar: Pillar::Social,
                question: "Prompt".to_string(),
                frameworks: vec!["GRI 405".to_string()],
                options: (0..6).map(|l| format!("Level {}", l)).collect(),
            })
            .collect();
        let bank = QuestionBank::load(questions).unwrap();
        let answers: Answers = bank
            .iter()
            .map(|q| (q.id.clone(), if q.id == "S1" { 1 } else { 0 }))
            .collect();

        let report = bank.score(&answers).unwrap();
        assert_eq!(report.overall, 0.125);
        assert_eq!(report.green_score, 2);
    }
}
