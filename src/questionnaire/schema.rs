// src/questionnaire/schema.rs
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of answer options every question must carry (maturity levels 0..=5)
pub const OPTION_COUNT: usize = 6;

/// Highest selectable maturity level
pub const MAX_LEVEL: usize = OPTION_COUNT - 1;

/// The three top-level ESG categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Pillar {
    Environmental,
    Social,
    Governance,
}

impl Pillar {
    /// All pillars in reporting order
    pub const ALL: [Pillar; 3] = [Pillar::Environmental, Pillar::Social, Pillar::Governance];

    /// Id prefix letter used by questions of this pillar
    pub fn id_prefix(&self) -> char {
        match self {
            Pillar::Environmental => 'E',
            Pillar::Social => 'S',
            Pillar::Governance => 'G',
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Pillar::Environmental => "Environmental",
            Pillar::Social => "Social",
            Pillar::Governance => "Governance",
        }
    }
}

impl fmt::Display for Pillar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Pillar {
    type Err = String;

    /// Case-insensitive; also accepts the single-letter prefix ("E", "s", ...)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "environmental" | "e" => Ok(Pillar::Environmental),
            "social" | "s" => Ok(Pillar::Social),
            "governance" | "g" => Ok(Pillar::Governance),
            other => Err(format!("unknown pillar: {}", other)),
        }
    }
}

/// A single questionnaire item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Question {
    /// Short code unique across the bank, prefixed by the pillar letter
    pub id: String,
    /// Pillar the question belongs to
    pub pillar: Pillar,
    /// Prompt text shown to the respondent
    pub question: String,
    /// Reporting framework citations, display only
    pub frameworks: Vec<String>,
    /// Answer options ordered by increasing maturity; index 0 is "no practice"
    pub options: Vec<String>,
}

impl Question {
    /// Highest valid option index for this question
    pub fn max_level(&self) -> usize {
        self.options.len().saturating_sub(1)
    }
}

/// Named range of overall maturity used for human-readable reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MaturityBand {
    Nascent,
    Developing,
    Defined,
    Managed,
    Optimizing,
    Leading,
}

impl MaturityBand {
    /// Map a mean on the 0-5 scale to its band.
    ///
    /// Intervals are inclusive-lower, exclusive-upper: [0,1) Nascent, [1,2)
    /// Developing, [2,3) Defined, [3,4) Managed, [4,5) Optimizing. Only an
    /// exact 5 is Leading. Values outside the scale clamp to the nearest end.
    pub fn from_score(score: f64) -> Self {
        if score >= MAX_LEVEL as f64 {
            MaturityBand::Leading
        } else if score >= 4.0 {
            MaturityBand::Optimizing
        } else if score >= 3.0 {
            MaturityBand::Managed
        } else if score >= 2.0 {
            MaturityBand::Defined
        } else if score >= 1.0 {
            MaturityBand::Developing
        } else {
            MaturityBand::Nascent
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MaturityBand::Nascent => "Nascent",
            MaturityBand::Developing => "Developing",
            MaturityBand::Defined => "Defined",
            MaturityBand::Managed => "Managed",
            MaturityBand::Optimizing => "Optimizing",
            MaturityBand::Leading => "Leading",
        }
    }
}

impl fmt::Display for MaturityBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_boundaries() {
        assert_eq!(MaturityBand::from_score(0.0), MaturityBand::Nascent);
        assert_eq!(MaturityBand::from_score(0.999), MaturityBand::Nascent);
        assert_eq!(MaturityBand::from_score(1.0), MaturityBand::Developing);
        assert_eq!(MaturityBand::from_score(2.0), MaturityBand::Defined);
        assert_eq!(MaturityBand::from_score(35.0 / 15.0), MaturityBand::Defined);
        assert_eq!(MaturityBand::from_score(3.0), MaturityBand::Managed);
        assert_eq!(MaturityBand::from_score(4.0), MaturityBand::Optimizing);
        assert_eq!(MaturityBand::from_score(4.999), MaturityBand::Optimizing);
        assert_eq!(MaturityBand::from_score(5.0), MaturityBand::Leading);
    }

    #[test]
    fn test_pillar_parsing() {
        assert_eq!("Environmental".parse::<Pillar>(), Ok(Pillar::Environmental));
        assert_eq!("social".parse::<Pillar>(), Ok(Pillar::Social));
        assert_eq!("G".parse::<Pillar>(), Ok(Pillar::Governance));
        assert!("Economic".parse::<Pillar>().is_err());
    }

    #[test]
    fn test_pillar_serde_uses_exact_names() {
        let json = serde_json::to_string(&Pillar::Governance).unwrap();
        assert_eq!(json, "\"Governance\"");
        assert!(serde_json::from_str::<Pillar>("\"governance\"").is_err());
    }

    #[test]
    fn test_question_rejects_unknown_fields() {
        let json = r#"{"id":"E1","pillar":"Environmental","question":"q","frameworks":[],
            "options":["a","b","c","d","e","f"],"weight":2}"#;
        assert!(serde_json::from_str::<Question>(json).is_err());
    }
}
