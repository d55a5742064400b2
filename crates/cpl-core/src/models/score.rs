use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::ComponentWeights;
use crate::errors::ValidationError;

/// Normalised similarity per component, each in [0.0, 1.0].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComponentScores {
    pub title: f64,
    pub description: f64,
    pub outcomes: f64,
    pub credit: f64,
}

impl ComponentScores {
    /// Similarities in fixed component order: title, description, outcomes, credit.
    pub fn as_array(&self) -> [(&'static str, f64); 4] {
        [
            ("title", self.title),
            ("description", self.description),
            ("outcomes", self.outcomes),
            ("credit", self.credit),
        ]
    }

    /// Weighted contribution of each component, in component order.
    pub fn contributions(&self, weights: &ComponentWeights) -> [(&'static str, f64); 4] {
        let w = weights.as_array();
        let s = self.as_array();
        [
            (s[0].0, s[0].1 * w[0].1),
            (s[1].0, s[1].1 * w[1].1),
            (s[2].0, s[2].1 * w[2].1),
            (s[3].0, s[3].1 * w[3].1),
        ]
    }

    /// Weighted sum, accumulated in component order.
    pub fn weighted(&self, weights: &ComponentWeights) -> f64 {
        self.contributions(weights)
            .iter()
            .fold(0.0, |acc, (_, c)| acc + c)
    }
}

/// Condition raised while scoring that a reviewer must see.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreFlag {
    /// Fail / not competent / not yet competent. Never auto-approvable.
    NonPassingGrade,
    /// Description and outcomes barely agree: the match rests on the title.
    /// Informational only, the score is not capped.
    TitleOnlyEvidence,
}

impl ScoreFlag {
    pub fn blocks_auto_approval(self) -> bool {
        match self {
            ScoreFlag::NonPassingGrade => true,
            ScoreFlag::TitleOnlyEvidence => false,
        }
    }

    /// Whether the flag explains the confidence as a whole and leads the
    /// explanation, rather than trailing it as a `FLAG:` line.
    pub fn is_reason(self) -> bool {
        matches!(self, ScoreFlag::TitleOnlyEvidence)
    }

    pub fn message(self) -> &'static str {
        match self {
            ScoreFlag::NonPassingGrade => "grade not passing, manual review required",
            ScoreFlag::TitleOnlyEvidence => {
                "low confidence because the match is mostly name-based and lacks course-content evidence"
            }
        }
    }
}

/// Coarse bucket derived from the numeric score for reviewer scanning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceBand {
    High,
    Medium,
    Low,
}

impl ConfidenceBand {
    pub fn from_score(score: f64, high_cutoff: f64, medium_cutoff: f64) -> Self {
        if score >= high_cutoff {
            ConfidenceBand::High
        } else if score >= medium_cutoff {
            ConfidenceBand::Medium
        } else {
            ConfidenceBand::Low
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ConfidenceBand::High => "high",
            ConfidenceBand::Medium => "medium",
            ConfidenceBand::Low => "low",
        }
    }
}

impl fmt::Display for ConfidenceBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConfidenceBand {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "high" => Ok(ConfidenceBand::High),
            "medium" => Ok(ConfidenceBand::Medium),
            "low" => Ok(ConfidenceBand::Low),
            other => Err(ValidationError::UnknownVariant {
                kind: "confidence band".to_string(),
                value: other.to_string(),
            }),
        }
    }
}

/// Output of the score composer for one external/catalog pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreCard {
    pub components: ComponentScores,
    /// Weights in force when the card was produced.
    pub weights: ComponentWeights,
    /// Weighted component sum, before bonuses and clamping.
    pub base_score: f64,
    pub grade_bonus: f64,
    pub retrieval_bonus: f64,
    /// Final confidence in [0.0, 1.0].
    pub score: f64,
    pub flags: Vec<ScoreFlag>,
    /// Ordered "component: contribution" lines followed by flag lines.
    pub explanation: Vec<String>,
    /// Name of the text similarity backend.
    pub method: String,
    /// blake3 digest of the scoring inputs and configuration.
    pub fingerprint: String,
}

impl ScoreCard {
    /// Score as a rounded percentage, 0–100.
    pub fn confidence_percent(&self) -> u8 {
        (self.score.clamp(0.0, 1.0) * 100.0).round() as u8
    }

    pub fn is_auto_approvable(&self) -> bool {
        !self.flags.iter().any(|f| f.blocks_auto_approval())
    }

    /// Explanation joined into a single line for export.
    pub fn explanation_text(&self) -> String {
        self.explanation.join("; ")
    }
}
