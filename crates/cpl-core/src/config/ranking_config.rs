use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::ConfigurationError;

/// Recommendation ranker configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankingConfig {
    /// Results scoring below this are dropped.
    pub min_score: f64,
    /// When false the best candidate is kept even if it falls below `min_score`.
    /// When true the floor is strict and the result may be empty.
    pub enforce_floor: bool,
    /// Keep at most this many results per external unit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_k: Option<usize>,
    /// Scores at or above this are banded High.
    pub high_cutoff: f64,
    /// Scores at or above this (and below `high_cutoff`) are banded Medium.
    pub medium_cutoff: f64,
}

impl RankingConfig {
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        let in_unit = |v: f64| v.is_finite() && (0.0..=1.0).contains(&v);
        if !in_unit(self.min_score) {
            return Err(invalid("min_score", format!("{} is outside [0, 1]", self.min_score)));
        }
        if !in_unit(self.high_cutoff) || !in_unit(self.medium_cutoff) {
            return Err(invalid("cutoffs", "band cutoffs must lie in [0, 1]".to_string()));
        }
        if self.medium_cutoff > self.high_cutoff {
            return Err(invalid(
                "cutoffs",
                format!(
                    "medium_cutoff {} exceeds high_cutoff {}",
                    self.medium_cutoff, self.high_cutoff
                ),
            ));
        }
        if self.top_k == Some(0) {
            return Err(invalid("top_k", "must be at least 1 when set".to_string()));
        }
        Ok(())
    }
}

fn invalid(field: &str, reason: String) -> ConfigurationError {
    ConfigurationError::InvalidRanking {
        field: field.to_string(),
        reason,
    }
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            min_score: defaults::DEFAULT_MIN_SCORE,
            enforce_floor: defaults::DEFAULT_ENFORCE_FLOOR,
            top_k: None,
            high_cutoff: defaults::DEFAULT_HIGH_CUTOFF,
            medium_cutoff: defaults::DEFAULT_MEDIUM_CUTOFF,
        }
    }
}
