use serde::{Deserialize, Serialize};

use super::defaults;
use crate::constants::WEIGHT_SUM_TOLERANCE;
use crate::errors::ConfigurationError;

/// Weights for the four similarity components. Must be non-negative and sum to 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComponentWeights {
    pub title: f64,
    pub description: f64,
    pub outcomes: f64,
    pub credit: f64,
}

impl ComponentWeights {
    pub fn new(title: f64, description: f64, outcomes: f64, credit: f64) -> Self {
        Self {
            title,
            description,
            outcomes,
            credit,
        }
    }

    /// Weights in fixed component order: title, description, outcomes, credit.
    pub fn as_array(&self) -> [(&'static str, f64); 4] {
        [
            ("title", self.title),
            ("description", self.description),
            ("outcomes", self.outcomes),
            ("credit", self.credit),
        ]
    }

    pub fn sum(&self) -> f64 {
        self.title + self.description + self.outcomes + self.credit
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        for (component, value) in self.as_array() {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigurationError::InvalidWeight {
                    component: component.to_string(),
                    value,
                });
            }
        }
        let sum = self.sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(ConfigurationError::WeightSum { sum });
        }
        Ok(())
    }
}

impl Default for ComponentWeights {
    fn default() -> Self {
        Self {
            title: defaults::DEFAULT_TITLE_WEIGHT,
            description: defaults::DEFAULT_DESCRIPTION_WEIGHT,
            outcomes: defaults::DEFAULT_OUTCOMES_WEIGHT,
            credit: defaults::DEFAULT_CREDIT_WEIGHT,
        }
    }
}

/// Score composer configuration: component weights plus additive bonuses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Added when the external grade is pass-equivalent.
    pub grade_bonus: f64,
    /// Added when the external unit carries enrichment content.
    pub retrieval_bonus: f64,
    /// Absolute credit difference still treated as an exact match.
    pub credit_tolerance: f64,
    pub weights: ComponentWeights,
}

impl ScoringConfig {
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        self.weights.validate()?;
        for (name, value) in [
            ("grade_bonus", self.grade_bonus),
            ("retrieval_bonus", self.retrieval_bonus),
            ("credit_tolerance", self.credit_tolerance),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigurationError::InvalidBonus {
                    name: name.to_string(),
                    value,
                });
            }
        }
        Ok(())
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            weights: ComponentWeights::default(),
            grade_bonus: defaults::DEFAULT_GRADE_BONUS,
            retrieval_bonus: defaults::DEFAULT_RETRIEVAL_BONUS,
            credit_tolerance: defaults::DEFAULT_CREDIT_TOLERANCE,
        }
    }
}
