use serde::{Deserialize, Serialize};

use crate::constants::OUTCOME_SEPARATOR;
use crate::errors::ValidationError;

/// An institution's official unit definition: the match target.
///
/// Reference data. Loaded in bulk (upsert by `code`) and never mutated by scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogUnit {
    pub code: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub learning_outcomes: Vec<String>,
    pub credit_points: f64,
    /// Course level (AQF level in the source catalog).
    #[serde(default)]
    pub aqf_level: String,
    /// Qualification the unit belongs to, e.g. `BIT`.
    #[serde(default)]
    pub course: String,
}

impl CatalogUnit {
    /// Learning outcomes joined into one comparable text.
    pub fn outcomes_text(&self) -> String {
        self.learning_outcomes.join(OUTCOME_SEPARATOR)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        let record = format!("catalog unit '{}'", self.code);
        for (field, value) in [("code", &self.code), ("title", &self.title)] {
            if value.trim().is_empty() {
                return Err(ValidationError::MissingField {
                    record,
                    field: field.to_string(),
                });
            }
        }
        if !self.credit_points.is_finite() || self.credit_points < 0.0 {
            return Err(ValidationError::InvalidCredit {
                record,
                value: self.credit_points.to_string(),
            });
        }
        Ok(())
    }
}
