use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::GradeStatus;
use crate::constants::OUTCOME_SEPARATOR;
use crate::errors::ValidationError;

/// A unit taken elsewhere, as it appears on a learner's transcript: the match source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExternalUnit {
    pub id: String,
    pub student_id: String,
    pub institution: String,
    pub unit_code: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub learning_outcomes: Vec<String>,
    /// Raw result label as printed on the transcript.
    #[serde(default)]
    pub grade: String,
    pub credit_points: f64,
    #[serde(default)]
    pub semester: String,
    /// Retrieval cache. Updated in place when the unit page is fetched.
    #[serde(default)]
    pub enrichment: Option<Enrichment>,
}

/// Unit details fetched from the issuing institution's website.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enrichment {
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub outcomes: String,
    #[serde(default)]
    pub source_url: String,
    #[serde(default)]
    pub retrieval_mode: String,
    pub retrieved_at: DateTime<Utc>,
}

impl Enrichment {
    /// True when the fetch produced course-content text (a URL alone is not evidence).
    pub fn has_content(&self) -> bool {
        !self.overview.trim().is_empty() || !self.outcomes.trim().is_empty()
    }
}

impl ExternalUnit {
    pub fn grade_status(&self) -> GradeStatus {
        GradeStatus::classify(&self.grade)
    }

    pub fn has_enrichment_content(&self) -> bool {
        self.enrichment.as_ref().is_some_and(Enrichment::has_content)
    }

    /// Description used for scoring: the fetched overview when present,
    /// otherwise the transcript description.
    pub fn description_text(&self) -> &str {
        match &self.enrichment {
            Some(e) if !e.overview.trim().is_empty() => &e.overview,
            _ => &self.description,
        }
    }

    /// Outcomes used for scoring: fetched outcomes when present,
    /// otherwise the transcript outcomes joined.
    pub fn outcomes_text(&self) -> String {
        match &self.enrichment {
            Some(e) if !e.outcomes.trim().is_empty() => e.outcomes.clone(),
            _ => self.learning_outcomes.join(OUTCOME_SEPARATOR),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        let record = format!("external unit '{}'", self.unit_code);
        for (field, value) in [
            ("student_id", &self.student_id),
            ("unit_code", &self.unit_code),
            ("title", &self.title),
        ] {
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
