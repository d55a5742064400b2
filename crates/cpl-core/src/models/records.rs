//! Normalised records handed over by the ingestion collaborator.
//!
//! Transcript parsing and catalog loading produce loosely typed rows (credit
//! values arrive as text or numbers, optional fields may be absent). These
//! records convert into the strongly typed units, rejecting malformed input
//! with a [`ValidationError`].

use serde::{Deserialize, Serialize};

use super::{CatalogUnit, ExternalUnit};
use crate::errors::ValidationError;

/// Credit value as it appears in source data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CreditField {
    Number(f64),
    Text(String),
}

impl CreditField {
    fn parse(&self, record: &str) -> Result<f64, ValidationError> {
        let (value, raw) = match self {
            CreditField::Number(n) => (Some(*n), n.to_string()),
            CreditField::Text(s) => (s.trim().parse::<f64>().ok(), s.clone()),
        };
        match value {
            Some(v) if v.is_finite() && v >= 0.0 => Ok(v),
            _ => Err(ValidationError::InvalidCredit {
                record: record.to_string(),
                value: raw,
            }),
        }
    }
}

/// A transcript row produced by the ingestion collaborator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExternalUnitRecord {
    pub student_id: Option<String>,
    pub institution: Option<String>,
    pub unit_code: Option<String>,
    pub title: Option<String>,
    pub grade: Option<String>,
    pub credit_points: Option<CreditField>,
    pub semester: Option<String>,
    pub description: Option<String>,
    pub learning_outcomes: Vec<String>,
}

impl ExternalUnitRecord {
    /// Convert into an [`ExternalUnit`] with a fresh identifier.
    pub fn into_unit(self) -> Result<ExternalUnit, ValidationError> {
        let code = self.unit_code.clone().unwrap_or_default();
        let record = format!("external unit '{code}'");
        let student_id = required(self.student_id, &record, "student_id")?;
        let unit_code = required(self.unit_code, &record, "unit_code")?;
        let title = required(self.title, &record, "title")?;
        let institution = present(self.institution, &record, "institution")?;
        let grade = present(self.grade, &record, "grade")?;
        let semester = present(self.semester, &record, "semester")?;
        let credit_points = self
            .credit_points
            .ok_or_else(|| missing(&record, "credit_points"))?
            .parse(&record)?;

        let unit = ExternalUnit {
            id: uuid::Uuid::new_v4().to_string(),
            student_id,
            institution,
            unit_code,
            title,
            description: self.description.unwrap_or_default(),
            learning_outcomes: self.learning_outcomes,
            grade,
            credit_points,
            semester,
            enrichment: None,
        };
        unit.validate()?;
        Ok(unit)
    }
}

/// A catalog row produced by the bulk catalog loader.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogUnitRecord {
    #[serde(alias = "unit_code")]
    pub code: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub learning_outcomes: Vec<String>,
    pub credit_points: Option<CreditField>,
    pub aqf_level: Option<String>,
    pub course: Option<String>,
}

impl CatalogUnitRecord {
    pub fn into_unit(self) -> Result<CatalogUnit, ValidationError> {
        let record = format!("catalog unit '{}'", self.code.clone().unwrap_or_default());
        let code = required(self.code, &record, "code")?;
        let title = required(self.title, &record, "title")?;
        let credit_points = self
            .credit_points
            .ok_or_else(|| missing(&record, "credit_points"))?
            .parse(&record)?;

        let unit = CatalogUnit {
            code,
            title,
            description: self.description.unwrap_or_default(),
            learning_outcomes: self.learning_outcomes,
            credit_points,
            aqf_level: self.aqf_level.unwrap_or_default(),
            course: self.course.unwrap_or_default(),
        };
        unit.validate()?;
        Ok(unit)
    }
}

fn required(value: Option<String>, record: &str, field: &str) -> Result<String, ValidationError> {
    match value.map(|v| v.trim().to_string()) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(missing(record, field)),
    }
}

/// Key must be present. An empty value is kept: transcript parsing emits ""
/// when it cannot detect a grade or term.
fn present(value: Option<String>, record: &str, field: &str) -> Result<String, ValidationError> {
    value
        .map(|v| v.trim().to_string())
        .ok_or_else(|| missing(record, field))
}

fn missing(record: &str, field: &str) -> ValidationError {
    ValidationError::MissingField {
        record: record.to_string(),
        field: field.to_string(),
    }
}
