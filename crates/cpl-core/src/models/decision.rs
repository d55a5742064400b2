use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

/// Reviewer action recorded against a suggestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionStatus {
    Approved,
    Rejected,
    NeedsReview,
    Override,
}

impl DecisionStatus {
    pub const ALL: [DecisionStatus; 4] = [
        DecisionStatus::Approved,
        DecisionStatus::Rejected,
        DecisionStatus::NeedsReview,
        DecisionStatus::Override,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            DecisionStatus::Approved => "approved",
            DecisionStatus::Rejected => "rejected",
            DecisionStatus::NeedsReview => "needs_review",
            DecisionStatus::Override => "override",
        }
    }

    /// Rejections and overrides must carry reviewer rationale.
    pub fn requires_rationale(self) -> bool {
        matches!(self, DecisionStatus::Rejected | DecisionStatus::Override)
    }
}

impl fmt::Display for DecisionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DecisionStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DecisionStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| ValidationError::UnknownVariant {
                kind: "decision status".to_string(),
                value: s.to_string(),
            })
    }
}

/// An immutable audit event: one reviewer action on one suggestion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Decision {
    pub id: String,
    pub suggestion_id: String,
    pub status: DecisionStatus,
    #[serde(default)]
    pub rationale: String,
    #[serde(default)]
    pub reviewer: String,
    /// Catalog unit granted instead of the suggested one (override only).
    #[serde(default)]
    pub override_catalog_code: Option<String>,
    /// Assigned by the repository on append; strictly increasing per suggestion.
    pub decided_at: DateTime<Utc>,
    /// Per-suggestion logical clock assigned on append, starting at 1.
    #[serde(default)]
    pub sequence: u64,
}

impl Decision {
    pub fn new(suggestion_id: &str, status: DecisionStatus, reviewer: &str, rationale: &str) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            suggestion_id: suggestion_id.to_string(),
            status,
            rationale: rationale.to_string(),
            reviewer: reviewer.to_string(),
            override_catalog_code: None,
            decided_at: Utc::now(),
            sequence: 0,
        }
    }

    pub fn with_override(mut self, catalog_code: &str) -> Self {
        self.override_catalog_code = Some(catalog_code.to_string());
        self
    }

    pub fn has_rationale(&self) -> bool {
        !self.rationale.trim().is_empty()
    }
}
