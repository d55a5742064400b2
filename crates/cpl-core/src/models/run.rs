use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

/// One external unit ranked within one scoring run.
///
/// Recorded even when the ranking is empty, so an empty re-score supersedes
/// the suggestions of earlier runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringRun {
    pub run_id: String,
    pub external_unit_id: String,
    pub created_at: DateTime<Utc>,
}

impl ScoringRun {
    pub fn new(run_id: &str, external_unit_id: &str) -> Self {
        Self {
            run_id: run_id.to_string(),
            external_unit_id: external_unit_id.to_string(),
            created_at: Utc::now().trunc_subsecs(6),
        }
    }
}
