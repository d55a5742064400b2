use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

use super::{ConfidenceBand, ScoreCard};

/// A scored, explainable pairing of one external unit with one catalog unit.
///
/// Immutable once stored. Re-scoring inserts new rows under a new `run_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub id: String,
    /// Identifier shared by all suggestions produced in one scoring run.
    pub run_id: String,
    pub external_unit_id: String,
    pub catalog_code: String,
    /// 1-based position within the run's ranking for this external unit.
    pub rank: u32,
    pub band: ConfidenceBand,
    pub card: ScoreCard,
    pub created_at: DateTime<Utc>,
}

impl Suggestion {
    pub fn new(
        run_id: &str,
        external_unit_id: &str,
        catalog_code: &str,
        rank: u32,
        band: ConfidenceBand,
        card: ScoreCard,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            run_id: run_id.to_string(),
            external_unit_id: external_unit_id.to_string(),
            catalog_code: catalog_code.to_string(),
            rank,
            band,
            card,
            // Stored with microsecond precision.
            created_at: Utc::now().trunc_subsecs(6),
        }
    }

    pub fn score(&self) -> f64 {
        self.card.score
    }

    pub fn confidence_percent(&self) -> u8 {
        self.card.confidence_percent()
    }
}
