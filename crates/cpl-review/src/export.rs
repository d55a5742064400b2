//! Flat rows for downstream reporting. File formats are left to the caller.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use cpl_core::errors::CplResult;
use cpl_core::models::{ConfidenceBand, Decision, ExternalUnit, Suggestion};
use cpl_core::traits::IMatchRepository;

use crate::state::{self, ReviewState};

/// One suggestion with its effective decision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportRow {
    pub suggestion_id: String,
    pub student_id: String,
    pub external_unit_code: String,
    pub catalog_code: String,
    pub decision: ReviewState,
    /// Catalog unit to grant: the override target when one is in force,
    /// otherwise the suggested unit.
    pub recommended_credits: String,
    /// Score in [0.0, 1.0].
    pub confidence: f64,
    pub confidence_percent: u8,
    pub band: ConfidenceBand,
    /// Explanation lines of the score card.
    pub evidence: Vec<String>,
    pub rationale: Option<String>,
    pub reviewer: Option<String>,
    pub decided_at: Option<DateTime<Utc>>,
}

impl ExportRow {
    pub fn new(external: &ExternalUnit, suggestion: &Suggestion, decisions: &[Decision]) -> Self {
        let effective = state::latest(decisions);
        let recommended_credits = effective
            .and_then(|d| d.override_catalog_code.clone())
            .unwrap_or_else(|| suggestion.catalog_code.clone());
        Self {
            suggestion_id: suggestion.id.clone(),
            student_id: external.student_id.clone(),
            external_unit_code: external.unit_code.clone(),
            catalog_code: suggestion.catalog_code.clone(),
            decision: ReviewState::resolve(decisions),
            recommended_credits,
            confidence: suggestion.score(),
            confidence_percent: suggestion.confidence_percent(),
            band: suggestion.band,
            evidence: suggestion.card.explanation.clone(),
            rationale: effective.map(|d| d.rationale.clone()),
            reviewer: effective.map(|d| d.reviewer.clone()),
            decided_at: effective.map(|d| d.decided_at),
        }
    }
}

/// Export rows for the latest scoring run of every external unit,
/// optionally restricted to one student. A unit whose latest run ranked
/// nothing contributes no rows.
pub fn build_export_rows(
    repo: &dyn IMatchRepository,
    student_id: Option<&str>,
) -> CplResult<Vec<ExportRow>> {
    let mut rows = Vec::new();
    for external in repo.list_external_units(student_id)? {
        let Some(latest_run) = repo.latest_run(&external.id)? else {
            continue;
        };
        let suggestions = repo.list_suggestions(&external.id)?;
        for suggestion in suggestions.iter().filter(|s| s.run_id == latest_run.run_id) {
            let decisions = repo.list_decisions(&suggestion.id)?;
            rows.push(ExportRow::new(&external, suggestion, &decisions));
        }
    }
    tracing::debug!(rows = rows.len(), "export rows built");
    Ok(rows)
}
