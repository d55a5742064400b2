//! Scoring runs against a repository.

use std::collections::HashSet;

use serde::Serialize;

use cpl_core::errors::{CplError, CplResult};
use cpl_core::models::{CatalogUnit, ScoringRun, Suggestion};
use cpl_core::traits::IMatchRepository;

use crate::ranker::Ranker;

/// Result of scoring one external unit within a batch.
#[derive(Debug, Clone, Serialize)]
pub struct UnitOutcome {
    pub external_unit_id: String,
    #[serde(flatten)]
    pub status: OutcomeStatus,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum OutcomeStatus {
    Scored { suggestions: Vec<Suggestion> },
    Failed { error: String },
}

impl UnitOutcome {
    pub fn suggestions(&self) -> &[Suggestion] {
        match &self.status {
            OutcomeStatus::Scored { suggestions } => suggestions,
            OutcomeStatus::Failed { .. } => &[],
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self.status, OutcomeStatus::Failed { .. })
    }
}

/// Per-unit results of one batch run.
#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    pub run_id: String,
    pub outcomes: Vec<UnitOutcome>,
}

impl BatchReport {
    pub fn failed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_failed()).count()
    }
}

/// Ranks stored external units against the stored catalog and persists each
/// ranking as insert-only suggestions under a fresh run id.
pub struct ScoringService<'a> {
    repo: &'a dyn IMatchRepository,
    ranker: Ranker,
}

impl<'a> ScoringService<'a> {
    pub fn new(repo: &'a dyn IMatchRepository, ranker: Ranker) -> Self {
        Self { repo, ranker }
    }

    pub fn ranker(&self) -> &Ranker {
        &self.ranker
    }

    /// Score one unit as its own run. Earlier suggestions stay untouched.
    pub fn score_unit(&self, external_unit_id: &str) -> CplResult<Vec<Suggestion>> {
        let run_id = new_run_id();
        let _span = tracing::info_span!("score_unit", run_id = %run_id).entered();
        let catalog = self.repo.load_catalog()?;
        self.score_in_run(&run_id, external_unit_id, &catalog)
    }

    /// Score several units under one run id.
    ///
    /// Repeated ids are scored once, at their first position. Validation,
    /// lookup and similarity failures are recorded against the unit and the
    /// batch continues. Repository failures abort the batch.
    pub fn score_batch(&self, external_unit_ids: &[String]) -> CplResult<BatchReport> {
        let run_id = new_run_id();
        let mut seen = HashSet::new();
        let ids: Vec<&String> = external_unit_ids
            .iter()
            .filter(|id| seen.insert(id.as_str()))
            .collect();
        let _span = tracing::info_span!("score_batch", run_id = %run_id, units = ids.len())
            .entered();
        let catalog = self.repo.load_catalog()?;

        let mut outcomes = Vec::with_capacity(ids.len());
        for id in ids {
            let status = match self.score_in_run(&run_id, id, &catalog) {
                Ok(suggestions) => OutcomeStatus::Scored { suggestions },
                Err(e) if e.is_repository() => return Err(e),
                Err(e) => {
                    tracing::warn!(external_unit_id = %id, error = %e, "unit not scored");
                    OutcomeStatus::Failed {
                        error: e.to_string(),
                    }
                }
            };
            outcomes.push(UnitOutcome {
                external_unit_id: id.to_string(),
                status,
            });
        }

        let report = BatchReport { run_id, outcomes };
        tracing::info!(
            units = report.outcomes.len(),
            failed = report.failed(),
            "batch scored"
        );
        Ok(report)
    }

    fn score_in_run(
        &self,
        run_id: &str,
        external_unit_id: &str,
        catalog: &[CatalogUnit],
    ) -> CplResult<Vec<Suggestion>> {
        let external = self
            .repo
            .get_external_unit(external_unit_id)?
            .ok_or_else(|| CplError::ExternalUnitNotFound {
                id: external_unit_id.to_string(),
            })?;
        let suggestions: Vec<Suggestion> = self
            .ranker
            .rank(&external, catalog)?
            .into_iter()
            .map(|m| Suggestion::new(run_id, &external.id, &m.catalog_code, m.rank, m.band, m.card))
            .collect();
        // Recorded even when empty, so the run supersedes earlier rankings.
        self.repo
            .record_run(&ScoringRun::new(run_id, &external.id), &suggestions)?;
        Ok(suggestions)
    }
}

fn new_run_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
