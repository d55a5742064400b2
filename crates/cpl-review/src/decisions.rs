//! Reviewer decision log over the repository.

use cpl_core::errors::{CplError, CplResult};
use cpl_core::models::Decision;
use cpl_core::traits::IMatchRepository;

use crate::state::{self, ReviewState};

/// Records and reads reviewer decisions.
///
/// Nothing is written unless every check passes. The repository assigns the
/// timestamp and sequence of each appended decision.
pub struct DecisionLog<'a> {
    repo: &'a dyn IMatchRepository,
}

impl<'a> DecisionLog<'a> {
    pub fn new(repo: &'a dyn IMatchRepository) -> Self {
        Self { repo }
    }

    /// Validate and append a decision, returning it as stored.
    ///
    /// Rejections and overrides need a non-blank rationale. The suggestion
    /// must exist, and so must an override's target catalog unit.
    pub fn record(&self, decision: &Decision) -> CplResult<Decision> {
        if decision.status.requires_rationale() && !decision.has_rationale() {
            return Err(CplError::RationaleRequired {
                status: decision.status,
            });
        }
        if self.repo.get_suggestion(&decision.suggestion_id)?.is_none() {
            return Err(CplError::SuggestionNotFound {
                id: decision.suggestion_id.clone(),
            });
        }
        if let Some(code) = &decision.override_catalog_code {
            if self.repo.get_catalog_unit(code)?.is_none() {
                return Err(CplError::CatalogUnitNotFound { code: code.clone() });
            }
        }
        self.repo.append_decision(decision)
    }

    /// Every decision for the suggestion, oldest first.
    pub fn history(&self, suggestion_id: &str) -> CplResult<Vec<Decision>> {
        self.repo.list_decisions(suggestion_id)
    }

    /// The decision currently in force, if any.
    pub fn latest(&self, suggestion_id: &str) -> CplResult<Option<Decision>> {
        let history = self.history(suggestion_id)?;
        Ok(state::latest(&history).cloned())
    }

    pub fn effective_state(&self, suggestion_id: &str) -> CplResult<ReviewState> {
        Ok(ReviewState::resolve(&self.history(suggestion_id)?))
    }
}
