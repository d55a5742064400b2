//! # cpl-scoring
//!
//! Turns external/catalog unit pairs into explainable score cards, ranks a
//! catalog for one external unit, and runs scoring against a repository.

pub mod composer;
pub mod explanation;
pub mod fingerprint;
pub mod ranker;
pub mod service;

use cpl_core::errors::CplResult;
use cpl_core::CplConfig;

pub use composer::ScoreComposer;
pub use ranker::{RankedMatch, Ranker};
pub use service::{BatchReport, OutcomeStatus, ScoringService, UnitOutcome};

/// Build a ranker from a full configuration, including the similarity backend.
pub fn build_ranker(config: &CplConfig) -> CplResult<Ranker> {
    let similarity = cpl_similarity::build_similarity(&config.similarity)?;
    let composer = ScoreComposer::new(config.scoring.clone(), similarity)?;
    Ranker::new(composer, config.ranking.clone())
}
