//! Recommendation ranker: scores a whole catalog for one external unit.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use cpl_core::config::RankingConfig;
use cpl_core::errors::CplResult;
use cpl_core::models::{CatalogUnit, ConfidenceBand, ExternalUnit, ScoreCard};

use crate::composer::ScoreComposer;

/// One ranked candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedMatch {
    pub catalog_code: String,
    /// 1-based position.
    pub rank: u32,
    pub band: ConfidenceBand,
    pub card: ScoreCard,
}

pub struct Ranker {
    composer: ScoreComposer,
    config: RankingConfig,
}

impl Ranker {
    pub fn new(composer: ScoreComposer, config: RankingConfig) -> CplResult<Self> {
        config.validate()?;
        Ok(Self { composer, config })
    }

    pub fn composer(&self) -> &ScoreComposer {
        &self.composer
    }

    pub fn config(&self) -> &RankingConfig {
        &self.config
    }

    /// Rank every catalog unit for `external`.
    ///
    /// Ordered by score descending, ties broken by catalog code ascending.
    /// Results under `min_score` are dropped; unless `enforce_floor` is set the
    /// best candidate survives the floor so a non-empty catalog always yields
    /// at least one result.
    pub fn rank(&self, external: &ExternalUnit, catalog: &[CatalogUnit]) -> CplResult<Vec<RankedMatch>> {
        external.validate()?;

        let mut scored: Vec<(String, ScoreCard)> = catalog
            .par_iter()
            .map(|unit| {
                self.composer
                    .compose(external, unit)
                    .map(|card| (unit.code.clone(), card))
            })
            .collect::<CplResult<Vec<_>>>()?;

        scored.sort_by(|a, b| b.1.score.total_cmp(&a.1.score).then_with(|| a.0.cmp(&b.0)));

        let min_score = self.config.min_score;
        let kept: Vec<(String, ScoreCard)> = scored
            .into_iter()
            .enumerate()
            .filter(|(i, (_, card))| {
                card.score >= min_score || (*i == 0 && !self.config.enforce_floor)
            })
            .map(|(_, pair)| pair)
            .take(self.config.top_k.unwrap_or(usize::MAX))
            .collect();

        tracing::debug!(
            external = %external.unit_code,
            candidates = catalog.len(),
            kept = kept.len(),
            "ranked catalog"
        );

        Ok(kept
            .into_iter()
            .enumerate()
            .map(|(i, (catalog_code, card))| RankedMatch {
                catalog_code,
                rank: (i + 1) as u32,
                band: ConfidenceBand::from_score(
                    card.score,
                    self.config.high_cutoff,
                    self.config.medium_cutoff,
                ),
                card,
            })
            .collect())
    }
}
