//! Score composer: weighted component similarity plus bonuses.

use std::sync::Arc;

use cpl_core::config::ScoringConfig;
use cpl_core::constants::{TITLE_ONLY_DESCRIPTION_MAX, TITLE_ONLY_OUTCOMES_MAX};
use cpl_core::errors::CplResult;
use cpl_core::models::{CatalogUnit, ComponentScores, ExternalUnit, GradeStatus, ScoreCard, ScoreFlag};
use cpl_core::traits::ITextSimilarity;
use cpl_similarity::credit_similarity;

use crate::explanation::{explain, ExplanationParts};
use crate::fingerprint::fingerprint;

/// Scores one external unit against one catalog unit.
///
/// Pure: the same pair under the same configuration and backend always yields
/// an identical card, down to the explanation text and fingerprint.
pub struct ScoreComposer {
    config: ScoringConfig,
    similarity: Arc<dyn ITextSimilarity>,
}

impl ScoreComposer {
    /// Fails with a configuration error if the weights or bonuses are invalid.
    /// Weights that do not sum to 1.0 are rejected, never normalised.
    pub fn new(config: ScoringConfig, similarity: Arc<dyn ITextSimilarity>) -> CplResult<Self> {
        config.validate()?;
        Ok(Self { config, similarity })
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Name of the text similarity backend.
    pub fn method(&self) -> &str {
        self.similarity.name()
    }

    pub fn compose(&self, external: &ExternalUnit, catalog: &CatalogUnit) -> CplResult<ScoreCard> {
        let sim = &self.similarity;
        let components = ComponentScores {
            title: sim.similarity(&external.title, &catalog.title)?,
            description: sim.similarity(external.description_text(), &catalog.description)?,
            outcomes: sim.similarity(&external.outcomes_text(), &catalog.outcomes_text())?,
            credit: credit_similarity(
                external.credit_points,
                catalog.credit_points,
                self.config.credit_tolerance,
            ),
        };
        let base_score = components.weighted(&self.config.weights);

        let mut flags = Vec::new();
        if components.description < TITLE_ONLY_DESCRIPTION_MAX
            && components.outcomes < TITLE_ONLY_OUTCOMES_MAX
        {
            flags.push(ScoreFlag::TitleOnlyEvidence);
        }
        let grade_bonus = match external.grade_status() {
            GradeStatus::Passing => self.config.grade_bonus,
            GradeStatus::NotPassing => {
                flags.push(ScoreFlag::NonPassingGrade);
                0.0
            }
            GradeStatus::Unknown => 0.0,
        };
        let retrieval_bonus = if external.has_enrichment_content() {
            self.config.retrieval_bonus
        } else {
            0.0
        };

        let score = (base_score + grade_bonus + retrieval_bonus).clamp(0.0, 1.0);
        let method = self.method().to_string();
        let explanation = explain(&ExplanationParts {
            components: &components,
            weights: &self.config.weights,
            grade_bonus,
            retrieval_bonus,
            score,
            method: &method,
            flags: &flags,
        });
        let fingerprint = fingerprint(external, catalog, &self.config, &method);

        tracing::debug!(
            external = %external.unit_code,
            catalog = %catalog.code,
            base_score,
            score,
            "composed score"
        );

        Ok(ScoreCard {
            components,
            weights: self.config.weights,
            base_score,
            grade_bonus,
            retrieval_bonus,
            score,
            flags,
            explanation,
            method,
            fingerprint,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cpl_core::config::ComponentWeights;
    use cpl_core::errors::{ConfigurationError, CplError};
    use cpl_similarity::LexicalSimilarity;

    fn composer(config: ScoringConfig) -> ScoreComposer {
        ScoreComposer::new(config, Arc::new(LexicalSimilarity::new())).unwrap()
    }

    #[test]
    fn rejects_weights_not_summing_to_one() {
        let config = ScoringConfig {
            weights: ComponentWeights::new(0.5, 0.5, 0.5, 0.5),
            ..ScoringConfig::default()
        };
        let err = ScoreComposer::new(config, Arc::new(LexicalSimilarity::new()))
            .err()
            .unwrap();
        assert!(matches!(
            err,
            CplError::Configuration(ConfigurationError::WeightSum { .. })
        ));
    }

    #[test]
    fn rejects_negative_bonus() {
        let config = ScoringConfig {
            retrieval_bonus: -0.1,
            ..ScoringConfig::default()
        };
        assert!(ScoreComposer::new(config, Arc::new(LexicalSimilarity::new())).is_err());
    }

    #[test]
    fn method_comes_from_backend() {
        assert_eq!(composer(ScoringConfig::default()).method(), "lexical-cosine");
    }
}
