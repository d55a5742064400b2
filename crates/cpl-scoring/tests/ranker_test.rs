//! Ranker ordering, floor policy and truncation.

use std::sync::Arc;

use cpl_core::config::{ComponentWeights, RankingConfig, ScoringConfig};
use cpl_core::errors::{CplError, CplResult};
use cpl_core::models::{CatalogUnit, ConfidenceBand, ExternalUnit};
use cpl_core::traits::ITextSimilarity;
use cpl_scoring::{Ranker, ScoreComposer};

/// Reads the similarity straight out of the catalog-side text.
struct ScriptedSimilarity;

impl ITextSimilarity for ScriptedSimilarity {
    fn similarity(&self, _a: &str, b: &str) -> CplResult<f64> {
        Ok(b.parse().unwrap_or(0.0))
    }

    fn name(&self) -> &str {
        "scripted"
    }
}

fn external() -> ExternalUnit {
    ExternalUnit {
        id: "ext-1".into(),
        student_id: "STU-1".into(),
        institution: "UTS".into(),
        unit_code: "COSC101".into(),
        title: "anything".into(),
        description: String::new(),
        learning_outcomes: vec![],
        grade: String::new(),
        credit_points: 10.0,
        semester: String::new(),
        enrichment: None,
    }
}

/// A catalog unit whose title similarity is `score`.
fn unit(code: &str, score: f64) -> CatalogUnit {
    CatalogUnit {
        code: code.into(),
        title: score.to_string(),
        description: String::new(),
        learning_outcomes: vec![],
        credit_points: 10.0,
        aqf_level: String::new(),
        course: String::new(),
    }
}

fn ranker(config: RankingConfig) -> Ranker {
    let scoring = ScoringConfig {
        weights: ComponentWeights::new(1.0, 0.0, 0.0, 0.0),
        grade_bonus: 0.0,
        retrieval_bonus: 0.0,
        credit_tolerance: 0.0,
    };
    let composer = ScoreComposer::new(scoring, Arc::new(ScriptedSimilarity)).unwrap();
    Ranker::new(composer, config).unwrap()
}

fn codes(ranked: &[cpl_scoring::RankedMatch]) -> Vec<&str> {
    ranked.iter().map(|m| m.catalog_code.as_str()).collect()
}

#[test]
fn orders_by_score_then_code() {
    let r = ranker(RankingConfig::default());
    let catalog = vec![unit("U2", 0.42), unit("U3", 0.81), unit("U1", 0.42)];

    let ranked = r.rank(&external(), &catalog).unwrap();
    assert_eq!(codes(&ranked), vec!["U3", "U1", "U2"]);
    assert_eq!(
        ranked.iter().map(|m| m.rank).collect::<Vec<_>>(),
        vec![1, 2, 3]
    );
    assert_eq!(ranked[0].band, ConfidenceBand::High);
    assert_eq!(ranked[1].band, ConfidenceBand::Low);
}

#[test]
fn soft_floor_keeps_best_candidate() {
    let r = ranker(RankingConfig {
        min_score: 0.5,
        ..RankingConfig::default()
    });
    let ranked = r
        .rank(&external(), &[unit("A", 0.2), unit("B", 0.1)])
        .unwrap();
    assert_eq!(codes(&ranked), vec!["A"]);
}

#[test]
fn soft_floor_drops_lower_results() {
    let r = ranker(RankingConfig {
        min_score: 0.5,
        ..RankingConfig::default()
    });
    let ranked = r
        .rank(&external(), &[unit("A", 0.9), unit("B", 0.6), unit("C", 0.3)])
        .unwrap();
    assert_eq!(codes(&ranked), vec!["A", "B"]);
}

#[test]
fn enforced_floor_may_return_nothing() {
    let r = ranker(RankingConfig {
        min_score: 0.5,
        enforce_floor: true,
        ..RankingConfig::default()
    });
    let ranked = r
        .rank(&external(), &[unit("A", 0.2), unit("B", 0.1)])
        .unwrap();
    assert!(ranked.is_empty());
}

#[test]
fn top_k_truncates() {
    let r = ranker(RankingConfig {
        min_score: 0.0,
        top_k: Some(2),
        ..RankingConfig::default()
    });
    let ranked = r
        .rank(
            &external(),
            &[unit("A", 0.9), unit("B", 0.6), unit("C", 0.5), unit("D", 0.4)],
        )
        .unwrap();
    assert_eq!(codes(&ranked), vec!["A", "B"]);
}

#[test]
fn bands_follow_cutoffs() {
    let r = ranker(RankingConfig {
        min_score: 0.0,
        ..RankingConfig::default()
    });
    let ranked = r
        .rank(&external(), &[unit("A", 0.70), unit("B", 0.45), unit("C", 0.44)])
        .unwrap();
    let bands: Vec<ConfidenceBand> = ranked.iter().map(|m| m.band).collect();
    assert_eq!(
        bands,
        vec![ConfidenceBand::High, ConfidenceBand::Medium, ConfidenceBand::Low]
    );
}

#[test]
fn empty_catalog_gives_empty_result() {
    let r = ranker(RankingConfig::default());
    assert!(r.rank(&external(), &[]).unwrap().is_empty());
}

#[test]
fn invalid_external_unit_is_rejected() {
    let r = ranker(RankingConfig::default());
    let mut ext = external();
    ext.title = "  ".into();
    let err = r.rank(&ext, &[unit("A", 0.9)]).unwrap_err();
    assert!(matches!(err, CplError::Validation(_)));
}

#[test]
fn invalid_ranking_config_is_rejected() {
    let scoring = ScoringConfig::default();
    let composer = ScoreComposer::new(scoring, Arc::new(ScriptedSimilarity)).unwrap();
    let result = Ranker::new(
        composer,
        RankingConfig {
            high_cutoff: 0.4,
            medium_cutoff: 0.6,
            ..RankingConfig::default()
        },
    );
    assert!(matches!(result, Err(CplError::Configuration(_))));
}
