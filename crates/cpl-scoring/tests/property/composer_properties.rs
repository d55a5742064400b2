//! Property tests for the score composer.

use std::sync::Arc;

use cpl_core::config::{ComponentWeights, ScoringConfig};
use cpl_core::models::{CatalogUnit, ExternalUnit, ScoreFlag};
use cpl_scoring::ScoreComposer;
use cpl_similarity::LexicalSimilarity;
use proptest::prelude::*;

fn text() -> impl Strategy<Value = String> {
    prop::collection::vec("(programming|data|network|project|risk|design|[a-z]{3,8})", 0..8)
        .prop_map(|words| words.join(" "))
}

fn weights() -> impl Strategy<Value = ComponentWeights> {
    prop::array::uniform4(0.01f64..1.0).prop_map(|[t, d, o, c]| {
        let total = t + d + o + c;
        ComponentWeights::new(t / total, d / total, o / total, c / total)
    })
}

fn grade() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["Pass", "Credit", "HD", "Fail", "NYC", "Withdrawn", ""])
        .prop_map(str::to_string)
}

fn external(title: String, description: String, grade: String, credits: f64) -> ExternalUnit {
    ExternalUnit {
        id: "ext-1".into(),
        student_id: "STU-1".into(),
        institution: "UTS".into(),
        unit_code: "COSC101".into(),
        title,
        description,
        learning_outcomes: vec![],
        grade,
        credit_points: credits,
        semester: "Semester 1 2024".into(),
        enrichment: None,
    }
}

fn catalog(title: String, description: String, outcome: String, credits: f64) -> CatalogUnit {
    CatalogUnit {
        code: "ITOP502".into(),
        title,
        description,
        learning_outcomes: vec![outcome],
        credit_points: credits,
        aqf_level: "7".into(),
        course: "BIT".into(),
    }
}

proptest! {
    #[test]
    fn score_is_bounded_and_contributions_sum_to_base(
        w in weights(),
        grade_bonus in 0.0f64..0.5,
        ext_title in text(),
        ext_desc in text(),
        cat_title in text(),
        cat_desc in text(),
        cat_outcome in text(),
        g in grade(),
        ext_credits in 0.0f64..40.0,
        cat_credits in 0.0f64..40.0,
    ) {
        let config = ScoringConfig { weights: w, grade_bonus, ..ScoringConfig::default() };
        let composer = ScoreComposer::new(config, Arc::new(LexicalSimilarity::new())).unwrap();
        let card = composer
            .compose(
                &external(ext_title, ext_desc, g, ext_credits),
                &catalog(cat_title, cat_desc, cat_outcome, cat_credits),
            )
            .unwrap();

        prop_assert!((0.0..=1.0).contains(&card.score));
        let sum: f64 = card.components.contributions(&card.weights).iter().map(|(_, c)| c).sum();
        prop_assert!((sum - card.base_score).abs() < 1e-9);
        let expected = (card.base_score + card.grade_bonus + card.retrieval_bonus).clamp(0.0, 1.0);
        prop_assert_eq!(card.score.to_bits(), expected.to_bits());
        prop_assert_eq!(
            card.flags.contains(&ScoreFlag::NonPassingGrade),
            !card.is_auto_approvable()
        );
    }
}
