use chrono::Utc;
use proptest::prelude::*;

use cpl_core::config::ComponentWeights;
use cpl_core::models::*;

fn external(grade: &str) -> ExternalUnit {
    ExternalUnit {
        id: "ext-1".into(),
        student_id: "STU-1".into(),
        institution: "UTS".into(),
        unit_code: "COSC101".into(),
        title: "Intro Programming".into(),
        description: "transcript description".into(),
        learning_outcomes: vec!["write programs".into(), "debug programs".into()],
        grade: grade.into(),
        credit_points: 10.0,
        semester: "Semester 1 2024".into(),
        enrichment: None,
    }
}

#[test]
fn enrichment_overrides_transcript_text_only_when_non_empty() {
    let mut unit = external("Pass");
    assert_eq!(unit.description_text(), "transcript description");
    assert_eq!(unit.outcomes_text(), "write programs\ndebug programs");

    unit.enrichment = Some(Enrichment {
        overview: "fetched overview".into(),
        outcomes: "  ".into(),
        source_url: "https://example.edu/cosc101".into(),
        retrieval_mode: "web".into(),
        retrieved_at: Utc::now(),
    });
    assert_eq!(unit.description_text(), "fetched overview");
    assert_eq!(unit.outcomes_text(), "write programs\ndebug programs");
    assert!(unit.has_enrichment_content());
}

#[test]
fn url_only_enrichment_is_not_content() {
    let mut unit = external("Pass");
    unit.enrichment = Some(Enrichment {
        overview: String::new(),
        outcomes: String::new(),
        source_url: "https://example.edu/cosc101".into(),
        retrieval_mode: "web".into(),
        retrieved_at: Utc::now(),
    });
    assert!(!unit.has_enrichment_content());
}

#[test]
fn external_validation_rejects_negative_credit() {
    let mut unit = external("Pass");
    unit.credit_points = -5.0;
    assert!(unit.validate().is_err());
}

#[test]
fn decision_status_parses_snake_case() {
    assert_eq!(
        "needs_review".parse::<DecisionStatus>().unwrap(),
        DecisionStatus::NeedsReview
    );
    assert!("pending".parse::<DecisionStatus>().is_err());
    assert!(DecisionStatus::Rejected.requires_rationale());
    assert!(DecisionStatus::Override.requires_rationale());
    assert!(!DecisionStatus::Approved.requires_rationale());
    assert!(!DecisionStatus::NeedsReview.requires_rationale());
}

#[test]
fn contributions_sum_to_weighted_score() {
    let scores = ComponentScores {
        title: 0.55,
        description: 1.0,
        outcomes: 1.0,
        credit: 1.0,
    };
    let weights = ComponentWeights::new(0.4, 0.3, 0.2, 0.1);
    let sum: f64 = scores.contributions(&weights).iter().map(|(_, c)| c).sum();
    assert!((sum - scores.weighted(&weights)).abs() < 1e-12);
    assert!((scores.weighted(&weights) - (0.4 * 0.55 + 0.6)).abs() < 1e-12);
}

#[test]
fn flagged_card_is_not_auto_approvable() {
    let card = ScoreCard {
        components: ComponentScores {
            title: 1.0,
            description: 1.0,
            outcomes: 1.0,
            credit: 1.0,
        },
        weights: ComponentWeights::default(),
        base_score: 1.0,
        grade_bonus: 0.0,
        retrieval_bonus: 0.0,
        score: 1.0,
        flags: vec![ScoreFlag::NonPassingGrade],
        explanation: vec![],
        method: "lexical".into(),
        fingerprint: String::new(),
    };
    assert!(!card.is_auto_approvable());
    assert_eq!(card.confidence_percent(), 100);
}

proptest! {
    #[test]
    fn band_is_monotonic_in_score(a in 0.0f64..=1.0, b in 0.0f64..=1.0) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let rank = |band: ConfidenceBand| match band {
            ConfidenceBand::Low => 0,
            ConfidenceBand::Medium => 1,
            ConfidenceBand::High => 2,
        };
        prop_assert!(
            rank(ConfidenceBand::from_score(lo, 0.70, 0.45))
                <= rank(ConfidenceBand::from_score(hi, 0.70, 0.45))
        );
    }
}
