//! Shared builders for storage tests.
#![allow(dead_code)]

use cpl_core::config::ComponentWeights;
use cpl_core::models::{
    CatalogUnit, ComponentScores, ConfidenceBand, ExternalUnit, ScoreCard, Suggestion,
};
use cpl_core::traits::IMatchRepository;

pub fn catalog_unit(code: &str, title: &str) -> CatalogUnit {
    CatalogUnit {
        code: code.to_string(),
        title: title.to_string(),
        description: format!("{title} description"),
        learning_outcomes: vec![format!("Apply {title}"), format!("Evaluate {title}")],
        credit_points: 10.0,
        aqf_level: "7".to_string(),
        course: "BIT".to_string(),
    }
}

pub fn external_unit(student: &str, code: &str, title: &str) -> ExternalUnit {
    ExternalUnit {
        id: uuid::Uuid::new_v4().to_string(),
        student_id: student.to_string(),
        institution: "University of Technology Sydney".to_string(),
        unit_code: code.to_string(),
        title: title.to_string(),
        description: String::new(),
        learning_outcomes: vec![],
        grade: "Credit".to_string(),
        credit_points: 10.0,
        semester: "Semester 1 2024".to_string(),
        enrichment: None,
    }
}

pub fn card(score: f64) -> ScoreCard {
    ScoreCard {
        components: ComponentScores {
            title: score,
            description: score,
            outcomes: score,
            credit: 1.0,
        },
        weights: ComponentWeights::default(),
        base_score: score,
        grade_bonus: 0.0,
        retrieval_bonus: 0.0,
        score,
        flags: vec![],
        explanation: vec![format!("confidence: {score:.4}")],
        method: "lexical-cosine".to_string(),
        fingerprint: "0".repeat(64),
    }
}

/// Store one external unit with a single suggestion and return the suggestion.
pub fn seeded_suggestion(repo: &dyn IMatchRepository) -> Suggestion {
    let ext = external_unit("STU-1", "COSC101", "Introduction to Programming");
    repo.insert_external_units(std::slice::from_ref(&ext)).unwrap();
    repo.upsert_catalog(&[catalog_unit("ITOP502", "Programming Foundations")])
        .unwrap();
    let s = Suggestion::new("run-1", &ext.id, "ITOP502", 1, ConfidenceBand::Medium, card(0.5));
    repo.save_suggestions(std::slice::from_ref(&s)).unwrap();
    s
}
