//! Decision log over a scored sample transcript.

use cpl_core::errors::CplError;
use cpl_core::models::{Decision, DecisionStatus, Suggestion};
use cpl_core::traits::IMatchRepository;
use cpl_core::CplConfig;
use cpl_review::{DecisionLog, ReviewState};
use cpl_scoring::{build_ranker, ScoringService};
use cpl_storage::StorageEngine;

fn scored_engine() -> (StorageEngine, Suggestion) {
    let engine = StorageEngine::open_in_memory().unwrap();
    engine
        .upsert_catalog(&test_fixtures::sample_catalog())
        .unwrap();
    engine
        .insert_external_units(&test_fixtures::sample_external_units())
        .unwrap();
    let unit_id = engine.list_external_units(None).unwrap()[0].id.clone();
    let service = ScoringService::new(&engine, build_ranker(&CplConfig::default()).unwrap());
    let top = service.score_unit(&unit_id).unwrap().remove(0);
    (engine, top)
}

#[test]
fn approved_then_rejected_resolves_to_rejected() {
    let (engine, s) = scored_engine();
    let log = DecisionLog::new(&engine);

    log.record(&Decision::new(&s.id, DecisionStatus::Approved, "alice", ""))
        .unwrap();
    log.record(&Decision::new(
        &s.id,
        DecisionStatus::Rejected,
        "bob",
        "outcomes only partly covered",
    ))
    .unwrap();

    let history = log.history(&s.id).unwrap();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].status, DecisionStatus::Approved);
    assert_eq!(history[1].status, DecisionStatus::Rejected);
    assert_eq!(log.effective_state(&s.id).unwrap(), ReviewState::Rejected);
    assert_eq!(log.latest(&s.id).unwrap().unwrap().reviewer, "bob");
}

#[test]
fn undecided_suggestion_is_proposed() {
    let (engine, s) = scored_engine();
    let log = DecisionLog::new(&engine);
    assert_eq!(log.effective_state(&s.id).unwrap(), ReviewState::Proposed);
    assert!(log.latest(&s.id).unwrap().is_none());
}

#[test]
fn rejection_without_rationale_writes_nothing() {
    let (engine, s) = scored_engine();
    let log = DecisionLog::new(&engine);

    for status in [DecisionStatus::Rejected, DecisionStatus::Override] {
        let err = log
            .record(&Decision::new(&s.id, status, "alice", "   "))
            .unwrap_err();
        assert!(matches!(err, CplError::RationaleRequired { status: st } if st == status));
    }
    assert!(log.history(&s.id).unwrap().is_empty());
}

#[test]
fn approval_and_needs_review_do_not_need_rationale() {
    let (engine, s) = scored_engine();
    let log = DecisionLog::new(&engine);
    log.record(&Decision::new(&s.id, DecisionStatus::NeedsReview, "alice", ""))
        .unwrap();
    log.record(&Decision::new(&s.id, DecisionStatus::Approved, "alice", ""))
        .unwrap();
    assert_eq!(log.effective_state(&s.id).unwrap(), ReviewState::Approved);
}

#[test]
fn unknown_suggestion_is_rejected() {
    let (engine, _) = scored_engine();
    let log = DecisionLog::new(&engine);
    let err = log
        .record(&Decision::new("missing", DecisionStatus::Approved, "alice", ""))
        .unwrap_err();
    assert!(matches!(err, CplError::SuggestionNotFound { .. }));
}

#[test]
fn override_target_must_exist() {
    let (engine, s) = scored_engine();
    let log = DecisionLog::new(&engine);

    let bad = Decision::new(&s.id, DecisionStatus::Override, "alice", "better fit")
        .with_override("NOPE999");
    assert!(matches!(
        log.record(&bad).unwrap_err(),
        CplError::CatalogUnitNotFound { .. }
    ));
    assert!(log.history(&s.id).unwrap().is_empty());

    let good = Decision::new(&s.id, DecisionStatus::Override, "alice", "better fit")
        .with_override("ITDS503");
    let stored = log.record(&good).unwrap();
    assert_eq!(stored.override_catalog_code.as_deref(), Some("ITDS503"));
    assert_eq!(log.effective_state(&s.id).unwrap(), ReviewState::Override);
}
