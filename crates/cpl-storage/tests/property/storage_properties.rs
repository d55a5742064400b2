//! Property tests: decision history is append-only and ordered.

#[path = "../common/mod.rs"]
mod common;

use proptest::prelude::*;

use common::seeded_suggestion;
use cpl_core::models::{Decision, DecisionStatus};
use cpl_core::traits::IMatchRepository;
use cpl_storage::StorageEngine;

fn status() -> impl Strategy<Value = DecisionStatus> {
    prop::sample::select(DecisionStatus::ALL.to_vec())
}

proptest! {
    #[test]
    fn prop_history_preserves_every_append(
        statuses in prop::collection::vec(status(), 1..12),
        rationale in "[a-z ]{1,40}",
    ) {
        let engine = StorageEngine::open_in_memory().unwrap();
        let s = seeded_suggestion(&engine);

        let mut stored = Vec::new();
        for (i, status) in statuses.iter().enumerate() {
            let d = Decision::new(&s.id, *status, &format!("reviewer-{i}"), &rationale);
            stored.push(engine.append_decision(&d).unwrap());

            // Every earlier entry is unchanged after each append.
            let history = engine.list_decisions(&s.id).unwrap();
            prop_assert_eq!(&history, &stored);
        }

        let history = engine.list_decisions(&s.id).unwrap();
        for (i, d) in history.iter().enumerate() {
            prop_assert_eq!(d.sequence, i as u64 + 1);
            prop_assert_eq!(d.status, statuses[i]);
        }
    }
}
