//! File-backed databases: restart survival, WAL mode, read pool routing.

mod common;

use std::sync::Arc;

use common::{catalog_unit, seeded_suggestion};
use cpl_core::models::{Decision, DecisionStatus};
use cpl_core::traits::IMatchRepository;
use cpl_storage::pool::pragmas::verify_wal_mode;
use cpl_storage::StorageEngine;

#[test]
fn data_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("cpl.db");

    let (suggestion_id, first) = {
        let engine = StorageEngine::open(&db_path).unwrap();
        let s = seeded_suggestion(&engine);
        let d = engine
            .append_decision(&Decision::new(&s.id, DecisionStatus::Approved, "alice", ""))
            .unwrap();
        (s.id, d)
    };

    let engine = StorageEngine::open(&db_path).unwrap();
    assert!(engine.get_suggestion(&suggestion_id).unwrap().is_some());
    assert_eq!(engine.load_catalog().unwrap().len(), 1);

    let second = engine
        .append_decision(&Decision::new(
            &suggestion_id,
            DecisionStatus::Override,
            "bob",
            "closer match in ITDS503",
        ))
        .unwrap();
    assert_eq!(second.sequence, 2);
    assert!(second.decided_at > first.decided_at);
    assert_eq!(engine.list_decisions(&suggestion_id).unwrap()[0], first);
}

#[test]
fn writer_uses_wal() {
    let dir = tempfile::tempdir().unwrap();
    let engine = StorageEngine::open(&dir.path().join("wal.db")).unwrap();
    let wal = engine
        .pool()
        .writer
        .with_conn(verify_wal_mode)
        .unwrap();
    assert!(wal);
}

#[test]
fn readers_see_committed_writes() {
    let dir = tempfile::tempdir().unwrap();
    let engine = StorageEngine::open_with_pool(&dir.path().join("pool.db"), 2).unwrap();
    assert_eq!(engine.pool().readers.as_ref().map(|r| r.size()), Some(2));

    engine
        .upsert_catalog(&[catalog_unit("ITCY601", "Cybersecurity Governance")])
        .unwrap();
    for _ in 0..4 {
        assert!(engine.get_catalog_unit("ITCY601").unwrap().is_some());
    }
}

#[test]
fn concurrent_appends_stay_strictly_ordered() {
    let dir = tempfile::tempdir().unwrap();
    let engine = Arc::new(StorageEngine::open(&dir.path().join("concurrent.db")).unwrap());
    let suggestion_id = seeded_suggestion(engine.as_ref()).id;

    let mut handles = vec![];
    for t in 0..4 {
        let engine = Arc::clone(&engine);
        let suggestion_id = suggestion_id.clone();
        handles.push(std::thread::spawn(move || {
            for _ in 0..10 {
                engine
                    .append_decision(&Decision::new(
                        &suggestion_id,
                        DecisionStatus::NeedsReview,
                        &format!("reviewer-{t}"),
                        "",
                    ))
                    .unwrap();
                let _ = engine.list_decisions(&suggestion_id).unwrap();
            }
        }));
    }
    for handle in handles {
        handle.join().expect("appender should not panic");
    }

    let history = engine.list_decisions(&suggestion_id).unwrap();
    assert_eq!(history.len(), 40);
    for pair in history.windows(2) {
        assert!(pair[1].decided_at > pair[0].decided_at);
        assert_eq!(pair[1].sequence, pair[0].sequence + 1);
    }
}

#[test]
fn appends_from_separate_connections_serialise() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("two-writers.db");
    let suggestion_id = {
        let engine = StorageEngine::open(&path).unwrap();
        seeded_suggestion(&engine).id
    };

    // Each engine owns its own write connection, as two `cpl` processes would.
    let handles: Vec<_> = (0..2)
        .map(|t| {
            let path = path.clone();
            let suggestion_id = suggestion_id.clone();
            std::thread::spawn(move || {
                let engine = StorageEngine::open(&path).unwrap();
                for _ in 0..10 {
                    engine
                        .append_decision(&Decision::new(
                            &suggestion_id,
                            DecisionStatus::NeedsReview,
                            &format!("process-{t}"),
                            "",
                        ))
                        .unwrap();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().expect("appender should not panic");
    }

    let engine = StorageEngine::open(&path).unwrap();
    let history = engine.list_decisions(&suggestion_id).unwrap();
    assert_eq!(history.len(), 20);
    let sequences: Vec<u64> = history.iter().map(|d| d.sequence).collect();
    assert_eq!(sequences, (1..=20).collect::<Vec<u64>>());
    for pair in history.windows(2) {
        assert!(pair[1].decided_at > pair[0].decided_at);
    }
}
