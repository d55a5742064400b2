//! Decision log: append and ordered reads. There is no update or delete.

use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension, Row};

use cpl_core::errors::CplResult;
use cpl_core::models::{Decision, DecisionStatus};

use super::insert_err;
use crate::clock::{format_ts, next_stamp, parse_ts, Stamp};
use crate::{to_repo_err, to_serde_err};

const COLUMNS: &str =
    "id, suggestion_id, seq, status, rationale, reviewer, override_catalog_code, decided_at";

/// Append a decision, assigning its timestamp and sequence.
///
/// The read of the previous stamp and the insert must share one IMMEDIATE
/// transaction, which the caller opens.
pub fn append(conn: &Connection, decision: &Decision) -> CplResult<Decision> {
    let previous = last_stamp(conn, &decision.suggestion_id)?;
    let stamp = next_stamp(previous, Utc::now())?;

    conn.execute(
        "INSERT INTO decisions
            (id, suggestion_id, seq, status, rationale, reviewer, override_catalog_code, decided_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            decision.id,
            decision.suggestion_id,
            stamp.sequence as i64,
            decision.status.as_str(),
            decision.rationale,
            decision.reviewer,
            decision.override_catalog_code,
            format_ts(&stamp.decided_at),
        ],
    )
    .map_err(|e| insert_err("decisions", e))?;

    Ok(Decision {
        decided_at: stamp.decided_at,
        sequence: stamp.sequence,
        ..decision.clone()
    })
}

fn last_stamp(conn: &Connection, suggestion_id: &str) -> CplResult<Option<Stamp>> {
    let row: Option<(String, i64)> = conn
        .query_row(
            "SELECT decided_at, seq FROM decisions
             WHERE suggestion_id = ?1 ORDER BY seq DESC LIMIT 1",
            params![suggestion_id],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )
        .optional()
        .map_err(|e| to_repo_err(e.to_string()))?;
    row.map(|(ts, seq)| {
        Ok(Stamp {
            decided_at: parse_ts(&ts)?,
            sequence: seq as u64,
        })
    })
    .transpose()
}

/// All decisions for a suggestion, oldest first.
pub fn list_for_suggestion(conn: &Connection, suggestion_id: &str) -> CplResult<Vec<Decision>> {
    let mut stmt = conn
        .prepare(&format!(
            "SELECT {COLUMNS} FROM decisions
             WHERE suggestion_id = ?1
             ORDER BY decided_at ASC, seq ASC"
        ))
        .map_err(|e| to_repo_err(e.to_string()))?;
    let rows = stmt
        .query_map(params![suggestion_id], raw_row)
        .map_err(|e| to_repo_err(e.to_string()))?;
    rows.map(|r| {
        r.map_err(|e| to_repo_err(e.to_string()))
            .and_then(RawDecisionRow::into_decision)
    })
    .collect()
}

struct RawDecisionRow {
    id: String,
    suggestion_id: String,
    seq: i64,
    status: String,
    rationale: String,
    reviewer: String,
    override_catalog_code: Option<String>,
    decided_at: String,
}

impl RawDecisionRow {
    fn into_decision(self) -> CplResult<Decision> {
        let status: DecisionStatus = self
            .status
            .parse()
            .map_err(|e| to_serde_err("decision status", e))?;
        Ok(Decision {
            id: self.id,
            suggestion_id: self.suggestion_id,
            status,
            rationale: self.rationale,
            reviewer: self.reviewer,
            override_catalog_code: self.override_catalog_code,
            decided_at: parse_ts(&self.decided_at)?,
            sequence: self.seq as u64,
        })
    }
}

fn raw_row(row: &Row<'_>) -> rusqlite::Result<RawDecisionRow> {
    Ok(RawDecisionRow {
        id: row.get(0)?,
        suggestion_id: row.get(1)?,
        seq: row.get(2)?,
        status: row.get(3)?,
        rationale: row.get(4)?,
        reviewer: row.get(5)?,
        override_catalog_code: row.get(6)?,
        decided_at: row.get(7)?,
    })
}
