//! Scoring run records. Insert-only, like the suggestions they index.

use rusqlite::{params, Connection, OptionalExtension};

use cpl_core::errors::CplResult;
use cpl_core::models::ScoringRun;

use super::insert_err;
use crate::clock::{format_ts, parse_ts};
use crate::to_repo_err;

/// Insert a run record. A second record for the same run and unit is an
/// append-only violation.
pub fn insert_run(conn: &Connection, run: &ScoringRun) -> CplResult<()> {
    conn.execute(
        "INSERT INTO scoring_runs (run_id, external_unit_id, created_at) VALUES (?1, ?2, ?3)",
        params![run.run_id, run.external_unit_id, format_ts(&run.created_at)],
    )
    .map_err(|e| insert_err("scoring_runs", e))?;
    Ok(())
}

/// Insert a run record unless one already exists for the pair.
pub fn ensure_run(conn: &Connection, run: &ScoringRun) -> CplResult<()> {
    conn.execute(
        "INSERT OR IGNORE INTO scoring_runs (run_id, external_unit_id, created_at)
         VALUES (?1, ?2, ?3)",
        params![run.run_id, run.external_unit_id, format_ts(&run.created_at)],
    )
    .map_err(|e| insert_err("scoring_runs", e))?;
    Ok(())
}

/// Latest run by insertion order.
pub fn latest_for_external(
    conn: &Connection,
    external_unit_id: &str,
) -> CplResult<Option<ScoringRun>> {
    let row: Option<(String, String, String)> = conn
        .query_row(
            "SELECT run_id, external_unit_id, created_at FROM scoring_runs
             WHERE external_unit_id = ?1 ORDER BY rowid DESC LIMIT 1",
            params![external_unit_id],
            |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
        )
        .optional()
        .map_err(|e| to_repo_err(e.to_string()))?;
    row.map(|(run_id, external_unit_id, created_at)| {
        Ok(ScoringRun {
            run_id,
            external_unit_id,
            created_at: parse_ts(&created_at)?,
        })
    })
    .transpose()
}
