//! v003: one row per external unit per scoring run, so a run that produced
//! no suggestions is still the latest run for its unit.

use rusqlite::Connection;

use cpl_core::errors::CplResult;

use crate::to_repo_err;

pub fn migrate(conn: &Connection) -> CplResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS scoring_runs (
            run_id            TEXT NOT NULL,
            external_unit_id  TEXT NOT NULL REFERENCES external_units(id),
            created_at        TEXT NOT NULL,
            PRIMARY KEY (run_id, external_unit_id)
        );

        CREATE INDEX IF NOT EXISTS idx_scoring_runs_external ON scoring_runs(external_unit_id);

        INSERT OR IGNORE INTO scoring_runs (run_id, external_unit_id, created_at)
            SELECT run_id, external_unit_id, MIN(created_at)
            FROM suggestions
            GROUP BY run_id, external_unit_id
            ORDER BY MIN(rowid);

        CREATE TRIGGER IF NOT EXISTS scoring_runs_no_update BEFORE UPDATE ON scoring_runs BEGIN
            SELECT RAISE(ABORT, 'scoring runs are append-only');
        END;
        CREATE TRIGGER IF NOT EXISTS scoring_runs_no_delete BEFORE DELETE ON scoring_runs BEGIN
            SELECT RAISE(ABORT, 'scoring runs are append-only');
        END;
        ",
    )
    .map_err(|e| to_repo_err(e.to_string()))?;
    Ok(())
}
