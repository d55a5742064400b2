//! v001: catalog_units, external_units.

use rusqlite::Connection;

use cpl_core::errors::CplResult;

use crate::to_repo_err;

pub fn migrate(conn: &Connection) -> CplResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS catalog_units (
            code              TEXT PRIMARY KEY,
            title             TEXT NOT NULL,
            description       TEXT NOT NULL DEFAULT '',
            learning_outcomes TEXT NOT NULL DEFAULT '[]',
            credit_points     REAL NOT NULL,
            aqf_level         TEXT NOT NULL DEFAULT '',
            course            TEXT NOT NULL DEFAULT '',
            updated_at        TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
        );

        CREATE TABLE IF NOT EXISTS external_units (
            id                TEXT PRIMARY KEY,
            student_id        TEXT NOT NULL,
            institution       TEXT NOT NULL DEFAULT '',
            unit_code         TEXT NOT NULL,
            title             TEXT NOT NULL,
            description       TEXT NOT NULL DEFAULT '',
            learning_outcomes TEXT NOT NULL DEFAULT '[]',
            grade             TEXT NOT NULL DEFAULT '',
            credit_points     REAL NOT NULL,
            semester          TEXT NOT NULL DEFAULT '',
            enrichment        TEXT,
            created_at        TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
        );

        CREATE INDEX IF NOT EXISTS idx_external_student ON external_units(student_id);
        ",
    )
    .map_err(|e| to_repo_err(e.to_string()))?;
    Ok(())
}
