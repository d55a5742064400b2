//! v002: suggestions, decisions, and the triggers that make both append-only.

use rusqlite::Connection;

use cpl_core::errors::CplResult;

use crate::to_repo_err;

pub fn migrate(conn: &Connection) -> CplResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS suggestions (
            id                TEXT PRIMARY KEY,
            run_id            TEXT NOT NULL,
            external_unit_id  TEXT NOT NULL REFERENCES external_units(id),
            catalog_code      TEXT NOT NULL,
            rank              INTEGER NOT NULL,
            band              TEXT NOT NULL,
            score             REAL NOT NULL,
            card              TEXT NOT NULL,
            created_at        TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_suggestions_external ON suggestions(external_unit_id);
        CREATE INDEX IF NOT EXISTS idx_suggestions_run ON suggestions(run_id);

        CREATE TABLE IF NOT EXISTS decisions (
            id                    TEXT PRIMARY KEY,
            suggestion_id         TEXT NOT NULL REFERENCES suggestions(id),
            seq                   INTEGER NOT NULL,
            status                TEXT NOT NULL
                CHECK (status IN ('approved', 'rejected', 'needs_review', 'override')),
            rationale             TEXT NOT NULL DEFAULT '',
            reviewer              TEXT NOT NULL DEFAULT '',
            override_catalog_code TEXT,
            decided_at            TEXT NOT NULL,
            UNIQUE (suggestion_id, seq)
        );

        CREATE INDEX IF NOT EXISTS idx_decisions_suggestion
            ON decisions(suggestion_id, decided_at, seq);

        CREATE TRIGGER IF NOT EXISTS suggestions_no_update BEFORE UPDATE ON suggestions BEGIN
            SELECT RAISE(ABORT, 'suggestions are append-only');
        END;
        CREATE TRIGGER IF NOT EXISTS suggestions_no_delete BEFORE DELETE ON suggestions BEGIN
            SELECT RAISE(ABORT, 'suggestions are append-only');
        END;
        CREATE TRIGGER IF NOT EXISTS decisions_no_update BEFORE UPDATE ON decisions BEGIN
            SELECT RAISE(ABORT, 'decisions are append-only');
        END;
        CREATE TRIGGER IF NOT EXISTS decisions_no_delete BEFORE DELETE ON decisions BEGIN
            SELECT RAISE(ABORT, 'decisions are append-only');
        END;
        ",
    )
    .map_err(|e| to_repo_err(e.to_string()))?;
    Ok(())
}
