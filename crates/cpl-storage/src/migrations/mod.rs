//! Versioned schema migrations tracked in the `schema_version` table.

pub mod v001_units;
pub mod v002_review_tables;
pub mod v003_scoring_runs;

use rusqlite::{params, Connection};

use cpl_core::errors::{CplResult, RepositoryError};

use crate::to_repo_err;

type Migration = fn(&Connection) -> CplResult<()>;

const MIGRATIONS: &[(u32, Migration)] = &[
    (1, v001_units::migrate),
    (2, v002_review_tables::migrate),
    (3, v003_scoring_runs::migrate),
];

/// Latest schema version known to this build.
pub const LATEST_VERSION: u32 = 3;

/// Run all pending migrations, each in its own transaction.
pub fn run_migrations(conn: &Connection) -> CplResult<u32> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS schema_version (
            version     INTEGER PRIMARY KEY,
            applied_at  TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
        );",
    )
    .map_err(|e| to_repo_err(e.to_string()))?;

    let current = current_version(conn)?;
    for (version, migrate) in MIGRATIONS {
        if *version <= current {
            continue;
        }
        let failed = |reason: String| RepositoryError::MigrationFailed {
            version: *version,
            reason,
        };
        let tx = conn
            .unchecked_transaction()
            .map_err(|e| failed(e.to_string()))?;
        migrate(&tx).map_err(|e| failed(e.to_string()))?;
        tx.execute(
            "INSERT INTO schema_version (version) VALUES (?1)",
            params![version],
        )
        .map_err(|e| failed(e.to_string()))?;
        tx.commit().map_err(|e| failed(e.to_string()))?;
        tracing::info!(version = version, "applied migration");
    }
    current_version(conn)
}

/// Highest applied schema version, 0 for a fresh database.
pub fn current_version(conn: &Connection) -> CplResult<u32> {
    conn.query_row(
        "SELECT COALESCE(MAX(version), 0) FROM schema_version",
        [],
        |row| row.get(0),
    )
    .map_err(|e| to_repo_err(e.to_string()))
}
