/// Storage-layer failures. Always propagated to the caller unchanged.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("SQLite error: {message}")]
    SqliteError { message: String },

    #[error("migration failed at version {version}: {reason}")]
    MigrationFailed { version: u32, reason: String },

    #[error("{table} rows are append-only: {details}")]
    AppendOnlyViolation { table: String, details: String },

    #[error("failed to (de)serialize {what}: {reason}")]
    Serialization { what: String, reason: String },
}
