//! SQL operations grouped by table. Each function takes a borrowed connection;
//! locking and routing live in [`crate::StorageEngine`].

pub mod catalog_ops;
pub mod decision_ops;
pub mod external_ops;
pub mod run_ops;
pub mod suggestion_ops;

use rusqlite::ErrorCode;

use cpl_core::errors::{CplError, RepositoryError};

use crate::to_repo_err;

/// Map an insert failure, reporting a duplicate key on an insert-only table
/// as an append-only violation.
pub(crate) fn insert_err(table: &str, e: rusqlite::Error) -> CplError {
    let duplicate = e.sqlite_error_code() == Some(ErrorCode::ConstraintViolation)
        && e.to_string().contains("UNIQUE");
    if duplicate {
        RepositoryError::AppendOnlyViolation {
            table: table.to_string(),
            details: e.to_string(),
        }
        .into()
    } else {
        to_repo_err(e.to_string())
    }
}
