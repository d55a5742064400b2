//! # cpl-storage
//!
//! SQLite implementation of [`IMatchRepository`](cpl_core::traits::IMatchRepository):
//! one serialised write connection, a read pool for file-backed databases,
//! versioned migrations, and triggers that keep suggestions and decisions
//! append-only.

pub mod clock;
pub mod engine;
pub mod migrations;
pub mod pool;
pub mod queries;

pub use engine::StorageEngine;

use cpl_core::errors::{CplError, RepositoryError};

/// Convert a storage error message into a `CplError`.
pub fn to_repo_err(msg: String) -> CplError {
    RepositoryError::SqliteError { message: msg }.into()
}

/// Convert a (de)serialization failure into a `CplError`.
pub(crate) fn to_serde_err(what: &str, reason: impl ToString) -> CplError {
    RepositoryError::Serialization {
        what: what.to_string(),
        reason: reason.to_string(),
    }
    .into()
}
