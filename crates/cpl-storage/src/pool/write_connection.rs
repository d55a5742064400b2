//! The single write connection. Every insert, enrichment update and decision
//! append goes through it, so writers inside one process never contend on
//! SQLite's lock.

use std::path::Path;
use std::sync::Mutex;

use rusqlite::{Connection, Transaction, TransactionBehavior};

use cpl_core::errors::CplResult;

use super::pragmas::apply_pragmas;
use crate::to_repo_err;

pub struct WriteConnection {
    conn: Mutex<Connection>,
}

impl WriteConnection {
    pub fn open(path: &Path) -> CplResult<Self> {
        let conn = Connection::open(path).map_err(|e| to_repo_err(e.to_string()))?;
        Self::from_connection(conn)
    }

    pub fn open_in_memory() -> CplResult<Self> {
        let conn = Connection::open_in_memory().map_err(|e| to_repo_err(e.to_string()))?;
        Self::from_connection(conn)
    }

    fn from_connection(conn: Connection) -> CplResult<Self> {
        apply_pragmas(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Run `f` with the write lock held.
    pub fn with_conn<F, T>(&self, f: F) -> CplResult<T>
    where
        F: FnOnce(&Connection) -> CplResult<T>,
    {
        let guard = self
            .conn
            .lock()
            .map_err(|e| to_repo_err(format!("write connection lock poisoned: {e}")))?;
        f(&guard)
    }

    /// Run `f` inside a `BEGIN IMMEDIATE` transaction and commit on success.
    ///
    /// IMMEDIATE takes SQLite's reserved lock up front, so a read-then-insert
    /// in `f` cannot interleave with another process writing the same file.
    /// On error the transaction rolls back when dropped.
    pub fn with_immediate_tx<F, T>(&self, f: F) -> CplResult<T>
    where
        F: FnOnce(&Transaction<'_>) -> CplResult<T>,
    {
        self.with_conn(|conn| {
            let tx = Transaction::new_unchecked(conn, TransactionBehavior::Immediate)
                .map_err(|e| to_repo_err(e.to_string()))?;
            let value = f(&tx)?;
            tx.commit().map_err(|e| to_repo_err(e.to_string()))?;
            Ok(value)
        })
    }
}
