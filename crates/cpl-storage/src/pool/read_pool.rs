//! Read-only connections for file-backed databases. Under WAL they see the
//! last committed state and never wait on the writer.

use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard, TryLockError};

use rusqlite::{Connection, OpenFlags};

use cpl_core::errors::CplResult;

use super::pragmas::apply_read_pragmas;
use crate::to_repo_err;

/// Upper bound on reader connections regardless of configuration.
pub const MAX_READERS: usize = 8;

pub struct ReadPool {
    connections: Vec<Mutex<Connection>>,
    cursor: AtomicUsize,
}

impl ReadPool {
    /// Open `size` readers, clamped to `1..=MAX_READERS`. The file must exist.
    pub fn open(path: &Path, size: usize) -> CplResult<Self> {
        let connections = (0..size.clamp(1, MAX_READERS))
            .map(|_| open_reader(path).map(Mutex::new))
            .collect::<CplResult<Vec<_>>>()?;
        Ok(Self {
            connections,
            cursor: AtomicUsize::new(0),
        })
    }

    /// Run `f` on a reader. Starts from the next slot in rotation and takes
    /// the first idle connection, blocking on the starting slot only when
    /// every reader is busy.
    pub fn with_conn<F, T>(&self, f: F) -> CplResult<T>
    where
        F: FnOnce(&Connection) -> CplResult<T>,
    {
        let guard = self.acquire()?;
        f(&guard)
    }

    pub fn size(&self) -> usize {
        self.connections.len()
    }

    fn acquire(&self) -> CplResult<MutexGuard<'_, Connection>> {
        let len = self.connections.len();
        let start = self.cursor.fetch_add(1, Ordering::Relaxed) % len;
        for offset in 0..len {
            match self.connections[(start + offset) % len].try_lock() {
                Ok(guard) => return Ok(guard),
                Err(TryLockError::WouldBlock) => continue,
                Err(TryLockError::Poisoned(e)) => {
                    return Err(to_repo_err(format!("reader lock poisoned: {e}")))
                }
            }
        }
        self.connections[start]
            .lock()
            .map_err(|e| to_repo_err(format!("reader lock poisoned: {e}")))
    }
}

fn open_reader(path: &Path) -> CplResult<Connection> {
    let conn = Connection::open_with_flags(
        path,
        OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
    )
    .map_err(|e| to_repo_err(e.to_string()))?;
    apply_read_pragmas(&conn)?;
    Ok(conn)
}
