//! One writer plus, for file-backed databases, a pool of read-only connections.

pub mod pragmas;
pub mod read_pool;
pub mod write_connection;

use std::path::Path;

use cpl_core::errors::CplResult;

pub use read_pool::ReadPool;
pub use write_connection::WriteConnection;

/// Manages the single write connection and the read connection pool.
pub struct ConnectionPool {
    pub writer: WriteConnection,
    /// Absent for in-memory databases, where separate connections would each
    /// see their own empty database.
    pub readers: Option<ReadPool>,
}

impl ConnectionPool {
    /// Open a connection pool for the given database file.
    ///
    /// The writer opens (and creates) the file before any reader connects.
    pub fn open(path: &Path, read_pool_size: usize) -> CplResult<Self> {
        let writer = WriteConnection::open(path)?;
        let readers = ReadPool::open(path, read_pool_size)?;
        Ok(Self {
            writer,
            readers: Some(readers),
        })
    }

    /// Open an in-memory database with the writer only.
    pub fn open_in_memory() -> CplResult<Self> {
        Ok(Self {
            writer: WriteConnection::open_in_memory()?,
            readers: None,
        })
    }
}
