//! StorageEngine: owns the connection pool, runs migrations, implements
//! `IMatchRepository`.

use std::path::Path;

use cpl_core::errors::CplResult;
use cpl_core::models::{
    CatalogUnit, Decision, Enrichment, ExternalUnit, ScoringRun, Suggestion,
};
use cpl_core::traits::IMatchRepository;

use crate::migrations;
use crate::pool::ConnectionPool;
use crate::queries::{catalog_ops, decision_ops, external_ops, run_ops, suggestion_ops};

/// SQLite-backed repository.
pub struct StorageEngine {
    pool: ConnectionPool,
}

impl StorageEngine {
    /// Open (or create) a database file with the default read pool size.
    pub fn open(path: &Path) -> CplResult<Self> {
        Self::open_with_pool(path, cpl_core::config::defaults::DEFAULT_READ_POOL_SIZE)
    }

    pub fn open_with_pool(path: &Path, read_pool_size: usize) -> CplResult<Self> {
        let pool = ConnectionPool::open(path, read_pool_size)?;
        let engine = Self { pool };
        engine.initialize()?;
        tracing::debug!(path = %path.display(), read_pool_size, "storage opened");
        Ok(engine)
    }

    /// Open an in-memory database. Reads go through the writer.
    pub fn open_in_memory() -> CplResult<Self> {
        let engine = Self {
            pool: ConnectionPool::open_in_memory()?,
        };
        engine.initialize()?;
        Ok(engine)
    }

    fn initialize(&self) -> CplResult<()> {
        self.pool.writer.with_conn(|conn| {
            migrations::run_migrations(conn)?;
            Ok(())
        })
    }

    pub fn pool(&self) -> &ConnectionPool {
        &self.pool
    }

    pub fn schema_version(&self) -> CplResult<u32> {
        self.with_reader(migrations::current_version)
    }

    /// Execute a read-only query on the best available connection.
    /// File-backed: the read pool. In-memory: the writer.
    pub fn with_reader<F, T>(&self, f: F) -> CplResult<T>
    where
        F: FnOnce(&rusqlite::Connection) -> CplResult<T>,
    {
        match &self.pool.readers {
            Some(readers) => readers.with_conn(f),
            None => self.pool.writer.with_conn(f),
        }
    }
}

impl IMatchRepository for StorageEngine {
    fn upsert_catalog(&self, units: &[CatalogUnit]) -> CplResult<usize> {
        let n = self
            .pool
            .writer
            .with_conn(|conn| catalog_ops::upsert_units(conn, units))?;
        tracing::info!(count = n, "catalog upserted");
        Ok(n)
    }

    fn load_catalog(&self) -> CplResult<Vec<CatalogUnit>> {
        self.with_reader(catalog_ops::load_all)
    }

    fn get_catalog_unit(&self, code: &str) -> CplResult<Option<CatalogUnit>> {
        self.with_reader(|conn| catalog_ops::get_unit(conn, code))
    }

    fn insert_external_units(&self, units: &[ExternalUnit]) -> CplResult<usize> {
        self.pool
            .writer
            .with_conn(|conn| external_ops::insert_units(conn, units))
    }

    fn get_external_unit(&self, id: &str) -> CplResult<Option<ExternalUnit>> {
        self.with_reader(|conn| external_ops::get_unit(conn, id))
    }

    fn list_external_units(&self, student_id: Option<&str>) -> CplResult<Vec<ExternalUnit>> {
        self.with_reader(|conn| external_ops::list_units(conn, student_id))
    }

    fn update_enrichment(&self, id: &str, enrichment: &Enrichment) -> CplResult<()> {
        self.pool
            .writer
            .with_conn(|conn| external_ops::update_enrichment(conn, id, enrichment))
    }

    fn save_suggestions(&self, suggestions: &[Suggestion]) -> CplResult<usize> {
        self.pool
            .writer
            .with_immediate_tx(|tx| suggestion_ops::insert_suggestions(tx, suggestions))
    }

    fn record_run(&self, run: &ScoringRun, suggestions: &[Suggestion]) -> CplResult<usize> {
        let n = self.pool.writer.with_immediate_tx(|tx| {
            suggestion_ops::insert_run_with_suggestions(tx, run, suggestions)
        })?;
        tracing::debug!(
            run_id = %run.run_id,
            external_unit_id = %run.external_unit_id,
            suggestions = n,
            "run recorded"
        );
        Ok(n)
    }

    fn latest_run(&self, external_unit_id: &str) -> CplResult<Option<ScoringRun>> {
        self.with_reader(|conn| run_ops::latest_for_external(conn, external_unit_id))
    }

    fn get_suggestion(&self, id: &str) -> CplResult<Option<Suggestion>> {
        self.with_reader(|conn| suggestion_ops::get_suggestion(conn, id))
    }

    fn list_suggestions(&self, external_unit_id: &str) -> CplResult<Vec<Suggestion>> {
        self.with_reader(|conn| suggestion_ops::list_for_external(conn, external_unit_id))
    }

    fn list_all_suggestions(&self) -> CplResult<Vec<Suggestion>> {
        self.with_reader(suggestion_ops::list_all)
    }

    fn append_decision(&self, decision: &Decision) -> CplResult<Decision> {
        let stored = self
            .pool
            .writer
            .with_immediate_tx(|tx| decision_ops::append(tx, decision))?;
        tracing::info!(
            suggestion_id = %stored.suggestion_id,
            status = %stored.status,
            sequence = stored.sequence,
            "decision appended"
        );
        Ok(stored)
    }

    fn list_decisions(&self, suggestion_id: &str) -> CplResult<Vec<Decision>> {
        self.with_reader(|conn| decision_ops::list_for_suggestion(conn, suggestion_id))
    }
}
