use crate::errors::CplResult;
use crate::models::{CatalogUnit, Decision, Enrichment, ExternalUnit, ScoringRun, Suggestion};

/// Persistence contract for units, suggestions and decisions.
///
/// Suggestions and decisions are insert-only: there is deliberately no
/// update or delete operation for either.
pub trait IMatchRepository: Send + Sync {
    // --- Catalog ---
    /// Insert or replace catalog units by code. Returns the number written.
    fn upsert_catalog(&self, units: &[CatalogUnit]) -> CplResult<usize>;
    /// All catalog units, ordered by code.
    fn load_catalog(&self) -> CplResult<Vec<CatalogUnit>>;
    fn get_catalog_unit(&self, code: &str) -> CplResult<Option<CatalogUnit>>;

    // --- External units ---
    fn insert_external_units(&self, units: &[ExternalUnit]) -> CplResult<usize>;
    fn get_external_unit(&self, id: &str) -> CplResult<Option<ExternalUnit>>;
    /// External units, optionally restricted to one student, ordered by student then unit code.
    fn list_external_units(&self, student_id: Option<&str>) -> CplResult<Vec<ExternalUnit>>;
    /// Replace the enrichment cache of an external unit.
    fn update_enrichment(&self, id: &str, enrichment: &Enrichment) -> CplResult<()>;

    // --- Suggestions and runs (insert-only) ---
    /// Store suggestions. A run record is added for each `(run_id,
    /// external_unit_id)` pair not seen before.
    fn save_suggestions(&self, suggestions: &[Suggestion]) -> CplResult<usize>;
    /// Store a run record and its suggestions atomically. `suggestions` may be
    /// empty; every entry must carry the run's ids.
    fn record_run(&self, run: &ScoringRun, suggestions: &[Suggestion]) -> CplResult<usize>;
    /// Most recently recorded run for an external unit.
    fn latest_run(&self, external_unit_id: &str) -> CplResult<Option<ScoringRun>>;
    fn get_suggestion(&self, id: &str) -> CplResult<Option<Suggestion>>;
    /// Suggestions for one external unit, newest run first, then by rank.
    fn list_suggestions(&self, external_unit_id: &str) -> CplResult<Vec<Suggestion>>;
    /// Every stored suggestion, in insertion order.
    fn list_all_suggestions(&self) -> CplResult<Vec<Suggestion>>;

    // --- Decisions (append-only) ---
    /// Append a decision. The repository assigns `decided_at` and `sequence`
    /// and returns the row as stored.
    fn append_decision(&self, decision: &Decision) -> CplResult<Decision>;
    /// All decisions for a suggestion, oldest first.
    fn list_decisions(&self, suggestion_id: &str) -> CplResult<Vec<Decision>>;
}
