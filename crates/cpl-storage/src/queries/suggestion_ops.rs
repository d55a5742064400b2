//! Suggestion inserts and reads. There is no update or delete.

use rusqlite::{params, Connection, OptionalExtension, Row};

use cpl_core::errors::{CplResult, ValidationError};
use cpl_core::models::{ConfidenceBand, ScoreCard, ScoringRun, Suggestion};

use super::{insert_err, run_ops};
use crate::clock::{format_ts, parse_ts};
use crate::{to_repo_err, to_serde_err};

const COLUMNS: &str = "id, run_id, external_unit_id, catalog_code, rank, band, card, created_at";

/// Insert suggestions, adding a run record for any run and unit pair not yet
/// recorded. Callers provide the transaction.
pub fn insert_suggestions(conn: &Connection, suggestions: &[Suggestion]) -> CplResult<usize> {
    for s in suggestions {
        let run = ScoringRun {
            run_id: s.run_id.clone(),
            external_unit_id: s.external_unit_id.clone(),
            created_at: s.created_at,
        };
        run_ops::ensure_run(conn, &run)?;
    }
    insert_rows(conn, suggestions)
}

/// Insert a run record followed by its suggestions. Callers provide the
/// transaction.
pub fn insert_run_with_suggestions(
    conn: &Connection,
    run: &ScoringRun,
    suggestions: &[Suggestion],
) -> CplResult<usize> {
    if let Some(stray) = suggestions
        .iter()
        .find(|s| s.run_id != run.run_id || s.external_unit_id != run.external_unit_id)
    {
        return Err(ValidationError::ForeignSuggestion {
            suggestion_id: stray.id.clone(),
            run_id: run.run_id.clone(),
        }
        .into());
    }
    run_ops::insert_run(conn, run)?;
    insert_rows(conn, suggestions)
}

fn insert_rows(conn: &Connection, suggestions: &[Suggestion]) -> CplResult<usize> {
    for s in suggestions {
        let card = serde_json::to_string(&s.card).map_err(|e| to_serde_err("score card", e))?;
        conn.execute(
            "INSERT INTO suggestions
                (id, run_id, external_unit_id, catalog_code, rank, band, score, card, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            params![
                s.id,
                s.run_id,
                s.external_unit_id,
                s.catalog_code,
                s.rank,
                s.band.as_str(),
                s.card.score,
                card,
                format_ts(&s.created_at),
            ],
        )
        .map_err(|e| insert_err("suggestions", e))?;
    }
    Ok(suggestions.len())
}

pub fn get_suggestion(conn: &Connection, id: &str) -> CplResult<Option<Suggestion>> {
    conn.query_row(
        &format!("SELECT {COLUMNS} FROM suggestions WHERE id = ?1"),
        params![id],
        raw_row,
    )
    .optional()
    .map_err(|e| to_repo_err(e.to_string()))?
    .map(RawSuggestionRow::into_suggestion)
    .transpose()
}

/// Newest run first (runs ordered by first insert), then by rank.
pub fn list_for_external(conn: &Connection, external_unit_id: &str) -> CplResult<Vec<Suggestion>> {
    let mut stmt = conn
        .prepare(&format!(
            "SELECT {COLUMNS} FROM suggestions s
             WHERE s.external_unit_id = ?1
             ORDER BY (SELECT MIN(r.rowid) FROM suggestions r WHERE r.run_id = s.run_id) DESC,
                      s.rank ASC"
        ))
        .map_err(|e| to_repo_err(e.to_string()))?;
    let rows = stmt
        .query_map(params![external_unit_id], raw_row)
        .map_err(|e| to_repo_err(e.to_string()))?;
    rows.map(|r| {
        r.map_err(|e| to_repo_err(e.to_string()))
            .and_then(RawSuggestionRow::into_suggestion)
    })
    .collect()
}

pub fn list_all(conn: &Connection) -> CplResult<Vec<Suggestion>> {
    let mut stmt = conn
        .prepare(&format!("SELECT {COLUMNS} FROM suggestions ORDER BY rowid"))
        .map_err(|e| to_repo_err(e.to_string()))?;
    let rows = stmt
        .query_map([], raw_row)
        .map_err(|e| to_repo_err(e.to_string()))?;
    rows.map(|r| {
        r.map_err(|e| to_repo_err(e.to_string()))
            .and_then(RawSuggestionRow::into_suggestion)
    })
    .collect()
}

struct RawSuggestionRow {
    id: String,
    run_id: String,
    external_unit_id: String,
    catalog_code: String,
    rank: u32,
    band: String,
    card: String,
    created_at: String,
}

impl RawSuggestionRow {
    fn into_suggestion(self) -> CplResult<Suggestion> {
        let band: ConfidenceBand = self
            .band
            .parse()
            .map_err(|e| to_serde_err("confidence band", e))?;
        let card: ScoreCard =
            serde_json::from_str(&self.card).map_err(|e| to_serde_err("score card", e))?;
        Ok(Suggestion {
            id: self.id,
            run_id: self.run_id,
            external_unit_id: self.external_unit_id,
            catalog_code: self.catalog_code,
            rank: self.rank,
            band,
            card,
            created_at: parse_ts(&self.created_at)?,
        })
    }
}

fn raw_row(row: &Row<'_>) -> rusqlite::Result<RawSuggestionRow> {
    Ok(RawSuggestionRow {
        id: row.get(0)?,
        run_id: row.get(1)?,
        external_unit_id: row.get(2)?,
        catalog_code: row.get(3)?,
        rank: row.get(4)?,
        band: row.get(5)?,
        card: row.get(6)?,
        created_at: row.get(7)?,
    })
}
