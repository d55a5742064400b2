//! Catalog unit upsert and lookup.

use rusqlite::{params, Connection, OptionalExtension, Row};

use cpl_core::errors::CplResult;
use cpl_core::models::CatalogUnit;

use crate::{to_repo_err, to_serde_err};

const COLUMNS: &str = "code, title, description, learning_outcomes, credit_points, aqf_level, course";

/// Insert or replace by code, in one transaction.
pub fn upsert_units(conn: &Connection, units: &[CatalogUnit]) -> CplResult<usize> {
    let tx = conn
        .unchecked_transaction()
        .map_err(|e| to_repo_err(e.to_string()))?;
    for unit in units {
        let outcomes = serde_json::to_string(&unit.learning_outcomes)
            .map_err(|e| to_serde_err("learning outcomes", e))?;
        tx.execute(
            "INSERT INTO catalog_units
                (code, title, description, learning_outcomes, credit_points, aqf_level, course)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
             ON CONFLICT(code) DO UPDATE SET
                title = excluded.title,
                description = excluded.description,
                learning_outcomes = excluded.learning_outcomes,
                credit_points = excluded.credit_points,
                aqf_level = excluded.aqf_level,
                course = excluded.course,
                updated_at = strftime('%Y-%m-%dT%H:%M:%fZ', 'now')",
            params![
                unit.code,
                unit.title,
                unit.description,
                outcomes,
                unit.credit_points,
                unit.aqf_level,
                unit.course,
            ],
        )
        .map_err(|e| to_repo_err(e.to_string()))?;
    }
    tx.commit().map_err(|e| to_repo_err(e.to_string()))?;
    Ok(units.len())
}

pub fn load_all(conn: &Connection) -> CplResult<Vec<CatalogUnit>> {
    let mut stmt = conn
        .prepare(&format!("SELECT {COLUMNS} FROM catalog_units ORDER BY code"))
        .map_err(|e| to_repo_err(e.to_string()))?;
    let rows = stmt
        .query_map([], raw_row)
        .map_err(|e| to_repo_err(e.to_string()))?;
    rows.map(|r| r.map_err(|e| to_repo_err(e.to_string())).and_then(RawCatalogRow::into_unit))
        .collect()
}

pub fn get_unit(conn: &Connection, code: &str) -> CplResult<Option<CatalogUnit>> {
    conn.query_row(
        &format!("SELECT {COLUMNS} FROM catalog_units WHERE code = ?1"),
        params![code],
        raw_row,
    )
    .optional()
    .map_err(|e| to_repo_err(e.to_string()))?
    .map(RawCatalogRow::into_unit)
    .transpose()
}

struct RawCatalogRow {
    code: String,
    title: String,
    description: String,
    learning_outcomes: String,
    credit_points: f64,
    aqf_level: String,
    course: String,
}

impl RawCatalogRow {
    fn into_unit(self) -> CplResult<CatalogUnit> {
        let learning_outcomes = serde_json::from_str(&self.learning_outcomes)
            .map_err(|e| to_serde_err("learning outcomes", e))?;
        Ok(CatalogUnit {
            code: self.code,
            title: self.title,
            description: self.description,
            learning_outcomes,
            credit_points: self.credit_points,
            aqf_level: self.aqf_level,
            course: self.course,
        })
    }
}

fn raw_row(row: &Row<'_>) -> rusqlite::Result<RawCatalogRow> {
    Ok(RawCatalogRow {
        code: row.get(0)?,
        title: row.get(1)?,
        description: row.get(2)?,
        learning_outcomes: row.get(3)?,
        credit_points: row.get(4)?,
        aqf_level: row.get(5)?,
        course: row.get(6)?,
    })
}
