//! External unit insert, lookup, and enrichment cache updates.

use rusqlite::{params, Connection, OptionalExtension, Row};

use cpl_core::errors::{CplError, CplResult};
use cpl_core::models::{Enrichment, ExternalUnit};

use crate::{to_repo_err, to_serde_err};

const COLUMNS: &str = "id, student_id, institution, unit_code, title, description, \
                       learning_outcomes, grade, credit_points, semester, enrichment";

pub fn insert_units(conn: &Connection, units: &[ExternalUnit]) -> CplResult<usize> {
    let tx = conn
        .unchecked_transaction()
        .map_err(|e| to_repo_err(e.to_string()))?;
    for unit in units {
        let outcomes = serde_json::to_string(&unit.learning_outcomes)
            .map_err(|e| to_serde_err("learning outcomes", e))?;
        let enrichment = unit
            .enrichment
            .as_ref()
            .map(serde_json::to_string)
            .transpose()
            .map_err(|e| to_serde_err("enrichment", e))?;
        tx.execute(
            "INSERT INTO external_units
                (id, student_id, institution, unit_code, title, description,
                 learning_outcomes, grade, credit_points, semester, enrichment)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
            params![
                unit.id,
                unit.student_id,
                unit.institution,
                unit.unit_code,
                unit.title,
                unit.description,
                outcomes,
                unit.grade,
                unit.credit_points,
                unit.semester,
                enrichment,
            ],
        )
        .map_err(|e| to_repo_err(e.to_string()))?;
    }
    tx.commit().map_err(|e| to_repo_err(e.to_string()))?;
    Ok(units.len())
}

pub fn get_unit(conn: &Connection, id: &str) -> CplResult<Option<ExternalUnit>> {
    conn.query_row(
        &format!("SELECT {COLUMNS} FROM external_units WHERE id = ?1"),
        params![id],
        raw_row,
    )
    .optional()
    .map_err(|e| to_repo_err(e.to_string()))?
    .map(RawExternalRow::into_unit)
    .transpose()
}

pub fn list_units(conn: &Connection, student_id: Option<&str>) -> CplResult<Vec<ExternalUnit>> {
    let mut stmt = conn
        .prepare(&format!(
            "SELECT {COLUMNS} FROM external_units
             WHERE ?1 IS NULL OR student_id = ?1
             ORDER BY student_id, unit_code, rowid"
        ))
        .map_err(|e| to_repo_err(e.to_string()))?;
    let rows = stmt
        .query_map(params![student_id], raw_row)
        .map_err(|e| to_repo_err(e.to_string()))?;
    rows.map(|r| r.map_err(|e| to_repo_err(e.to_string())).and_then(RawExternalRow::into_unit))
        .collect()
}

/// Replace the enrichment cache of one unit.
pub fn update_enrichment(conn: &Connection, id: &str, enrichment: &Enrichment) -> CplResult<()> {
    let json = serde_json::to_string(enrichment).map_err(|e| to_serde_err("enrichment", e))?;
    let changed = conn
        .execute(
            "UPDATE external_units SET enrichment = ?2 WHERE id = ?1",
            params![id, json],
        )
        .map_err(|e| to_repo_err(e.to_string()))?;
    if changed == 0 {
        return Err(CplError::ExternalUnitNotFound { id: id.to_string() });
    }
    Ok(())
}

struct RawExternalRow {
    id: String,
    student_id: String,
    institution: String,
    unit_code: String,
    title: String,
    description: String,
    learning_outcomes: String,
    grade: String,
    credit_points: f64,
    semester: String,
    enrichment: Option<String>,
}

impl RawExternalRow {
    fn into_unit(self) -> CplResult<ExternalUnit> {
        let learning_outcomes = serde_json::from_str(&self.learning_outcomes)
            .map_err(|e| to_serde_err("learning outcomes", e))?;
        let enrichment = self
            .enrichment
            .as_deref()
            .map(serde_json::from_str)
            .transpose()
            .map_err(|e| to_serde_err("enrichment", e))?;
        Ok(ExternalUnit {
            id: self.id,
            student_id: self.student_id,
            institution: self.institution,
            unit_code: self.unit_code,
            title: self.title,
            description: self.description,
            learning_outcomes,
            grade: self.grade,
            credit_points: self.credit_points,
            semester: self.semester,
            enrichment,
        })
    }
}

fn raw_row(row: &Row<'_>) -> rusqlite::Result<RawExternalRow> {
    Ok(RawExternalRow {
        id: row.get(0)?,
        student_id: row.get(1)?,
        institution: row.get(2)?,
        unit_code: row.get(3)?,
        title: row.get(4)?,
        description: row.get(5)?,
        learning_outcomes: row.get(6)?,
        grade: row.get(7)?,
        credit_points: row.get(8)?,
        semester: row.get(9)?,
        enrichment: row.get(10)?,
    })
}
