//! Command handlers. Each returns a JSON value that `main` prints.

use std::path::Path;

use anyhow::{bail, Context};
use chrono::Utc;
use serde_json::{json, Value};

use cpl_core::models::{CatalogUnitRecord, Decision, DecisionStatus, Enrichment, ExternalUnitRecord};
use cpl_core::traits::IMatchRepository;
use cpl_core::CplConfig;
use cpl_review::{build_export_rows, DecisionLog, ReviewState};
use cpl_scoring::{build_ranker, ScoringService};
use cpl_storage::StorageEngine;

use crate::Command;

/// Load and validate configuration, applying the `--db` override.
pub fn load_config(path: Option<&Path>, db: Option<&Path>) -> anyhow::Result<CplConfig> {
    let mut config = match path {
        Some(p) => CplConfig::from_file(p)?,
        None => CplConfig::default(),
    };
    if let Some(db) = db {
        config.storage.db_path = db.to_string_lossy().into_owned();
    }
    config.validate()?;
    Ok(config)
}

pub fn open_storage(config: &CplConfig) -> anyhow::Result<StorageEngine> {
    let path = Path::new(&config.storage.db_path);
    StorageEngine::open_with_pool(path, config.storage.read_pool_size)
        .with_context(|| format!("opening database {}", path.display()))
}

pub fn run(config: &CplConfig, command: Command) -> anyhow::Result<Value> {
    let engine = open_storage(config)?;
    let repo: &dyn IMatchRepository = &engine;

    match command {
        Command::Init => Ok(json!({
            "db_path": config.storage.db_path,
            "schema_version": engine.schema_version()?,
        })),

        Command::LoadCatalog { file } => {
            let records: Vec<CatalogUnitRecord> = read_json(&file)?;
            let units = records
                .into_iter()
                .map(CatalogUnitRecord::into_unit)
                .collect::<Result<Vec<_>, _>>()?;
            let count = repo.upsert_catalog(&units)?;
            Ok(json!({ "upserted": count }))
        }

        Command::AddUnits { file } => {
            let records: Vec<ExternalUnitRecord> = read_json(&file)?;
            let units = records
                .into_iter()
                .map(ExternalUnitRecord::into_unit)
                .collect::<Result<Vec<_>, _>>()?;
            repo.insert_external_units(&units)?;
            let added: Vec<Value> = units
                .iter()
                .map(|u| json!({ "id": u.id, "student_id": u.student_id, "unit_code": u.unit_code }))
                .collect();
            Ok(json!({ "added": added }))
        }

        Command::Enrich {
            external_unit_id,
            overview,
            outcomes,
            source_url,
            mode,
        } => {
            let enrichment = Enrichment {
                overview,
                outcomes,
                source_url,
                retrieval_mode: mode,
                retrieved_at: Utc::now(),
            };
            repo.update_enrichment(&external_unit_id, &enrichment)?;
            Ok(json!({
                "external_unit_id": external_unit_id,
                "has_content": enrichment.has_content(),
            }))
        }

        Command::Score { student, ids } => {
            let ids = if ids.is_empty() {
                repo.list_external_units(student.as_deref())?
                    .into_iter()
                    .map(|u| u.id)
                    .collect()
            } else {
                ids
            };
            let service = ScoringService::new(repo, build_ranker(config)?);
            let report = service.score_batch(&ids)?;
            Ok(serde_json::to_value(report)?)
        }

        Command::Suggestions { external_unit_id } => {
            Ok(serde_json::to_value(repo.list_suggestions(&external_unit_id)?)?)
        }

        Command::Decide {
            suggestion_id,
            status,
            reviewer,
            rationale,
            override_code,
        } => {
            let status: DecisionStatus = status.parse()?;
            if override_code.is_some() && status != DecisionStatus::Override {
                bail!("--override is only valid with --status override");
            }
            let mut decision = Decision::new(&suggestion_id, status, &reviewer, &rationale);
            if let Some(code) = &override_code {
                decision = decision.with_override(code);
            }
            let stored = DecisionLog::new(repo).record(&decision)?;
            Ok(serde_json::to_value(stored)?)
        }

        Command::History { suggestion_id } => {
            let log = DecisionLog::new(repo);
            let history = log.history(&suggestion_id)?;
            let state = ReviewState::resolve(&history);
            Ok(json!({
                "suggestion_id": suggestion_id,
                "effective_state": state,
                "decisions": history,
            }))
        }

        Command::Export { student } => {
            Ok(serde_json::to_value(build_export_rows(repo, student.as_deref())?)?)
        }
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parsing {}", path.display()))
}
