//! Argument parsing and command handlers for the `cpl` binary.

pub mod commands;
pub mod tracing_setup;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Match transcript units to catalog units and record reviewer decisions.
#[derive(Debug, Parser)]
#[command(name = "cpl", version, about, propagate_version = true)]
pub struct Cli {
    /// TOML configuration file. Defaults apply when omitted.
    #[arg(long, env = "CPL_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// SQLite database file, overriding `storage.db_path`.
    #[arg(long, env = "CPL_DB", global = true)]
    pub db: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Create or migrate the database.
    Init,
    /// Upsert catalog units from a JSON array of catalog records.
    LoadCatalog { file: PathBuf },
    /// Add transcript units from a JSON array of transcript records.
    AddUnits { file: PathBuf },
    /// Replace the enrichment cache of an external unit.
    Enrich {
        external_unit_id: String,
        #[arg(long, default_value = "")]
        overview: String,
        #[arg(long, default_value = "")]
        outcomes: String,
        #[arg(long, default_value = "")]
        source_url: String,
        #[arg(long, default_value = "manual")]
        mode: String,
    },
    /// Score external units against the catalog as one run.
    Score {
        /// Score every unit of this student.
        #[arg(long, conflicts_with = "ids")]
        student: Option<String>,
        /// External unit ids. Scores every stored unit when empty.
        ids: Vec<String>,
    },
    /// List stored suggestions of an external unit, newest run first.
    Suggestions { external_unit_id: String },
    /// Record a reviewer decision.
    Decide {
        suggestion_id: String,
        /// approved, rejected, needs_review or override.
        #[arg(long)]
        status: String,
        #[arg(long)]
        reviewer: String,
        #[arg(long, default_value = "")]
        rationale: String,
        /// Catalog unit granted instead (override only).
        #[arg(long = "override")]
        override_code: Option<String>,
    },
    /// Show the decision history and effective state of a suggestion.
    History { suggestion_id: String },
    /// Print export rows for the latest run of each unit.
    Export {
        #[arg(long)]
        student: Option<String>,
    },
}
