//! # cpl-core
//!
//! Foundation crate for the CPL match engine.
//! Defines the unit, suggestion and decision types, the similarity and
//! repository traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::CplConfig;
pub use errors::{CplError, CplResult};
pub use models::{
    CatalogUnit, ConfidenceBand, Decision, DecisionStatus, ExternalUnit, GradeStatus, ScoreCard,
    ScoringRun, Suggestion,
};
