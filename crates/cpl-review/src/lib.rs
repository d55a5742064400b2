//! # cpl-review
//!
//! The review side of a suggestion: an append-only decision log guarded by the
//! rationale policy, the effective state derived from it, and flat export rows.

pub mod decisions;
pub mod export;
pub mod state;

pub use decisions::DecisionLog;
pub use export::{build_export_rows, ExportRow};
pub use state::ReviewState;
