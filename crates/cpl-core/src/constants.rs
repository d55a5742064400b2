/// Engine version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Tolerance used when checking that component weights sum to 1.0.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-9;

/// Description similarity below this counts as no content evidence.
pub const TITLE_ONLY_DESCRIPTION_MAX: f64 = 0.20;

/// Outcome similarity below this counts as no content evidence.
pub const TITLE_ONLY_OUTCOMES_MAX: f64 = 0.15;

/// Separator used when joining learning-outcome statements into one text.
pub const OUTCOME_SEPARATOR: &str = "\n";

/// Environment variable read for log filtering.
pub const LOG_ENV_VAR: &str = "CPL_LOG";
