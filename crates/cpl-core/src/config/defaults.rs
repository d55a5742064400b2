// Single source of truth for all default values.

// --- Scoring ---
pub const DEFAULT_TITLE_WEIGHT: f64 = 0.20;
pub const DEFAULT_DESCRIPTION_WEIGHT: f64 = 0.35;
pub const DEFAULT_OUTCOMES_WEIGHT: f64 = 0.35;
pub const DEFAULT_CREDIT_WEIGHT: f64 = 0.10;
pub const DEFAULT_GRADE_BONUS: f64 = 0.05;
pub const DEFAULT_RETRIEVAL_BONUS: f64 = 0.08;
pub const DEFAULT_CREDIT_TOLERANCE: f64 = 0.0;

// --- Ranking ---
pub const DEFAULT_MIN_SCORE: f64 = 0.3;
pub const DEFAULT_ENFORCE_FLOOR: bool = false;
pub const DEFAULT_HIGH_CUTOFF: f64 = 0.70;
pub const DEFAULT_MEDIUM_CUTOFF: f64 = 0.45;

// --- Similarity ---
pub const DEFAULT_SIMILARITY_BACKEND: &str = "lexical";
pub const DEFAULT_EMBEDDING_DIMENSIONS: usize = 256;

// --- Storage ---
pub const DEFAULT_DB_FILENAME: &str = "cpl.db";
pub const DEFAULT_READ_POOL_SIZE: usize = 4;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
