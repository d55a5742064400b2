use crate::models::DecisionStatus;

use super::{ConfigurationError, RepositoryError, ValidationError};

/// Top-level error for the CPL match engine.
#[derive(Debug, thiserror::Error)]
pub enum CplError {
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("repository error: {0}")]
    Repository(#[from] RepositoryError),

    #[error("rationale is required for a '{status}' decision")]
    RationaleRequired { status: DecisionStatus },

    #[error("external unit not found: {id}")]
    ExternalUnitNotFound { id: String },

    #[error("catalog unit not found: {code}")]
    CatalogUnitNotFound { code: String },

    #[error("suggestion not found: {id}")]
    SuggestionNotFound { id: String },

    #[error("similarity backend '{backend}' failed: {reason}")]
    SimilarityBackend { backend: String, reason: String },
}

impl CplError {
    /// Whether this error came from the storage layer.
    ///
    /// Batch operations record other failures per unit but must propagate
    /// these unchanged.
    pub fn is_repository(&self) -> bool {
        matches!(self, CplError::Repository(_))
    }
}
