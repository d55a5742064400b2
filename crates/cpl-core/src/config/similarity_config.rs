use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::ConfigurationError;

/// Names accepted for `[similarity] backend`.
pub const KNOWN_BACKENDS: &[&str] = &["lexical", "hashed-embedding"];

/// Text similarity backend selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimilarityConfig {
    /// `lexical` (term-vector cosine) or `hashed-embedding`.
    pub backend: String,
    /// Vector size for the hashed embedding backend.
    pub dimensions: usize,
}

impl SimilarityConfig {
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if !KNOWN_BACKENDS.contains(&self.backend.as_str()) {
            return Err(ConfigurationError::UnknownBackend {
                name: self.backend.clone(),
            });
        }
        Ok(())
    }
}

impl Default for SimilarityConfig {
    fn default() -> Self {
        Self {
            backend: defaults::DEFAULT_SIMILARITY_BACKEND.to_string(),
            dimensions: defaults::DEFAULT_EMBEDDING_DIMENSIONS,
        }
    }
}
