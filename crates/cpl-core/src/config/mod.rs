pub mod defaults;
mod observability_config;
mod ranking_config;
mod scoring_config;
mod similarity_config;
mod storage_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use observability_config::ObservabilityConfig;
pub use ranking_config::RankingConfig;
pub use scoring_config::{ComponentWeights, ScoringConfig};
pub use similarity_config::SimilarityConfig;
pub use storage_config::StorageConfig;

use crate::errors::{ConfigurationError, CplResult};

/// Top-level configuration aggregating all subsystem configs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CplConfig {
    pub scoring: ScoringConfig,
    pub ranking: RankingConfig,
    pub similarity: SimilarityConfig,
    pub storage: StorageConfig,
    pub observability: ObservabilityConfig,
}

impl CplConfig {
    /// Parse a TOML string. Missing sections and fields take their defaults.
    pub fn from_toml(toml_str: &str) -> CplResult<Self> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigurationError::Parse {
            reason: e.to_string(),
        })?;
        Ok(config)
    }

    /// Read and parse a TOML file.
    pub fn from_file(path: &Path) -> CplResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| ConfigurationError::Parse {
            reason: format!("{}: {e}", path.display()),
        })?;
        Self::from_toml(&raw)
    }

    /// Validate the scoring and ranking sections.
    pub fn validate(&self) -> CplResult<()> {
        self.scoring.validate()?;
        self.ranking.validate()?;
        self.similarity.validate()?;
        Ok(())
    }
}
