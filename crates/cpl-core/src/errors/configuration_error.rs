/// Invalid weight, bonus or ranking configuration.
///
/// Raised at construction time. Configuration is never silently normalised.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigurationError {
    #[error("weight '{component}' must be finite and non-negative, got {value}")]
    InvalidWeight { component: String, value: f64 },

    #[error("component weights must sum to 1.0, got {sum}")]
    WeightSum { sum: f64 },

    #[error("bonus '{name}' must be finite and non-negative, got {value}")]
    InvalidBonus { name: String, value: f64 },

    #[error("invalid ranking setting '{field}': {reason}")]
    InvalidRanking { field: String, reason: String },

    #[error("unknown similarity backend '{name}'")]
    UnknownBackend { name: String },

    #[error("failed to parse config: {reason}")]
    Parse { reason: String },
}
