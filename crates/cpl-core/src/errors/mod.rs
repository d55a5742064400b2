mod configuration_error;
mod cpl_error;
mod repository_error;
mod validation_error;

pub use configuration_error::ConfigurationError;
pub use cpl_error::CplError;
pub use repository_error::RepositoryError;
pub use validation_error::ValidationError;

/// Convenience alias used across the workspace.
pub type CplResult<T> = Result<T, CplError>;
