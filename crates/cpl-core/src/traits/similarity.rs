use crate::errors::CplResult;

/// Text similarity backend used by the score composer.
///
/// Implementations return a value in [0.0, 1.0] and apply the shared empty-text
/// policy: both empty is 1.0, exactly one empty is 0.0.
pub trait ITextSimilarity: Send + Sync {
    fn similarity(&self, a: &str, b: &str) -> CplResult<f64>;

    /// Backend name recorded on every score card.
    fn name(&self) -> &str;
}
