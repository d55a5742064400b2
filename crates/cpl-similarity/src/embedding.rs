//! Cosine similarity over provider embeddings.

use cpl_core::errors::{CplError, CplResult};
use cpl_core::traits::{IEmbeddingProvider, ITextSimilarity};

use crate::policy;

/// Text similarity backed by an embedding provider.
///
/// Negative cosines are treated as "no similarity" so the result stays in
/// [0.0, 1.0]. A zero vector on either side scores 0.0.
pub struct EmbeddingSimilarity<P: IEmbeddingProvider> {
    provider: P,
    name: String,
}

impl<P: IEmbeddingProvider> EmbeddingSimilarity<P> {
    pub fn new(provider: P) -> Self {
        let name = format!("embedding:{}", provider.name());
        Self { provider, name }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    fn cosine(&self, a: &[f32], b: &[f32]) -> CplResult<f64> {
        if a.len() != b.len() {
            return Err(CplError::SimilarityBackend {
                backend: self.name.clone(),
                reason: format!("dimension mismatch: {} vs {}", a.len(), b.len()),
            });
        }
        let dot: f64 = a.iter().zip(b).map(|(x, y)| *x as f64 * *y as f64).sum();
        let na: f64 = a.iter().map(|x| (*x as f64).powi(2)).sum::<f64>().sqrt();
        let nb: f64 = b.iter().map(|x| (*x as f64).powi(2)).sum::<f64>().sqrt();
        if na <= f64::EPSILON || nb <= f64::EPSILON {
            return Ok(0.0);
        }
        Ok((dot / (na * nb)).clamp(0.0, 1.0))
    }
}

impl<P: IEmbeddingProvider> ITextSimilarity for EmbeddingSimilarity<P> {
    fn similarity(&self, a: &str, b: &str) -> CplResult<f64> {
        if let Some(resolved) = policy::resolve(a, b) {
            return Ok(resolved);
        }
        let va = self.provider.embed(a)?;
        let vb = self.provider.embed(b)?;
        self.cosine(&va, &vb)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
