//! # cpl-similarity
//!
//! Similarity primitives for the score composer. Every text backend returns a
//! value in [0.0, 1.0] and shares one empty-text policy, so the composer does
//! not care which backend produced a number.
//!
//! - [`LexicalSimilarity`]: cosine over weighted term vectors (default)
//! - [`EmbeddingSimilarity`]: cosine over vectors from any
//!   [`IEmbeddingProvider`](cpl_core::traits::IEmbeddingProvider)
//! - [`credit_similarity`]: numeric credit agreement

pub mod credit;
pub mod embedding;
pub mod lexical;
pub mod policy;
pub mod providers;
pub mod tokenize;

use std::sync::Arc;

use cpl_core::config::SimilarityConfig;
use cpl_core::errors::{ConfigurationError, CplResult};
use cpl_core::traits::ITextSimilarity;

pub use credit::credit_similarity;
pub use embedding::EmbeddingSimilarity;
pub use lexical::LexicalSimilarity;
pub use providers::HashedTfProvider;

/// Build the text similarity backend named in config.
pub fn build_similarity(config: &SimilarityConfig) -> CplResult<Arc<dyn ITextSimilarity>> {
    let backend: Arc<dyn ITextSimilarity> = match config.backend.as_str() {
        "lexical" => Arc::new(LexicalSimilarity::new()),
        "hashed-embedding" => Arc::new(EmbeddingSimilarity::new(HashedTfProvider::new(
            config.dimensions.max(1),
        ))),
        other => {
            return Err(ConfigurationError::UnknownBackend {
                name: other.to_string(),
            }
            .into())
        }
    };
    tracing::debug!(backend = backend.name(), "similarity backend ready");
    Ok(backend)
}
