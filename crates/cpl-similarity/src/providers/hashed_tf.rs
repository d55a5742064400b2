//! Hashed term-frequency provider.
//!
//! Generates fixed-dimension vectors by hashing weighted term frequencies into
//! buckets. No model files and no network, so it works anywhere and is fully
//! deterministic.

use std::collections::BTreeMap;

use cpl_core::errors::CplResult;
use cpl_core::traits::IEmbeddingProvider;

use crate::tokenize::{term_weight, tokenize};

/// Hashed term-frequency embedding provider.
///
/// Less precise than the lexical backend (distinct terms can share a bucket),
/// but it exercises the embedding path end to end with a stable output.
#[derive(Debug, Clone)]
pub struct HashedTfProvider {
    dimensions: usize,
}

impl HashedTfProvider {
    pub fn new(dimensions: usize) -> Self {
        Self {
            dimensions: dimensions.max(1),
        }
    }

    /// Hash a term into a bucket index using FNV-1a.
    fn bucket(term: &str, dims: usize) -> usize {
        let mut h: u64 = 0xcbf29ce484222325;
        for b in term.as_bytes() {
            h ^= *b as u64;
            h = h.wrapping_mul(0x100000001b3);
        }
        (h % dims as u64) as usize
    }

    fn vector(&self, text: &str) -> Vec<f32> {
        let tokens = tokenize(text);
        let mut vec = vec![0.0f32; self.dimensions];
        if tokens.is_empty() {
            return vec;
        }

        let mut tf: BTreeMap<&str, f32> = BTreeMap::new();
        for tok in &tokens {
            *tf.entry(tok.as_str()).or_default() += 1.0;
        }

        let total = tokens.len() as f32;
        for (term, count) in tf {
            let bucket = Self::bucket(term, self.dimensions);
            vec[bucket] += (count / total) * term_weight(term) as f32;
        }

        let norm: f32 = vec.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > f32::EPSILON {
            for v in &mut vec {
                *v /= norm;
            }
        }
        vec
    }
}

impl IEmbeddingProvider for HashedTfProvider {
    fn embed(&self, text: &str) -> CplResult<Vec<f32>> {
        Ok(self.vector(text))
    }

    fn embed_batch(&self, texts: &[String]) -> CplResult<Vec<Vec<f32>>> {
        Ok(texts.iter().map(|t| self.vector(t)).collect())
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        "hashed-tf"
    }
}
