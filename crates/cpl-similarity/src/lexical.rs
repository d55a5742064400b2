//! Cosine similarity over weighted term vectors.
//!
//! Vectors are sorted maps so accumulation order is fixed: the same pair
//! always yields the same bits, and swapping the arguments changes nothing.

use std::collections::BTreeMap;

use cpl_core::errors::CplResult;
use cpl_core::traits::ITextSimilarity;

use crate::policy;
use crate::tokenize::{term_weight, tokenize};

/// Lexical text similarity: tf × length-weight term vectors compared by cosine.
#[derive(Debug, Clone, Copy, Default)]
pub struct LexicalSimilarity;

impl LexicalSimilarity {
    pub fn new() -> Self {
        Self
    }

    fn term_vector(text: &str) -> BTreeMap<String, f64> {
        let tokens = tokenize(text);
        let total = tokens.len() as f64;
        let mut counts: BTreeMap<String, f64> = BTreeMap::new();
        for tok in tokens {
            *counts.entry(tok).or_default() += 1.0;
        }
        counts
            .into_iter()
            .map(|(term, count)| {
                let w = (count / total) * term_weight(&term);
                (term, w)
            })
            .collect()
    }

    /// Cosine of two sparse vectors, clamped to [0.0, 1.0].
    fn cosine(a: &BTreeMap<String, f64>, b: &BTreeMap<String, f64>) -> f64 {
        let norm = |v: &BTreeMap<String, f64>| v.values().map(|x| x * x).sum::<f64>().sqrt();
        let (na, nb) = (norm(a), norm(b));
        if na <= f64::EPSILON || nb <= f64::EPSILON {
            return 0.0;
        }
        // Shared keys come out in sorted order whichever side drives the walk.
        let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
        let dot: f64 = small
            .iter()
            .filter_map(|(k, x)| large.get(k).map(|y| x * y))
            .sum();
        (dot / (na * nb)).clamp(0.0, 1.0)
    }

    /// Similarity without going through the trait (never fails).
    pub fn compare(&self, a: &str, b: &str) -> f64 {
        if let Some(resolved) = policy::resolve(a, b) {
            return resolved;
        }
        Self::cosine(&Self::term_vector(a), &Self::term_vector(b))
    }
}

impl ITextSimilarity for LexicalSimilarity {
    fn similarity(&self, a: &str, b: &str) -> CplResult<f64> {
        Ok(self.compare(a, b))
    }

    fn name(&self) -> &str {
        "lexical-cosine"
    }
}
