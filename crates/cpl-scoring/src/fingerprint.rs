//! Content fingerprint of everything that influences a score.
//!
//! Two cards with the same fingerprint were produced from the same unit text,
//! grade, credits, enrichment, configuration and similarity backend.

use cpl_core::config::ScoringConfig;
use cpl_core::models::{CatalogUnit, ExternalUnit};

/// blake3 hex digest over the scoring inputs.
pub fn fingerprint(
    external: &ExternalUnit,
    catalog: &CatalogUnit,
    config: &ScoringConfig,
    method: &str,
) -> String {
    let mut hasher = blake3::Hasher::new();

    let outcomes = external.outcomes_text();
    for text in [
        external.title.as_str(),
        external.description_text(),
        outcomes.as_str(),
        external.grade.as_str(),
    ] {
        put_str(&mut hasher, text);
    }
    put_f64(&mut hasher, external.credit_points);
    hasher.update(&[external.has_enrichment_content() as u8]);

    let catalog_outcomes = catalog.outcomes_text();
    for text in [
        catalog.code.as_str(),
        catalog.title.as_str(),
        catalog.description.as_str(),
        catalog_outcomes.as_str(),
    ] {
        put_str(&mut hasher, text);
    }
    put_f64(&mut hasher, catalog.credit_points);

    for (_, weight) in config.weights.as_array() {
        put_f64(&mut hasher, weight);
    }
    put_f64(&mut hasher, config.grade_bonus);
    put_f64(&mut hasher, config.retrieval_bonus);
    put_f64(&mut hasher, config.credit_tolerance);
    put_str(&mut hasher, method);

    hasher.finalize().to_hex().to_string()
}

// Length-prefixed so adjacent fields cannot run together.
fn put_str(hasher: &mut blake3::Hasher, s: &str) {
    hasher.update(&(s.len() as u64).to_le_bytes());
    hasher.update(s.as_bytes());
}

fn put_f64(hasher: &mut blake3::Hasher, v: f64) {
    hasher.update(&v.to_bits().to_le_bytes());
}
