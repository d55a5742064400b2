//! Property tests for the similarity primitives.

use cpl_core::traits::ITextSimilarity;
use cpl_similarity::{credit_similarity, EmbeddingSimilarity, HashedTfProvider, LexicalSimilarity};
use proptest::prelude::*;

fn text() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-zA-Z]{1,10}", 0..12).prop_map(|words| words.join(" "))
}

proptest! {
    #[test]
    fn lexical_is_bounded_and_symmetric(a in text(), b in text()) {
        let sim = LexicalSimilarity::new();
        let ab = sim.similarity(&a, &b).unwrap();
        let ba = sim.similarity(&b, &a).unwrap();
        prop_assert!((0.0..=1.0).contains(&ab));
        prop_assert_eq!(ab.to_bits(), ba.to_bits());
    }

    #[test]
    fn lexical_self_similarity_is_one(a in text()) {
        let sim = LexicalSimilarity::new();
        prop_assert_eq!(sim.similarity(&a, &a).unwrap(), 1.0);
    }

    #[test]
    fn embedding_is_bounded_and_symmetric(a in text(), b in text()) {
        let sim = EmbeddingSimilarity::new(HashedTfProvider::new(64));
        let ab = sim.similarity(&a, &b).unwrap();
        let ba = sim.similarity(&b, &a).unwrap();
        prop_assert!((0.0..=1.0).contains(&ab));
        prop_assert!((ab - ba).abs() < 1e-12);
    }

    #[test]
    fn credit_is_bounded_and_symmetric(a in 0.0f64..100.0, b in 0.0f64..100.0, tol in 0.0f64..5.0) {
        let ab = credit_similarity(a, b, tol);
        prop_assert!((0.0..=1.0).contains(&ab));
        prop_assert_eq!(ab.to_bits(), credit_similarity(b, a, tol).to_bits());
    }

    #[test]
    fn credit_does_not_increase_with_distance(a in 1.0f64..50.0, d1 in 0.0f64..20.0, extra in 0.0f64..20.0) {
        let near = credit_similarity(a, a + d1, 0.0);
        let far = credit_similarity(a, a + d1 + extra, 0.0);
        prop_assert!(far <= near + 1e-12);
    }
}
