//! Term extraction shared by the lexical and hashed backends.

/// Common English words carrying no subject information.
const STOP_WORDS: &[&str] = &[
    "an", "and", "are", "as", "at", "be", "by", "for", "from", "in", "into", "is", "it", "its",
    "of", "on", "or", "the", "their", "this", "to", "with",
];

/// Lowercase alphanumeric terms of length ≥ 2, stop words removed.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|s| s.chars().count() >= 2)
        .map(|s| s.to_lowercase())
        .filter(|s| !STOP_WORDS.contains(&s.as_str()))
        .collect()
}

/// Weight of a term independent of any corpus: longer terms are rarer and
/// carry more subject information than short ones.
pub fn term_weight(term: &str) -> f64 {
    1.0 + (term.chars().count() as f64).ln()
}
