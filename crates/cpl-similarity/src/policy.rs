//! Empty-text policy shared by every text backend.
//!
//! Both sides empty means there is nothing to disagree on (1.0). Exactly one
//! side empty means there is no evidence of a match (0.0). Texts that are equal
//! after whitespace and case normalisation are identical (1.0).

/// Collapse whitespace and lowercase.
pub fn normalize(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Resolve the pair by policy alone, or `None` when a backend must compare them.
pub fn resolve(a: &str, b: &str) -> Option<f64> {
    let a = normalize(a);
    let b = normalize(b);
    match (a.is_empty(), b.is_empty()) {
        (true, true) => Some(1.0),
        (true, false) | (false, true) => Some(0.0),
        _ if a == b => Some(1.0),
        _ => None,
    }
}
