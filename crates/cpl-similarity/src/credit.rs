//! Credit point agreement.

/// Similarity of two credit values in [0.0, 1.0].
///
/// 1.0 when the values differ by at most `tolerance`; otherwise the relative
/// difference `|a − b| / max(a, b)` is subtracted from 1.0. Symmetric, and
/// non-increasing as the values move apart. Non-finite input scores 0.0.
pub fn credit_similarity(a: f64, b: f64, tolerance: f64) -> f64 {
    if !a.is_finite() || !b.is_finite() {
        return 0.0;
    }
    let diff = (a - b).abs();
    if diff <= tolerance.max(0.0) {
        return 1.0;
    }
    let largest = a.abs().max(b.abs());
    if largest <= f64::EPSILON {
        return 1.0;
    }
    (1.0 - diff / largest).clamp(0.0, 1.0)
}
