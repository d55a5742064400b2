//! Human-readable explanation lines for a score card.

use cpl_core::config::ComponentWeights;
use cpl_core::models::{ComponentScores, ScoreFlag};

/// Inputs needed to explain one composed score.
pub struct ExplanationParts<'a> {
    pub components: &'a ComponentScores,
    pub weights: &'a ComponentWeights,
    pub grade_bonus: f64,
    pub retrieval_bonus: f64,
    pub score: f64,
    pub method: &'a str,
    pub flags: &'a [ScoreFlag],
}

/// Ordered lines: a `reason:` line per reason flag, one per component
/// contribution, the two bonuses, the final confidence, the method, then a
/// `FLAG:` line per remaining flag.
pub fn explain(parts: &ExplanationParts<'_>) -> Vec<String> {
    let (reasons, warnings): (Vec<ScoreFlag>, Vec<ScoreFlag>) =
        parts.flags.iter().copied().partition(|f| f.is_reason());
    let mut lines: Vec<String> = reasons
        .iter()
        .map(|f| format!("reason: {}", f.message()))
        .collect();
    lines.extend(
        parts
            .components
            .contributions(parts.weights)
            .iter()
            .map(|(name, contribution)| format!("{name}: {contribution:.4}")),
    );
    lines.push(format!("grade_bonus: {:.4}", parts.grade_bonus));
    lines.push(format!("retrieval_bonus: {:.4}", parts.retrieval_bonus));
    lines.push(format!("confidence: {:.4}", parts.score));
    lines.push(format!("method: {}", parts.method));
    lines.extend(warnings.iter().map(|f| format!("FLAG: {}", f.message())));
    lines
}
