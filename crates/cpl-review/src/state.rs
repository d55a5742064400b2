use std::fmt;

use serde::{Deserialize, Serialize};

use cpl_core::models::{Decision, DecisionStatus};

/// Effective review state of a suggestion.
///
/// Any decision may follow any state; there is no terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewState {
    /// No decision recorded yet.
    Proposed,
    Approved,
    Rejected,
    NeedsReview,
    Override,
}

impl ReviewState {
    /// State after the latest decision by `(decided_at, sequence)`.
    pub fn resolve(decisions: &[Decision]) -> Self {
        latest(decisions).map_or(ReviewState::Proposed, |d| d.status.into())
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ReviewState::Proposed => "proposed",
            ReviewState::Approved => "approved",
            ReviewState::Rejected => "rejected",
            ReviewState::NeedsReview => "needs_review",
            ReviewState::Override => "override",
        }
    }
}

impl From<DecisionStatus> for ReviewState {
    fn from(status: DecisionStatus) -> Self {
        match status {
            DecisionStatus::Approved => ReviewState::Approved,
            DecisionStatus::Rejected => ReviewState::Rejected,
            DecisionStatus::NeedsReview => ReviewState::NeedsReview,
            DecisionStatus::Override => ReviewState::Override,
        }
    }
}

impl fmt::Display for ReviewState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The decision that determines the effective state, if any.
/// Does not rely on the input being sorted.
pub fn latest(decisions: &[Decision]) -> Option<&Decision> {
    decisions
        .iter()
        .max_by(|a, b| (a.decided_at, a.sequence).cmp(&(b.decided_at, b.sequence)))
}
