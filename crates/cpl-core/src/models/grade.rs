use serde::{Deserialize, Serialize};

/// Result labels that mean the unit was not passed.
const NOT_PASSING: &[&str] = &[
    "fail",
    "fl",
    "f",
    "n",
    "nn",
    "nyc",
    "not yet competent",
    "not competent",
    "unsatisfactory",
];

/// Result labels that are pass-equivalent.
const PASSING: &[&str] = &[
    "hd",
    "high distinction",
    "distinction",
    "dn",
    "di",
    "d",
    "credit",
    "cr",
    "c",
    "pass",
    "ps",
    "pp",
    "p",
    "competent",
    "satisfactory",
    "sy",
];

/// Pass/fail classification of a transcript result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GradeStatus {
    Passing,
    /// Fail, not competent, or not yet competent.
    NotPassing,
    Unknown,
}

impl GradeStatus {
    /// Classify a raw grade label. Matching is case-insensitive on the trimmed,
    /// whitespace-collapsed label.
    pub fn classify(label: &str) -> Self {
        let normalized = label
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase();
        if NOT_PASSING.contains(&normalized.as_str()) {
            GradeStatus::NotPassing
        } else if PASSING.contains(&normalized.as_str()) {
            GradeStatus::Passing
        } else {
            GradeStatus::Unknown
        }
    }

    pub fn is_passing(self) -> bool {
        self == GradeStatus::Passing
    }
}
