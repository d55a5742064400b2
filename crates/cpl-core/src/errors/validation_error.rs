/// Malformed or missing fields on unit input.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("missing required field '{field}' on {record}")]
    MissingField { record: String, field: String },

    #[error("invalid credit value '{value}' on {record}")]
    InvalidCredit { record: String, value: String },

    #[error("suggestion '{suggestion_id}' does not belong to run '{run_id}'")]
    ForeignSuggestion { suggestion_id: String, run_id: String },

    #[error("unknown {kind} '{value}'")]
    UnknownVariant { kind: String, value: String },
}
