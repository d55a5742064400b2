mod catalog_unit;
mod decision;
mod external_unit;
mod grade;
mod records;
mod run;
mod score;
mod suggestion;

pub use catalog_unit::CatalogUnit;
pub use decision::{Decision, DecisionStatus};
pub use external_unit::{Enrichment, ExternalUnit};
pub use grade::GradeStatus;
pub use records::{CatalogUnitRecord, CreditField, ExternalUnitRecord};
pub use run::ScoringRun;
pub use score::{ComponentScores, ConfidenceBand, ScoreCard, ScoreFlag};
pub use suggestion::Suggestion;
