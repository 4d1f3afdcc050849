//! Result aggregation: flattening nested scan results and tallying
//! severities in a single pass.

mod flatten;
mod summary;
mod tally;

pub use flatten::{IssueRecord, aggregate};
pub use summary::RunSummary;
pub use tally::SeverityTally;
