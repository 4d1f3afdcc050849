//! Machine-readable run summary.

use serde::Serialize;

use super::flatten::IssueRecord;
use super::tally::SeverityTally;

/// Terminal artifact of a scan run.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunSummary {
    /// Number of flows scanned.
    pub flows_number: usize,
    /// Total number of issues found.
    pub results: usize,
    pub message: String,
    /// Per-severity issue counts.
    pub error_levels_details: SeverityTally,
    pub issues: Vec<IssueRecord>,
}

impl RunSummary {
    pub fn new(flows_number: usize, issues: Vec<IssueRecord>, tally: SeverityTally) -> Self {
        let results = issues.len();
        let message = format!(
            "flowlint found {results} issue{} in {flows_number} flow{}.",
            plural(results),
            plural(flows_number)
        );
        Self {
            flows_number,
            results,
            message,
            error_levels_details: tally,
            issues,
        }
    }

    pub fn tally(&self) -> &SeverityTally {
        &self.error_levels_details
    }
}

fn plural(count: usize) -> &'static str {
    if count == 1 { "" } else { "s" }
}
