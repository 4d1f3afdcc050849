//! Flattening nested scan results into a uniform issue list.

use serde::{Deserialize, Serialize};

use crate::rules::types::{FlowScanResult, Severity};

use super::tally::SeverityTally;

/// One reported issue: an occurrence enriched with its rule and flow context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueRecord {
    /// Name of the violating element.
    pub name: String,
    /// Kind of element the rule matched.
    #[serde(rename = "type")]
    pub element_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    pub rule: String,
    pub rule_description: String,
    pub flow_name: String,
    pub flow_type: String,
    pub severity: Severity,
    pub source_path: String,
    pub file_name: String,
}

/// Flatten per-flow, per-rule, per-occurrence results into issue records,
/// tallying severities in the same pass.
///
/// Only outcomes that fired (occurred with at least one occurrence)
/// contribute. An outcome without an explicit severity is counted as
/// `error` here and nowhere else. Output order is flow order, then rule
/// order within a flow, then occurrence order within a rule.
pub fn aggregate(results: &[FlowScanResult]) -> (Vec<IssueRecord>, SeverityTally) {
    let mut issues = Vec::new();
    let mut tally = SeverityTally::new();

    for result in results {
        let source_path = result.source_path.display().to_string();
        let file_name = result.file_name();

        for outcome in &result.outcomes {
            if !outcome.fired() {
                continue;
            }

            let severity = outcome.severity.clone().unwrap_or_else(Severity::error);

            for occurrence in &outcome.details {
                issues.push(IssueRecord {
                    name: occurrence.name.clone(),
                    element_type: occurrence.element_type.clone(),
                    detail: occurrence.detail.clone(),
                    rule: outcome.rule_label.clone(),
                    rule_description: outcome.rule_description.clone(),
                    flow_name: result.flow_name.clone(),
                    flow_type: result.flow_type.clone(),
                    severity: severity.clone(),
                    source_path: source_path.clone(),
                    file_name: file_name.clone(),
                });
                tally.increment(&severity);
            }
        }
    }

    (issues, tally)
}
