use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Severity name attached to a rule outcome.
///
/// The canonical levels are `error` > `warning` > `note`. Configuration may
/// introduce arbitrary names; those flow through tallies and totals but never
/// drive the fail threshold.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Severity(String);

impl Severity {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn error() -> Self {
        Self("error".to_string())
    }

    pub fn warning() -> Self {
        Self("warning".to_string())
    }

    pub fn note() -> Self {
        Self("note".to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Severity {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

/// One violating element reported by a rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Occurrence {
    /// Name of the violating element.
    pub name: String,
    /// Kind of element the rule matched (e.g. `recordCreates`, `stringValue`).
    #[serde(rename = "type")]
    pub element_type: String,
    /// Offending value or extra context, when the rule has one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl Occurrence {
    pub fn new(name: impl Into<String>, element_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            element_type: element_type.into(),
            detail: None,
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

/// Result of evaluating one rule against one flow.
///
/// An outcome contributes issue records only when it fired (`occurs`) and
/// carries at least one occurrence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleOutcome {
    pub rule_label: String,
    pub rule_description: String,
    /// Severity configured for the rule. `None` means the aggregator applies
    /// the `error` default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<Severity>,
    pub occurs: bool,
    #[serde(default)]
    pub details: Vec<Occurrence>,
}

impl RuleOutcome {
    /// Whether this outcome produces issue records.
    pub fn fired(&self) -> bool {
        self.occurs && !self.details.is_empty()
    }
}

/// All rule outcomes for a single flow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlowScanResult {
    /// Human-readable flow label.
    pub flow_label: String,
    /// API name of the flow; the display name issues are grouped under.
    pub flow_name: String,
    /// Flow kind (e.g. `Flow`, `AutoLaunchedFlow`).
    pub flow_type: String,
    pub source_path: PathBuf,
    pub outcomes: Vec<RuleOutcome>,
}

impl FlowScanResult {
    /// File name of the source artifact.
    pub fn file_name(&self) -> String {
        self.source_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}
