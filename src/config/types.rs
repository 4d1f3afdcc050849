//! Scan configuration shapes.
//!
//! The pipeline treats the config as pass-through data for the engine: the
//! orchestrator loads it and vets custom-rule sources, but rule semantics
//! are interpreted by the engine alone.

use crate::rules::Severity;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// User-supplied scan configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Per-rule settings keyed by rule id.
    pub rules: BTreeMap<String, RuleSettings>,
    /// Additional rules beyond the built-in catalog.
    pub custom_rules: Vec<CustomRuleSpec>,
}

impl ScanConfig {
    /// An empty config makes the engine run with its defaults.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty() && self.custom_rules.is_empty()
    }
}

/// Settings for one built-in rule.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleSettings {
    /// Severity reported for this rule's findings. Absent means the
    /// aggregation default (`error`) applies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<Severity>,
    /// Disabled rules are not evaluated at all.
    pub disabled: bool,
}

/// A custom rule referenced from configuration.
///
/// Only local declarative sources survive the execution policy; `expression`
/// and script/remote sources exist in the schema so they can be rejected
/// with a precise error rather than a parse failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomRuleSpec {
    pub name: String,
    /// Path (or locator) of a declarative rule file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Inline rule expression. Always rejected by the hardened policy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expression: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<Severity>,
}

/// Declarative body of a custom rule file (YAML or JSON).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomRuleFile {
    pub label: String,
    #[serde(default)]
    pub description: String,
    /// Regex patterns matched line by line against the raw flow body.
    pub patterns: Vec<String>,
    /// Element type reported on occurrences.
    #[serde(default = "default_element_type")]
    pub element_type: String,
}

fn default_element_type() -> String {
    "pattern".to_string()
}
