//! Running per-severity counts.

use crate::rules::Severity;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Count of issue records per severity name.
///
/// Built incrementally during flattening; after aggregation it matches the
/// per-severity counts of the issue list exactly. Arbitrary severity names
/// are carried through; only the canonical ones drive the fail threshold.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeverityTally(BTreeMap<Severity, usize>);

impl SeverityTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one issue of the given severity.
    pub fn increment(&mut self, severity: &Severity) {
        *self.0.entry(severity.clone()).or_default() += 1;
    }

    /// Count for a severity name; zero when absent.
    pub fn count(&self, severity: &str) -> usize {
        self.0.get(&Severity::from(severity)).copied().unwrap_or(0)
    }

    /// Total issues across all severities.
    pub fn total(&self) -> usize {
        self.0.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Severities and counts in deterministic (lexicographic) order.
    pub fn iter(&self) -> impl Iterator<Item = (&Severity, usize)> {
        self.0.iter().map(|(s, &c)| (s, c))
    }
}

impl FromIterator<(Severity, usize)> for SeverityTally {
    fn from_iter<I: IntoIterator<Item = (Severity, usize)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
