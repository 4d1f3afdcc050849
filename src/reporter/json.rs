use crate::aggregator::RunSummary;
use crate::reporter::Reporter;
use crate::rules::FlowScanResult;

pub struct JsonReporter;

impl JsonReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Reporter for JsonReporter {
    fn report(&self, summary: &RunSummary, _results: &[FlowScanResult]) -> String {
        serde_json::to_string_pretty(summary)
            .unwrap_or_else(|e| format!(r#"{{"error": "Failed to serialize summary: {}"}}"#, e))
    }
}
