//! Report rendering over aggregated scan output.

pub mod json;
pub mod terminal;

pub use json::JsonReporter;
pub use terminal::TerminalReporter;

use crate::aggregator::RunSummary;
use crate::rules::FlowScanResult;

/// Renders the flattened summary, with the per-flow results available for
/// header metadata.
pub trait Reporter {
    fn report(&self, summary: &RunSummary, results: &[FlowScanResult]) -> String;
}
