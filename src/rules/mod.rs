pub mod builtin;
pub mod types;

pub use builtin::{Rule, catalog};
pub use types::{FlowScanResult, Occurrence, RuleOutcome, Severity};
