//! Rule-evaluation engine boundary.
//!
//! The pipeline only depends on the [`RuleEngine`] trait: parse raw
//! artifacts into an opaque structured form, then evaluate the rule set
//! against them. [`DefaultEngine`] is the built-in implementation.

mod default;
pub mod parser;

pub use default::DefaultEngine;
pub use parser::{FlowParser, ParsedFlow};

use crate::config::ScanConfig;
use crate::rules::FlowScanResult;
use std::path::PathBuf;
use thiserror::Error;

/// Error type for engine operations.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Failed to read flow file: {path}")]
    ReadFlow {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse flow file {path}: {message}")]
    ParseFlow { path: PathBuf, message: String },

    #[error("Invalid custom rule '{name}': {message}")]
    InvalidCustomRule { name: String, message: String },
}

/// The parse/evaluate pipeline the scan invoker drives.
pub trait RuleEngine {
    /// Parse raw flow files into their structured form.
    fn parse(&self, paths: &[PathBuf]) -> Result<Vec<ParsedFlow>, EngineError>;

    /// Evaluate the rule set against parsed flows.
    ///
    /// `config` tunes rule severities and adds custom rules; `None` runs
    /// the engine defaults.
    fn evaluate(
        &self,
        flows: &[ParsedFlow],
        config: Option<&ScanConfig>,
    ) -> Result<Vec<FlowScanResult>, EngineError>;
}
