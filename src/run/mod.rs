//! Scan orchestration: the end-to-end pipeline for one invocation.
//!
//! Order is fixed: optional remote retrieval, configuration, target
//! resolution, policy-guarded engine invocation, aggregation, summary.
//! Retrieval and configuration failures abort before any scanning; an
//! engine failure aborts before aggregation.

mod invoker;

pub use invoker::{InvokeError, ScanInvoker};

use std::path::Path;
use tracing::{debug, info};

use crate::aggregator::{RunSummary, aggregate};
use crate::cli::Cli;
use crate::config::ScanConfig;
use crate::discovery::resolve_targets;
use crate::engine::DefaultEngine;
use crate::error::Result;
use crate::remote::MetadataRetriever;
use crate::rules::FlowScanResult;
use crate::sandbox::ExecutionPolicy;

/// Everything the renderer and the exit policy need from one run.
#[derive(Debug)]
pub struct ScanReport {
    /// Per-flow results, in scan order.
    pub results: Vec<FlowScanResult>,
    pub summary: RunSummary,
}

/// Run the full scan pipeline for a parsed command line.
pub fn run_scan(cli: &Cli) -> Result<ScanReport> {
    if cli.retrieve {
        if let Some(target) = &cli.target_org {
            MetadataRetriever::new().retrieve_flows(target)?;
        }
    }

    let config = load_config(cli)?;
    let targets = resolve_targets(cli.directory.as_deref(), &cli.files);
    info!(targets = targets.len(), "resolved scan targets");

    let policy = ExecutionPolicy::hardened();
    let engine = DefaultEngine::new();
    let invoker = ScanInvoker::new(&engine, &policy);
    let results = invoker
        .invoke(&targets, Some(&config))
        .map_err(crate::error::FlowlintError::from)?;

    let (issues, tally) = aggregate(&results);
    debug!(
        flows = results.len(),
        issues = issues.len(),
        "aggregated scan results"
    );

    let summary = RunSummary::new(results.len(), issues, tally);
    Ok(ScanReport { results, summary })
}

fn load_config(cli: &Cli) -> Result<ScanConfig> {
    let config = match &cli.config {
        Some(path) => ScanConfig::from_file(path)?,
        None => ScanConfig::load(Path::new("."))?,
    };
    Ok(config)
}
