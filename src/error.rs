//! Unified error type for the scan pipeline.
//!
//! All variants are fatal: they abort the run before a summary is produced
//! and map to exit code 2. Rule findings are never errors; they travel
//! through the summary and the fail threshold instead.

use thiserror::Error;

use crate::config::ConfigError;
use crate::engine::EngineError;
use crate::remote::RemoteError;
use crate::sandbox::SandboxError;

#[derive(Error, Debug)]
pub enum FlowlintError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Scan engine failure: {0}")]
    ScanEngine(#[from] EngineError),

    #[error("Remote retrieval failed: {0}")]
    RemoteRetrieval(#[from] RemoteError),

    #[error("Execution policy violation: {0}")]
    Sandbox(#[from] SandboxError),
}

pub type Result<T> = std::result::Result<T, FlowlintError>;
