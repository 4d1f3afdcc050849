//! Scan invocation: the bridge between the pipeline and the engine.

use std::path::PathBuf;
use thiserror::Error;
use tracing::debug;

use crate::config::ScanConfig;
use crate::engine::{EngineError, RuleEngine};
use crate::error::FlowlintError;
use crate::rules::FlowScanResult;
use crate::sandbox::{ExecutionPolicy, SandboxError};

/// Why an invocation failed. Both variants are fatal to the run.
#[derive(Error, Debug)]
pub enum InvokeError {
    #[error(transparent)]
    Sandbox(#[from] SandboxError),

    #[error(transparent)]
    Engine(#[from] EngineError),
}

impl From<InvokeError> for FlowlintError {
    fn from(err: InvokeError) -> Self {
        match err {
            InvokeError::Sandbox(e) => FlowlintError::Sandbox(e),
            InvokeError::Engine(e) => FlowlintError::ScanEngine(e),
        }
    }
}

/// Drives the engine's parse/evaluate pipeline under an execution policy.
///
/// The policy is applied to the configuration's custom-rule sources before
/// the engine sees them; an engine failure comes back as a tagged error the
/// orchestrator must handle, never as a half-populated result.
pub struct ScanInvoker<'a, E> {
    engine: &'a E,
    policy: &'a ExecutionPolicy,
}

impl<'a, E: RuleEngine> ScanInvoker<'a, E> {
    pub fn new(engine: &'a E, policy: &'a ExecutionPolicy) -> Self {
        Self { engine, policy }
    }

    /// Parse and evaluate the target files.
    ///
    /// A non-empty config is forwarded to the engine; an empty one runs the
    /// engine defaults.
    pub fn invoke(
        &self,
        paths: &[PathBuf],
        config: Option<&ScanConfig>,
    ) -> Result<Vec<FlowScanResult>, InvokeError> {
        if let Some(config) = config {
            for spec in &config.custom_rules {
                self.policy.vet_custom_rule(
                    &spec.name,
                    spec.expression.as_deref(),
                    spec.source.as_deref(),
                )?;
            }
        }

        let flows = self.engine.parse(paths)?;
        debug!(flows = flows.len(), "parsed flow artifacts");

        let effective = config.filter(|c| !c.is_empty());
        let results = self.engine.evaluate(&flows, effective)?;
        Ok(results)
    }
}
