//! Flow metadata retrieval via the platform CLI.
//!
//! A fire-and-forget shell-out that must succeed before any scanning
//! starts: a non-zero exit aborts the run. The process runner is a trait so
//! tests substitute a stub instead of spawning a real subprocess.

use std::process::Command;
use tracing::{debug, info};

use super::error::RemoteError;

/// Outcome of one external command invocation.
#[derive(Debug, Clone)]
pub struct CommandOutput {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

/// Abstraction over spawning external commands.
pub trait CommandRunner {
    fn run(&self, program: &str, args: &[&str]) -> std::io::Result<CommandOutput>;
}

/// Runner backed by real subprocesses.
#[derive(Debug, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[&str]) -> std::io::Result<CommandOutput> {
        let output = Command::new(program).args(args).output()?;
        Ok(CommandOutput {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

/// Retrieves flow metadata from a target org before a scan.
pub struct MetadataRetriever<R: CommandRunner> {
    runner: R,
}

impl Default for MetadataRetriever<SystemRunner> {
    fn default() -> Self {
        Self::new()
    }
}

impl MetadataRetriever<SystemRunner> {
    pub fn new() -> Self {
        Self {
            runner: SystemRunner,
        }
    }
}

impl<R: CommandRunner> MetadataRetriever<R> {
    pub fn with_runner(runner: R) -> Self {
        Self { runner }
    }

    /// Retrieve Flow metadata for the given org alias or username.
    ///
    /// Blocks until the subprocess completes; there is no timeout, matching
    /// the one-shot CLI model.
    pub fn retrieve_flows(&self, target_org: &str) -> Result<(), RemoteError> {
        self.check_cli_available()?;

        info!(target = target_org, "retrieving flow metadata");
        let output = self
            .runner
            .run(
                "sf",
                &[
                    "project",
                    "retrieve",
                    "start",
                    "--metadata",
                    "Flow",
                    "--target-org",
                    target_org,
                ],
            )
            .map_err(|e| RemoteError::RetrieveFailed {
                target: target_org.to_string(),
                message: e.to_string(),
            })?;

        if !output.success {
            let message = if output.stderr.trim().is_empty() {
                output.stdout.trim().to_string()
            } else {
                output.stderr.trim().to_string()
            };
            return Err(RemoteError::RetrieveFailed {
                target: target_org.to_string(),
                message,
            });
        }

        debug!(target = target_org, "retrieval completed");
        Ok(())
    }

    fn check_cli_available(&self) -> Result<(), RemoteError> {
        self.runner
            .run("sf", &["--version"])
            .map_err(|_| RemoteError::CliNotFound)?;
        Ok(())
    }
}
