//! Execution policy applied before untrusted rule material is honored.
//!
//! Rule configuration is third-party input: it may point the engine at
//! additional rule modules. The policy decides which kinds of sources are
//! acceptable before the invoker hands the config to the engine. The CLI
//! always runs the hardened policy; the permissive one exists for tests.

use thiserror::Error;

/// A custom-rule source blocked by the execution policy.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SandboxError {
    #[error("Dynamic rule code is disabled: {0}")]
    BlockedCapability(String),

    #[error("Remote rule modules are disabled: {0}")]
    BlockedRemoteImport(String),
}

/// Capability switches consulted by the scan invoker.
///
/// Immutable once constructed; the run never re-enables a capability.
#[derive(Debug, Clone, Copy)]
pub struct ExecutionPolicy {
    allow_inline_rules: bool,
    allow_remote_modules: bool,
}

impl ExecutionPolicy {
    /// Policy used for real scans: no dynamic code, no remote modules.
    pub fn hardened() -> Self {
        Self {
            allow_inline_rules: false,
            allow_remote_modules: false,
        }
    }

    /// Everything allowed. Test fixtures only.
    pub fn permissive() -> Self {
        Self {
            allow_inline_rules: true,
            allow_remote_modules: true,
        }
    }

    /// Vet one custom-rule entry from the scan configuration.
    ///
    /// Inline expressions and script-module sources count as dynamic code.
    /// Remote locators are rejected outright. Local declarative files pass
    /// through untouched; the engine loads them as data.
    pub fn vet_custom_rule(
        &self,
        name: &str,
        expression: Option<&str>,
        source: Option<&str>,
    ) -> Result<(), SandboxError> {
        if expression.is_some() && !self.allow_inline_rules {
            return Err(SandboxError::BlockedCapability(format!(
                "rule '{name}' supplies an inline expression"
            )));
        }

        if let Some(locator) = source {
            if is_remote(locator) && !self.allow_remote_modules {
                return Err(SandboxError::BlockedRemoteImport(format!(
                    "rule '{name}' resolves to {locator}"
                )));
            }
            if is_script_module(locator) && !self.allow_inline_rules {
                return Err(SandboxError::BlockedCapability(format!(
                    "rule '{name}' loads executable module {locator}"
                )));
            }
        }

        Ok(())
    }
}

fn is_remote(locator: &str) -> bool {
    locator.starts_with("http://") || locator.starts_with("https://")
}

fn is_script_module(locator: &str) -> bool {
    let lower = locator.to_ascii_lowercase();
    [".js", ".mjs", ".cjs", ".ts", ".wasm", ".so", ".dll"]
        .iter()
        .any(|ext| lower.ends_with(ext))
}
