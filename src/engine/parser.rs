//! Field extraction from raw flow definition files.
//!
//! Flow metadata is XML, but only a handful of flow-level fields matter to
//! the rule catalog. Those are pulled out with anchored captures; element
//! blocks keep their raw text for pattern rules.

use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};

use super::EngineError;

/// Structured form of a raw flow artifact, consumed by rule evaluation.
#[derive(Debug, Clone)]
pub struct ParsedFlow {
    pub source_path: PathBuf,
    /// Human-readable label; falls back to the API name when absent.
    pub label: String,
    /// API name, derived from the file name.
    pub name: String,
    /// Flow kind from `processType` (e.g. `Flow`, `AutoLaunchedFlow`).
    pub process_type: String,
    pub status: Option<String>,
    pub api_version: Option<u32>,
    /// Raw file body, retained for pattern rules.
    pub content: String,
}

/// Parses flow definition files into [`ParsedFlow`] values.
#[derive(Debug, Default)]
pub struct FlowParser;

impl FlowParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse a single flow file.
    pub fn parse_file(&self, path: &Path) -> Result<ParsedFlow, EngineError> {
        let content = fs::read_to_string(path).map_err(|e| EngineError::ReadFlow {
            path: path.to_path_buf(),
            source: e,
        })?;

        if !content.contains("<Flow") {
            return Err(EngineError::ParseFlow {
                path: path.to_path_buf(),
                message: "missing <Flow> root element".to_string(),
            });
        }

        let name = flow_api_name(path);
        let label = top_level_value(&content, "label").unwrap_or_else(|| name.clone());
        let process_type =
            top_level_value(&content, "processType").unwrap_or_else(|| "Flow".to_string());
        let status = top_level_value(&content, "status");
        let api_version = top_level_value(&content, "apiVersion")
            .and_then(|v| v.split('.').next().map(str::to_string))
            .and_then(|v| v.parse().ok());

        Ok(ParsedFlow {
            source_path: path.to_path_buf(),
            label,
            name,
            process_type,
            status,
            api_version,
            content,
        })
    }
}

/// API name of a flow, from its file name minus metadata suffixes.
fn flow_api_name(path: &Path) -> String {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    file_name
        .strip_suffix(".flow-meta.xml")
        .or_else(|| file_name.strip_suffix(".flow"))
        .unwrap_or(&file_name)
        .to_string()
}

/// Value of a flow-level element.
///
/// Element blocks nest tags like `<label>` of their own, so the occurrence
/// with the shallowest indentation wins.
fn top_level_value(content: &str, tag: &str) -> Option<String> {
    let pattern = Regex::new(&format!(r"(?m)^([ \t]*)<{tag}>([^<]*)</{tag}>")).ok()?;
    pattern
        .captures_iter(content)
        .min_by_key(|c| c.get(1).map(|m| m.as_str().len()).unwrap_or(usize::MAX))
        .map(|c| c[2].trim().to_string())
}
