//! Artifact resolution: which flow files a run scans.

mod walker;

pub use walker::{FlowWalker, is_flow_file};

use std::path::{Path, PathBuf};

/// Resolve the final target list from three mutually exclusive modes.
///
/// A directory wins over explicit files; neither means the current working
/// directory. The directory/files exclusivity is enforced by CLI flag
/// validation before this runs. An empty result is valid and produces a
/// zero-flow summary downstream.
pub fn resolve_targets(directory: Option<&Path>, files: &[PathBuf]) -> Vec<PathBuf> {
    let walker = FlowWalker::new();

    if let Some(dir) = directory {
        walker.walk(dir)
    } else if !files.is_empty() {
        files.to_vec()
    } else {
        walker.walk(Path::new("."))
    }
}
