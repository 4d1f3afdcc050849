//! Directory walking for flow artifact discovery.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Recursive lister of flow definition files.
#[derive(Debug, Clone, Default)]
pub struct FlowWalker {
    follow_symlinks: bool,
}

impl FlowWalker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_follow_symlinks(mut self, follow: bool) -> Self {
        self.follow_symlinks = follow;
        self
    }

    /// Walk a directory and return flow files in deterministic order.
    pub fn walk(&self, dir: &Path) -> Vec<PathBuf> {
        WalkDir::new(dir)
            .follow_links(self.follow_symlinks)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .filter(|e| is_flow_file(e.path()))
            .map(|e| e.path().to_path_buf())
            .collect()
    }
}

/// Flow artifacts end in `.flow-meta.xml` (source format) or `.flow`
/// (metadata format).
pub fn is_flow_file(path: &Path) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    name.ends_with(".flow-meta.xml") || name.ends_with(".flow")
}
