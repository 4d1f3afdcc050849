//! Configuration loading functions.

use std::fs;
use std::path::Path;

use super::error::ConfigError;
use super::types::ScanConfig;

/// Project-level config file names, tried in order.
const PROJECT_CONFIG_NAMES: &[&str] = &[".flowlint.yaml", ".flowlint.yml", ".flowlint.json"];

impl ScanConfig {
    /// Load configuration from an explicit file path.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()));
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.display().to_string(),
            source: e,
        })?;

        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match ext.as_str() {
            "yaml" | "yml" => serde_yaml::from_str(&content).map_err(|e| ConfigError::ParseYaml {
                path: path.display().to_string(),
                source: e,
            }),
            "json" => serde_json::from_str(&content).map_err(|e| ConfigError::ParseJson {
                path: path.display().to_string(),
                source: e,
            }),
            _ => Err(ConfigError::UnsupportedFormat {
                path: path.display().to_string(),
                extension: ext,
            }),
        }
    }

    /// Load configuration by discovery.
    ///
    /// Search order:
    /// 1. `.flowlint.yaml` / `.flowlint.yml` / `.flowlint.json` in the
    ///    project directory
    /// 2. `~/.config/flowlint/config.yaml`
    /// 3. Default configuration
    ///
    /// A discovered file that fails to parse is an error; silently falling
    /// back to defaults would mask a broken policy in CI.
    pub fn load(project_root: &Path) -> Result<Self, ConfigError> {
        for name in PROJECT_CONFIG_NAMES {
            let path = project_root.join(name);
            if path.exists() {
                return Self::from_file(&path);
            }
        }

        if let Some(config_dir) = dirs::config_dir() {
            let global = config_dir.join("flowlint").join("config.yaml");
            if global.exists() {
                return Self::from_file(&global);
            }
        }

        Ok(Self::default())
    }
}
