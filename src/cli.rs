use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::policy::FailThreshold;

#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Terminal,
    Json,
}

#[derive(Parser, Debug)]
#[command(
    name = "flowlint",
    version,
    about = "Scans flow definitions against a rule set and gates CI on severity",
    long_about = "flowlint scans workflow (flow) definition files against a configurable \
rule set, reports policy violations per flow, and exits non-zero when findings \
reach the configured severity threshold."
)]
pub struct Cli {
    /// Directory to scan recursively for flow definitions
    #[arg(short, long, conflicts_with = "files")]
    pub directory: Option<PathBuf>,

    /// Explicit flow files to scan, in the order given
    #[arg(short, long, num_args = 1.., conflicts_with = "directory")]
    pub files: Vec<PathBuf>,

    /// Path to a configuration file (.yaml/.yml/.json)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Lowest severity that fails the run
    #[arg(long = "fail-on", value_enum, default_value_t = FailThreshold::Error)]
    pub fail_on: FailThreshold,

    /// Retrieve flow metadata from the target org before scanning
    #[arg(long, requires = "target_org")]
    pub retrieve: bool,

    /// Target org alias or username for retrieval
    #[arg(short = 'o', long = "target-org")]
    pub target_org: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Terminal)]
    pub format: OutputFormat,

    /// Write the report to a file instead of stdout
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Suppress non-essential logging
    #[arg(short, long)]
    pub quiet: bool,
}
