//! Optional pre-scan metadata retrieval from a remote org.

mod error;
mod retrieve;

pub use error::RemoteError;
pub use retrieve::{CommandOutput, CommandRunner, MetadataRetriever, SystemRunner};
