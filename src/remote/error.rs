//! Remote retrieval error types.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RemoteError {
    #[error("Platform CLI not found: install the 'sf' command line and retry")]
    CliNotFound,

    #[error("Metadata retrieval failed for org '{target}': {message}")]
    RetrieveFailed { target: String, message: String },
}
