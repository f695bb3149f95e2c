//! CLI error types.
//!
//! Everything here is fatal: the process prints the error and exits non-zero.

use thiserror::Error;

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// Fatal CLI failures.
#[derive(Debug, Error)]
pub enum CliError {
    /// The service could not be brought up.
    #[error("boot failed: {0}")]
    BootFailed(String),

    /// The HTTP server terminated with an error.
    #[error("server failed: {0}")]
    ServerFailed(String),
}
