//! Locator error types.
//!
//! Only configuration-level problems are errors. A missing header or
//! library is a normal outcome and is reported through `found` flags on
//! the resolution result instead.

use thiserror::Error;

/// Errors that can occur while building a locate configuration.
#[derive(Debug, Error)]
pub enum LocateError {
    /// Could not determine the user's home directory for `~` expansion.
    #[error("Cannot determine home directory")]
    NoHomeDir,

    /// An empty path was provided.
    #[error("Path cannot be empty")]
    EmptyPath,

    /// Failed to get the current working directory.
    #[error("Cannot determine current directory: {0}")]
    CurrentDirError(String),
}
