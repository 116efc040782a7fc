//! Error types for the runtime shell.

use std::path::PathBuf;

use gr_term::TermError;
use thiserror::Error;

/// Result type for runtime operations.
pub type RuntimeResult<T> = Result<T, RuntimeError>;

/// Fatal errors that end a session.
#[derive(Debug, Error)]
pub enum RuntimeError {
    /// Terminal output failed.
    #[error("{0}")]
    Terminal(#[from] TermError),

    /// Writing the termination notice failed.
    #[error("cannot write to stderr: {0}")]
    Notice(#[from] std::io::Error),
}

/// Errors loading the shell configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("cannot read config {path}: {source}")]
    Read {
        /// Path of the config file.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The file is not valid configuration.
    #[error("invalid config {path}: {source}")]
    Parse {
        /// Path of the config file.
        path: PathBuf,
        /// Underlying JSON error.
        source: serde_json::Error,
    },
}
