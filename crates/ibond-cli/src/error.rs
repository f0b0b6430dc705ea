//! CLI error types.

use std::path::PathBuf;

use thiserror::Error;

use ibond_core::TrackerError;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid date format.
    #[error("Invalid date format: {0}. Use YYYY-MM-DD.")]
    InvalidDate(String),

    /// Configuration error.
    #[error("Configuration error in {path}: {reason}")]
    Config {
        /// Config file.
        path: PathBuf,
        /// Parser message.
        reason: String,
    },

    /// Malformed CSV input.
    #[error("Cannot read {path}: {reason}")]
    Input {
        /// Input file.
        path: PathBuf,
        /// Reader message.
        reason: String,
    },

    /// Model error.
    #[error(transparent)]
    Tracker(#[from] TrackerError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
