//! Error types for level parsing and logging bootstrap.
//!
//! The signature facade itself never fails; these errors belong to the
//! ambient setup around it.

use std::io;
use std::path::PathBuf;
use thiserror::Error;
use tracing_subscriber::util::TryInitError;

/// Error parsing a log level name.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Invalid log level '{input}' - expected one of trace, debug, info, warn, error")]
pub struct ParseLevelError {
    input: String,
}

impl ParseLevelError {
    pub(crate) fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
        }
    }

    /// The rejected input.
    pub fn input(&self) -> &str {
        &self.input
    }
}

/// Errors that can occur while installing the global subscriber.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// The log directory could not be created.
    #[error("Failed to create log directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The previous log file could not be cleared.
    #[error("Failed to clear log file {path}: {source}")]
    Truncate {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A global subscriber was already installed.
    #[error("Logging already initialized")]
    AlreadyInitialized,

    /// The subscriber could not be installed.
    #[error("Failed to install subscriber: {0}")]
    Install(#[from] TryInitError),
}
