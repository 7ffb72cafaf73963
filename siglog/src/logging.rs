//! Logging infrastructure.
//!
//! Installs the global `tracing` subscriber that [`TracingLogger`] writes to:
//! - File output under the configured directory, optionally cleared on start
//! - Optional stdout mirror for tailing
//! - Multi-line pretty format for readability
//! - Filter from the `RUST_LOG` environment variable, falling back to the
//!   configured default level
//!
//! [`TracingLogger`]: crate::log::TracingLogger

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::config::{LoggingConfig, DEFAULT_LOG_DIR, DEFAULT_LOG_FILE};
use crate::error::LoggingError;

/// Guard that must be kept alive for the duration of logging.
///
/// Dropping this guard will flush and close the log file writer.
pub struct LoggingGuard {
    _file_guard: WorkerGuard,
    log_path: PathBuf,
}

impl LoggingGuard {
    /// File the subscriber writes to.
    pub fn log_path(&self) -> &Path {
        &self.log_path
    }
}

/// Initialize the global subscriber.
///
/// # Errors
///
/// Fails if the log directory cannot be created, the previous log file
/// cannot be cleared, or a global subscriber is already installed. The log
/// file is left untouched when a subscriber is already installed.
pub fn init_logging(config: &LoggingConfig) -> Result<LoggingGuard, LoggingError> {
    if tracing::dispatcher::has_been_set() {
        return Err(LoggingError::AlreadyInitialized);
    }
    let log_path = prepare_log_file(config)?;

    let file_appender = tracing_appender::rolling::never(config.log_dir(), config.log_file());
    let (non_blocking_file, file_guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false)
        .with_span_events(FmtSpan::CLOSE)
        .pretty();

    let stdout_layer = config.stdout().then(|| {
        tracing_subscriber::fmt::layer()
            .with_writer(io::stdout)
            .with_ansi(config.ansi())
            .with_span_events(FmtSpan::CLOSE)
            .pretty()
    });

    tracing_subscriber::registry()
        .with(env_filter(config))
        .with(file_layer)
        .with(stdout_layer)
        .try_init()?;

    Ok(LoggingGuard {
        _file_guard: file_guard,
        log_path,
    })
}

/// `RUST_LOG` if set and valid, otherwise the configured default level.
fn env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.default_level().as_str()))
}

/// Create the log directory and clear the previous file if configured.
///
/// Returns the full log file path.
pub fn prepare_log_file(config: &LoggingConfig) -> Result<PathBuf, LoggingError> {
    fs::create_dir_all(config.log_dir()).map_err(|source| LoggingError::CreateDir {
        path: config.log_dir().to_path_buf(),
        source,
    })?;

    let log_path = config.log_path();
    if config.truncate() {
        fs::write(&log_path, "").map_err(|source| LoggingError::Truncate {
            path: log_path.clone(),
            source,
        })?;
    }
    Ok(log_path)
}

/// Get default log directory path.
pub fn default_log_dir() -> &'static str {
    DEFAULT_LOG_DIR
}

/// Get default log file name.
pub fn default_log_file() -> &'static str {
    DEFAULT_LOG_FILE
}
