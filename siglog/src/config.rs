//! Logging bootstrap configuration.

use crate::log::LogLevel;
use std::path::{Path, PathBuf};

/// Default directory for log files.
pub const DEFAULT_LOG_DIR: &str = "logs";

/// Default log file name.
pub const DEFAULT_LOG_FILE: &str = "siglog.log";

/// Configuration for [`init_logging`](crate::logging::init_logging).
///
/// # Example
///
/// ```
/// use siglog::config::LoggingConfig;
/// use siglog::log::LogLevel;
///
/// // Defaults: logs/siglog.log, info level, stdout with colors
/// let config = LoggingConfig::default();
/// assert_eq!(config.default_level(), LogLevel::Info);
///
/// let config = LoggingConfig::new("/var/log/app", "app.log")
///     .with_default_level(LogLevel::Debug)
///     .with_stdout(false);
/// assert_eq!(config.log_path().to_str(), Some("/var/log/app/app.log"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    log_dir: PathBuf,
    log_file: String,
    /// Filter used when `RUST_LOG` is unset or unparsable
    default_level: LogLevel,
    /// Mirror output to stdout
    stdout: bool,
    /// ANSI colors on the stdout layer (the file never gets them)
    ansi: bool,
    /// Clear the log file at startup
    truncate: bool,
}

impl LoggingConfig {
    /// Create a configuration writing to `log_dir/log_file`.
    pub fn new(log_dir: impl Into<PathBuf>, log_file: impl Into<String>) -> Self {
        Self {
            log_dir: log_dir.into(),
            log_file: log_file.into(),
            ..Self::default()
        }
    }

    pub fn with_default_level(mut self, level: LogLevel) -> Self {
        self.default_level = level;
        self
    }

    pub fn with_stdout(mut self, enabled: bool) -> Self {
        self.stdout = enabled;
        self
    }

    pub fn with_ansi(mut self, enabled: bool) -> Self {
        self.ansi = enabled;
        self
    }

    pub fn with_truncate(mut self, enabled: bool) -> Self {
        self.truncate = enabled;
        self
    }

    pub fn log_dir(&self) -> &Path {
        &self.log_dir
    }

    pub fn log_file(&self) -> &str {
        &self.log_file
    }

    /// Full path of the log file.
    pub fn log_path(&self) -> PathBuf {
        self.log_dir.join(&self.log_file)
    }

    pub fn default_level(&self) -> LogLevel {
        self.default_level
    }

    pub fn stdout(&self) -> bool {
        self.stdout
    }

    pub fn ansi(&self) -> bool {
        self.ansi
    }

    pub fn truncate(&self) -> bool {
        self.truncate
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_dir: PathBuf::from(DEFAULT_LOG_DIR),
            log_file: DEFAULT_LOG_FILE.to_string(),
            default_level: LogLevel::Info,
            stdout: true,
            ansi: true,
            truncate: true,
        }
    }
}
