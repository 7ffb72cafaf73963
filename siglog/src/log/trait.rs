//! Logger trait definition.

use std::error::Error;
use std::fmt::{self, Display};
use std::str::FromStr;

use crate::error::ParseLevelError;

/// Log level for filtering messages.
///
/// The set is closed: every dispatch over it is an exhaustive `match`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LogLevel {
    /// Verbose debugging information
    Trace,
    /// Debugging information
    Debug,
    /// General information
    Info,
    /// Warning messages
    Warn,
    /// Error messages
    Error,
}

impl LogLevel {
    /// All levels, from most to least verbose.
    pub const ALL: [LogLevel; 5] = [
        LogLevel::Trace,
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warn,
        LogLevel::Error,
    ];

    /// Lowercase name, as accepted by `RUST_LOG` directives.
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ParseLevelError::new(s)),
        }
    }
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => tracing::Level::TRACE,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Error => tracing::Level::ERROR,
        }
    }
}

/// The logging backend the signature facade writes to.
///
/// Messages arrive as a template with positional `{}` placeholders plus the
/// arguments that fill them, leaving substitution to the implementation.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` to allow sharing across threads.
///
/// # Example
///
/// ```
/// use siglog::log::{Logger, LogLevel, NoOpLogger};
/// use siglog::log_args;
/// use std::sync::Arc;
///
/// let logger: Arc<dyn Logger> = Arc::new(NoOpLogger);
/// logger.info("Application started on port {}", log_args![8080]);
/// logger.log(LogLevel::Debug, "Debug message", &[]);
/// ```
pub trait Logger: Send + Sync {
    /// Log a message at the specified level.
    ///
    /// This is the core method that implementations must provide.
    /// The convenience methods (`trace`, `debug`, `info`, `warn`, `error`)
    /// delegate to this method.
    fn log(&self, level: LogLevel, template: &str, args: &[&dyn Display]);

    /// Log a trace-level message.
    fn trace(&self, template: &str, args: &[&dyn Display]) {
        self.log(LogLevel::Trace, template, args);
    }

    /// Log a debug-level message.
    fn debug(&self, template: &str, args: &[&dyn Display]) {
        self.log(LogLevel::Debug, template, args);
    }

    /// Log an info-level message.
    fn info(&self, template: &str, args: &[&dyn Display]) {
        self.log(LogLevel::Info, template, args);
    }

    /// Log a warning-level message.
    fn warn(&self, template: &str, args: &[&dyn Display]) {
        self.log(LogLevel::Warn, template, args);
    }

    /// Log an error-level message.
    fn error(&self, template: &str, args: &[&dyn Display]) {
        self.log(LogLevel::Error, template, args);
    }

    /// Log an error-level message with an attached cause.
    ///
    /// The cause is not a template argument. Backends that can attach it as
    /// structured data should override this; the default appends
    /// ` - cause: {}` to the template so the cause is never silently lost.
    fn error_with_cause(&self, template: &str, args: &[&dyn Display], cause: &dyn Error) {
        let template = format!("{template} - cause: {{}}");
        let mut combined: Vec<&dyn Display> = Vec::with_capacity(args.len() + 1);
        combined.extend_from_slice(args);
        combined.push(&cause);
        self.error(&template, &combined);
    }
}

/// Build a `&[&dyn Display]` argument slice from a list of expressions.
///
/// ```
/// use siglog::log::{Logger, NoOpLogger};
/// use siglog::log_args;
///
/// let id = 42;
/// NoOpLogger.info("placing id={} in {}", log_args![id, "slot-a"]);
/// NoOpLogger.info("no arguments", log_args![]);
/// ```
#[macro_export]
macro_rules! log_args {
    () => {
        &[] as &[&dyn ::std::fmt::Display]
    };
    ($($arg:expr),+ $(,)?) => {
        &[$(&$arg as &dyn ::std::fmt::Display),+] as &[&dyn ::std::fmt::Display]
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;

    /// Minimal logger that only implements the required method.
    #[derive(Default)]
    struct LastMessage {
        last: Mutex<Option<(LogLevel, String, Vec<String>)>>,
    }

    impl Logger for LastMessage {
        fn log(&self, level: LogLevel, template: &str, args: &[&dyn Display]) {
            let args = args.iter().map(|a| a.to_string()).collect();
            *self.last.lock() = Some((level, template.to_string(), args));
        }
    }

    #[derive(Debug)]
    struct Boom;

    impl Display for Boom {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("boom")
        }
    }

    impl Error for Boom {}

    #[test]
    fn test_log_level_ordering() {
        assert!(LogLevel::Trace < LogLevel::Debug);
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Info < LogLevel::Warn);
        assert!(LogLevel::Warn < LogLevel::Error);
    }

    #[test]
    fn test_log_level_display_round_trips_through_from_str() {
        for level in LogLevel::ALL {
            assert_eq!(level.to_string().parse::<LogLevel>(), Ok(level));
        }
    }

    #[test]
    fn test_log_level_parse_is_case_insensitive() {
        assert_eq!("INFO".parse::<LogLevel>(), Ok(LogLevel::Info));
        assert_eq!(" Warning ".parse::<LogLevel>(), Ok(LogLevel::Warn));
    }

    #[test]
    fn test_log_level_parse_rejects_unknown() {
        let err = "fatal".parse::<LogLevel>().unwrap_err();
        assert_eq!(err.input(), "fatal");
    }

    #[test]
    fn test_log_level_to_tracing_level() {
        assert_eq!(tracing::Level::from(LogLevel::Trace), tracing::Level::TRACE);
        assert_eq!(tracing::Level::from(LogLevel::Error), tracing::Level::ERROR);
    }

    #[test]
    fn test_default_methods_route_through_log() {
        let logger = LastMessage::default();
        logger.warn("disk at {}%", log_args![93]);

        let last = logger.last.lock().clone();
        assert_eq!(
            last,
            Some((LogLevel::Warn, "disk at {}%".to_string(), vec!["93".to_string()]))
        );
    }

    #[test]
    fn test_default_error_with_cause_appends_cause() {
        let logger = LastMessage::default();
        logger.error_with_cause("write failed for {}", log_args!["a.txt"], &Boom);

        let (level, template, args) = logger.last.lock().clone().unwrap();
        assert_eq!(level, LogLevel::Error);
        assert_eq!(template, "write failed for {} - cause: {}");
        assert_eq!(args, vec!["a.txt".to_string(), "boom".to_string()]);
    }

    #[test]
    fn test_log_args_empty() {
        let args = log_args![];
        assert!(args.is_empty());
    }
}
