//! Signature-bound logging.
//!
//! A type implements [`SignatureLogging`] by handing out its [`Logger`]; in
//! return it gets leveled logging calls that prefix every message with a
//! caller-chosen signature, typically the method being executed:
//!
//! ```text
//! ::{}: <template>      args = [signature, arg1, .., argN]
//! ```
//!
//! The signature is always the first substitution argument, whichever entry
//! point is used. [`SignatureLogging::with_signature`] binds it once and
//! returns a [`LogContext`] whose calls chain:
//!
//! ```
//! use siglog::facade::SignatureLogging;
//! use siglog::log::{CapturingLogger, Logger};
//! use siglog::log_args;
//!
//! struct Placer {
//!     logger: CapturingLogger,
//! }
//!
//! impl SignatureLogging for Placer {
//!     fn logger(&self) -> &dyn Logger {
//!         &self.logger
//!     }
//! }
//!
//! let placer = Placer { logger: CapturingLogger::new() };
//! placer
//!     .with_signature("place(id)")
//!     .start_with("placing id={}", log_args![42])
//!     .info("done", log_args![])
//!     .end();
//!
//! let rendered: Vec<String> = placer.logger.records().iter().map(|r| r.rendered()).collect();
//! assert_eq!(
//!     rendered,
//!     ["::place(id): Start - placing id=42", "::place(id): done", "::place(id): End"]
//! );
//! ```

mod context;

pub use context::LogContext;

use crate::log::{LogLevel, Logger};
use std::borrow::Cow;
use std::error::Error;
use std::fmt::Display;

/// Template prefix whose placeholder is filled by the signature.
pub const SIGNATURE_PREFIX: &str = "::{}: ";

/// Marker logged by [`SignatureLogging::start`].
pub const START_MARKER: &str = "Start";

/// Marker logged by [`SignatureLogging::end`].
pub const END_MARKER: &str = "End";

/// Prepend `first` to `rest`, preserving the order of `rest`.
///
/// ```
/// use siglog::facade::combine_args;
/// use siglog::log_args;
///
/// let combined = combine_args(&"sig", log_args![1, 2]);
/// let shown: Vec<String> = combined.iter().map(|a| a.to_string()).collect();
/// assert_eq!(shown, ["sig", "1", "2"]);
/// ```
pub fn combine_args<'a>(first: &'a dyn Display, rest: &[&'a dyn Display]) -> Vec<&'a dyn Display> {
    std::iter::once(first).chain(rest.iter().copied()).collect()
}

/// Attach the signature placeholder to a caller template.
fn prefixed(template: &str) -> String {
    format!("{SIGNATURE_PREFIX}{template}")
}

/// Marker followed by the caller template, as in `Start - loading {}`.
fn marked(marker: &str, template: &str) -> String {
    format!("{marker} - {template}")
}

/// Leveled logging with a signature prefix.
///
/// Implementers only supply [`logger`](SignatureLogging::logger); every other
/// method has a default. Nothing is validated: signatures, templates and
/// arguments go to the backend as given, and whatever the backend does with
/// them is what the caller observes.
///
/// All leveled methods funnel through [`log`](SignatureLogging::log), except
/// [`error_with`](SignatureLogging::error_with) and
/// [`error_from`](SignatureLogging::error_from), which go straight to
/// [`Logger::error_with_cause`] so the cause is never mistaken for a
/// template argument.
pub trait SignatureLogging {
    /// The backend every record is submitted to.
    fn logger(&self) -> &dyn Logger;

    /// Bind `signature` for a sequence of calls.
    fn with_signature<'a>(&'a self, signature: impl Into<Cow<'a, str>>) -> LogContext<'a, Self> {
        LogContext::new(self, signature)
    }

    /// Log at trace level.
    fn trace(&self, signature: &str, template: &str, args: &[&dyn Display]) {
        self.log(LogLevel::Trace, signature, template, args);
    }

    /// Log at debug level.
    fn debug(&self, signature: &str, template: &str, args: &[&dyn Display]) {
        self.log(LogLevel::Debug, signature, template, args);
    }

    /// Log at info level.
    fn info(&self, signature: &str, template: &str, args: &[&dyn Display]) {
        self.log(LogLevel::Info, signature, template, args);
    }

    /// Log at warn level.
    fn warn(&self, signature: &str, template: &str, args: &[&dyn Display]) {
        self.log(LogLevel::Warn, signature, template, args);
    }

    /// Log at error level.
    fn error(&self, signature: &str, template: &str, args: &[&dyn Display]) {
        self.log(LogLevel::Error, signature, template, args);
    }

    /// Log at error level with an attached cause.
    fn error_with(&self, signature: &str, template: &str, cause: &dyn Error, args: &[&dyn Display]) {
        self.logger()
            .error_with_cause(&prefixed(template), &combine_args(&signature, args), cause);
    }

    /// Same record as [`error_with`](SignatureLogging::error_with), cause first.
    fn error_from(&self, signature: &str, cause: &dyn Error, template: &str, args: &[&dyn Display]) {
        self.error_with(signature, template, cause, args);
    }

    /// Trace the start of an operation.
    fn start(&self, signature: &str) {
        self.trace(signature, START_MARKER, &[]);
    }

    /// Trace the start of an operation with details.
    fn start_with(&self, signature: &str, template: &str, args: &[&dyn Display]) {
        self.trace(signature, &marked(START_MARKER, template), args);
    }

    /// Trace the end of an operation.
    fn end(&self, signature: &str) {
        self.trace(signature, END_MARKER, &[]);
    }

    /// Trace the end of an operation with details.
    fn end_with(&self, signature: &str, template: &str, args: &[&dyn Display]) {
        self.trace(signature, &marked(END_MARKER, template), args);
    }

    /// Submit one record at `level`.
    ///
    /// Each level maps to the backend method of the same name.
    fn log(&self, level: LogLevel, signature: &str, template: &str, args: &[&dyn Display]) {
        let logger = self.logger();
        let formatted = prefixed(template);
        let combined = combine_args(&signature, args);
        match level {
            LogLevel::Trace => logger.trace(&formatted, &combined),
            LogLevel::Debug => logger.debug(&formatted, &combined),
            LogLevel::Info => logger.info(&formatted, &combined),
            LogLevel::Warn => logger.warn(&formatted, &combined),
            LogLevel::Error => logger.error(&formatted, &combined),
        }
    }
}
