//! Signature bound to a facade.

use super::SignatureLogging;
use crate::log::LogLevel;
use std::borrow::Cow;
use std::error::Error;
use std::fmt::{self, Display};

/// A facade borrow paired with one fixed signature.
///
/// Every method forwards to the facade with the stored signature and returns
/// the same context, so statements chain. The context never changes after
/// construction.
///
/// ```
/// use siglog::facade::{LogContext, SignatureLogging};
/// use siglog::log::{CapturingLogger, Logger};
/// use siglog::log_args;
///
/// struct Loader {
///     logger: CapturingLogger,
/// }
///
/// impl SignatureLogging for Loader {
///     fn logger(&self) -> &dyn Logger {
///         &self.logger
///     }
/// }
///
/// let loader = Loader { logger: CapturingLogger::new() };
/// let log = LogContext::new(&loader, "load(path)");
/// assert_eq!(log.signature(), "load(path)");
///
/// log.start().warn("{} retries left", log_args![2]).end();
/// let last = loader.logger.records().remove(1);
/// assert_eq!(last.rendered(), "::load(path): 2 retries left");
/// ```
pub struct LogContext<'a, F: ?Sized> {
    facade: &'a F,
    signature: Cow<'a, str>,
}

impl<'a, F: SignatureLogging + ?Sized> LogContext<'a, F> {
    /// Bind `signature` to `facade`.
    pub fn new(facade: &'a F, signature: impl Into<Cow<'a, str>>) -> Self {
        Self {
            facade,
            signature: signature.into(),
        }
    }

    /// The bound signature.
    pub fn signature(&self) -> &str {
        &self.signature
    }

    /// The facade calls are forwarded to.
    pub fn facade(&self) -> &'a F {
        self.facade
    }

    /// Log at trace level.
    pub fn trace(&self, template: &str, args: &[&dyn Display]) -> &Self {
        self.facade.trace(&self.signature, template, args);
        self
    }

    /// Log at debug level.
    pub fn debug(&self, template: &str, args: &[&dyn Display]) -> &Self {
        self.facade.debug(&self.signature, template, args);
        self
    }

    /// Log at info level.
    pub fn info(&self, template: &str, args: &[&dyn Display]) -> &Self {
        self.facade.info(&self.signature, template, args);
        self
    }

    /// Log at warn level.
    pub fn warn(&self, template: &str, args: &[&dyn Display]) -> &Self {
        self.facade.warn(&self.signature, template, args);
        self
    }

    /// Log at error level.
    pub fn error(&self, template: &str, args: &[&dyn Display]) -> &Self {
        self.facade.error(&self.signature, template, args);
        self
    }

    /// Log at error level with an attached cause.
    pub fn error_with(&self, template: &str, cause: &dyn Error, args: &[&dyn Display]) -> &Self {
        self.facade.error_with(&self.signature, template, cause, args);
        self
    }

    /// Same record as [`error_with`](Self::error_with), cause first.
    pub fn error_from(&self, cause: &dyn Error, template: &str, args: &[&dyn Display]) -> &Self {
        self.facade.error_from(&self.signature, cause, template, args);
        self
    }

    /// Trace the start of the operation.
    pub fn start(&self) -> &Self {
        self.facade.start(&self.signature);
        self
    }

    /// Trace the start of the operation with details.
    pub fn start_with(&self, template: &str, args: &[&dyn Display]) -> &Self {
        self.facade.start_with(&self.signature, template, args);
        self
    }

    /// Trace the end of the operation.
    pub fn end(&self) -> &Self {
        self.facade.end(&self.signature);
        self
    }

    /// Trace the end of the operation with details.
    pub fn end_with(&self, template: &str, args: &[&dyn Display]) -> &Self {
        self.facade.end_with(&self.signature, template, args);
        self
    }

    /// Submit one record at `level`.
    pub fn log(&self, level: LogLevel, template: &str, args: &[&dyn Display]) -> &Self {
        self.facade.log(level, &self.signature, template, args);
        self
    }
}

impl<F: ?Sized> Clone for LogContext<'_, F> {
    fn clone(&self) -> Self {
        Self {
            facade: self.facade,
            signature: self.signature.clone(),
        }
    }
}

impl<F: ?Sized> fmt::Debug for LogContext<'_, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogContext")
            .field("signature", &self.signature)
            .finish_non_exhaustive()
    }
}
