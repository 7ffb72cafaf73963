//! No-operation logger implementation.

use crate::log::{LogLevel, Logger};
use std::fmt::Display;

/// A logger that discards all messages.
///
/// Useful for:
/// - Unit tests where log output would be noise
/// - Benchmarks where logging overhead should be eliminated
/// - Silent operation modes
///
/// # Example
///
/// ```
/// use siglog::log::{Logger, NoOpLogger};
/// use std::sync::Arc;
///
/// let logger: Arc<dyn Logger> = Arc::new(NoOpLogger);
/// logger.info("This message is discarded", &[]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpLogger;

impl Logger for NoOpLogger {
    #[inline]
    fn log(&self, _level: LogLevel, _template: &str, _args: &[&dyn Display]) {}

    #[inline]
    fn error_with_cause(
        &self,
        _template: &str,
        _args: &[&dyn Display],
        _cause: &dyn std::error::Error,
    ) {
    }
}
