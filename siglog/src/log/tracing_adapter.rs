//! Tracing library adapter implementation.

use crate::log::{LogLevel, Logger};
use crate::template::render;
use std::error::Error;
use std::fmt::Display;

/// Target attached to every event this adapter emits.
pub const TRACING_TARGET: &str = "siglog";

/// Logger implementation that delegates to the `tracing` crate.
///
/// Templates are rendered with [`render`] and emitted as the event message.
/// Rendering happens inside the macro, so it is skipped entirely when the
/// level is disabled by the installed subscriber.
///
/// # Example
///
/// ```ignore
/// use siglog::log::{Logger, TracingLogger};
/// use std::sync::Arc;
///
/// // Assumes a tracing subscriber is already initialized
/// let logger: Arc<dyn Logger> = Arc::new(TracingLogger);
/// logger.info("Using {} backend", &[&"tracing"]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl TracingLogger {
    /// Create a new tracing logger adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Logger for TracingLogger {
    fn log(&self, level: LogLevel, template: &str, args: &[&dyn Display]) {
        match level {
            LogLevel::Trace => tracing::trace!(target: TRACING_TARGET, "{}", render(template, args)),
            LogLevel::Debug => tracing::debug!(target: TRACING_TARGET, "{}", render(template, args)),
            LogLevel::Info => tracing::info!(target: TRACING_TARGET, "{}", render(template, args)),
            LogLevel::Warn => tracing::warn!(target: TRACING_TARGET, "{}", render(template, args)),
            LogLevel::Error => tracing::error!(target: TRACING_TARGET, "{}", render(template, args)),
        }
    }

    fn error_with_cause(&self, template: &str, args: &[&dyn Display], cause: &dyn Error) {
        tracing::error!(
            target: TRACING_TARGET,
            error = %cause,
            "{}",
            render(template, args)
        );
    }
}
