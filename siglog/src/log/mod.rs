//! Logging backend abstraction.
//!
//! The signature facade never talks to `tracing` directly. It hands a
//! template and its arguments to a [`Logger`], which decides how to render
//! and where to send them.
//!
//! # Architecture
//!
//! - `Logger` trait: the backend interface the facade writes to
//! - `TracingLogger`: production adapter that delegates to the `tracing` crate
//! - `NoOpLogger`: silent logger for benchmarks and quiet runs
//! - `CapturingLogger`: in-memory recorder for test assertions
//!
//! # Usage
//!
//! ```
//! use siglog::log::{Logger, NoOpLogger};
//! use siglog::log_args;
//! use std::sync::Arc;
//!
//! struct MyComponent {
//!     logger: Arc<dyn Logger>,
//! }
//!
//! impl MyComponent {
//!     fn do_work(&self, items: usize) {
//!         self.logger.info("Starting work on {} items", log_args![items]);
//!         self.logger.debug("Work completed", &[]);
//!     }
//! }
//!
//! MyComponent { logger: Arc::new(NoOpLogger) }.do_work(3);
//! ```

mod capture;
mod noop;
mod tracing_adapter;
mod r#trait;

pub use capture::{CapturedRecord, CapturingLogger};
pub use noop::NoOpLogger;
pub use r#trait::{LogLevel, Logger};
pub use tracing_adapter::{TracingLogger, TRACING_TARGET};
