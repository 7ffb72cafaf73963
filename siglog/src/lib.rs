//! siglog - Signature-bound leveled logging
//!
//! A type names the operation it is running once and every message it logs
//! for that operation carries the name as a `::<signature>: ` prefix.
//!
//! # High-Level API
//!
//! Implement [`facade::SignatureLogging`] by exposing a [`log::Logger`], then
//! log directly or through a bound [`facade::LogContext`]:
//!
//! ```
//! use siglog::facade::SignatureLogging;
//! use siglog::log::{Logger, TracingLogger};
//! use siglog::log_args;
//!
//! struct Inventory {
//!     logger: TracingLogger,
//! }
//!
//! impl SignatureLogging for Inventory {
//!     fn logger(&self) -> &dyn Logger {
//!         &self.logger
//!     }
//! }
//!
//! let inventory = Inventory { logger: TracingLogger::new() };
//! inventory.info("restock(sku)", "restocking {}", log_args!["A-12"]);
//!
//! let log = inventory.with_signature("audit()");
//! log.start().debug("{} bins checked", log_args![40]).end();
//! ```
//!
//! Install a subscriber for [`log::TracingLogger`] with
//! [`logging::init_logging`].

pub mod config;
pub mod error;
pub mod facade;
pub mod log;
pub mod logging;
pub mod template;

pub use error::{LoggingError, ParseLevelError};
pub use facade::{LogContext, SignatureLogging};
pub use log::{LogLevel, Logger};

/// Version of the siglog library.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
