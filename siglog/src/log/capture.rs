//! In-memory logger for assertions in tests.

use crate::log::{LogLevel, Logger};
use parking_lot::Mutex;
use std::error::Error;
use std::fmt::Display;

/// One call received by a [`CapturingLogger`].
///
/// The template is kept unrendered and arguments are stringified, so tests
/// can assert on exactly what the caller handed to the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedRecord {
    pub level: LogLevel,
    pub template: String,
    pub args: Vec<String>,
    /// Display form of the attached cause, for `error_with_cause` calls.
    pub cause: Option<String>,
}

impl CapturedRecord {
    /// Build a record without a cause.
    pub fn new<A: ToString>(level: LogLevel, template: &str, args: &[A]) -> Self {
        Self {
            level,
            template: template.to_string(),
            args: args.iter().map(ToString::to_string).collect(),
            cause: None,
        }
    }

    /// Attach the display form of a cause.
    pub fn with_cause(mut self, cause: impl ToString) -> Self {
        self.cause = Some(cause.to_string());
        self
    }

    /// Render the template with the captured arguments.
    pub fn rendered(&self) -> String {
        let args: Vec<&dyn Display> = self.args.iter().map(|a| a as &dyn Display).collect();
        crate::template::render(&self.template, &args)
    }
}

/// A logger that keeps every record in memory.
///
/// # Example
///
/// ```
/// use siglog::log::{CapturingLogger, LogLevel, Logger};
/// use siglog::log_args;
///
/// let logger = CapturingLogger::new();
/// logger.info("loaded {} tiles", log_args![12]);
///
/// let record = logger.last().unwrap();
/// assert_eq!(record.level, LogLevel::Info);
/// assert_eq!(record.rendered(), "loaded 12 tiles");
/// ```
#[derive(Debug, Default)]
pub struct CapturingLogger {
    records: Mutex<Vec<CapturedRecord>>,
}

impl CapturingLogger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all records, oldest first.
    pub fn records(&self) -> Vec<CapturedRecord> {
        self.records.lock().clone()
    }

    /// Most recent record, if any.
    pub fn last(&self) -> Option<CapturedRecord> {
        self.records.lock().last().cloned()
    }

    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }

    /// Drop everything captured so far.
    pub fn clear(&self) {
        self.records.lock().clear();
    }

    fn push(&self, record: CapturedRecord) {
        self.records.lock().push(record);
    }
}

impl Logger for CapturingLogger {
    fn log(&self, level: LogLevel, template: &str, args: &[&dyn Display]) {
        self.push(CapturedRecord::new(level, template, args));
    }

    fn error_with_cause(&self, template: &str, args: &[&dyn Display], cause: &dyn Error) {
        self.push(CapturedRecord::new(LogLevel::Error, template, args).with_cause(cause));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::log_args;
    use std::fmt;
    use std::sync::Arc;
    use std::thread;

    #[derive(Debug)]
    struct Timeout;

    impl fmt::Display for Timeout {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("timed out")
        }
    }

    impl Error for Timeout {}

    #[test]
    fn test_starts_empty() {
        let logger = CapturingLogger::new();
        assert!(logger.is_empty());
        assert_eq!(logger.len(), 0);
        assert!(logger.last().is_none());
    }

    #[test]
    fn test_records_raw_template_and_args() {
        let logger = CapturingLogger::new();
        logger.debug("fetched {} of {}", log_args![3, 10]);

        assert_eq!(
            logger.records(),
            vec![CapturedRecord::new(LogLevel::Debug, "fetched {} of {}", &[3, 10])]
        );
    }

    #[test]
    fn test_records_cause_separately_from_args() {
        let logger = CapturingLogger::new();
        logger.error_with_cause("request {} failed", log_args![7], &Timeout);

        let record = logger.last().unwrap();
        assert_eq!(record.args, vec!["7".to_string()]);
        assert_eq!(record.cause.as_deref(), Some("timed out"));
    }

    #[test]
    fn test_clear() {
        let logger = CapturingLogger::new();
        logger.info("one", &[]);
        logger.info("two", &[]);
        assert_eq!(logger.len(), 2);

        logger.clear();
        assert!(logger.is_empty());
    }

    #[test]
    fn test_rendered() {
        let record = CapturedRecord::new(LogLevel::Info, "::{}: {} ok", &["sync()", "3"]);
        assert_eq!(record.rendered(), "::sync(): 3 ok");
    }

    #[test]
    fn test_concurrent_writers_lose_nothing() {
        let logger = Arc::new(CapturingLogger::new());
        let handles: Vec<_> = (0..4)
            .map(|worker| {
                let logger = Arc::clone(&logger);
                thread::spawn(move || {
                    for i in 0..25 {
                        logger.info("worker {} item {}", log_args![worker, i]);
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(logger.len(), 100);
    }
}
