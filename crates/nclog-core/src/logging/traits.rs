//! Log sink trait definition

use std::sync::Arc;

use super::domain::Domain;
use super::file::FileSink;
use super::level::LogLevel;

/// Destination for forwarded log messages
///
/// Implementations:
/// - `HilogSink`: OpenHarmony hilog (only on `target_env = "ohos"`)
/// - `ConsoleSink`: Writes to stdout/stderr
/// - `FileSink`: Appends to a log file
/// - `MemorySink`: Records messages for inspection
/// - `NoOpSink`: Discards everything
///
/// `emit` has no error channel. A sink that can fail internally must swallow
/// the failure; nothing reaches the caller of the facade.
pub trait LogSink: Send + Sync {
    /// Short name used by the registry and diagnostics
    fn name(&self) -> &str;

    /// Forward one message
    fn emit(&self, domain: Domain, component: &str, message: &str, level: LogLevel);

    /// The backing file sink, for sinks that write to a log file
    fn log_file(&self) -> Option<&FileSink> {
        None
    }
}

/// Type alias for an Arc-wrapped sink
pub type SharedSink = Arc<dyn LogSink>;

impl<T: LogSink + ?Sized> LogSink for Arc<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn emit(&self, domain: Domain, component: &str, message: &str, level: LogLevel) {
        (**self).emit(domain, component, message, level)
    }

    fn log_file(&self) -> Option<&FileSink> {
        (**self).log_file()
    }
}
