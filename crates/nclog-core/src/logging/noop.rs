//! No-op sink implementation

use super::domain::Domain;
use super::level::LogLevel;
use super::traits::LogSink;

/// A sink that does nothing
///
/// Useful for silencing output in tests or embedded hosts.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpSink;

impl NoOpSink {
    /// Create a new no-op sink
    pub fn new() -> Self {
        Self
    }
}

impl LogSink for NoOpSink {
    fn name(&self) -> &str {
        "noop"
    }

    fn emit(&self, _domain: Domain, _component: &str, _message: &str, _level: LogLevel) {}
}
