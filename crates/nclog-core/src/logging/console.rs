//! Console sink implementation

use std::io::{self, Write};

use super::domain::Domain;
use super::level::LogLevel;
use super::traits::LogSink;

/// Default line prefix
pub const DEFAULT_PREFIX: &str = "[nclog]";

/// A sink that outputs to the console (stdout/stderr)
///
/// Info goes to stdout, every other level to stderr.
#[derive(Debug, Clone)]
pub struct ConsoleSink {
    prefix: String,
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleSink {
    /// Create a new console sink with default prefix
    pub fn new() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
        }
    }

    /// Create a console sink with a custom prefix
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    fn format_line(&self, domain: Domain, component: &str, message: &str, level: LogLevel) -> String {
        format!("{} {} [{}/{}] {}", self.prefix, level, domain, component, message)
    }

    /// Write one line to `out`, dropping write errors (closed pipe, full disk)
    fn write_line<W: Write>(&self, mut out: W, domain: Domain, component: &str, message: &str, level: LogLevel) {
        let line = self.format_line(domain, component, message, level);
        let _ = writeln!(out, "{}", line);
        let _ = out.flush();
    }
}

impl LogSink for ConsoleSink {
    fn name(&self) -> &str {
        "console"
    }

    fn emit(&self, domain: Domain, component: &str, message: &str, level: LogLevel) {
        match level {
            LogLevel::Info => self.write_line(io::stdout().lock(), domain, component, message, level),
            _ => self.write_line(io::stderr().lock(), domain, component, message, level),
        }
    }
}
