//! Application logging facade
//!
//! Four entry points, one per severity, each taking a component label and a
//! message. Every call is forwarded once, unchanged, to the active sink with
//! the application domain tag [`Domain::APP`]. Nothing is returned and nothing
//! the sink does can fail the caller.
//!
//! ```
//! use nclog_core::logger;
//!
//! logger::info("FileList", "loaded 12 entries");
//! logger::error("Upload", "server returned 507");
//! ```

use crate::logging::{current_sink, Domain, LogLevel, LogSink, SharedSink};

/// Forward a message at `level` to the active sink
pub fn log(level: LogLevel, component: &str, message: &str) {
    current_sink().emit(Domain::APP, component, message, level);
}

/// Log a debug message
pub fn debug(component: &str, message: &str) {
    log(LogLevel::Debug, component, message);
}

/// Log an info message
pub fn info(component: &str, message: &str) {
    log(LogLevel::Info, component, message);
}

/// Log a warning message
pub fn warn(component: &str, message: &str) {
    log(LogLevel::Warn, component, message);
}

/// Log an error message
pub fn error(component: &str, message: &str) {
    log(LogLevel::Error, component, message);
}

/// Logger bound to its own domain and sink
///
/// Same four operations as the free functions, for code that owns a sink
/// (tests, embedded hosts) or logs under a domain other than the app's.
#[derive(Clone)]
pub struct DomainLogger {
    domain: Domain,
    sink: SharedSink,
}

impl DomainLogger {
    pub fn new(domain: Domain, sink: SharedSink) -> Self {
        Self { domain, sink }
    }

    pub fn domain(&self) -> Domain {
        self.domain
    }

    pub fn sink(&self) -> &SharedSink {
        &self.sink
    }

    pub fn log(&self, level: LogLevel, component: &str, message: &str) {
        self.sink.emit(self.domain, component, message, level);
    }

    pub fn debug(&self, component: &str, message: &str) {
        self.log(LogLevel::Debug, component, message);
    }

    pub fn info(&self, component: &str, message: &str) {
        self.log(LogLevel::Info, component, message);
    }

    pub fn warn(&self, component: &str, message: &str) {
        self.log(LogLevel::Warn, component, message);
    }

    pub fn error(&self, component: &str, message: &str) {
        self.log(LogLevel::Error, component, message);
    }
}

impl std::fmt::Debug for DomainLogger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DomainLogger")
            .field("domain", &self.domain)
            .field("sink", &self.sink.name())
            .finish()
    }
}

/// Convenience macros: component first, then `format!` arguments
#[macro_export]
macro_rules! debug_log {
    ($component:expr, $($arg:tt)*) => {
        $crate::logger::debug($component, &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! info_log {
    ($component:expr, $($arg:tt)*) => {
        $crate::logger::info($component, &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! warn_log {
    ($component:expr, $($arg:tt)*) => {
        $crate::logger::warn($component, &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! error_log {
    ($component:expr, $($arg:tt)*) => {
        $crate::logger::error($component, &format!($($arg)*))
    };
}
