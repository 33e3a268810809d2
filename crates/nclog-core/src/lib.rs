//! nclog Core
//!
//! Domain-tagged logging facade for the Nextcloud OpenHarmony client.
//!
//! Four entry points, [`logger::debug`], [`logger::info`], [`logger::warn`]
//! and [`logger::error`], forward a component label and a message to the
//! platform log with the fixed application domain (`0x0001`). On OpenHarmony
//! that is hilog; elsewhere the console stands in. The destination can be
//! swapped for a file, memory or no-op sink through [`config`].
//!
//! ```rust
//! use nclog_core::{logger, info_log};
//!
//! logger::debug("Accounts", "restoring session");
//! info_log!("Sync", "{} files pending", 3);
//! ```

pub mod logging;
pub mod logger;
pub mod config;

pub use logging::{
    LogSink, SharedSink, LogLevel, Domain, LogRecord,
    NoOpSink, ConsoleSink, FileSink, MemorySink, PlatformSink,
    set_sink, current_sink, reset_sink,
};

pub use logger::DomainLogger;

pub use config::{init, init_from_env, LoggingConfig, ConfigFile, ConfigError, ConfigResult};
