//! Sinks and sink management behind the logging facade

mod traits;
mod level;
mod domain;
mod noop;
mod console;
mod memory;
mod registry;
mod slot;
pub mod file;
pub mod hilog;

use std::sync::Arc;

pub use traits::{LogSink, SharedSink};
pub use level::LogLevel;
pub use domain::Domain;
pub use noop::NoOpSink;
pub use console::ConsoleSink;
pub use memory::{MemorySink, LogRecord};
pub use file::FileSink;
pub use registry::{
    register_sink, create_sink, list_sinks, has_sink, unregister_sink,
    SinkDefinition, SinkFactory,
};
pub use slot::{set_sink, current_sink, reset_sink};

#[cfg(target_env = "ohos")]
pub use hilog::HilogSink;

/// The system log facility for the current target
#[cfg(target_env = "ohos")]
pub type PlatformSink = HilogSink;

/// The system log facility for the current target
#[cfg(not(target_env = "ohos"))]
pub type PlatformSink = ConsoleSink;

/// Create the platform sink
pub fn platform_sink() -> SharedSink {
    Arc::new(PlatformSink::default())
}
