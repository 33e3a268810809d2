//! Logging configuration
//!
//! Picks the sink the facade forwards to:
//! - `LoggingConfig`: sink name plus console/file options, with `NCLOG_*` env overrides
//! - `ConfigFile`: YAML or JSON file holding a `LoggingConfig`

mod error;
mod settings;
mod file;

pub use error::{ConfigError, ConfigResult};
pub use settings::{LoggingConfig, ENV_SINK, ENV_LOG_FILE, ENV_PREFIX};
pub use file::{ConfigFile, ConfigFormat};

use crate::logging::{set_sink, LogSink};

/// Build the configured sink and install it for the facade
pub fn init(config: &LoggingConfig) -> ConfigResult<()> {
    let sink = config.build_sink()?;
    let name = sink.name().to_string();
    set_sink(sink);
    crate::logger::info("nclog", &format!("logging to {} sink", name));
    Ok(())
}

/// Load the user config file, apply env overrides, and install the sink
pub fn init_from_env() -> ConfigResult<()> {
    let config = ConfigFile::user().load_with_env()?;
    init(&config)
}
