//! Logging settings and sink construction

use std::path::PathBuf;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::logging::{create_sink, ConsoleSink, FileSink, SharedSink};
use super::error::{ConfigError, ConfigResult};

/// Environment variable selecting the sink by name
pub const ENV_SINK: &str = "NCLOG_SINK";
/// Environment variable with the file sink's path
pub const ENV_LOG_FILE: &str = "NCLOG_LOG_FILE";
/// Environment variable with the console sink's prefix
pub const ENV_PREFIX: &str = "NCLOG_PREFIX";

fn default_sink() -> String {
    "platform".to_string()
}

/// Which sink the facade writes to, plus per-sink options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Registered sink name (`platform`, `console`, `file`, `noop`, or a plugin)
    #[serde(default = "default_sink")]
    pub sink: String,

    /// Prefix for console lines
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub console_prefix: Option<String>,

    /// Path for the file sink
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_path: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            sink: default_sink(),
            console_prefix: None,
            file_path: None,
        }
    }
}

impl LoggingConfig {
    /// Config using the named sink and default options
    pub fn with_sink(sink: impl Into<String>) -> Self {
        Self {
            sink: sink.into(),
            ..Self::default()
        }
    }

    /// Apply `NCLOG_*` overrides from the process environment
    pub fn apply_env(self) -> Self {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary lookup; empty values are ignored
    pub fn apply_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(sink) = get(ENV_SINK) {
            self.sink = sink.trim().to_lowercase();
        }
        if let Some(path) = get(ENV_LOG_FILE) {
            self.file_path = Some(PathBuf::from(path));
        }
        if let Some(prefix) = get(ENV_PREFIX) {
            self.console_prefix = Some(prefix);
        }
        self
    }

    /// Build the configured sink
    ///
    /// `console` and `file` honour their options; every other name goes
    /// through the sink registry. Built-in names are reserved there, so a
    /// plugin can never be shadowed by these arms.
    pub fn build_sink(&self) -> ConfigResult<SharedSink> {
        match self.sink.as_str() {
            "console" => Ok(Arc::new(match &self.console_prefix {
                Some(prefix) => ConsoleSink::with_prefix(prefix.clone()),
                None => ConsoleSink::new(),
            })),
            "file" => Ok(Arc::new(match &self.file_path {
                Some(path) => FileSink::new(path.clone()),
                None => FileSink::default(),
            })),
            name => create_sink(name).ok_or_else(|| ConfigError::UnknownSink(name.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::{Domain, LogLevel, LogSink};
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = LoggingConfig::default();
        assert_eq!(config.sink, "platform");
        assert!(config.console_prefix.is_none());
        assert!(config.file_path.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = LoggingConfig::default().apply_overrides(env(&[
            (ENV_SINK, " File "),
            (ENV_LOG_FILE, "/tmp/x.log"),
            (ENV_PREFIX, "[X]"),
        ]));
        assert_eq!(config.sink, "file");
        assert_eq!(config.file_path, Some(PathBuf::from("/tmp/x.log")));
        assert_eq!(config.console_prefix.as_deref(), Some("[X]"));
    }

    #[test]
    fn test_empty_override_ignored() {
        let config = LoggingConfig::with_sink("console").apply_overrides(env(&[(ENV_SINK, "  ")]));
        assert_eq!(config.sink, "console");
    }

    #[test]
    fn test_build_known_sinks() {
        assert_eq!(LoggingConfig::with_sink("console").build_sink().unwrap().name(), "console");
        assert_eq!(LoggingConfig::with_sink("noop").build_sink().unwrap().name(), "noop");
        assert!(LoggingConfig::default().build_sink().is_ok());
    }

    #[test]
    fn test_build_file_sink_uses_path() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("custom.log");
        let config = LoggingConfig {
            sink: "file".to_string(),
            file_path: Some(path.clone()),
            ..Default::default()
        };
        let sink = config.build_sink().unwrap();
        sink.emit(Domain::APP, "Cfg", "written", LogLevel::Info);
        assert!(std::fs::read_to_string(&path).unwrap().contains("written"));
    }

    #[test]
    fn test_memory_is_not_a_config_sink() {
        let err = LoggingConfig::with_sink("memory").build_sink().err().unwrap();
        assert!(matches!(err, ConfigError::UnknownSink(_)));
    }

    #[test]
    fn test_console_not_shadowed_by_plugin() {
        let taken = crate::logging::register_sink(
            "console",
            "shadow",
            Box::new(|| std::sync::Arc::new(crate::logging::NoOpSink::new())),
        );
        assert!(!taken);
        assert_eq!(LoggingConfig::with_sink("console").build_sink().unwrap().name(), "console");
    }

    #[test]
    fn test_build_unknown_sink() {
        let err = LoggingConfig::with_sink("syslog-xyz").build_sink().err().unwrap();
        assert!(matches!(err, ConfigError::UnknownSink(ref name) if name == "syslog-xyz"));
        assert_eq!(err.to_string(), "Unknown sink: syslog-xyz");
    }
}
