//! Configuration errors

/// Errors that can occur while loading configuration or building sinks
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Unknown sink: {0}")]
    UnknownSink(String),

    #[error("Unsupported config format: {0}")]
    UnsupportedFormat(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type ConfigResult<T> = Result<T, ConfigError>;
