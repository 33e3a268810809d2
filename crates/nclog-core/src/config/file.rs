//! File-based configuration (YAML or JSON)
//!
//! Default location is `<config dir>/nclog/logging.yaml`.

use std::fs;
use std::path::{Path, PathBuf};

use super::error::{ConfigError, ConfigResult};
use super::settings::LoggingConfig;

/// Config file format, chosen by extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Yaml,
    Json,
}

impl ConfigFormat {
    pub fn from_path(path: &Path) -> ConfigResult<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "yaml" | "yml" => Ok(ConfigFormat::Yaml),
            "json" => Ok(ConfigFormat::Json),
            _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Logging config stored on disk
///
/// # Example
///
/// ```no_run
/// use nclog_core::config::ConfigFile;
///
/// let config = ConfigFile::user().load().expect("readable config");
/// nclog_core::init(&config).expect("known sink");
/// ```
#[derive(Debug, Clone)]
pub struct ConfigFile {
    path: PathBuf,
}

impl ConfigFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// User-level config (`~/.config/nclog/logging.yaml` on Linux)
    pub fn user() -> Self {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")).join(".config"));
        Self::new(config_dir.join("nclog").join("logging.yaml"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Read the config; a missing file yields the defaults
    pub fn load(&self) -> ConfigResult<LoggingConfig> {
        let format = ConfigFormat::from_path(&self.path)?;
        if !self.path.exists() {
            return Ok(LoggingConfig::default());
        }

        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(LoggingConfig::default());
        }
        let config = match format {
            ConfigFormat::Yaml => serde_yaml::from_str(&content)?,
            ConfigFormat::Json => serde_json::from_str(&content)?,
        };
        Ok(config)
    }

    /// Read the config, then apply `NCLOG_*` environment overrides
    pub fn load_with_env(&self) -> ConfigResult<LoggingConfig> {
        Ok(self.load()?.apply_env())
    }

    /// Write the config, creating parent directories
    pub fn save(&self, config: &LoggingConfig) -> ConfigResult<()> {
        let format = ConfigFormat::from_path(&self.path)?;
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = match format {
            ConfigFormat::Yaml => serde_yaml::to_string(config)?,
            ConfigFormat::Json => serde_json::to_string_pretty(config)?,
        };
        fs::write(&self.path, content)?;
        Ok(())
    }
}
