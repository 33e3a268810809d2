//! JavaScript bindings for nclog via napi-rs

#![deny(clippy::all)]

use std::path::PathBuf;
use std::sync::Arc;

use napi::bindgen_prelude::*;
use napi_derive::napi;

use nclog_core::config::{
    init as core_init,
    ConfigFile as CoreConfigFile,
    LoggingConfig as CoreLoggingConfig,
};
use nclog_core::logger;
use nclog_core::logging::{
    current_sink as core_current_sink,
    list_sinks as core_list_sinks,
    set_sink as core_set_sink,
    FileSink as CoreFileSink,
    LogSink as CoreLogSink,
};

// ============================================================================
// Facade
// ============================================================================

/// Log a debug message under the app domain
#[napi]
pub fn debug(component: String, message: String) {
    logger::debug(&component, &message);
}

/// Log an info message under the app domain
#[napi]
pub fn info(component: String, message: String) {
    logger::info(&component, &message);
}

/// Log a warning under the app domain
#[napi]
pub fn warn(component: String, message: String) {
    logger::warn(&component, &message);
}

/// Log an error under the app domain
#[napi]
pub fn error(component: String, message: String) {
    logger::error(&component, &message);
}

// ============================================================================
// Sink Selection
// ============================================================================

#[napi(object)]
pub struct SinkInfo {
    pub name: String,
    pub description: String,
    pub is_plugin: bool,
}

/// List the sinks `useSink` accepts
#[napi]
pub fn list_sinks() -> Vec<SinkInfo> {
    core_list_sinks()
        .into_iter()
        .map(|(name, description, is_plugin)| SinkInfo { name, description, is_plugin })
        .collect()
}

/// Switch the facade to a registered sink by name
#[napi]
pub fn use_sink(name: String) -> Result<()> {
    core_init(&CoreLoggingConfig::with_sink(name)).map_err(|e| Error::from_reason(e.to_string()))
}

/// Load a YAML/JSON config (user config when no path is given), apply env overrides, and install the sink
#[napi]
pub fn init_from_config(path: Option<String>) -> Result<()> {
    let file = match path {
        Some(path) => CoreConfigFile::new(path),
        None => CoreConfigFile::user(),
    };
    let config = file.load_with_env().map_err(|e| Error::from_reason(e.to_string()))?;
    core_init(&config).map_err(|e| Error::from_reason(e.to_string()))
}

// ============================================================================
// File Sink
// ============================================================================

/// Route the facade to a log file and return its path
#[napi]
pub fn use_file_sink(path: Option<String>) -> String {
    let path = path.map(PathBuf::from).unwrap_or_else(CoreFileSink::default_path);
    let sink = Arc::new(CoreFileSink::new(path));
    let shown = sink.path().to_string_lossy().to_string();
    core_set_sink(sink);
    shown
}

/// Path of the active file sink, if the facade currently writes to one
#[napi]
pub fn get_log_file_path() -> Option<String> {
    core_current_sink()
        .log_file()
        .map(|file| file.path().to_string_lossy().to_string())
}

/// Truncate the active file sink's log file; no-op for other sinks
#[napi]
pub fn clear_log_file() {
    let sink = core_current_sink();
    if let Some(file) = sink.log_file() {
        file.clear();
    }
}
