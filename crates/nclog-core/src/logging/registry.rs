//! Sink registry for discovering and creating sinks by name

use std::collections::HashMap;
use std::sync::Arc;

use once_cell::sync::Lazy;
use parking_lot::RwLock;

use super::console::ConsoleSink;
use super::file::FileSink;
use super::noop::NoOpSink;
use super::traits::SharedSink;
use super::platform_sink;

/// Factory function type for creating sinks
pub type SinkFactory = Box<dyn Fn() -> SharedSink + Send + Sync>;

/// Definition of a registered sink
pub struct SinkDefinition {
    /// Unique name for this sink
    pub name: String,
    /// Human-readable description
    pub description: String,
    /// Factory function to create instances
    pub factory: SinkFactory,
    /// Whether this was registered outside the crate
    pub is_plugin: bool,
}

impl std::fmt::Debug for SinkDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SinkDefinition")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("is_plugin", &self.is_plugin)
            .finish()
    }
}

fn builtin(name: &str, description: &str, factory: SinkFactory) -> (String, SinkDefinition) {
    (
        name.to_string(),
        SinkDefinition {
            name: name.to_string(),
            description: description.to_string(),
            factory,
            is_plugin: false,
        },
    )
}

/// Global registry of sinks
static REGISTRY: Lazy<RwLock<HashMap<String, SinkDefinition>>> = Lazy::new(|| {
    let map = HashMap::from([
        builtin(
            "platform",
            "System log facility (hilog on OpenHarmony, console elsewhere)",
            Box::new(platform_sink),
        ),
        builtin(
            "console",
            "Write to stdout/stderr",
            Box::new(|| Arc::new(ConsoleSink::new())),
        ),
        builtin(
            "file",
            "Append to nclog.log in the temp dir",
            Box::new(|| Arc::new(FileSink::default())),
        ),
        builtin(
            "noop",
            "Discard all messages",
            Box::new(|| Arc::new(NoOpSink::new())),
        ),
    ]);
    RwLock::new(map)
});

/// Names taken by the built-in sinks
pub const BUILTIN_SINKS: [&str; 4] = ["platform", "console", "file", "noop"];

/// Register a new sink type
///
/// Registering an existing plugin name replaces it. Built-in names can't be
/// taken over; returns false and leaves the registry untouched for those.
///
/// # Example
///
/// ```
/// use nclog_core::logging::{register_sink, create_sink, NoOpSink};
/// use std::sync::Arc;
///
/// assert!(register_sink("quiet", "Silent sink", Box::new(|| Arc::new(NoOpSink::new()))));
/// assert!(create_sink("quiet").is_some());
/// ```
pub fn register_sink(name: &str, description: &str, factory: SinkFactory) -> bool {
    if BUILTIN_SINKS.contains(&name) {
        return false;
    }
    let mut registry = REGISTRY.write();
    registry.insert(
        name.to_string(),
        SinkDefinition {
            name: name.to_string(),
            description: description.to_string(),
            factory,
            is_plugin: true,
        },
    );
    true
}

/// Create a sink by name
///
/// Returns None if the name is not registered.
pub fn create_sink(name: &str) -> Option<SharedSink> {
    let registry = REGISTRY.read();
    registry.get(name).map(|def| (def.factory)())
}

/// List all registered sinks as (name, description, is_plugin), sorted by name
pub fn list_sinks() -> Vec<(String, String, bool)> {
    let registry = REGISTRY.read();
    let mut sinks: Vec<_> = registry
        .values()
        .map(|def| (def.name.clone(), def.description.clone(), def.is_plugin))
        .collect();
    sinks.sort_by(|a, b| a.0.cmp(&b.0));
    sinks
}

/// Check if a sink is registered
pub fn has_sink(name: &str) -> bool {
    REGISTRY.read().contains_key(name)
}

/// Unregister a plugin sink (mainly for testing); built-ins stay
pub fn unregister_sink(name: &str) -> bool {
    if BUILTIN_SINKS.contains(&name) {
        return false;
    }
    REGISTRY.write().remove(name).is_some()
}
