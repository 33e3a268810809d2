//! Process-wide active sink

use once_cell::sync::Lazy;
use parking_lot::RwLock;

use super::platform_sink;
use super::traits::SharedSink;

static ACTIVE: Lazy<RwLock<SharedSink>> = Lazy::new(|| RwLock::new(platform_sink()));

/// Install `sink` as the destination for the facade, returning the previous one
pub fn set_sink(sink: SharedSink) -> SharedSink {
    std::mem::replace(&mut *ACTIVE.write(), sink)
}

/// The sink the facade currently forwards to
pub fn current_sink() -> SharedSink {
    ACTIVE.read().clone()
}

/// Go back to the platform sink
pub fn reset_sink() {
    set_sink(platform_sink());
}
