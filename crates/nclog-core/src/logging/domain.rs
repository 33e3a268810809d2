//! Numeric domain tags

use std::fmt;

use serde::{Deserialize, Serialize};

/// Numeric identifier grouping log output by owning module
///
/// The platform facility filters and attributes messages by this tag. It
/// travels with every forwarded message unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Domain(pub u32);

impl Domain {
    /// Tag used by the application facade
    pub const APP: Domain = Domain(0x0001);

    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    pub const fn value(&self) -> u32 {
        self.0
    }
}

impl Default for Domain {
    fn default() -> Self {
        Self::APP
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:04X}", self.0)
    }
}

impl From<u32> for Domain {
    fn from(value: u32) -> Self {
        Self(value)
    }
}
