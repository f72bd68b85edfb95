//! Core types for network representation.

use std::fmt;

/// A unique identifier for a module in the network.
///
/// Ids are indices into the network's module arena and are only meaningful
/// for the network that assigned them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ModuleId(pub usize);

impl ModuleId {
    /// Index into the module arena.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "M{}", self.0)
    }
}
