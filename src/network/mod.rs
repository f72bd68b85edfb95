//! Network graph representation and validation.
//!
//! This module provides the internal representation of a network after
//! parsing. The [`Network`] struct owns every module and resolves every
//! destination name, so simulation never has to look anything up by name.

mod graph;
mod types;
mod validate;

pub use graph::Network;
pub use types::*;
pub use validate::validate_network;
