//! # Pulse Network
//!
//! A discrete-event simulator for networks of pulse-processing modules.
//!
//! This library provides:
//! - A small line-oriented DSL for describing module networks
//! - A network builder that resolves every name and registers every
//!   conjunction input before simulation starts
//! - A breadth-first pulse engine with lifetime low/high pulse counters
//! - First-low analysis for networks built from counter chains
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`dsl`] - Parser for the network description language
//! - [`network`] - Module arena, graph construction and validation
//! - [`modules`] - Pulse values and per-kind transition rules
//! - [`engine`] - Pulse propagation, counting and analysis
//!
//! ## Usage
//!
//! ### Native CLI
//!
//! ```bash
//! pulsenet network.pnet --presses 1000 --watch rx
//! ```
//!
//! ### Library
//!
//! ```
//! use pulse_network::{dsl, Network, PulseEngine};
//!
//! let ast = dsl::parse("broadcaster -> a\n%a -> out\n").unwrap();
//! let mut engine = PulseEngine::new(Network::from_ast(ast).unwrap());
//! engine.press_many(2);
//! assert_eq!((engine.total_low(), engine.total_high()), (5, 1));
//! ```
//!
//! ### WASM
//!
//! ```javascript
//! import { WasmPulseSim } from 'pulse_network';
//!
//! const sim = new WasmPulseSim(networkDsl);
//! sim.press_many(1000);
//! console.log(sim.total_low() * sim.total_high());
//! ```

pub mod dsl;
pub mod engine;
pub mod error;
pub mod modules;
pub mod network;

// Re-export main types for convenience
pub use engine::{EngineConfig, PulseCounter, PulseEngine};
pub use error::{PulseError, Result};
pub use modules::Pulse;
pub use network::{ModuleId, Network};

// WASM bindings
#[cfg(feature = "wasm")]
mod wasm;

#[cfg(feature = "wasm")]
pub use wasm::WasmPulseSim;

/// Name of the untagged module that receives button presses.
pub const BROADCASTER: &str = "broadcaster";
