//! Pulse propagation engine.
//!
//! This module runs pulses through a built [`Network`](crate::network::Network).
//!
//! ## Propagation
//!
//! An injection delivers one pulse to a module and then drains a FIFO queue
//! of pending deliveries:
//!
//! ```text
//! queue = [(external -> entry, pulse)]
//! while let Some((from -> to, p)) = queue.pop_front():
//!     count p
//!     if to.receive(from, p) emits q:
//!         for d in to.destinations: queue.push_back((to -> d, q))
//! ```
//!
//! Delivering in queue order means every pulse sent at one cascade depth
//! reaches its receiver before any reaction to it is handled. Conjunctions
//! depend on this: resolving one branch depth-first would let them see their
//! inputs in an order that never happens in the network.

mod analysis;
mod counter;
mod simulator;

pub use analysis::presses_until_low;
pub use counter::PulseCounter;
pub use simulator::{Delivery, EngineConfig, PulseEngine};

/// Default number of button presses run by the driver.
pub const DEFAULT_PRESSES: u64 = 1000;

/// Default press limit for first-low analysis.
pub const DEFAULT_MAX_PRESSES: u64 = 1_000_000;
