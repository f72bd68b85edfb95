//! Conjunction module.
//!
//! A conjunction remembers the most recent pulse from each of its inputs.
//! Every received pulse updates that memory and then produces an emission:
//! low if all remembered pulses are high, high otherwise.

use std::collections::BTreeMap;

use super::Pulse;
use crate::network::ModuleId;

/// Conjunction state: the last pulse seen from every registered input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Conjunction {
    remembered: BTreeMap<ModuleId, Pulse>,
}

impl Conjunction {
    /// Create a conjunction with no registered inputs.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an input, remembering a low pulse for it.
    ///
    /// Registering the same input twice keeps a single entry.
    pub fn register_input(&mut self, input: ModuleId) {
        self.remembered.entry(input).or_insert(Pulse::Low);
    }

    /// Registered inputs, in id order.
    pub fn inputs(&self) -> impl Iterator<Item = ModuleId> + '_ {
        self.remembered.keys().copied()
    }

    /// Number of registered inputs.
    pub fn input_count(&self) -> usize {
        self.remembered.len()
    }

    /// Last pulse remembered for `input`.
    pub fn remembered(&self, input: ModuleId) -> Option<Pulse> {
        self.remembered.get(&input).copied()
    }

    /// Whether every remembered pulse is high.
    pub fn all_high(&self) -> bool {
        self.remembered.values().all(|p| p.is_high())
    }

    /// Receive a pulse from `from`, returning the pulse to emit.
    ///
    /// # Panics
    ///
    /// Panics if `from` was never registered as an input. Every edge into a
    /// conjunction is registered while the network is built, so this only
    /// happens on a construction bug.
    pub fn receive(&mut self, from: ModuleId, pulse: Pulse) -> Pulse {
        match self.remembered.get_mut(&from) {
            Some(slot) => *slot = pulse,
            None => panic!("conjunction received a pulse from unregistered input {}", from),
        }
        if self.all_high() {
            Pulse::Low
        } else {
            Pulse::High
        }
    }
}
