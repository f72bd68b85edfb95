//! Module models for pulse simulation.
//!
//! This module provides the pulse value and every supported module kind:
//! - Broadcast: forwards every pulse unchanged (the network entry point)
//! - FlipFlop: toggles on low pulses, ignores high ones
//! - Conjunction: remembers the last pulse per input, emits their NAND
//! - Sink: absorbs pulses sent to names that were never declared
//!
//! Each kind reacts to a received pulse through [`ModuleKind::receive`].

mod conjunction;
mod flip_flop;

pub use conjunction::Conjunction;
pub use flip_flop::FlipFlop;

use std::fmt;

use crate::network::ModuleId;

/// A binary pulse value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Pulse {
    Low,
    High,
}

impl Pulse {
    /// Check if this is a high pulse.
    pub fn is_high(self) -> bool {
        self == Pulse::High
    }
}

impl From<bool> for Pulse {
    fn from(high: bool) -> Self {
        if high {
            Pulse::High
        } else {
            Pulse::Low
        }
    }
}

impl fmt::Display for Pulse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pulse::Low => write!(f, "low"),
            Pulse::High => write!(f, "high"),
        }
    }
}

/// Kind-specific behavior and state of a module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModuleKind {
    Broadcast,
    FlipFlop(FlipFlop),
    Conjunction(Conjunction),
    Sink,
}

impl ModuleKind {
    /// Short label used in logs and error messages.
    pub fn label(&self) -> &'static str {
        match self {
            ModuleKind::Broadcast => "broadcast",
            ModuleKind::FlipFlop(_) => "flip-flop",
            ModuleKind::Conjunction(_) => "conjunction",
            ModuleKind::Sink => "sink",
        }
    }

    /// Apply the transition rule for a pulse received from `from`.
    ///
    /// Returns the pulse to send to every destination, or `None` when the
    /// module stays silent. `from` is `None` only for externally injected
    /// pulses.
    pub fn receive(&mut self, from: Option<ModuleId>, pulse: Pulse) -> Option<Pulse> {
        match self {
            ModuleKind::Broadcast => Some(pulse),
            ModuleKind::FlipFlop(ff) => ff.receive(pulse),
            ModuleKind::Conjunction(conj) => match from {
                Some(from) => Some(conj.receive(from, pulse)),
                None => panic!("conjunction received an external pulse with no sender"),
            },
            ModuleKind::Sink => None,
        }
    }
}

/// A named node in the network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Module {
    /// Unique module name
    pub name: String,
    /// Behavior and state
    pub kind: ModuleKind,
    /// Modules this one sends pulses to, in declaration order
    pub destinations: Vec<ModuleId>,
}

impl Module {
    /// Create a module with no destinations.
    pub fn new(name: impl Into<String>, kind: ModuleKind) -> Self {
        Self {
            name: name.into(),
            kind,
            destinations: Vec::new(),
        }
    }

    /// Whether this module is an implicit sink.
    pub fn is_sink(&self) -> bool {
        matches!(self.kind, ModuleKind::Sink)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pulse_from_bool() {
        assert_eq!(Pulse::from(true), Pulse::High);
        assert_eq!(Pulse::from(false), Pulse::Low);
        assert_eq!(Pulse::High.to_string(), "high");
    }

    #[test]
    fn test_broadcast_forwards_unchanged() {
        let mut kind = ModuleKind::Broadcast;
        assert_eq!(kind.receive(None, Pulse::Low), Some(Pulse::Low));
        assert_eq!(kind.receive(Some(ModuleId(3)), Pulse::High), Some(Pulse::High));
    }

    #[test]
    fn test_sink_is_silent() {
        let mut kind = ModuleKind::Sink;
        assert_eq!(kind.receive(Some(ModuleId(0)), Pulse::Low), None);
        assert_eq!(kind.receive(Some(ModuleId(0)), Pulse::High), None);
    }

    #[test]
    fn test_flip_flop_dispatch() {
        let mut kind = ModuleKind::FlipFlop(FlipFlop::new());
        assert_eq!(kind.receive(Some(ModuleId(0)), Pulse::Low), Some(Pulse::High));
        match &kind {
            ModuleKind::FlipFlop(ff) => assert!(ff.is_on()),
            other => panic!("unexpected kind {:?}", other),
        }
    }

    #[test]
    fn test_conjunction_dispatch() {
        let mut conj = Conjunction::new();
        conj.register_input(ModuleId(0));
        let mut kind = ModuleKind::Conjunction(conj);
        assert_eq!(kind.receive(Some(ModuleId(0)), Pulse::High), Some(Pulse::Low));
    }
}
