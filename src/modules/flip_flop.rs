//! Flip-flop module.

use super::Pulse;

/// A flip-flop toggles on every low pulse and ignores high pulses.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlipFlop {
    on: bool,
}

impl FlipFlop {
    /// Create a flip-flop in the off state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the flip-flop is currently on.
    pub fn is_on(&self) -> bool {
        self.on
    }

    /// Receive a pulse, returning the pulse to emit (if any).
    ///
    /// A low pulse flips the state and emits the new state (on = high).
    pub fn receive(&mut self, pulse: Pulse) -> Option<Pulse> {
        match pulse {
            Pulse::High => None,
            Pulse::Low => {
                self.on = !self.on;
                Some(Pulse::from(self.on))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_high_is_ignored() {
        let mut ff = FlipFlop::new();
        assert_eq!(ff.receive(Pulse::High), None);
        assert!(!ff.is_on());
    }

    #[test]
    fn test_two_lows_round_trip() {
        let mut ff = FlipFlop::new();

        assert_eq!(ff.receive(Pulse::Low), Some(Pulse::High));
        assert!(ff.is_on());

        assert_eq!(ff.receive(Pulse::Low), Some(Pulse::Low));
        assert!(!ff.is_on());
    }

    #[test]
    fn test_high_between_lows_changes_nothing() {
        let mut ff = FlipFlop::new();
        ff.receive(Pulse::Low);
        assert_eq!(ff.receive(Pulse::High), None);
        assert_eq!(ff.receive(Pulse::Low), Some(Pulse::Low));
    }
}
