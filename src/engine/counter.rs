//! Pulse counting.

use std::fmt;

use crate::modules::Pulse;

/// Running totals of delivered low and high pulses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PulseCounter {
    low: u64,
    high: u64,
}

impl PulseCounter {
    /// Create a counter with both totals at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one delivered pulse.
    pub fn record(&mut self, pulse: Pulse) {
        match pulse {
            Pulse::Low => self.low += 1,
            Pulse::High => self.high += 1,
        }
    }

    /// Add another counter's totals into this one.
    pub fn merge(&mut self, other: &PulseCounter) {
        self.low += other.low;
        self.high += other.high;
    }

    pub fn low(&self) -> u64 {
        self.low
    }

    pub fn high(&self) -> u64 {
        self.high
    }

    pub fn total(&self) -> u64 {
        self.low + self.high
    }

    /// Product of the low and high totals.
    pub fn product(&self) -> u128 {
        u128::from(self.low) * u128::from(self.high)
    }
}

impl fmt::Display for PulseCounter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} low, {} high", self.low, self.high)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_and_merge() {
        let mut a = PulseCounter::new();
        a.record(Pulse::Low);
        a.record(Pulse::Low);
        a.record(Pulse::High);

        let mut b = PulseCounter::new();
        b.record(Pulse::High);
        b.merge(&a);

        assert_eq!(b.low(), 2);
        assert_eq!(b.high(), 2);
        assert_eq!(b.total(), 4);
        assert_eq!(b.product(), 4);
        assert_eq!(b.to_string(), "2 low, 2 high");
    }

    #[test]
    fn test_product_beyond_u64() {
        let counter = PulseCounter {
            low: u64::MAX,
            high: 2,
        };
        assert_eq!(counter.product(), u128::from(u64::MAX) * 2);
    }
}
