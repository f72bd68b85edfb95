//! Main pulse engine interface.

use std::collections::VecDeque;

use tracing::{debug, trace};

use super::PulseCounter;
use crate::error::{PulseError, Result};
use crate::modules::{ModuleKind, Pulse};
use crate::network::{ModuleId, Network};

use super::DEFAULT_MAX_PRESSES;

/// Configuration for the engine.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Pulse sent to the broadcaster by each button press.
    pub press_pulse: Pulse,
    /// Upper bound on presses for searches that may not terminate.
    pub max_presses: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            press_pulse: Pulse::Low,
            max_presses: DEFAULT_MAX_PRESSES,
        }
    }
}

impl EngineConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the pulse sent by each press.
    pub fn with_press_pulse(mut self, pulse: Pulse) -> Self {
        self.press_pulse = pulse;
        self
    }

    /// Set the press limit for searches.
    pub fn with_max_presses(mut self, max_presses: u64) -> Self {
        self.max_presses = max_presses;
        self
    }
}

/// One pulse arriving at a module.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delivery {
    /// Sending module, or `None` for an externally injected pulse
    pub from: Option<ModuleId>,
    /// Receiving module
    pub to: ModuleId,
    /// Pulse value
    pub pulse: Pulse,
}

/// The pulse propagation engine.
///
/// Owns the network and the lifetime pulse totals. Module state persists
/// across injections; a fresh engine is needed to start over.
#[derive(Debug, Clone)]
pub struct PulseEngine {
    /// The network being simulated
    network: Network,
    /// Engine configuration
    config: EngineConfig,
    /// Pulses delivered since the engine was created
    counter: PulseCounter,
    /// Number of presses so far
    presses: u64,
    /// Pending deliveries, reused between injections
    queue: VecDeque<Delivery>,
}

impl PulseEngine {
    /// Create a new engine for the given network with default configuration.
    pub fn new(network: Network) -> Self {
        Self::with_config(network, EngineConfig::default())
    }

    /// Create a new engine for the given network with custom configuration.
    pub fn with_config(network: Network, config: EngineConfig) -> Self {
        Self {
            network,
            config,
            counter: PulseCounter::new(),
            presses: 0,
            queue: VecDeque::new(),
        }
    }

    /// Press the button: inject the configured pulse at the broadcaster.
    pub fn press(&mut self) -> PulseCounter {
        let counts = self.inject(self.config.press_pulse);
        self.presses += 1;
        debug!(press = self.presses, low = counts.low(), high = counts.high(), "press complete");
        counts
    }

    /// Press the button `count` times, returning the pulses delivered by
    /// those presses.
    pub fn press_many(&mut self, count: u64) -> PulseCounter {
        let mut counts = PulseCounter::new();
        for _ in 0..count {
            counts.merge(&self.press());
        }
        counts
    }

    /// Inject a pulse at the broadcaster and run it to quiescence.
    ///
    /// Returns the pulses delivered by this cascade, the injected pulse
    /// included. They are also added to the lifetime totals.
    pub fn inject(&mut self, pulse: Pulse) -> PulseCounter {
        let entry = self.network.entry();
        self.propagate(entry, pulse, &mut |_| {})
    }

    /// Inject a pulse at any module and run it to quiescence.
    ///
    /// Conjunctions only accept pulses from their registered inputs, so
    /// they cannot be used as an injection point. Ids outside the network
    /// fail with [`PulseError::ModuleNotFound`].
    pub fn inject_at(&mut self, target: ModuleId, pulse: Pulse) -> Result<PulseCounter> {
        self.inject_observed(target, pulse, |_| {})
    }

    /// Like [`inject_at`](Self::inject_at), calling `observer` for every
    /// delivery in the order deliveries happen.
    pub fn inject_observed<F>(
        &mut self,
        target: ModuleId,
        pulse: Pulse,
        mut observer: F,
    ) -> Result<PulseCounter>
    where
        F: FnMut(&Delivery),
    {
        if target.index() >= self.network.len() {
            return Err(PulseError::ModuleNotFound {
                name: target.to_string(),
            });
        }
        let module = self.network.module(target);
        if let ModuleKind::Conjunction(_) = module.kind {
            return Err(PulseError::InvalidEntry {
                name: module.name.clone(),
                kind: module.kind.label(),
            });
        }
        Ok(self.propagate(target, pulse, &mut observer))
    }

    /// Breadth-first delivery loop.
    ///
    /// Every pulse emitted while handling a delivery is queued behind all
    /// pulses already pending, so pulses sent at the same cascade depth all
    /// arrive before any reaction to them does.
    fn propagate(
        &mut self,
        target: ModuleId,
        pulse: Pulse,
        observer: &mut dyn FnMut(&Delivery),
    ) -> PulseCounter {
        let mut counts = PulseCounter::new();
        self.queue.clear();
        self.queue.push_back(Delivery {
            from: None,
            to: target,
            pulse,
        });

        while let Some(delivery) = self.queue.pop_front() {
            counts.record(delivery.pulse);
            observer(&delivery);
            trace!(
                from = delivery.from.map(|id| self.network.name(id)).unwrap_or("button"),
                to = self.network.name(delivery.to),
                pulse = %delivery.pulse,
                "deliver"
            );

            let module = self.network.module_mut(delivery.to);
            if let Some(out) = module.kind.receive(delivery.from, delivery.pulse) {
                let from = Some(delivery.to);
                self.queue.extend(module.destinations.iter().map(|&to| Delivery {
                    from,
                    to,
                    pulse: out,
                }));
            }
        }

        self.counter.merge(&counts);
        counts
    }

    /// Total low pulses delivered since the engine was created.
    pub fn total_low(&self) -> u64 {
        self.counter.low()
    }

    /// Total high pulses delivered since the engine was created.
    pub fn total_high(&self) -> u64 {
        self.counter.high()
    }

    /// Lifetime pulse totals.
    pub fn counter(&self) -> PulseCounter {
        self.counter
    }

    /// Number of presses so far.
    pub fn presses(&self) -> u64 {
        self.presses
    }

    /// Get the engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Get a reference to the network.
    pub fn network(&self) -> &Network {
        &self.network
    }
}
