//! First-low analysis: how many presses until a module receives a low pulse.
//!
//! Small networks are answered by pressing until it happens. Networks where
//! the target is fed by a single conjunction are usually built from
//! independent counter chains, each of which sends its conjunction a high
//! pulse once per period. For those the answer is the least common multiple
//! of the periods, found from the press on which each chain first sends high.

use std::collections::BTreeMap;

use tracing::{debug, info};

use super::{EngineConfig, PulseEngine};
use crate::error::{PulseError, Result};
use crate::modules::{ModuleKind, Pulse};
use crate::network::{ModuleId, Network};

/// Number of presses until `target` first receives a low pulse.
///
/// Runs on a clone of `network` starting from its current state; the
/// network itself is not touched. Fails with
/// [`PulseError::PressLimitExceeded`] after `config.max_presses` presses
/// without an answer, and with [`PulseError::AnalysisOverflow`] when the
/// combined feeder period does not fit in a `u64`.
pub fn presses_until_low(network: &Network, target: &str, config: &EngineConfig) -> Result<u64> {
    let target_id = network.find(target).ok_or_else(|| PulseError::ModuleNotFound {
        name: target.to_string(),
    })?;

    let mut feeder = single_conjunction_feeder(network, target_id);
    let mut periods: BTreeMap<ModuleId, u64> = BTreeMap::new();
    let mut engine = PulseEngine::with_config(network.clone(), config.clone());
    let entry = network.entry();

    for press in 1..=config.max_presses {
        let mut reached = false;
        engine.inject_observed(entry, config.press_pulse, |d| {
            if d.to == target_id && d.pulse == Pulse::Low {
                reached = true;
            }
            if let (Some((conj, _)), Some(from)) = (feeder, d.from) {
                if d.to == conj && d.pulse.is_high() {
                    periods.entry(from).or_insert(press);
                }
            }
        })?;

        if reached {
            debug!(module = target, press, "target received a low pulse");
            return Ok(press);
        }

        if let Some((conj, inputs)) = feeder {
            if periods.len() == inputs {
                let answer = periods
                    .values()
                    .try_fold(1, |acc, &p| lcm(acc, p))
                    .ok_or_else(|| PulseError::AnalysisOverflow {
                        target: target.to_string(),
                    })?;
                // Presses up to here were observed without a hit
                if answer > press {
                    info!(
                        module = target,
                        feeder = network.name(conj),
                        ?periods,
                        answer,
                        "combined feeder periods"
                    );
                    return Ok(answer);
                }
                debug!(module = target, answer, press, "feeder periods already ruled out");
                feeder = None;
            }
        }
    }

    Err(PulseError::PressLimitExceeded {
        target: target.to_string(),
        limit: config.max_presses,
    })
}

/// The conjunction that is the only module sending to `target`, with its
/// input count.
fn single_conjunction_feeder(network: &Network, target: ModuleId) -> Option<(ModuleId, usize)> {
    match network.inputs_of(target).as_slice() {
        [only] => match &network.module(*only).kind {
            ModuleKind::Conjunction(conj) if conj.input_count() > 0 => {
                Some((*only, conj.input_count()))
            }
            _ => None,
        },
        _ => None,
    }
}

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

fn lcm(a: u64, b: u64) -> Option<u64> {
    (a / gcd(a, b)).checked_mul(b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dsl;

    fn network(input: &str) -> Network {
        Network::from_ast(dsl::parse(input).unwrap()).unwrap()
    }

    #[test]
    fn test_lcm() {
        assert_eq!(lcm(4, 6), Some(12));
        assert_eq!(lcm(1, 7), Some(7));
        assert_eq!(gcd(3917, 3943), 1);
    }

    #[test]
    fn test_lcm_overflow() {
        let big = lcm(4_294_967_291, 4_294_967_279).unwrap();
        assert_eq!(lcm(big, 65_521), None);
    }

    #[test]
    fn test_feeder_periods_not_trusted_when_already_passed() {
        // x and y both send high to con on press 1, but never at the same
        // time, so the combined period of 1 is wrong: the first low is on press 2.
        let net = network(
            "broadcaster -> x, q, s\n%x -> con\n&q -> r\n&r -> x\n&s -> t\n\
             &t -> u\n&u -> v\n&v -> y\n%y -> con\n&con -> rx\n",
        );
        let presses = presses_until_low(&net, "rx", &EngineConfig::default()).unwrap();
        assert_eq!(presses, 2);
    }

    #[test]
    fn test_direct_hit() {
        let net = network("broadcaster -> a\n%a -> b\n%b -> out\n");
        // b toggles every second press and emits low every fourth.
        let presses = presses_until_low(&net, "out", &EngineConfig::default()).unwrap();
        assert_eq!(presses, 4);
    }

    #[test]
    fn test_counter_output() {
        let net = network(include_str!("../../fixtures/counter.pnet"));
        let presses = presses_until_low(&net, "output", &EngineConfig::default()).unwrap();
        assert_eq!(presses, 1);
    }

    #[test]
    fn test_chains_by_feeder_periods() {
        let net = network(include_str!("../../fixtures/chains.pnet"));
        let config = EngineConfig::new().with_max_presses(10_000);
        let presses = presses_until_low(&net, "rx", &config).unwrap();
        assert_eq!(presses, 243_902_373_381_257);
    }

    #[test]
    fn test_does_not_mutate_network() {
        let net = network(include_str!("../../fixtures/ring.pnet"));
        let before = net.clone();
        presses_until_low(&net, "a", &EngineConfig::default()).unwrap();
        assert_eq!(net, before);
    }

    #[test]
    fn test_press_limit() {
        // A flip-flop that only ever receives high pulses never fires.
        let net = network("broadcaster -> a\n%a -> b\n%b -> out\n");
        let config = EngineConfig::new()
            .with_press_pulse(Pulse::High)
            .with_max_presses(5);
        let err = presses_until_low(&net, "out", &config).unwrap_err();
        assert!(matches!(err, PulseError::PressLimitExceeded { limit: 5, .. }));
    }

    #[test]
    fn test_unknown_target() {
        let net = network(include_str!("../../fixtures/ring.pnet"));
        let err = presses_until_low(&net, "rx", &EngineConfig::default()).unwrap_err();
        assert!(matches!(err, PulseError::ModuleNotFound { name } if name == "rx"));
    }
}
