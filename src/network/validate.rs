//! Network validation.

use tracing::warn;

use crate::error::{PulseError, Result};
use crate::modules::ModuleKind;

use super::{ModuleId, Network};

/// Validate a network for simulation.
///
/// Checks:
/// - The entry module is a broadcaster
/// - Every destination refers to a module in the network
/// - Sinks have no destinations
/// - Each conjunction remembers exactly the modules that send to it
pub fn validate_network(network: &Network) -> Result<()> {
    if !matches!(network.module(network.entry()).kind, ModuleKind::Broadcast) {
        return Err(PulseError::topology(format!(
            "entry module '{}' is not a broadcaster",
            network.name(network.entry())
        )));
    }

    for (id, module) in network.modules() {
        if let Some(dest) = module
            .destinations
            .iter()
            .find(|dest| dest.index() >= network.len())
        {
            return Err(PulseError::topology(format!(
                "module '{}' sends to unknown module {}",
                module.name, dest
            )));
        }

        match &module.kind {
            ModuleKind::Sink if !module.destinations.is_empty() => {
                return Err(PulseError::topology(format!(
                    "sink '{}' has destinations",
                    module.name
                )));
            }
            ModuleKind::Conjunction(conj) => {
                let registered: Vec<ModuleId> = conj.inputs().collect();
                let expected = network.inputs_of(id);
                if registered != expected {
                    return Err(PulseError::topology(format!(
                        "conjunction '{}' remembers {} inputs but {} modules send to it",
                        module.name,
                        registered.len(),
                        expected.len()
                    )));
                }
                if registered.is_empty() {
                    warn!(module = %module.name, "conjunction has no inputs and never fires");
                }
            }
            _ => {}
        }
    }

    if network.module(network.entry()).destinations.is_empty() {
        warn!("broadcaster has no destinations");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dsl;
    use crate::modules::{Conjunction, Module};

    fn build(input: &str) -> Network {
        Network::from_ast(dsl::parse(input).unwrap()).unwrap()
    }

    #[test]
    fn test_fixtures_are_valid() {
        validate_network(&build(include_str!("../../fixtures/ring.pnet"))).unwrap();
        validate_network(&build(include_str!("../../fixtures/counter.pnet"))).unwrap();
        validate_network(&build(include_str!("../../fixtures/chains.pnet"))).unwrap();
    }

    #[test]
    fn test_unregistered_conjunction_input() {
        let mut net = build("broadcaster -> a\n%a -> con\n&con -> out\n");
        let con = net.find("con").unwrap();
        net.module_mut(con).kind = ModuleKind::Conjunction(Conjunction::new());

        let err = validate_network(&net).unwrap_err();
        assert!(err.to_string().contains("conjunction 'con'"));
    }

    #[test]
    fn test_edge_added_after_build() {
        let mut net = build("broadcaster -> a\n%a -> con\n&con -> out\n");
        let entry = net.entry();
        let con = net.find("con").unwrap();
        net.module_mut(entry).destinations.push(con);

        assert!(matches!(
            validate_network(&net),
            Err(PulseError::InvalidTopology { .. })
        ));
    }

    #[test]
    fn test_sink_with_destinations() {
        let mut net = build("broadcaster -> out\n");
        let out = net.find("out").unwrap();
        let entry = net.entry();
        net.module_mut(out).destinations.push(entry);

        assert!(validate_network(&net).is_err());
    }

    #[test]
    fn test_entry_must_broadcast() {
        let mut net = build("broadcaster -> a\n%a -> out\n");
        let entry = net.entry();
        *net.module_mut(entry) = Module::new("broadcaster", ModuleKind::Sink);

        let err = validate_network(&net).unwrap_err();
        assert!(err.to_string().contains("not a broadcaster"));
    }
}
