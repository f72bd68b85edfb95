//! Network graph structure.

use std::collections::HashMap;

use tracing::debug;

use super::types::ModuleId;
use crate::dsl::{DeclarationKind, NetworkAst};
use crate::error::{PulseError, Result};
use crate::modules::{Conjunction, FlipFlop, Module, ModuleKind};
use crate::BROADCASTER;

/// A fully linked network ready for simulation.
///
/// Modules live in a flat arena and edges are [`ModuleId`]s into it, so
/// cycles need no shared ownership and cloning yields an independent copy
/// with identical state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Network {
    /// All modules, declared ones first, then sinks in first-reference order
    modules: Vec<Module>,

    /// Mapping from module names to module IDs
    module_map: HashMap<String, ModuleId>,

    /// The broadcaster that receives external pulses
    entry: ModuleId,
}

impl Network {
    /// Build a network from a parsed AST.
    ///
    /// Every declaration becomes a module, every undeclared destination
    /// becomes a shared sink, and every edge into a conjunction registers
    /// its sender before this returns.
    pub fn from_ast(ast: NetworkAst) -> Result<Self> {
        let mut modules = Vec::with_capacity(ast.declarations.len());
        let mut module_map = HashMap::new();
        let mut entry = None;

        // First pass: one module per declaration head
        for decl in &ast.declarations {
            if module_map.contains_key(&decl.name) {
                return Err(PulseError::DuplicateModule {
                    name: decl.name.clone(),
                });
            }

            let kind = match decl.kind {
                DeclarationKind::FlipFlop => ModuleKind::FlipFlop(FlipFlop::new()),
                DeclarationKind::Conjunction => ModuleKind::Conjunction(Conjunction::new()),
                DeclarationKind::Untagged if decl.name == BROADCASTER => ModuleKind::Broadcast,
                DeclarationKind::Untagged => {
                    return Err(PulseError::UntypedModule {
                        name: decl.name.clone(),
                        line: decl.line,
                    });
                }
            };

            let id = ModuleId(modules.len());
            if matches!(kind, ModuleKind::Broadcast) {
                entry = Some(id);
            }
            module_map.insert(decl.name.clone(), id);
            modules.push(Module::new(decl.name.clone(), kind));
        }

        let entry = entry.ok_or(PulseError::MissingBroadcaster)?;
        let declared = modules.len();

        // Second pass: resolve destinations and register conjunction inputs
        for (idx, decl) in ast.declarations.iter().enumerate() {
            let source = ModuleId(idx);

            for dest_name in &decl.destinations {
                let dest = match module_map.get(dest_name) {
                    Some(&id) => id,
                    None => {
                        let id = ModuleId(modules.len());
                        debug!(module = %dest_name, %id, "undeclared destination becomes a sink");
                        module_map.insert(dest_name.clone(), id);
                        modules.push(Module::new(dest_name.clone(), ModuleKind::Sink));
                        id
                    }
                };

                modules[source.index()].destinations.push(dest);
                if let ModuleKind::Conjunction(conj) = &mut modules[dest.index()].kind {
                    conj.register_input(source);
                }
            }
        }

        debug!(
            declared,
            sinks = modules.len() - declared,
            "network built"
        );

        Ok(Network {
            modules,
            module_map,
            entry,
        })
    }

    /// The broadcaster that receives external pulses.
    pub fn entry(&self) -> ModuleId {
        self.entry
    }

    /// Number of modules, sinks included.
    pub fn len(&self) -> usize {
        self.modules.len()
    }

    /// Whether the network has no modules. A built network always has at
    /// least its broadcaster.
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Find a module ID by name.
    pub fn find(&self, name: &str) -> Option<ModuleId> {
        self.module_map.get(name).copied()
    }

    /// Get a module.
    pub fn module(&self, id: ModuleId) -> &Module {
        &self.modules[id.index()]
    }

    pub(crate) fn module_mut(&mut self, id: ModuleId) -> &mut Module {
        &mut self.modules[id.index()]
    }

    /// Get the name of a module.
    pub fn name(&self, id: ModuleId) -> &str {
        &self.modules[id.index()].name
    }

    /// Iterate over all modules with their IDs.
    pub fn modules(&self) -> impl Iterator<Item = (ModuleId, &Module)> {
        self.modules
            .iter()
            .enumerate()
            .map(|(idx, module)| (ModuleId(idx), module))
    }

    /// All modules with at least one edge into `id`, in arena order.
    pub fn inputs_of(&self, id: ModuleId) -> Vec<ModuleId> {
        self.modules()
            .filter(|(_, module)| module.destinations.contains(&id))
            .map(|(src, _)| src)
            .collect()
    }
}
