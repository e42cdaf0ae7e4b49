//! Effective setting resolution
//!
//! Resolving a node happens in two steps:
//!
//! 1. **Linearize** the node into a chain of setting holders. For a
//!    configuration the chain is its ancestor line from the root down, then
//!    the node itself. Every node on that line is immediately preceded by the
//!    entries of its own `inherits` list, so `root -> a -> b` where `a`
//!    inherits `i` linearizes to `[root, i, a, b]`. An inherits entry
//!    contributes only that node, never its ancestors.
//! 2. **Flatten** the chain, keeping the first occurrence of every setting.
//!    Later structurally-equal settings are dropped even when they come from
//!    a more specific node, so a default is always reported against the node
//!    that first defined it.
//!
//! A preset linearizes to its base configuration's chain *without* the base
//! node itself (it is only picked up when it also shows up as an inherits
//! entry), followed by the preset.

use std::collections::HashSet;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::graph::{ConfigGraph, ConfigId, Configuration};
use crate::holder::SettingHolder;
use crate::preset::Preset;
use crate::setting::Setting;

/// A setting paired with the name of the holder that contributed it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedSetting {
    pub setting: Setting,
    pub source: String,
}

/// Linearization switches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolveOptions {
    /// Include the starting node's `inherits` entries even when the node
    /// itself is not part of the chain. Only affects preset bases; ancestors
    /// always contribute their inherits entries.
    pub inherit_parents: bool,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            inherit_parents: true,
        }
    }
}

impl ConfigGraph {
    /// Ordered holders consulted when resolving configuration `id`
    pub fn chain(&self, id: ConfigId) -> Result<Vec<&dyn SettingHolder>> {
        let mut out: Vec<&dyn SettingHolder> = Vec::new();
        self.collect_chain(id, true, true, &mut out)?;
        tracing::debug!(node = %self.node(id)?.name(), len = out.len(), "Linearized chain");
        Ok(out)
    }

    /// Ordered holders consulted when resolving `preset`
    pub fn preset_chain<'a>(
        &'a self,
        preset: &'a Preset,
        options: ResolveOptions,
    ) -> Result<Vec<&'a dyn SettingHolder>> {
        let mut out: Vec<&dyn SettingHolder> = Vec::new();
        self.collect_chain(preset.base_configuration(), false, options.inherit_parents, &mut out)?;
        out.push(preset);
        tracing::debug!(preset = %preset.name(), len = out.len(), "Linearized preset chain");
        Ok(out)
    }

    /// Effective settings of configuration `id`
    pub fn resolve(&self, id: ConfigId) -> Result<Vec<ResolvedSetting>> {
        Ok(flatten(self.chain(id)?))
    }

    /// Effective settings of `preset`, its own settings last
    pub fn resolve_preset(&self, preset: &Preset) -> Result<Vec<ResolvedSetting>> {
        self.resolve_preset_with(preset, ResolveOptions::default())
    }

    pub fn resolve_preset_with(
        &self,
        preset: &Preset,
        options: ResolveOptions,
    ) -> Result<Vec<ResolvedSetting>> {
        Ok(flatten(self.preset_chain(preset, options)?))
    }

    fn node(&self, id: ConfigId) -> Result<&Configuration> {
        self.get(id).ok_or(Error::UnknownConfiguration { id })
    }

    /// Walk the parent links up to the root, then emit root to leaf.
    ///
    /// A node met twice on the way up means the parent links loop.
    fn collect_chain<'a>(
        &'a self,
        id: ConfigId,
        root: bool,
        inherit_parents: bool,
        out: &mut Vec<&'a dyn SettingHolder>,
    ) -> Result<()> {
        let start = self.node(id)?;

        let mut ancestors: Vec<&Configuration> = Vec::new();
        let mut visited: HashSet<ConfigId> = HashSet::from([id]);
        let mut current = start.parent();
        while let Some(parent) = current {
            let node = self.node(parent)?;
            if !visited.insert(parent) {
                return Err(Error::CyclicGraph {
                    name: node.name().to_string(),
                });
            }
            ancestors.push(node);
            current = node.parent();
        }

        for ancestor in ancestors.into_iter().rev() {
            self.push_inherits(ancestor, out)?;
            out.push(ancestor);
        }

        if root || inherit_parents {
            self.push_inherits(start, out)?;
        }
        if root {
            out.push(start);
        }

        Ok(())
    }

    fn push_inherits<'a>(
        &'a self,
        node: &Configuration,
        out: &mut Vec<&'a dyn SettingHolder>,
    ) -> Result<()> {
        for &inherited in node.inherits() {
            out.push(self.node(inherited)?);
        }
        Ok(())
    }
}

fn flatten(chain: Vec<&dyn SettingHolder>) -> Vec<ResolvedSetting> {
    let mut seen: HashSet<&Setting> = HashSet::new();
    let mut resolved = Vec::new();

    for holder in chain {
        for setting in holder.settings() {
            if seen.insert(setting) {
                resolved.push(ResolvedSetting {
                    setting: setting.clone(),
                    source: holder.name().to_string(),
                });
            } else {
                tracing::trace!(source = %holder.name(), %setting, "Suppressed duplicate setting");
            }
        }
    }

    tracing::debug!(count = resolved.len(), "Resolved settings");
    resolved
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::setting::EnvVarAction;
    use pretty_assertions::assert_eq;

    fn names(chain: &[&dyn SettingHolder]) -> Vec<String> {
        chain.iter().map(|h| h.name().to_string()).collect()
    }

    #[test]
    fn test_chain_of_root_is_itself() {
        let mut graph = ConfigGraph::new();
        let root = graph.add_configuration("root").id();

        assert_eq!(names(&graph.chain(root).unwrap()), vec!["root"]);
    }

    #[test]
    fn test_chain_places_inherits_right_before_each_node() {
        let mut graph = ConfigGraph::new();
        let shared = graph.add_configuration("shared").id();
        let extra = graph.add_configuration("extra").id();
        let root = graph.add_configuration("root").id();
        let a = graph
            .add_configuration("a")
            .set_parent_configuration(root)
            .add_inheriting_configuration(shared)
            .id();
        let b = graph
            .add_configuration("b")
            .set_parent_configuration(a)
            .add_inheriting_configuration(extra)
            .id();

        assert_eq!(
            names(&graph.chain(b).unwrap()),
            vec!["root", "shared", "a", "extra", "b"]
        );
    }

    #[test]
    fn test_inherited_node_contributes_only_itself() {
        let mut graph = ConfigGraph::new();
        let lib_root = graph.add_configuration("lib_root").id();
        let lib = graph.add_configuration("lib").set_parent_configuration(lib_root).id();
        let user = graph.add_configuration("user").add_inheriting_configuration(lib).id();

        assert_eq!(names(&graph.chain(user).unwrap()), vec!["lib", "user"]);
    }

    #[test]
    fn test_inherits_cycle_terminates() {
        let mut graph = ConfigGraph::new();
        let a = graph.add_configuration("a").add_tool("a").id();
        let b = graph
            .add_configuration("b")
            .add_tool("b")
            .add_inheriting_configuration(a)
            .id();
        graph.configuration_mut(a).add_inheriting_configuration(b);

        assert_eq!(names(&graph.chain(a).unwrap()), vec!["b", "a"]);
        assert_eq!(graph.resolve(b).unwrap().len(), 2);
    }

    #[test]
    fn test_self_inherit_is_harmless() {
        let mut graph = ConfigGraph::new();
        let a = graph.add_configuration("a").add_tool("a").id();
        graph.configuration_mut(a).add_inheriting_configuration(a);

        let resolved = graph.resolve(a).unwrap();
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].source, "a");
    }

    #[test]
    fn test_parent_cycle_is_reported() {
        let mut graph = ConfigGraph::new();
        let a = graph.add_configuration("a").id();
        let b = graph.add_configuration("b").set_parent_configuration(a).id();
        graph.configuration_mut(a).set_parent_configuration(b);

        let err = graph.resolve(b).unwrap_err();
        assert!(matches!(err, Error::CyclicGraph { .. }), "got {err:?}");
    }

    #[test]
    fn test_self_parent_is_reported() {
        let mut graph = ConfigGraph::new();
        let a = graph.add_configuration("a").id();
        graph.configuration_mut(a).set_parent_configuration(a);

        match graph.chain(a) {
            Err(Error::CyclicGraph { name }) => assert_eq!(name, "a"),
            Err(other) => panic!("unexpected error: {other}"),
            Ok(_) => panic!("expected a cycle error"),
        }
    }

    #[test]
    fn test_failed_resolution_leaves_other_nodes_resolvable() {
        let mut graph = ConfigGraph::new();
        let good = graph.add_configuration("good").add_tool("good").id();
        let bad = graph.add_configuration("bad").id();
        graph.configuration_mut(bad).set_parent_configuration(bad);

        assert!(graph.resolve(bad).is_err());
        assert_eq!(graph.resolve(good).unwrap().len(), 1);
    }

    #[test]
    fn test_first_occurrence_wins() {
        let mut graph = ConfigGraph::new();
        let root = graph
            .add_configuration("root")
            .add_env_var("FPS", "24", EnvVarAction::Set)
            .id();
        let leaf = graph
            .add_configuration("leaf")
            .set_parent_configuration(root)
            .add_env_var("FPS", "24", EnvVarAction::Set)
            .add_env_var("FPS", "30", EnvVarAction::Set)
            .add_env_var("FPS", "30", EnvVarAction::Set)
            .id();

        let resolved = graph.resolve(leaf).unwrap();
        assert_eq!(
            resolved,
            vec![
                ResolvedSetting {
                    setting: Setting::env_var("FPS", "24", EnvVarAction::Set),
                    source: "root".into(),
                },
                ResolvedSetting {
                    setting: Setting::env_var("FPS", "30", EnvVarAction::Set),
                    source: "leaf".into(),
                },
            ]
        );
    }

    #[test]
    fn test_preset_chain_skips_base_node() {
        let mut graph = ConfigGraph::new();
        let root = graph.add_configuration("root").add_tool("root_tool").id();
        let base = graph
            .add_configuration("base")
            .set_parent_configuration(root)
            .add_tool("base_tool")
            .id();
        let preset = Preset::new("overlay", base).add_tool("preset_tool");

        let chain = graph.preset_chain(&preset, ResolveOptions::default()).unwrap();
        assert_eq!(names(&chain), vec!["root", "overlay"]);

        let resolved = graph.resolve_preset(&preset).unwrap();
        let rendered: Vec<_> = resolved.iter().map(|r| r.setting.to_string()).collect();
        assert_eq!(rendered, vec!["root_tool", "preset_tool"]);
    }

    #[test]
    fn test_preset_without_inherit_parents_skips_base_inherits() {
        let mut graph = ConfigGraph::new();
        let shared = graph.add_configuration("shared").add_tool("shared").id();
        let root = graph
            .add_configuration("root")
            .add_inheriting_configuration(shared)
            .id();
        let other = graph.add_configuration("other").add_tool("other").id();
        let base = graph
            .add_configuration("base")
            .set_parent_configuration(root)
            .add_inheriting_configuration(other)
            .id();
        let preset = Preset::new("p", base);

        let with = graph.preset_chain(&preset, ResolveOptions::default()).unwrap();
        assert_eq!(names(&with), vec!["shared", "root", "other", "p"]);

        let without = graph
            .preset_chain(&preset, ResolveOptions { inherit_parents: false })
            .unwrap();
        assert_eq!(names(&without), vec!["shared", "root", "p"]);
    }

    #[test]
    fn test_preset_with_foreign_base_errors() {
        let mut other = ConfigGraph::new();
        other.add_configuration("a");
        let foreign = other.add_configuration("b").id();

        let graph = ConfigGraph::new();
        let preset = Preset::new("p", foreign);
        assert!(matches!(
            graph.resolve_preset(&preset),
            Err(Error::UnknownConfiguration { .. })
        ));
    }
}
