//! Configuration tree storage
//!
//! Every [`Configuration`] is owned by a [`ConfigGraph`] arena and addressed
//! through a copyable [`ConfigId`]. Two kinds of edges connect nodes:
//!
//! - **tree edges** (`parent` / `children`): each node has at most one parent
//!   and both sides are kept in step by [`ConfigurationMut::set_parent_configuration`]
//! - **inherits edges**: references to any other node in the graph, used to
//!   reuse a configuration from another branch. These may form cycles.
//!
//! Builder methods index the arena directly and panic when handed a
//! [`ConfigId`] issued by a different graph. Queries that can reasonably see
//! a foreign id (resolution of a [`Preset`](crate::Preset)) return
//! [`Error::UnknownConfiguration`](crate::Error::UnknownConfiguration) instead.

use std::collections::HashSet;
use std::fmt;

use crate::holder::SettingHolder;
use crate::setting::Setting;

/// Handle to a configuration stored in a [`ConfigGraph`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConfigId(usize);

impl ConfigId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for ConfigId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A node of the configuration tree
#[derive(Debug, Clone)]
pub struct Configuration {
    name: String,
    settings: Vec<Setting>,
    parent: Option<ConfigId>,
    children: Vec<ConfigId>,
    inherits: Vec<ConfigId>,
}

impl Configuration {
    fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            settings: Vec::new(),
            parent: None,
            children: Vec::new(),
            inherits: Vec::new(),
        }
    }

    pub fn parent(&self) -> Option<ConfigId> {
        self.parent
    }

    pub fn children(&self) -> &[ConfigId] {
        &self.children
    }

    /// Nodes whose own settings are injected right before this node
    pub fn inherits(&self) -> &[ConfigId] {
        &self.inherits
    }
}

impl SettingHolder for Configuration {
    fn name(&self) -> &str {
        &self.name
    }

    fn settings(&self) -> &[Setting] {
        &self.settings
    }

    fn push_setting(&mut self, setting: Setting) {
        self.settings.push(setting);
    }
}

/// Arena owning every configuration of a studio
#[derive(Debug, Clone, Default)]
pub struct ConfigGraph {
    nodes: Vec<Configuration>,
}

impl ConfigGraph {
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Create a detached configuration and return a builder handle to it
    pub fn add_configuration(&mut self, name: impl Into<String>) -> ConfigurationMut<'_> {
        let id = ConfigId(self.nodes.len());
        self.nodes.push(Configuration::new(name));
        ConfigurationMut { graph: self, id }
    }

    /// Builder handle to an existing configuration
    ///
    /// # Panics
    ///
    /// Panics if `id` was not issued by this graph.
    pub fn configuration_mut(&mut self, id: ConfigId) -> ConfigurationMut<'_> {
        assert!(id.0 < self.nodes.len(), "configuration {} not in graph", id);
        ConfigurationMut { graph: self, id }
    }

    pub fn get(&self, id: ConfigId) -> Option<&Configuration> {
        self.nodes.get(id.0)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All ids in creation order
    pub fn ids(&self) -> impl Iterator<Item = ConfigId> + '_ {
        (0..self.nodes.len()).map(ConfigId)
    }

    /// Configurations without a parent, in creation order
    pub fn roots(&self) -> Vec<ConfigId> {
        self.ids().filter(|id| self.nodes[id.0].parent.is_none()).collect()
    }

    /// Direct children of a node, in attachment order
    ///
    /// # Panics
    ///
    /// Panics if `id` was not issued by this graph.
    pub fn children(&self, id: ConfigId) -> &[ConfigId] {
        &self.nodes[id.0].children
    }

    /// Display name of a node
    ///
    /// # Panics
    ///
    /// Panics if `id` was not issued by this graph.
    pub fn name(&self, id: ConfigId) -> &str {
        &self.nodes[id.0].name
    }

    /// Depth-first search of the subtree rooted at `from`.
    ///
    /// `from` itself is checked first, then each child subtree in child-list
    /// order. Returns `None` when neither the node nor any descendant carries
    /// `name`, or when `from` is not part of this graph.
    pub fn get_child_by_name(&self, from: ConfigId, name: &str) -> Option<ConfigId> {
        let mut visited = HashSet::new();
        let mut stack = vec![from];

        while let Some(id) = stack.pop() {
            if !visited.insert(id) {
                continue;
            }
            let node = self.get(id)?;
            if node.name == name {
                return Some(id);
            }
            // Reverse so the first child is popped first
            stack.extend(node.children.iter().rev().copied());
        }

        None
    }

    /// Search every tree of the graph for a configuration called `name`
    pub fn find(&self, name: &str) -> Option<ConfigId> {
        self.roots()
            .into_iter()
            .find_map(|root| self.get_child_by_name(root, name))
    }

    fn attach(&mut self, child: ConfigId, parent: ConfigId) {
        let previous = self.nodes[child.0].parent;
        if previous == Some(parent) {
            return;
        }

        if let Some(old) = previous {
            tracing::warn!(
                child = %self.nodes[child.0].name,
                from = %self.nodes[old.0].name,
                to = %self.nodes[parent.0].name,
                "Re-parenting configuration"
            );
            self.nodes[old.0].children.retain(|c| *c != child);
        }

        self.nodes[parent.0].children.push(child);
        self.nodes[child.0].parent = Some(parent);
    }
}

/// Exclusive builder handle to one configuration in a [`ConfigGraph`]
///
/// Each method mutates the graph and returns the handle so calls can be
/// chained; [`ConfigurationMut::id`] ends the chain.
#[derive(Debug)]
pub struct ConfigurationMut<'g> {
    graph: &'g mut ConfigGraph,
    id: ConfigId,
}

impl ConfigurationMut<'_> {
    pub fn id(&self) -> ConfigId {
        self.id
    }

    /// Make `parent` the parent of this node and append this node to its children.
    ///
    /// A node that already has a different parent is moved: it is removed
    /// from the old parent's children first.
    ///
    /// # Panics
    ///
    /// Panics if `parent` was not issued by this graph.
    pub fn set_parent_configuration(self, parent: ConfigId) -> Self {
        self.graph.attach(self.id, parent);
        self
    }

    /// Append `child` to this node's children and make this node its parent
    ///
    /// # Panics
    ///
    /// Panics if `child` was not issued by this graph.
    pub fn add_child_configuration(self, child: ConfigId) -> Self {
        self.graph.attach(child, self.id);
        self
    }

    /// Inject the settings of `other` right before this node's own settings
    ///
    /// # Panics
    ///
    /// Panics if `other` was not issued by this graph.
    pub fn add_inheriting_configuration(self, other: ConfigId) -> Self {
        assert!(other.0 < self.graph.nodes.len(), "configuration {} not in graph", other);
        self.graph.nodes[self.id.0].inherits.push(other);
        self
    }
}

impl SettingHolder for ConfigurationMut<'_> {
    fn name(&self) -> &str {
        &self.graph.nodes[self.id.0].name
    }

    fn settings(&self) -> &[Setting] {
        &self.graph.nodes[self.id.0].settings
    }

    fn push_setting(&mut self, setting: Setting) {
        self.graph.nodes[self.id.0].settings.push(setting);
    }
}
