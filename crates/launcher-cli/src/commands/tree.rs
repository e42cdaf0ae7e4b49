//! Tree command implementation

use std::collections::HashSet;

use colored::Colorize;
use launcher_core::sample::Studio;
use launcher_core::{ConfigGraph, ConfigId, Error};

use crate::error::Result;

/// Run the tree command
pub fn run_tree(studio: &Studio, from: Option<&str>) -> Result<()> {
    let starts = match from {
        Some(name) => vec![studio.graph.find(name).ok_or_else(|| {
            Error::ConfigurationNotFound {
                name: name.to_string(),
            }
        })?],
        None => studio.graph.roots(),
    };

    print!("{}", render_tree(&studio.graph, &starts)?);
    Ok(())
}

/// Render the subtrees under `starts`, two spaces of indent per level.
///
/// Nodes already printed are not descended into again, so a graph whose
/// parent links were misused still renders.
pub fn render_tree(graph: &ConfigGraph, starts: &[ConfigId]) -> Result<String> {
    let mut out = String::new();
    let mut visited = HashSet::new();
    let mut stack: Vec<(ConfigId, usize)> = starts.iter().rev().map(|id| (*id, 0)).collect();

    while let Some((id, depth)) = stack.pop() {
        if !visited.insert(id) {
            continue;
        }
        let node = graph
            .get(id)
            .ok_or(Error::UnknownConfiguration { id })?;

        let name = graph.name(id);
        let label = if depth == 0 {
            name.bold().to_string()
        } else {
            name.to_string()
        };
        out.push_str(&"  ".repeat(depth));
        out.push_str(&label);
        if !node.inherits().is_empty() {
            let inherits: Vec<&str> = node.inherits().iter().map(|i| graph.name(*i)).collect();
            let note = format!("(inherits: {})", inherits.join(", "));
            out.push_str(&format!(" {}", note.dimmed()));
        }
        out.push('\n');

        for child in graph.children(id).iter().rev() {
            stack.push((*child, depth + 1));
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use launcher_core::{ConfigGraph, sample};

    #[test]
    fn test_tree_runs() {
        let studio = sample::studio().unwrap();
        assert!(run_tree(&studio, None).is_ok());
    }

    #[test]
    fn test_tree_from_unknown_node_fails() {
        let studio = sample::studio().unwrap();
        assert!(run_tree(&studio, Some("nuke")).is_err());
    }

    #[test]
    fn test_render_tree_indents_children() {
        colored::control::set_override(false);

        let mut graph = ConfigGraph::new();
        let root = graph.add_configuration("root").id();
        let apps = graph.add_configuration("applications").set_parent_configuration(root).id();
        graph.add_configuration("maya").set_parent_configuration(apps);
        let houdini = graph.add_configuration("houdini").set_parent_configuration(apps).id();
        graph
            .add_configuration("project")
            .set_parent_configuration(root)
            .add_inheriting_configuration(houdini);

        let rendered = render_tree(&graph, &[root]).unwrap();
        assert_eq!(
            rendered,
            "root\n  applications\n    maya\n    houdini\n  project (inherits: houdini)\n"
        );
    }

    #[test]
    fn test_render_tree_survives_parent_cycle() {
        let mut graph = ConfigGraph::new();
        let a = graph.add_configuration("a").id();
        graph.configuration_mut(a).set_parent_configuration(a);

        let rendered = render_tree(&graph, &[a]).unwrap();
        assert_eq!(rendered.lines().count(), 1);
    }
}
