//! Configuration resolution for the rez launcher
//!
//! This crate models a studio's configuration tree and the presets built on
//! top of it, and computes the effective settings of any node:
//!
//! - **Settings**: environment variable mutations, package requirements,
//!   icons and tools ([`Setting`])
//! - **Configuration tree**: an arena of [`Configuration`] nodes with
//!   parent/child edges plus cross-branch `inherits` edges ([`ConfigGraph`])
//! - **Presets and projects**: named overlays on one base configuration,
//!   grouped per project ([`Preset`], [`Project`])
//! - **Resolution**: linearize a node into a chain of holders and keep the
//!   first occurrence of every setting ([`ResolvedSetting`])
//!
//! # Example
//!
//! ```
//! use launcher_core::{ConfigGraph, EnvVarAction, SettingHolder};
//!
//! let mut graph = ConfigGraph::new();
//! let root = graph.add_configuration("root").id();
//! let studio = graph
//!     .add_configuration("studio")
//!     .set_parent_configuration(root)
//!     .add_env_var("STUDIO", "rez_studios", EnvVarAction::Set)
//!     .id();
//! let maya = graph
//!     .add_configuration("maya")
//!     .set_parent_configuration(studio)
//!     .add_tool("maya")
//!     .id();
//!
//! let resolved = graph.resolve(maya)?;
//! assert_eq!(resolved[0].source, "studio");
//! assert_eq!(resolved[1].setting.to_string(), "maya");
//! # Ok::<(), launcher_core::Error>(())
//! ```

pub mod error;
pub mod graph;
pub mod holder;
pub mod preset;
pub mod resolver;
pub mod sample;
pub mod setting;

pub use error::{Error, Result};
pub use graph::{ConfigGraph, ConfigId, Configuration, ConfigurationMut};
pub use holder::SettingHolder;
pub use preset::{Preset, Project, ProjectSummary, find_preset, find_project};
pub use resolver::{ResolveOptions, ResolvedSetting};
pub use setting::{EnvVarAction, Setting};
