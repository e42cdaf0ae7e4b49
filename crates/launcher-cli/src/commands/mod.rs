//! Command implementations for launcher-cli

pub mod list;
pub mod resolve;
pub mod tree;

pub use list::{run_list_presets, run_list_projects};
pub use resolve::{run_chain, run_resolve};
pub use tree::run_tree;

use launcher_core::sample::Studio;
use launcher_core::{ConfigId, Error, Preset, find_preset, find_project};

use crate::error::Result;

/// What a command was pointed at
#[derive(Debug, Clone, Copy)]
pub enum Target<'a> {
    Configuration(ConfigId),
    Preset(&'a Preset),
}

/// Look up a configuration by name, or a preset when `preset` is set
pub fn find_target<'a>(
    studio: &'a Studio,
    name: &str,
    preset: bool,
    project: Option<&str>,
) -> Result<Target<'a>> {
    if !preset {
        let id = studio
            .graph
            .find(name)
            .ok_or_else(|| Error::ConfigurationNotFound {
                name: name.to_string(),
            })?;
        return Ok(Target::Configuration(id));
    }

    let found = match project {
        Some(project) => find_project(&studio.projects, project)?.preset(name)?,
        None => find_preset(&studio.projects, name)?,
    };
    Ok(Target::Preset(found))
}
