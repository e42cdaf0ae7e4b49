//! Presets and the projects that group them
//!
//! A [`Preset`] is a named overlay bound to exactly one base configuration.
//! It is not part of the tree: it has no parent or children and only adds
//! its own settings after whatever its base resolves to.

use serde::Serialize;

use crate::error::{Error, Result};
use crate::graph::ConfigId;
use crate::holder::SettingHolder;
use crate::setting::Setting;

#[derive(Debug, Clone)]
pub struct Preset {
    name: String,
    base: ConfigId,
    settings: Vec<Setting>,
}

impl Preset {
    /// Create a preset on top of `base`
    pub fn new(name: impl Into<String>, base: ConfigId) -> Self {
        Self {
            name: name.into(),
            base,
            settings: Vec::new(),
        }
    }

    /// The configuration this preset overlays
    pub fn base_configuration(&self) -> ConfigId {
        self.base
    }
}

impl SettingHolder for Preset {
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

/// A named group of presets
#[derive(Debug, Clone)]
pub struct Project {
    name: String,
    short_name: String,
    presets: Vec<Preset>,
}

impl Project {
    pub fn new(name: impl Into<String>, short_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            short_name: short_name.into(),
            presets: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn short_name(&self) -> &str {
        &self.short_name
    }

    pub fn add_preset(mut self, preset: Preset) -> Self {
        self.presets.push(preset);
        self
    }

    /// Presets in the order they were added
    pub fn presets(&self) -> &[Preset] {
        &self.presets
    }

    pub fn preset(&self, name: &str) -> Result<&Preset> {
        self.presets
            .iter()
            .find(|p| p.name == name)
            .ok_or_else(|| Error::PresetNotFound {
                name: name.to_string(),
            })
    }

    /// True when `name` matches either the full or the short project name
    pub fn matches(&self, name: &str) -> bool {
        self.name == name || self.short_name == name
    }
}

/// Lightweight listing row for a project
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectSummary {
    pub name: String,
    pub short_name: String,
    pub presets: Vec<String>,
}

impl From<&Project> for ProjectSummary {
    fn from(project: &Project) -> Self {
        Self {
            name: project.name.clone(),
            short_name: project.short_name.clone(),
            presets: project.presets.iter().map(|p| p.name.clone()).collect(),
        }
    }
}

/// Look a project up by full or short name
pub fn find_project<'a>(projects: &'a [Project], name: &str) -> Result<&'a Project> {
    projects
        .iter()
        .find(|p| p.matches(name))
        .ok_or_else(|| Error::ProjectNotFound {
            name: name.to_string(),
        })
}

/// Look a preset up by name across every project
pub fn find_preset<'a>(projects: &'a [Project], name: &str) -> Result<&'a Preset> {
    projects
        .iter()
        .flat_map(|p| p.presets.iter())
        .find(|p| p.name == name)
        .ok_or_else(|| Error::PresetNotFound {
            name: name.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::ConfigGraph;
    use crate::setting::EnvVarAction;

    fn projects() -> Vec<Project> {
        let mut graph = ConfigGraph::new();
        let base = graph.add_configuration("maya").id();

        vec![
            Project::new("my_big_project_A", "mbpa")
                .add_preset(Preset::new("Maya Rigging", base).add_tool("maya"))
                .add_preset(Preset::new("Maya Anim", base)),
            Project::new("my_little_project_B", "mlpb")
                .add_preset(Preset::new("Maya Characters", base).add_icon("cool_character.png")),
        ]
    }

    #[test]
    fn test_presets_keep_insertion_order() {
        let projects = projects();
        let names: Vec<_> = projects[0].presets().iter().map(|p| p.name()).collect();
        assert_eq!(names, vec!["Maya Rigging", "Maya Anim"]);
    }

    #[test]
    fn test_preset_builder_appends_settings() {
        let mut graph = ConfigGraph::new();
        let base = graph.add_configuration("houdini").id();
        let preset = Preset::new("Houdini FX", base)
            .add_icon("cool_fx.png")
            .add_env_var("HOUDINI_OTLSCAN_PATH", "/path/to/test/otls", EnvVarAction::Prepend)
            .add_package_requirement("my_fx_tools", "~=1.0.0");

        assert_eq!(preset.base_configuration(), base);
        assert_eq!(preset.settings().len(), 3);
        assert_eq!(preset.settings()[0], Setting::icon("cool_fx.png"));
    }

    #[test]
    fn test_find_project_by_short_name() {
        let projects = projects();
        assert_eq!(find_project(&projects, "mlpb").unwrap().name(), "my_little_project_B");
        assert_eq!(find_project(&projects, "my_big_project_A").unwrap().short_name(), "mbpa");
        assert!(matches!(
            find_project(&projects, "nope"),
            Err(Error::ProjectNotFound { .. })
        ));
    }

    #[test]
    fn test_find_preset_across_projects() {
        let projects = projects();
        assert_eq!(find_preset(&projects, "Maya Characters").unwrap().settings().len(), 1);
        assert!(matches!(
            projects[0].preset("Maya Characters"),
            Err(Error::PresetNotFound { .. })
        ));
    }

    #[test]
    fn test_project_summary() {
        let projects = projects();
        let summary = ProjectSummary::from(&projects[1]);
        assert_eq!(summary.short_name, "mlpb");
        assert_eq!(summary.presets, vec!["Maya Characters".to_string()]);
    }
}
