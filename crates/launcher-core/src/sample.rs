//! Built-in studio data set
//!
//! A small but realistic studio: shared application configurations under
//! `applications`, two projects under `projects` whose tool configurations
//! inherit from the application ones, and presets on top of those.

use crate::error::{Error, Result};
use crate::graph::{ConfigGraph, ConfigId};
use crate::holder::SettingHolder;
use crate::preset::{Preset, Project};
use crate::setting::EnvVarAction;

/// The sample configuration graph together with its projects
#[derive(Debug, Clone)]
pub struct Studio {
    pub graph: ConfigGraph,
    pub root: ConfigId,
    pub projects: Vec<Project>,
}

/// Build the sample studio
pub fn studio() -> Result<Studio> {
    let (graph, root) = studio_configurations();
    let projects = studio_projects(&graph, root)?;
    Ok(Studio {
        graph,
        root,
        projects,
    })
}

/// Configuration tree of the sample studio, returned with its root
pub fn studio_configurations() -> (ConfigGraph, ConfigId) {
    let mut graph = ConfigGraph::new();
    let root = graph.add_configuration("root").id();

    let studio = graph
        .add_configuration("studio")
        .set_parent_configuration(root)
        .add_env_var("STUDIO", "rez_studios", EnvVarAction::Set)
        .add_env_var("STUDIO_SHORT", "rs", EnvVarAction::Set)
        .add_env_var("TIMEZONE", "PST", EnvVarAction::Set)
        .add_env_var("LANGUAGE", "en_US", EnvVarAction::Set)
        .add_icon("rez.png")
        .id();

    // Applications
    let applications = graph
        .add_configuration("applications")
        .set_parent_configuration(studio)
        .id();
    let maya = graph
        .add_configuration("maya")
        .set_parent_configuration(applications)
        .add_icon("maya.png")
        .add_tool("maya")
        .add_package_requirement("maya", "~=2022")
        .add_package_requirement("rs_maya", "~=1.0.0")
        .id();
    let houdini = graph
        .add_configuration("houdini")
        .set_parent_configuration(applications)
        .add_icon("houdini.png")
        .add_tool("houdini")
        .add_package_requirement("houdini", "~=20.5")
        .add_package_requirement("rs_houdini", ">=5.1.0")
        .add_package_requirement("sidefx_labs", "~=20.5")
        .id();
    let houdini_fx = graph
        .add_configuration("houdini_fx")
        .set_parent_configuration(houdini)
        .add_package_requirement("axiom_houdini", "~=1.0.0")
        .add_tool("houdinifx")
        .id();

    // Projects
    let projects = graph
        .add_configuration("projects")
        .set_parent_configuration(studio)
        .id();
    let mbpa = graph
        .add_configuration("my_big_project_A")
        .set_parent_configuration(projects)
        .add_env_var("PROJECT", "my_big_project_A", EnvVarAction::Set)
        .add_env_var("PROJECT_SHORT", "mbpa", EnvVarAction::Set)
        .add_env_var("FPS", "24", EnvVarAction::Set)
        .add_env_var("RESOLUTION", "1920x1080", EnvVarAction::Set)
        .id();
    let mlpb = graph
        .add_configuration("my_little_project_B")
        .set_parent_configuration(projects)
        .add_env_var("PROJECT", "my_little_project_B", EnvVarAction::Set)
        .add_env_var("PROJECT_SHORT", "mlpb", EnvVarAction::Set)
        .add_env_var("FPS", "30", EnvVarAction::Set)
        .add_env_var("RESOLUTION", "1280x720", EnvVarAction::Set)
        .id();

    let mbpa_houdini_base = graph
        .add_configuration("mbpa_houdini_base")
        .set_parent_configuration(mbpa)
        .add_inheriting_configuration(houdini_fx)
        .add_package_requirement("qlib", "~=1.0.0")
        .add_package_requirement("rs_houdini", "~=4.0.0")
        .add_package_requirement("houdini", "~=20.0.0")
        .add_package_requirement("sidefx_labs", "")
        .id();
    graph
        .add_configuration("mbpa_houdini_vegetation")
        .set_parent_configuration(mbpa_houdini_base)
        .add_inheriting_configuration(houdini)
        .add_package_requirement("qlib", "~=5.0.0");
    graph
        .add_configuration("mbpa_maya_base")
        .set_parent_configuration(mbpa)
        .add_inheriting_configuration(maya);

    graph
        .add_configuration("mlpb_houdini_base")
        .set_parent_configuration(mlpb)
        .add_inheriting_configuration(houdini_fx)
        .add_package_requirement("mlbp_houdini", "~=3.0.0");
    graph
        .add_configuration("mlpb_maya_base")
        .set_parent_configuration(mlpb)
        .add_inheriting_configuration(maya);

    (graph, root)
}

/// Projects and presets of the sample studio, bound to nodes under `root`
pub fn studio_projects(graph: &ConfigGraph, root: ConfigId) -> Result<Vec<Project>> {
    let lookup = |name: &str| {
        graph
            .get_child_by_name(root, name)
            .ok_or_else(|| Error::ConfigurationNotFound {
                name: name.to_string(),
            })
    };

    let vegetation = lookup("mbpa_houdini_vegetation")?;

    let mbpa = Project::new("my_big_project_A", "mbpa")
        .add_preset(
            Preset::new("Houdini Vegetation dev ⚒", vegetation)
                .add_env_var("HOUDINI_OTLSCAN_PATH", "/path/to/test/otls", EnvVarAction::Prepend)
                .add_env_var("REZ_PACKAGES_PATH", "/path/to/test/packages", EnvVarAction::Prepend)
                .add_package_requirement("my_speedtree_importer", "~=1.0.0"),
        )
        .add_preset(Preset::new("Houdini Vegetation 🌲", vegetation).add_icon("cool_tree.png"))
        .add_preset(
            Preset::new("Maya Rigging", lookup("maya")?)
                .add_package_requirement("mgear", "~=3.0.0")
                .add_env_var("REZ_PACKAGES_PATH", "/path/to/test/packages", EnvVarAction::Prepend)
                .add_env_var("MAYA_SCRIPT_PATH", "/path/to/test/scripts", EnvVarAction::Prepend)
                .add_env_var("TESTING", "1", EnvVarAction::Set),
        );

    let mlpb = Project::new("my_little_project_B", "mlpb")
        .add_preset(
            Preset::new("Houdini FX", lookup("mlpb_houdini_base")?)
                .add_icon("cool_fx.png")
                .add_env_var("HOUDINI_OTLSCAN_PATH", "/path/to/test/otls", EnvVarAction::Prepend)
                .add_package_requirement("my_fx_tools", "~=1.0.0"),
        )
        .add_preset(
            Preset::new("Maya Characters", lookup("mlpb_maya_base")?)
                .add_icon("cool_character.png")
                .add_package_requirement("mgear", "~=3.0.0"),
        );

    Ok(vec![mbpa, mlpb])
}
