//! The setting-holder capability shared by configurations and presets

use crate::setting::{EnvVarAction, Setting};

/// Anything with a display name and an ordered list of settings.
///
/// The `add_*` methods append one setting and hand the holder back, so
/// holders can be built up in a single expression:
///
/// ```
/// use launcher_core::{EnvVarAction, Preset, SettingHolder, ConfigGraph};
///
/// let mut graph = ConfigGraph::new();
/// let maya = graph.add_configuration("maya").id();
/// let preset = Preset::new("Maya Rigging", maya)
///     .add_package_requirement("mgear", "~=3.0.0")
///     .add_env_var("TESTING", "1", EnvVarAction::Set);
/// assert_eq!(preset.settings().len(), 2);
/// ```
pub trait SettingHolder {
    /// Name shown as the source of the settings this holder contributes
    fn name(&self) -> &str;

    /// Settings in insertion order, duplicates included
    fn settings(&self) -> &[Setting];

    /// Append a setting
    fn push_setting(&mut self, setting: Setting);

    fn add_setting(mut self, setting: Setting) -> Self
    where
        Self: Sized,
    {
        self.push_setting(setting);
        self
    }

    fn add_env_var(self, key: &str, value: &str, action: EnvVarAction) -> Self
    where
        Self: Sized,
    {
        self.add_setting(Setting::env_var(key, value, action))
    }

    fn add_package_requirement(self, package_name: &str, version_specifier: &str) -> Self
    where
        Self: Sized,
    {
        self.add_setting(Setting::package_requirement(package_name, version_specifier))
    }

    fn add_icon(self, path: &str) -> Self
    where
        Self: Sized,
    {
        self.add_setting(Setting::icon(path))
    }

    fn add_tool(self, name: &str) -> Self
    where
        Self: Sized,
    {
        self.add_setting(Setting::tool(name))
    }
}
