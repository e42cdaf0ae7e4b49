//! Leaf setting values carried by configurations and presets
//!
//! A [`Setting`] is immutable once constructed. Two settings are considered
//! the same when every field matches, which is what resolution uses to
//! suppress repeated definitions further down a chain.

use serde::Serialize;
use std::fmt;

/// How an environment variable is mutated when the environment is built
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EnvVarAction {
    /// Append the value to the existing variable
    Append,
    /// Prepend the value to the existing variable
    Prepend,
    /// Replace the variable outright
    Set,
}

impl EnvVarAction {
    /// Upper-case label used in the canonical rendering
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Append => "APPEND",
            Self::Prepend => "PREPEND",
            Self::Set => "SET",
        }
    }
}

impl fmt::Display for EnvVarAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single setting contributed by a configuration or preset
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Setting {
    /// Environment variable mutation
    EnvVar {
        key: String,
        value: String,
        action: EnvVarAction,
    },
    /// Rez package request, e.g. `maya~=2022`
    PackageRequirement {
        package_name: String,
        version_specifier: String,
    },
    /// Icon shown for the launcher entry
    Icon { path: String },
    /// Tool exposed by the resolved environment
    Tool { name: String },
}

impl Setting {
    pub fn env_var(key: impl Into<String>, value: impl Into<String>, action: EnvVarAction) -> Self {
        Self::EnvVar {
            key: key.into(),
            value: value.into(),
            action,
        }
    }

    pub fn package_requirement(
        package_name: impl Into<String>,
        version_specifier: impl Into<String>,
    ) -> Self {
        Self::PackageRequirement {
            package_name: package_name.into(),
            version_specifier: version_specifier.into(),
        }
    }

    pub fn icon(path: impl Into<String>) -> Self {
        Self::Icon { path: path.into() }
    }

    pub fn tool(name: impl Into<String>) -> Self {
        Self::Tool { name: name.into() }
    }

    /// Human-readable label for the setting type
    pub fn kind(&self) -> &'static str {
        match self {
            Self::EnvVar { .. } => "Environment Variable",
            Self::PackageRequirement { .. } => "Package Requirement",
            Self::Icon { .. } => "Icon",
            Self::Tool { .. } => "Tool",
        }
    }
}

impl fmt::Display for Setting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EnvVar { key, value, action } => write!(f, "{}: {} ({})", key, value, action),
            Self::PackageRequirement {
                package_name,
                version_specifier,
            } => write!(f, "{}{}", package_name, version_specifier),
            Self::Icon { path } => f.write_str(path),
            Self::Tool { name } => f.write_str(name),
        }
    }
}
