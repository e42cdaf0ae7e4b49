//! Error types for launcher-core

use crate::graph::ConfigId;

/// Result type for launcher-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while querying the configuration graph
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The parent chain of a configuration loops back onto itself
    #[error("Cyclic configuration graph: '{name}' is its own ancestor")]
    CyclicGraph { name: String },

    /// A handle that was not issued by this graph
    #[error("Unknown configuration id {id}")]
    UnknownConfiguration { id: ConfigId },

    /// No configuration with the given name exists in the graph
    #[error("Configuration not found: {name}")]
    ConfigurationNotFound { name: String },

    /// No preset with the given name exists
    #[error("Preset not found: {name}")]
    PresetNotFound { name: String },

    /// No project with the given name or short name exists
    #[error("Project not found: {name}")]
    ProjectNotFound { name: String },
}
