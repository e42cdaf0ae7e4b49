//! CLI argument parsing using clap derive

use clap::{Parser, Subcommand};

/// Launcher - Browse studio configurations, presets and their resolved settings
#[derive(Parser, Debug)]
#[command(name = "launcher")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "LAUNCHER_VERBOSE")]
    pub verbose: bool,

    /// Output as JSON for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Show the configuration tree
    ///
    /// Examples:
    ///   launcher tree                  # Whole studio
    ///   launcher tree --from houdini   # Only the houdini subtree
    Tree {
        /// Start from this configuration instead of the roots
        #[arg(long)]
        from: Option<String>,
    },

    /// List projects and their presets
    Projects,

    /// List the presets of one project
    Presets {
        /// Project name or short name (e.g. "mbpa")
        project: String,
    },

    /// Show the effective settings of a configuration or preset
    ///
    /// Each row shows where the setting was first defined.
    ///
    /// Examples:
    ///   launcher resolve maya
    ///   launcher resolve "Houdini FX" --preset
    ///   launcher resolve "Maya Rigging" --preset --project mbpa --json
    Resolve {
        /// Configuration name, or preset name with --preset
        name: String,

        /// Treat NAME as a preset
        #[arg(long)]
        preset: bool,

        /// Restrict the preset lookup to one project
        #[arg(long, requires = "preset")]
        project: Option<String>,

        /// Skip the preset base's own inherits entries
        #[arg(long, requires = "preset")]
        no_inherit_parents: bool,
    },

    /// Show the ordered chain of holders consulted for a configuration or preset
    Chain {
        /// Configuration name, or preset name with --preset
        name: String,

        /// Treat NAME as a preset
        #[arg(long)]
        preset: bool,

        /// Restrict the preset lookup to one project
        #[arg(long, requires = "preset")]
        project: Option<String>,
    },
}
