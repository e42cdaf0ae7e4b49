//! Launcher CLI
//!
//! Read-only browser for the studio configuration tree, the presets of each
//! project, and the settings they resolve to.

mod cli;
mod commands;
mod error;
mod logging;

use clap::Parser;
use colored::Colorize;
use launcher_core::sample::{self, Studio};

use cli::{Cli, Commands};
use error::{CliError, Result};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose)
        .map_err(|e| CliError::user(format!("Failed to set up logging: {e}")))?;
    tracing::debug!("Verbose mode enabled");

    match cli.command {
        Some(cmd) => {
            let studio = sample::studio()?;
            execute_command(&studio, cmd, cli.json)
        }
        None => {
            // No command provided - show help hint
            println!("{} Studio configuration launcher", "launcher".green().bold());
            println!();
            println!("Run {} for available commands.", "launcher --help".cyan());
            Ok(())
        }
    }
}

fn execute_command(studio: &Studio, cmd: Commands, json: bool) -> Result<()> {
    match cmd {
        Commands::Tree { from } => commands::run_tree(studio, from.as_deref()),
        Commands::Projects => commands::run_list_projects(studio, json),
        Commands::Presets { project } => commands::run_list_presets(studio, &project, json),
        Commands::Resolve {
            name,
            preset,
            project,
            no_inherit_parents,
        } => commands::run_resolve(
            studio,
            &name,
            preset,
            project.as_deref(),
            !no_inherit_parents,
            json,
        ),
        Commands::Chain {
            name,
            preset,
            project,
        } => commands::run_chain(studio, &name, preset, project.as_deref(), json),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_execute_every_command() {
        let studio = sample::studio().unwrap();
        let commands = [
            Commands::Tree { from: None },
            Commands::Projects,
            Commands::Presets {
                project: "mlpb".into(),
            },
            Commands::Resolve {
                name: "houdini_fx".into(),
                preset: false,
                project: None,
                no_inherit_parents: false,
            },
            Commands::Chain {
                name: "Maya Characters".into(),
                preset: true,
                project: None,
            },
        ];

        for cmd in commands {
            let label = format!("{:?}", cmd);
            assert!(execute_command(&studio, cmd, false).is_ok(), "{} failed", label);
        }
    }

    #[test]
    fn test_cli_error_user() {
        let error = CliError::user("test error");
        assert_eq!(format!("{}", error), "test error");
    }

    #[test]
    fn test_core_error_is_transparent() {
        let error = CliError::from(launcher_core::Error::ConfigurationNotFound {
            name: "nuke".into(),
        });
        assert_eq!(format!("{}", error), "Configuration not found: nuke");
    }
}
