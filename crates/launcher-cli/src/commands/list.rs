//! List commands for projects and presets

use colored::Colorize;
use launcher_core::sample::Studio;
use launcher_core::{ProjectSummary, SettingHolder, find_project};

use crate::error::Result;

/// Run the projects command
pub fn run_list_projects(studio: &Studio, json: bool) -> Result<()> {
    if json {
        let summaries: Vec<ProjectSummary> =
            studio.projects.iter().map(ProjectSummary::from).collect();
        println!("{}", serde_json::to_string_pretty(&summaries)?);
        return Ok(());
    }

    println!("{}", "Projects".bold());
    println!();

    for project in &studio.projects {
        println!(
            "{} ({})",
            project.name().cyan().bold(),
            project.short_name().dimmed()
        );
        for preset in project.presets() {
            println!("  {} {}", "+".green(), preset.name());
        }
        println!();
    }

    println!(
        "{} {} projects. Use {} to inspect one.",
        "Total:".dimmed(),
        studio.projects.len(),
        "launcher presets <project>".cyan()
    );

    Ok(())
}

/// Run the presets command
pub fn run_list_presets(studio: &Studio, project: &str, json: bool) -> Result<()> {
    let project = find_project(&studio.projects, project)?;

    if json {
        let names: Vec<&str> = project.presets().iter().map(|p| p.name()).collect();
        println!("{}", serde_json::to_string_pretty(&names)?);
        return Ok(());
    }

    println!("{} {}", "Presets of".bold(), project.name().cyan().bold());
    println!();

    if project.presets().is_empty() {
        println!("  {}", "None".dimmed());
    }
    for preset in project.presets() {
        println!("  {}", preset.name().green());
    }

    println!();
    println!(
        "{} {} presets. Use {} to see its settings.",
        "Total:".dimmed(),
        project.presets().len(),
        "launcher resolve <preset> --preset".cyan()
    );

    Ok(())
}
