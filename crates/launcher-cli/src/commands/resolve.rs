//! Resolve and chain commands
//!
//! `resolve` prints the table the launcher shows for a configuration or a
//! preset: where each setting came from, its type, and its value.

use colored::Colorize;
use launcher_core::sample::Studio;
use launcher_core::{ResolveOptions, ResolvedSetting};

use super::{Target, find_target};
use crate::error::Result;

const HEADERS: [&str; 3] = ["Inherited from", "Setting Type", "Setting"];

/// Run the resolve command
pub fn run_resolve(
    studio: &Studio,
    name: &str,
    preset: bool,
    project: Option<&str>,
    inherit_parents: bool,
    json: bool,
) -> Result<()> {
    let target = find_target(studio, name, preset, project)?;
    let resolved = match target {
        Target::Configuration(id) => studio.graph.resolve(id)?,
        Target::Preset(preset) => studio
            .graph
            .resolve_preset_with(preset, ResolveOptions { inherit_parents })?,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&resolved)?);
    } else {
        print!("{}", render_table(&resolved));
    }
    Ok(())
}

/// Run the chain command
pub fn run_chain(
    studio: &Studio,
    name: &str,
    preset: bool,
    project: Option<&str>,
    json: bool,
) -> Result<()> {
    let target = find_target(studio, name, preset, project)?;
    let chain = match target {
        Target::Configuration(id) => studio.graph.chain(id)?,
        Target::Preset(preset) => studio.graph.preset_chain(preset, ResolveOptions::default())?,
    };
    let names: Vec<&str> = chain.iter().map(|h| h.name()).collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&names)?);
        return Ok(());
    }

    for (i, holder) in chain.iter().enumerate() {
        println!(
            "{:>3}. {} {}",
            i + 1,
            holder.name().cyan(),
            format!("({} settings)", holder.settings().len()).dimmed()
        );
    }
    Ok(())
}

/// Render resolved settings as an aligned three-column table
pub fn render_table(resolved: &[ResolvedSetting]) -> String {
    let cells: Vec<[String; 3]> = resolved
        .iter()
        .map(|r| {
            [
                r.source.clone(),
                r.setting.kind().to_string(),
                r.setting.to_string(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    let header = format!(
        "{:<w0$}  {:<w1$}  {}",
        HEADERS[0],
        HEADERS[1],
        HEADERS[2],
        w0 = widths[0],
        w1 = widths[1]
    );
    out.push_str(&header.bold().to_string());
    out.push('\n');

    for [source, kind, value] in cells {
        out.push_str(&format!(
            "{:<w0$}  {:<w1$}  {}\n",
            source,
            kind,
            value,
            w0 = widths[0],
            w1 = widths[1]
        ));
    }

    if resolved.is_empty() {
        out.push_str(&format!("{}\n", "No settings".dimmed()));
    }

    out
}
