use std::path::PathBuf;

use anyhow::{Context, Result};
use ritual_core::emit::{default_output_name, render_uniform_mod, write_mod_file};
use ritual_core::scale::{scale_table, CostPolicy, Percentage};
use ritual_core::table::RITUAL_TABLE;
use tracing::info;

use crate::resolve_output_path;

/// Scale every ritual by one percentage and write the mod file.
///
/// The percentage is validated before any path is touched, so bad input never
/// creates or truncates a file.
pub fn generate_command(
    percentage: &str,
    output_file: Option<&str>,
    output_dir: &str,
    min_cost: u32,
) -> Result<PathBuf> {
    let pct: Percentage = percentage.parse()?;
    let policy = CostPolicy::with_min_cost(min_cost);

    let file_name = match output_file {
        Some(name) => name.to_string(),
        None => default_output_name(pct),
    };
    let output_path = resolve_output_path(output_dir, &file_name)?;

    let scaled = scale_table(RITUAL_TABLE, pct, policy);
    let contents = render_uniform_mod(&scaled, pct);
    info!(percentage = %pct, rituals = scaled.len(), min_cost, "rendered uniform mod");

    write_mod_file(&output_path, &contents)
        .with_context(|| format!("Failed to generate mod at {}", output_path.display()))?;

    println!("Generated mod file: {}", output_path.display());
    println!("  Rituals modified: {}", scaled.len());
    println!("  Percentage: {pct}%");
    if min_cost > 0 {
        println!("  Minimum cost: {min_cost}");
    }
    println!();
    println!("To use this mod:");
    println!("  1. Copy '{file_name}' to your CoE5 mods folder");
    println!("  2. Enable the mod in the game's mod menu");

    Ok(output_path)
}
