use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use ritual_core::emit::write_mod_file;
use ritual_core::table::RITUAL_TABLE;
use ritual_core::tiers::{
    load_base_mod, render_tiered_mod, TierConfig, TierPlan, DEFAULT_TIERED_OUTPUT,
};
use tracing::info;

use crate::resolve_output_path;

/// Generate a mod from a tiered JSON/YAML config.
pub fn tiered_command(config: &str, output_file: Option<&str>, output_dir: &str) -> Result<PathBuf> {
    let config_path = Path::new(config);
    let tier_config = TierConfig::load(config_path).context("Failed to load tier config")?;
    let config_dir = config_path.parent().unwrap_or_else(|| Path::new("."));
    let base_mod = load_base_mod(&tier_config, config_dir).context("Failed to load base mod")?;

    let plan = TierPlan::from_config(&tier_config);
    let outcome = plan.resolve(RITUAL_TABLE);
    let contents = render_tiered_mod(&tier_config, &plan, &outcome, base_mod.as_ref());
    info!(
        modified = outcome.rituals.len(),
        skipped = outcome.skipped,
        tier_based = tier_config.is_tier_based(),
        "rendered tiered mod"
    );

    let file_name = output_file.unwrap_or(DEFAULT_TIERED_OUTPUT);
    let output_path = resolve_output_path(output_dir, file_name)?;
    write_mod_file(&output_path, &contents)
        .with_context(|| format!("Failed to generate mod at {}", output_path.display()))?;

    println!("Generated tiered mod file: {}", output_path.display());
    if let Some(desc) = &tier_config.description {
        println!("  Config: {desc}");
    }
    if let Some(base) = &base_mod {
        println!("  Base mod: {}", base.name);
    }
    println!("  Modified: {} rituals", outcome.rituals.len());
    println!("  Skipped (100%): {} rituals", outcome.skipped);

    Ok(output_path)
}
