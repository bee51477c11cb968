use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use ritual_core::tiers::{render_power_reference, ConfigFormat, TierConfig};

use crate::reference_path_for;

/// Write a template tier config (every power at 100%) and an id reference.
pub fn init_config_command(output: &str, force: bool) -> Result<(PathBuf, PathBuf)> {
    let config_path = Path::new(output).to_path_buf();
    let format = ConfigFormat::from_path(&config_path).ok_or_else(|| {
        anyhow!("Config template must end in .json, .yaml or .yml: {}", config_path.display())
    })?;

    let reference_path = reference_path_for(&config_path);
    for existing in [&config_path, &reference_path] {
        if existing.exists() && !force {
            return Err(anyhow!(
                "File already exists: {} (use --force to overwrite)",
                existing.display()
            ));
        }
    }

    let template = TierConfig::template();
    let body = match format {
        ConfigFormat::Json => serde_json::to_string_pretty(&template)
            .context("Failed to serialize config template to JSON")?,
        ConfigFormat::Yaml => serde_yaml::to_string(&template)
            .context("Failed to serialize config template to YAML")?,
    };

    if let Some(parent) = config_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    fs::write(&config_path, body)
        .with_context(|| format!("Failed to write config template: {}", config_path.display()))?;

    fs::write(&reference_path, render_power_reference()).with_context(|| {
        format!("Failed to write power reference: {}", reference_path.display())
    })?;

    println!("Generated config template: {}", config_path.display());
    println!("Generated reference file: {}", reference_path.display());

    Ok((config_path, reference_path))
}
