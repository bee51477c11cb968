//! Tiered ritual cost configuration.
//!
//! A tier config assigns a percentage per ritual power, optionally further
//! adjusted per ritual level. Two shapes are accepted:
//!
//! - Legacy: `default` plus `ritpow_modifiers` keyed by power id.
//! - Tiered: named `tiers` plus `class_tiers` mapping power names to a tier.
//!   When both keys are present, even with empty maps, this shape wins and the
//!   default is 100%.
//!
//! Configs may be JSON or YAML; the format follows the file extension.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::emit::push_block;
use crate::model::RitualCostEntry;
use crate::scale::{CostPolicy, Percentage, ScaledCost};
use crate::table::{power_by_id, power_by_name, RITUAL_POWERS};

/// Default output file name for tiered mods.
pub const DEFAULT_TIERED_OUTPUT: &str = "tiered_ritual_costs.c5m";

const BANNER: &str = "# ==================================================";

/// Error type for loading tier configs.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid JSON in config file {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid YAML in config file {path}: {source}")]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// Extension is not one of json/yaml/yml.
    #[error("Unsupported config format for {path}; expected .json, .yaml or .yml")]
    UnsupportedFormat { path: PathBuf },
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// On-disk config format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Yaml,
}

impl ConfigFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension().and_then(|e| e.to_str())?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(ConfigFormat::Json),
            "yaml" | "yml" => Some(ConfigFormat::Yaml),
            _ => None,
        }
    }
}

fn full_percentage() -> Percentage {
    Percentage::FULL
}

/// Serializable tier configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TierConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Percentage for powers without a specific modifier (legacy shape only).
    #[serde(default = "full_percentage")]
    pub default: Percentage,

    /// Power id (as a string key) to percentage.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub ritpow_modifiers: BTreeMap<String, Percentage>,

    /// Tier name to percentage.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tiers: Option<BTreeMap<String, Percentage>>,

    /// Power name to tier name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_tiers: Option<BTreeMap<String, String>>,

    /// Ritual level (as a string key) to percentage.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub level_modifiers: BTreeMap<String, Percentage>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_cost: Option<u32>,

    /// Another mod file to prepend, relative to the config file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_mod: Option<PathBuf>,
}

impl TierConfig {
    /// Load a config from disk, choosing the parser by extension.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let format = ConfigFormat::from_path(path)
            .ok_or_else(|| ConfigError::UnsupportedFormat { path: path.to_path_buf() })?;
        let body = fs::read_to_string(path)
            .map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;
        Self::parse(&body, format).map_err(|err| err.with_path(path))
    }

    /// Parse a config body. Errors carry an empty path; [`TierConfig::load`]
    /// fills it in.
    pub fn parse(body: &str, format: ConfigFormat) -> ConfigResult<Self> {
        match format {
            ConfigFormat::Json => serde_json::from_str(body)
                .map_err(|source| ConfigError::Json { path: PathBuf::new(), source }),
            ConfigFormat::Yaml => serde_yaml::from_str(body)
                .map_err(|source| ConfigError::Yaml { path: PathBuf::new(), source }),
        }
    }

    /// A legacy-shape config listing every known power at 100%.
    pub fn template() -> Self {
        Self {
            description: Some("Tiered ritual cost modifier configuration".to_string()),
            default: Percentage::FULL,
            ritpow_modifiers: RITUAL_POWERS
                .iter()
                .map(|p| (p.id.to_string(), Percentage::FULL))
                .collect(),
            tiers: None,
            class_tiers: None,
            level_modifiers: BTreeMap::new(),
            min_cost: None,
            base_mod: None,
        }
    }

    /// Both tier maps, when both keys are present (even if empty).
    pub fn tier_maps(&self) -> Option<(&BTreeMap<String, Percentage>, &BTreeMap<String, String>)> {
        Some((self.tiers.as_ref()?, self.class_tiers.as_ref()?))
    }

    pub fn is_tier_based(&self) -> bool {
        self.tier_maps().is_some()
    }

    pub fn policy(&self) -> CostPolicy {
        CostPolicy::with_min_cost(self.min_cost.unwrap_or(0))
    }
}

impl ConfigError {
    fn with_path(self, path: &Path) -> Self {
        let path = path.to_path_buf();
        match self {
            ConfigError::Io { source, .. } => ConfigError::Io { path, source },
            ConfigError::Json { source, .. } => ConfigError::Json { path, source },
            ConfigError::Yaml { source, .. } => ConfigError::Yaml { path, source },
            ConfigError::UnsupportedFormat { .. } => ConfigError::UnsupportedFormat { path },
        }
    }
}

/// Text of a base mod to prepend to the generated output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseMod {
    pub name: String,
    pub contents: String,
}

/// Read the config's `base_mod`, resolved against `config_dir`.
///
/// A missing file is logged and skipped; other read failures are errors.
pub fn load_base_mod(config: &TierConfig, config_dir: &Path) -> ConfigResult<Option<BaseMod>> {
    let Some(rel) = &config.base_mod else {
        return Ok(None);
    };
    let path = if rel.is_absolute() { rel.clone() } else { config_dir.join(rel) };
    if !path.exists() {
        warn!(path = %path.display(), "base mod not found; skipping");
        return Ok(None);
    }
    let contents =
        fs::read_to_string(&path).map_err(|source| ConfigError::Io { path: path.clone(), source })?;
    debug!(path = %path.display(), "using base mod");
    Ok(Some(BaseMod { name: rel.display().to_string(), contents }))
}

/// Per-power and per-level percentages derived from a [`TierConfig`].
#[derive(Debug, Clone, PartialEq)]
pub struct TierPlan {
    pub default: Percentage,
    pub by_power: BTreeMap<u16, Percentage>,
    pub by_level: BTreeMap<u8, Percentage>,
    pub policy: CostPolicy,
}

/// A ritual selected for output, with its owning power.
#[derive(Debug, Clone, PartialEq)]
pub struct PlannedRitual {
    pub power: u16,
    pub scaled: ScaledCost,
}

/// Result of applying a plan to a table.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TieredOutcome {
    pub rituals: Vec<PlannedRitual>,
    /// Rituals left out because their effective percentage was exactly 100.
    pub skipped: usize,
}

impl TierPlan {
    pub fn from_config(config: &TierConfig) -> Self {
        let mut by_power = BTreeMap::new();
        let default = if let Some((tiers, class_tiers)) = config.tier_maps() {
            for (class_name, tier) in class_tiers {
                let Some(power) = power_by_name(class_name) else {
                    warn!(class = %class_name, "unknown ritual power in class_tiers; ignoring");
                    continue;
                };
                let pct = tiers.get(tier).copied().unwrap_or_else(|| {
                    warn!(class = %class_name, tier = %tier, "undefined tier; using 100%");
                    Percentage::FULL
                });
                by_power.insert(power.id, pct);
            }
            Percentage::FULL
        } else {
            for (key, pct) in &config.ritpow_modifiers {
                match key.trim().parse::<u16>() {
                    Ok(id) => {
                        by_power.insert(id, *pct);
                    }
                    Err(_) => warn!(key = %key, "non-numeric ritpow id; ignoring"),
                }
            }
            config.default
        };

        let mut by_level = BTreeMap::new();
        for (key, pct) in &config.level_modifiers {
            match key.trim().parse::<u8>() {
                Ok(level) => {
                    by_level.insert(level, *pct);
                }
                Err(_) => warn!(key = %key, "non-numeric ritual level; ignoring"),
            }
        }

        Self { default, by_power, by_level, policy: config.policy() }
    }

    /// Percentage for a power before level adjustment.
    pub fn class_percentage(&self, power: u16) -> Percentage {
        self.by_power.get(&power).copied().unwrap_or(self.default)
    }

    /// Effective percentage for one ritual: class percentage times level percentage.
    pub fn percentage_for(&self, entry: &RitualCostEntry) -> Percentage {
        let level = self.by_level.get(&entry.level).copied().unwrap_or(Percentage::FULL);
        self.class_percentage(entry.power).combine(level)
    }

    /// Scale every ritual whose effective percentage differs from 100.
    pub fn resolve(&self, table: &[RitualCostEntry]) -> TieredOutcome {
        let mut outcome = TieredOutcome::default();
        for entry in table {
            let pct = self.percentage_for(entry);
            if pct.is_identity() {
                outcome.skipped += 1;
                continue;
            }
            outcome.rituals.push(PlannedRitual {
                power: entry.power,
                scaled: ScaledCost::from_entry(entry, pct, self.policy),
            });
        }
        outcome
    }
}

/// Render the full tiered mod text.
pub fn render_tiered_mod(
    config: &TierConfig,
    plan: &TierPlan,
    outcome: &TieredOutcome,
    base_mod: Option<&BaseMod>,
) -> String {
    let mut out = String::new();
    out.push_str("# Tiered Ritual Cost Modifier\n");
    out.push_str("#\n");
    out.push_str("# This mod adjusts ritual costs by class/ritual power type.\n");
    out.push_str("#\n");

    if let Some(base) = base_mod {
        out.push_str(BANNER);
        out.push('\n');
        out.push_str(&format!("# BASE MOD: {}\n", base.name));
        out.push_str("# (Our changes below override any conflicts)\n");
        out.push_str(BANNER);
        out.push_str("\n\n");
        out.push_str(&base.contents);
        out.push_str("\n\n");
        out.push_str(BANNER);
        out.push('\n');
        out.push_str("# MODIFICATIONS START HERE\n");
        out.push_str(BANNER);
        out.push_str("\n\n");
    }

    if !plan.by_level.is_empty() {
        out.push_str("# Ritual Level Modifiers:\n");
        for (level, pct) in &plan.by_level {
            out.push_str(&format!("#   Level {level}: {pct}%\n"));
        }
        out.push_str("#\n");
    }

    if let Some((tiers, class_tiers)) = config.tier_maps() {
        out.push_str("# Class Tier Definitions:\n");
        for (tier, pct) in tiers {
            out.push_str(&format!("#   {tier}: {pct}%\n"));
        }
        out.push_str("#\n");
        out.push_str("# Class Assignments:\n");
        let mut groups: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
        for (class_name, tier) in class_tiers {
            groups.entry(tier.as_str()).or_default().push(class_name.as_str());
        }
        for (tier, classes) in &groups {
            // Keys of a BTreeMap are already sorted.
            out.push_str(&format!("#   {tier}: {}\n", classes.join(", ")));
        }
        out.push_str("#\n\n");
    } else if !plan.by_power.is_empty() {
        out.push_str(&format!("# Default modifier: {}%\n", plan.default));
        out.push_str("#\n");
        out.push_str("# Custom modifiers:\n");
        for (id, pct) in &plan.by_power {
            out.push_str(&format!("#   Ritpow {id}: {pct}%\n"));
        }
        out.push_str("#\n\n");
    } else {
        out.push('\n');
    }

    let mut current_power = None;
    for ritual in &outcome.rituals {
        if current_power != Some(ritual.power) {
            let name = power_by_id(ritual.power)
                .map(|p| p.name.to_string())
                .unwrap_or_else(|| format!("Unknown ({})", ritual.power));
            out.push_str(&format!(
                "\n# --- {name} ({}%) ---\n\n",
                plan.class_percentage(ritual.power)
            ));
            current_power = Some(ritual.power);
        }
        push_block(&mut out, &ritual.scaled);
    }

    out
}

/// Plain-text id reference written next to a generated template.
pub fn render_power_reference() -> String {
    let mut out = String::new();
    out.push_str("Ritual Power ID Reference\n");
    out.push_str(&"=".repeat(50));
    out.push_str("\n\n");
    for power in RITUAL_POWERS {
        out.push_str(&format!("{}: {}\n", power.id, power.name));
    }
    out
}
