use anyhow::{Context, Result};
use ritual_core::model::RitualPower;
use ritual_core::table::{power_by_id, RITUAL_POWERS, RITUAL_TABLE};
use serde::Serialize;

/// Flattened ritual row for listings.
#[derive(Debug, Serialize, Clone)]
pub struct RitualRow {
    pub name: String,
    pub power: String,
    pub level: u8,
    pub resource: String,
    pub resource_code: u8,
    pub base_cost: u32,
}

pub fn ritual_rows() -> Vec<RitualRow> {
    RITUAL_TABLE
        .iter()
        .map(|entry| RitualRow {
            name: entry.name.to_string(),
            power: power_by_id(entry.power)
                .map(|p| p.name.to_string())
                .unwrap_or_else(|| format!("Unknown ({})", entry.power)),
            level: entry.level,
            resource: entry.resource_type.display_name().to_string(),
            resource_code: entry.resource_type.code(),
            base_cost: entry.base_cost,
        })
        .collect()
}

/// Print the ritual power id reference.
pub fn list_powers_command(json: bool) -> Result<()> {
    if json {
        let powers: Vec<&RitualPower> = RITUAL_POWERS.iter().collect();
        let serialized = serde_json::to_string_pretty(&powers)
            .context("Failed to serialize ritual powers to JSON")?;
        println!("{}", serialized);
        return Ok(());
    }

    println!("Ritual Power Types ({}):", RITUAL_POWERS.len());
    for power in RITUAL_POWERS {
        println!("  {}: {}", power.id, power.name);
    }
    Ok(())
}

/// Print the embedded ritual table.
pub fn list_rituals_command(json: bool) -> Result<()> {
    let rows = ritual_rows();
    if json {
        let serialized =
            serde_json::to_string_pretty(&rows).context("Failed to serialize rituals to JSON")?;
        println!("{}", serialized);
        return Ok(());
    }

    println!("Rituals ({}):", rows.len());
    for row in rows {
        println!(
            "  - {} [{} L{}] cost {} {} (code {})",
            row.name, row.power, row.level, row.base_cost, row.resource, row.resource_code
        );
    }
    Ok(())
}
