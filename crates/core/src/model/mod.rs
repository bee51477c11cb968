//! Core data model: resource types, ritual powers, and ritual cost entries.
//!
//! These types describe the game's fixed vocabulary. The numeric codes are
//! owned by the game's mod loader and must not change.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A resource a ritual can cost.
///
/// The set is closed; every variant maps to exactly one game code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ResourceType {
    Gold,
    Iron,
    Herbs,
    Fungus,
    Gems,
    Hands,
    Sacrifices,
    Blood,
    DemonParts,
    Unburied,
    Silk,
    Relics,
    Prisoners,
    Coins,
    Corpses,
    MonsterParts,
    Entrails,
    Hearts,
    Skulls,
}

impl ResourceType {
    /// Every resource type, ordered by game code.
    pub const ALL: [ResourceType; 19] = [
        ResourceType::Gold,
        ResourceType::Iron,
        ResourceType::Herbs,
        ResourceType::Fungus,
        ResourceType::Sacrifices,
        ResourceType::Hands,
        ResourceType::Blood,
        ResourceType::Prisoners,
        ResourceType::Unburied,
        ResourceType::Coins,
        ResourceType::Silk,
        ResourceType::Relics,
        ResourceType::Gems,
        ResourceType::MonsterParts,
        ResourceType::DemonParts,
        ResourceType::Entrails,
        ResourceType::Corpses,
        ResourceType::Hearts,
        ResourceType::Skulls,
    ];

    /// Numeric identifier used on `cost <code> <amount>` lines.
    pub fn code(self) -> u8 {
        match self {
            ResourceType::Gold => 0,
            ResourceType::Iron => 1,
            ResourceType::Herbs => 2,
            ResourceType::Fungus => 3,
            ResourceType::Sacrifices => 4,
            ResourceType::Hands => 5,
            ResourceType::Blood => 6,
            ResourceType::Prisoners => 7,
            ResourceType::Unburied => 8,
            ResourceType::Coins => 9,
            ResourceType::Silk => 10,
            ResourceType::Relics => 11,
            ResourceType::Gems => 12,
            ResourceType::MonsterParts => 13,
            // 14 is the game's humanoid-corpse pool, which no ritual here costs.
            ResourceType::DemonParts => 15,
            ResourceType::Entrails => 16,
            ResourceType::Corpses => 17,
            ResourceType::Hearts => 18,
            ResourceType::Skulls => 19,
        }
    }

    /// Decode a game code. Unknown codes yield `None`.
    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.iter().copied().find(|r| r.code() == code)
    }

    /// Human-readable name used in trailing mod-file comments.
    pub fn display_name(self) -> &'static str {
        match self {
            ResourceType::Gold => "Gold",
            ResourceType::Iron => "Iron",
            ResourceType::Herbs => "Herbs",
            ResourceType::Fungus => "Fungus",
            ResourceType::Gems => "Gems",
            ResourceType::Hands => "Hands",
            ResourceType::Sacrifices => "Sacrifices",
            ResourceType::Blood => "Blood",
            ResourceType::DemonParts => "Demon Parts",
            ResourceType::Unburied => "Unburied",
            ResourceType::Silk => "Silk",
            ResourceType::Relics => "Relics",
            ResourceType::Prisoners => "Prisoners",
            ResourceType::Coins => "Coins",
            ResourceType::Corpses => "Corpses",
            ResourceType::MonsterParts => "Monster Parts",
            ResourceType::Entrails => "Entrails",
            ResourceType::Hearts => "Hearts",
            ResourceType::Skulls => "Skulls",
        }
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A ritual power ("ritpow"): the class or school a ritual belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RitualPower {
    pub id: u16,
    pub name: &'static str,
}

/// One ritual and the single resource cost it carries in the base game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RitualCostEntry {
    /// Ritual name exactly as the game spells it (used in `selectritual`).
    pub name: &'static str,
    pub resource_type: ResourceType,
    pub base_cost: u32,
    /// Owning ritual power id.
    pub power: u16,
    /// Ritual level, 1..=3.
    pub level: u8,
}

impl RitualCostEntry {
    pub const fn new(
        name: &'static str,
        resource_type: ResourceType,
        base_cost: u32,
        power: u16,
        level: u8,
    ) -> Self {
        Self { name, resource_type, base_cost, power, level }
    }
}
