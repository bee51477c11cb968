//! Embedded ritual cost table.
//!
//! A curated list of rituals and their base costs, embedded in the binary. The
//! table is grouped by ritual power so tiered output can emit one section per
//! power.

use crate::model::{ResourceType as R, RitualCostEntry as E, RitualPower};

/// Known ritual powers, ordered by id.
pub static RITUAL_POWERS: &[RitualPower] = &[
    RitualPower { id: 1, name: "Necromancer" },
    RitualPower { id: 2, name: "Demonologist" },
    RitualPower { id: 3, name: "Witch" },
    RitualPower { id: 4, name: "High Cultist" },
    RitualPower { id: 5, name: "Warlock" },
    RitualPower { id: 6, name: "Druid" },
    RitualPower { id: 7, name: "Baron" },
    RitualPower { id: 8, name: "Dwarf Queen" },
    RitualPower { id: 9, name: "Pale One" },
    RitualPower { id: 10, name: "Enchanter" },
    RitualPower { id: 11, name: "Senator" },
    RitualPower { id: 12, name: "Troll King" },
];

/// Every ritual this generator knows how to rescale.
pub static RITUAL_TABLE: &[E] = &[
    E::new("Raise Skeletons", R::Corpses, 10, 1, 1),
    E::new("Harvest Hands", R::Hands, 8, 1, 1),
    E::new("Create Wight", R::Skulls, 15, 1, 2),
    E::new("Animate Dead Horde", R::Unburied, 25, 1, 2),
    E::new("Call Banshee", R::Unburied, 40, 1, 3),
    E::new("Summon Bone Fiend", R::Corpses, 50, 1, 3),
    E::new("Summon Imps", R::Sacrifices, 3, 2, 1),
    E::new("Summon Hellhounds", R::Sacrifices, 5, 2, 1),
    E::new("Forge Demon Armor", R::DemonParts, 10, 2, 2),
    E::new("Summon Devil", R::Blood, 12, 2, 2),
    E::new("Open Hell Gate", R::Hearts, 20, 2, 3),
    E::new("Summon Wolves", R::Herbs, 20, 3, 1),
    E::new("Brew Curse", R::Herbs, 30, 3, 1),
    E::new("Transform to Swine", R::Entrails, 10, 3, 2),
    E::new("Summon Hag", R::Fungus, 25, 3, 2),
    E::new("Call Shambler", R::Sacrifices, 4, 4, 1),
    E::new("Elder Sign", R::Gems, 35, 4, 2),
    E::new("Summon Star Spawn", R::Relics, 30, 4, 3),
    E::new("Summon Fire Elemental", R::Gems, 25, 5, 1),
    E::new("Summon Air Elemental", R::Gems, 30, 5, 2),
    E::new("Storm Call", R::Gems, 60, 5, 3),
    E::new("Summon Bears", R::Herbs, 15, 6, 1),
    E::new("Awaken Forest", R::Herbs, 35, 6, 2),
    E::new("Summon Treelord", R::Herbs, 60, 6, 3),
    E::new("Raise Militia", R::Gold, 50, 7, 1),
    E::new("Hire Mercenaries", R::Gold, 100, 7, 1),
    E::new("Knightly Order", R::Iron, 40, 7, 2),
    E::new("Craft Automaton", R::Iron, 30, 8, 1),
    E::new("Rune Smithing", R::Gems, 20, 8, 2),
    E::new("Forge Golem", R::Iron, 75, 8, 3),
    E::new("Summon Cave Crawler", R::Fungus, 20, 9, 1),
    E::new("Call Deep Ones", R::Fungus, 45, 9, 2),
    E::new("Weave Illusion", R::Silk, 15, 10, 1),
    E::new("Craft Silk Golem", R::Silk, 25, 10, 2),
    E::new("Bribe Official", R::Coins, 40, 11, 1),
    E::new("Gladiator Games", R::Prisoners, 6, 11, 1),
    E::new("Troll Feast", R::MonsterParts, 12, 12, 1),
    E::new("Summon Troll Shaman", R::MonsterParts, 25, 12, 2),
];

/// Look up a ritual power by its numeric id.
pub fn power_by_id(id: u16) -> Option<&'static RitualPower> {
    RITUAL_POWERS.iter().find(|p| p.id == id)
}

/// Look up a ritual power by name, ignoring ASCII case.
pub fn power_by_name(name: &str) -> Option<&'static RitualPower> {
    RITUAL_POWERS.iter().find(|p| p.name.eq_ignore_ascii_case(name.trim()))
}

/// Find a ritual in `table` by exact name.
pub fn find_ritual<'a>(table: &'a [E], name: &str) -> Option<&'a E> {
    table.iter().find(|e| e.name == name)
}
