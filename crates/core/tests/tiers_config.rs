use std::fs;

use ritual_core::scale::Percentage;
use ritual_core::table::RITUAL_TABLE;
use ritual_core::tiers::{
    load_base_mod, render_power_reference, render_tiered_mod, ConfigError, ConfigFormat,
    TierConfig, TierPlan,
};
use tempfile::tempdir;

const TIERED_JSON: &str = r#"{
  "description": "Weaken the strong",
  "tiers": { "S": 150, "A": 120, "C": 80 },
  "class_tiers": {
    "Necromancer": "S",
    "Demonologist": "S",
    "Witch": "C",
    "Space Pirate": "A"
  }
}"#;

const LEGACY_YAML: &str = "
default: 50
ritpow_modifiers:
  \"7\": 100
  \"3\": 200
level_modifiers:
  \"3\": 50
min_cost: 1
";

fn pct(value: f64) -> Percentage {
    Percentage::new(value).expect("valid percentage")
}

#[test]
fn tier_shape_assigns_percentages_by_class_name() {
    let config = TierConfig::parse(TIERED_JSON, ConfigFormat::Json).unwrap();
    assert!(config.is_tier_based());

    let plan = TierPlan::from_config(&config);
    assert_eq!(plan.default, Percentage::FULL);
    assert_eq!(plan.class_percentage(1), pct(150.0));
    assert_eq!(plan.class_percentage(3), pct(80.0));
    // Unlisted classes and unknown names fall back to 100%.
    assert_eq!(plan.class_percentage(7), Percentage::FULL);
    assert_eq!(plan.by_power.len(), 3);
}

#[test]
fn tier_shape_skips_rituals_left_at_full_cost() {
    let config = TierConfig::parse(TIERED_JSON, ConfigFormat::Json).unwrap();
    let plan = TierPlan::from_config(&config);
    let outcome = plan.resolve(RITUAL_TABLE);

    let touched = RITUAL_TABLE.iter().filter(|e| matches!(e.power, 1..=3)).count();
    assert_eq!(outcome.rituals.len(), touched);
    assert_eq!(outcome.skipped, RITUAL_TABLE.len() - touched);

    let fiend = outcome.rituals.iter().find(|r| r.scaled.name == "Summon Bone Fiend").unwrap();
    assert_eq!(fiend.scaled.new_cost, 75);
}

#[test]
fn legacy_shape_combines_class_and_level_modifiers() {
    let config = TierConfig::parse(LEGACY_YAML, ConfigFormat::Yaml).unwrap();
    assert!(!config.is_tier_based());

    let plan = TierPlan::from_config(&config);
    assert_eq!(plan.default, pct(50.0));
    assert_eq!(plan.policy.min_cost, 1);

    let by_name = |name: &str| RITUAL_TABLE.iter().find(|e| e.name == name).unwrap();
    // Witch level 1: 200%.
    assert_eq!(plan.percentage_for(by_name("Brew Curse")), pct(200.0));
    // Necromancer level 3: default 50% times level 50%.
    assert_eq!(plan.percentage_for(by_name("Summon Bone Fiend")), pct(25.0));
    // Baron level 1 stays at 100% and is skipped.
    assert!(plan.percentage_for(by_name("Raise Militia")).is_identity());

    let outcome = plan.resolve(RITUAL_TABLE);
    assert!(outcome.rituals.iter().all(|r| r.scaled.name != "Raise Militia"));
    let imps = outcome.rituals.iter().find(|r| r.scaled.name == "Summon Imps").unwrap();
    // 3 * 50% = 1.5 rounds to 2.
    assert_eq!(imps.scaled.new_cost, 2);
}

#[test]
fn tiered_render_emits_sections_when_power_changes() {
    let config = TierConfig::parse(TIERED_JSON, ConfigFormat::Json).unwrap();
    let plan = TierPlan::from_config(&config);
    let outcome = plan.resolve(RITUAL_TABLE);
    let text = render_tiered_mod(&config, &plan, &outcome, None);

    assert!(text.starts_with("# Tiered Ritual Cost Modifier\n"));
    assert!(text.contains("# Class Tier Definitions:\n#   A: 120%\n#   C: 80%\n#   S: 150%\n"));
    assert!(text.contains("#   S: Demonologist, Necromancer\n"));
    assert!(text.contains("#   C: Witch\n"));
    assert!(text.contains("\n# --- Necromancer (150%) ---\n\n"));
    assert!(text.contains("\n# --- Witch (80%) ---\n\n"));
    assert!(!text.contains("# --- Baron"));
    assert_eq!(text.matches("# --- ").count(), 3);
    assert!(text.contains("selectritual \"Summon Bone Fiend\"\ncost 17 75  # 75 Corpses (was 50)\n"));
}

#[test]
fn legacy_render_lists_custom_and_level_modifiers() {
    let config = TierConfig::parse(LEGACY_YAML, ConfigFormat::Yaml).unwrap();
    let plan = TierPlan::from_config(&config);
    let outcome = plan.resolve(RITUAL_TABLE);
    let text = render_tiered_mod(&config, &plan, &outcome, None);

    assert!(text.contains("# Ritual Level Modifiers:\n#   Level 3: 50%\n"));
    assert!(text.contains("# Default modifier: 50%\n"));
    assert!(text.contains("#   Ritpow 3: 200%\n#   Ritpow 7: 100%\n"));
}

#[test]
fn load_picks_parser_from_extension_and_reports_paths() {
    let temp = tempdir().unwrap();
    let yaml_path = temp.path().join("balance.yml");
    fs::write(&yaml_path, LEGACY_YAML).unwrap();
    let config = TierConfig::load(&yaml_path).unwrap();
    assert_eq!(config.default, pct(50.0));

    let bad_json = temp.path().join("broken.json");
    fs::write(&bad_json, "{ not json").unwrap();
    let err = TierConfig::load(&bad_json).unwrap_err();
    assert!(matches!(err, ConfigError::Json { .. }));
    assert!(err.to_string().contains("broken.json"), "unexpected error: {err}");

    let toml = temp.path().join("balance.toml");
    fs::write(&toml, "").unwrap();
    assert!(matches!(TierConfig::load(&toml), Err(ConfigError::UnsupportedFormat { .. })));

    let missing = temp.path().join("missing.json");
    assert!(matches!(TierConfig::load(&missing), Err(ConfigError::Io { .. })));
}

#[test]
fn negative_percentages_in_config_are_rejected() {
    let err = TierConfig::parse(r#"{ "default": -10 }"#, ConfigFormat::Json).unwrap_err();
    assert!(matches!(err, ConfigError::Json { .. }));
    assert!(err.to_string().contains("not a valid percentage"), "unexpected error: {err}");
}

#[test]
fn base_mod_is_prepended_and_missing_base_mod_is_skipped() {
    let temp = tempdir().unwrap();
    fs::write(temp.path().join("base.c5m"), "selectritual \"Other\"\ncost 0 1\n").unwrap();

    let mut config = TierConfig::parse(TIERED_JSON, ConfigFormat::Json).unwrap();
    config.base_mod = Some("base.c5m".into());
    let base = load_base_mod(&config, temp.path()).unwrap().expect("base mod");
    assert_eq!(base.name, "base.c5m");

    let plan = TierPlan::from_config(&config);
    let outcome = plan.resolve(RITUAL_TABLE);
    let text = render_tiered_mod(&config, &plan, &outcome, Some(&base));
    let base_at = text.find("# BASE MOD: base.c5m").unwrap();
    let ours_at = text.find("# MODIFICATIONS START HERE").unwrap();
    let other_at = text.find("selectritual \"Other\"").unwrap();
    assert!(base_at < other_at && other_at < ours_at);

    config.base_mod = Some("absent.c5m".into());
    assert!(load_base_mod(&config, temp.path()).unwrap().is_none());
}

#[test]
fn template_round_trips_through_json() {
    let template = TierConfig::template();
    let json = serde_json::to_string_pretty(&template).unwrap();
    let parsed = TierConfig::parse(&json, ConfigFormat::Json).unwrap();
    let plan = TierPlan::from_config(&parsed);
    let outcome = plan.resolve(RITUAL_TABLE);
    assert!(outcome.rituals.is_empty());
    assert_eq!(outcome.skipped, RITUAL_TABLE.len());
}

#[test]
fn power_reference_lists_ids_in_order() {
    let reference = render_power_reference();
    assert!(reference.starts_with("Ritual Power ID Reference\n"));
    assert!(reference.contains("\n1: Necromancer\n"));
    assert!(reference.ends_with("12: Troll King\n"));
}

#[test]
fn empty_tier_maps_still_select_the_tier_shape() {
    let config = TierConfig::parse(
        r#"{ "tiers": {}, "class_tiers": {}, "default": 50 }"#,
        ConfigFormat::Json,
    )
    .unwrap();
    assert!(config.is_tier_based());

    let plan = TierPlan::from_config(&config);
    assert_eq!(plan.default, Percentage::FULL);
    let outcome = plan.resolve(RITUAL_TABLE);
    assert!(outcome.rituals.is_empty());
    assert_eq!(outcome.skipped, RITUAL_TABLE.len());

    let text = render_tiered_mod(&config, &plan, &outcome, None);
    assert!(text.contains("# Class Tier Definitions:\n"));
    assert!(!text.contains("# Default modifier"));
}

#[test]
fn only_one_tier_map_keeps_the_legacy_shape() {
    let config =
        TierConfig::parse(r#"{ "tiers": { "S": 150 }, "default": 50 }"#, ConfigFormat::Json).unwrap();
    assert!(!config.is_tier_based());
    assert_eq!(TierPlan::from_config(&config).default, pct(50.0));
}

#[test]
fn invalid_percentages_surface_as_parse_errors() {
    let err = TierConfig::parse("default: -10\n", ConfigFormat::Yaml).unwrap_err();
    assert!(matches!(err, ConfigError::Yaml { .. }), "unexpected error: {err}");
    assert!(err.to_string().contains("not a valid percentage"), "unexpected error: {err}");

    let err = TierConfig::parse(r#"{ "tiers": { "S": 1e300 }, "class_tiers": {} }"#, ConfigFormat::Json)
        .unwrap_err();
    assert!(matches!(err, ConfigError::Json { .. }), "unexpected error: {err}");
}
