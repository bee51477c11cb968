use std::fs;

use predicates::prelude::*;
use ritual_core::table::RITUAL_TABLE;
use tempfile::tempdir;

/// A plain percentage writes the default-named mod into the output dir.
#[test]
fn percentage_writes_default_named_mod() {
    let dir = tempdir().expect("tempdir");

    assert_cmd::cargo::cargo_bin_cmd!("generate_cost_mod")
        .arg("50")
        .arg("--output-dir")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Rituals modified"));

    let path = dir.path().join("ritual_costs_50pct.c5m");
    let body = fs::read_to_string(&path).expect("mod file");
    assert!(body.contains("selectritual \"Animate Dead Horde\"\ncost 8 13  # 13 Unburied (was 25)\n"));
    assert_eq!(body.matches("selectritual").count(), RITUAL_TABLE.len());
}

/// 150% turns a 50 gold ritual into 75.
#[test]
fn explicit_output_file_is_used() {
    let dir = tempdir().expect("tempdir");
    let out = dir.path().join("my_mod.c5m");

    assert_cmd::cargo::cargo_bin_cmd!("generate_cost_mod")
        .arg("150")
        .arg(&out)
        .assert()
        .success();

    let body = fs::read_to_string(&out).expect("mod file");
    assert!(body.contains("selectritual \"Raise Militia\"\ncost 0 75  # 75 Gold (was 50)\n"));
}

#[test]
fn full_percentage_reproduces_base_costs() {
    let dir = tempdir().expect("tempdir");
    let out = dir.path().join("identity.c5m");

    assert_cmd::cargo::cargo_bin_cmd!("generate_cost_mod").arg("100").arg(&out).assert().success();

    let body = fs::read_to_string(&out).expect("mod file");
    for entry in RITUAL_TABLE {
        let line = format!(
            "cost {} {}  # {} {} (was {})",
            entry.resource_type.code(),
            entry.base_cost,
            entry.base_cost,
            entry.resource_type.display_name(),
            entry.base_cost
        );
        assert!(body.contains(&line), "missing identity line for {}", entry.name);
    }
}

#[test]
fn repeated_runs_are_byte_identical() {
    let dir = tempdir().expect("tempdir");
    let out = dir.path().join("repeat.c5m");

    assert_cmd::cargo::cargo_bin_cmd!("generate_cost_mod").arg("33.3").arg(&out).assert().success();
    let first = fs::read(&out).expect("first run");
    assert_cmd::cargo::cargo_bin_cmd!("generate_cost_mod").arg("33.3").arg(&out).assert().success();
    let second = fs::read(&out).expect("second run");

    assert_eq!(first, second);
}

#[test]
fn non_numeric_percentage_fails_without_touching_files() {
    let dir = tempdir().expect("tempdir");
    let out = dir.path().join("bad.c5m");

    assert_cmd::cargo::cargo_bin_cmd!("generate_cost_mod")
        .arg("abc")
        .arg(&out)
        .assert()
        .failure()
        .stderr(predicate::str::contains("'abc' is not a valid percentage"));

    assert!(!out.exists());
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn invalid_percentage_leaves_existing_file_untouched() {
    let dir = tempdir().expect("tempdir");
    let out = dir.path().join("keep.c5m");
    fs::write(&out, "original").unwrap();

    assert_cmd::cargo::cargo_bin_cmd!("generate_cost_mod").arg("-5").arg(&out).assert().failure();

    assert_eq!(fs::read_to_string(&out).unwrap(), "original");
}

#[test]
fn missing_percentage_fails() {
    let dir = tempdir().expect("tempdir");

    assert_cmd::cargo::cargo_bin_cmd!("generate_cost_mod")
        .current_dir(dir.path())
        .assert()
        .failure();

    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn min_cost_floor_applies() {
    let dir = tempdir().expect("tempdir");
    let out = dir.path().join("floor.c5m");

    assert_cmd::cargo::cargo_bin_cmd!("generate_cost_mod")
        .arg("1")
        .arg(&out)
        .arg("--min-cost")
        .arg("1")
        .assert()
        .success();

    let body = fs::read_to_string(&out).expect("mod file");
    assert!(body.contains("selectritual \"Summon Imps\"\ncost 4 1  # 1 Sacrifices (was 3)\n"));
    assert!(!body.lines().any(|l| l.starts_with("cost ") && l.split_whitespace().nth(2) == Some("0")));
}

#[test]
fn absurdly_large_percentage_is_rejected() {
    let dir = tempdir().expect("tempdir");

    assert_cmd::cargo::cargo_bin_cmd!("generate_cost_mod")
        .arg("1e300")
        .arg("--output-dir")
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("'1e300' is not a valid percentage"));

    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}
