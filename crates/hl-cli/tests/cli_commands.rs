//! End-to-end tests for the `hl` binary.

#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::TempDir;

/// A temp campaign directory and its settings path.
fn campaign() -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("hidden-london.json");
    (dir, config)
}

fn hl(config: &Path) -> Command {
    let mut cmd = Command::cargo_bin("hl").unwrap();
    cmd.env("NO_COLOR", "1").env_remove("HL_LOG");
    cmd.arg("--config").arg(config);
    cmd
}

/// Run a command with `--json` and parse the posted message.
fn posted(config: &Path, args: &[&str]) -> Value {
    let output = hl(config).args(args).arg("--json").output().unwrap();
    assert!(
        output.status.success(),
        "{}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).unwrap()
}

// ---------------------------------------------------------------------------
// threat
// ---------------------------------------------------------------------------

#[test]
fn threat_assigns_highest_dice() {
    let (_dir, config) = campaign();
    let message = posted(
        &config,
        &["threat", "--dice", "3", "--threats", "1", "--faces", "6,4,1,1"],
    );
    assert_eq!(message["body"]["kind"], "threat");
    let result = &message["body"]["result"];
    assert_eq!(result["allDice"], serde_json::json!([6, 4, 1, 1]));
    assert_eq!(result["assignedDice"][0]["outcome"], "success");
    assert_eq!(result["assignedDice"][1]["outcome"], "peril");
    assert_eq!(result["assignedDice"][1]["threatIndex"], 1);
    assert_eq!(result["unusedDice"], serde_json::json!([1, 1]));
    assert_eq!(result["isCritical"], false);
    assert_eq!(result["markXP"], false);
}

#[test]
fn threat_zero_dice_keeps_worse() {
    let (_dir, config) = campaign();
    let message = posted(&config, &["threat", "--dice", "0", "--faces", "5,2"]);
    let result = &message["body"]["result"];
    assert_eq!(result["zeroMode"], true);
    assert_eq!(result["assignedDice"][0]["value"], 2);
    assert_eq!(result["assignedDice"][0]["outcome"], "threat");
}

#[test]
fn threat_two_sixes_is_critical() {
    let (_dir, config) = campaign();
    let message = posted(
        &config,
        &["threat", "--dice", "3", "--position", "desperate", "--faces", "6,6,2"],
    );
    let result = &message["body"]["result"];
    assert_eq!(result["isCritical"], true);
    assert_eq!(result["assignedDice"][0]["outcome"], "critical");
    assert_eq!(result["markXP"], true);
}

#[test]
fn threat_card_renders() {
    let (_dir, config) = campaign();
    hl(&config)
        .args(["threat", "--dice", "2", "--faces", "5,3"])
        .args(["--modifier", "home_turf", "--note", "picking the lock"])
        .args(["--speaker", "Ada"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Threat Roll"))
        .stdout(predicate::str::contains("PERIL"))
        .stdout(predicate::str::contains("Home Turf (reduce threat)"))
        .stdout(predicate::str::contains("picking the lock"))
        .stdout(predicate::str::contains("Ada"));
}

#[test]
fn threat_unknown_modifier_fails() {
    let (_dir, config) = campaign();
    hl(&config)
        .args(["threat", "--faces", "4", "--modifier", "moonlight"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("moonlight"));
}

#[test]
fn threat_negative_pool_fails() {
    let (_dir, config) = campaign();
    hl(&config)
        .args(["threat", "--dice", "-1", "--faces", "4,4"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn threat_too_few_scripted_faces_fails() {
    let (_dir, config) = campaign();
    hl(&config)
        .args(["threat", "--dice", "3", "--faces", "4"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn threat_pool_and_threats_are_capped() {
    let (_dir, config) = campaign();
    hl(&config)
        .args(["threat", "--dice", "2000000000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("2000000000"));
    hl(&config)
        .args(["threat", "--dice", "1", "--threats", "6"])
        .assert()
        .failure();
    let message = posted(
        &config,
        &["threat", "--dice", "10", "--threats", "5", "--seed", "3"],
    );
    assert_eq!(message["body"]["result"]["allDice"].as_array().unwrap().len(), 15);
}

#[test]
fn threat_seed_is_reproducible() {
    let (_dir, config) = campaign();
    let a = posted(&config, &["threat", "--dice", "4", "--seed", "42"]);
    let b = posted(&config, &["threat", "--dice", "4", "--seed", "42"]);
    assert_eq!(a["body"]["result"]["allDice"], b["body"]["result"]["allDice"]);
}

#[test]
fn threat_refused_when_disabled() {
    let (_dir, config) = campaign();
    hl(&config)
        .args(["config", "--enable-threat-rolls", "false"])
        .assert()
        .success();
    hl(&config)
        .args(["threat", "--faces", "6"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("disabled"));
}

// ---------------------------------------------------------------------------
// push
// ---------------------------------------------------------------------------

#[test]
fn push_stress_from_highest_die() {
    let (_dir, config) = campaign();
    let message = posted(
        &config,
        &["push", "--attribute", "prowess", "--dice", "2", "--faces", "5,3"],
    );
    assert_eq!(message["body"]["kind"], "push");
    assert_eq!(message["body"]["result"]["stressCost"], 2);
}

#[test]
fn push_critical_costs_nothing() {
    let (_dir, config) = campaign();
    let message = posted(
        &config,
        &["push", "--attribute", "resolve", "--dice", "3", "--faces", "6,6,1"],
    );
    assert_eq!(message["body"]["result"]["isCritical"], true);
    assert_eq!(message["body"]["result"]["stressCost"], 0);
}

#[test]
fn push_reads_pool_from_character_sheet() {
    let (dir, config) = campaign();
    let sheet = dir.path().join("kit.json");
    fs::write(
        &sheet,
        r#"{
    "name": "Kit Marlowe",
    "attributes": {
        "insight": { "skills": { "hunt": 1, "study": 2 } }
    }
}
"#,
    )
    .unwrap();
    let message = posted(
        &config,
        &[
            "push",
            "--attribute",
            "insight",
            "--character",
            sheet.to_str().unwrap(),
            "--faces",
            "6,2,1",
        ],
    );
    assert_eq!(message["speaker"], "Kit Marlowe");
    assert_eq!(message["body"]["result"]["allDice"], serde_json::json!([6, 2, 1]));
    assert_eq!(message["body"]["result"]["stressCost"], 1);
}

#[test]
fn push_pool_is_capped() {
    let (dir, config) = campaign();
    hl(&config)
        .args(["push", "--attribute", "insight", "--dice", "11"])
        .assert()
        .failure();

    let sheet = dir.path().join("giant.json");
    fs::write(
        &sheet,
        r#"{"name": "Giant", "attributes": {"prowess": {"skills": {"a": 4000000000, "b": 4000000000}}}}"#,
    )
    .unwrap();
    hl(&config)
        .args(["push", "--attribute", "prowess", "--character"])
        .arg(&sheet)
        .assert()
        .failure()
        .stderr(predicate::str::contains("too large"));

    fs::write(
        &sheet,
        r#"{"name": "Giant", "attributes": {"prowess": {"skills": {"a": 7, "b": 7}}}}"#,
    )
    .unwrap();
    hl(&config)
        .args(["push", "--attribute", "prowess", "--character"])
        .arg(&sheet)
        .assert()
        .failure()
        .stderr(predicate::str::contains("exceeds the maximum of 10"));
}

#[test]
fn push_refused_on_successful_risk() {
    let (_dir, config) = campaign();
    let threat = posted(&config, &["threat", "--dice", "1", "--faces", "6"]);
    let id = threat["id"].as_str().unwrap().to_string();
    hl(&config)
        .args(["push", "--attribute", "insight", "--dice", "1", "--faces", "4"])
        .args(["--message", &id, "--risk", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("nothing to push"));
}

#[test]
fn push_without_pool_fails() {
    let (_dir, config) = campaign();
    hl(&config)
        .args(["push", "--attribute", "insight"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--dice or --character"));
}

#[test]
fn push_each_risk_only_once() {
    let (_dir, config) = campaign();
    let threat = posted(
        &config,
        &["threat", "--dice", "2", "--threats", "1", "--faces", "3,2,1"],
    );
    let id = threat["id"].as_str().unwrap().to_string();

    hl(&config)
        .args(["push", "--attribute", "prowess", "--dice", "1", "--faces", "4"])
        .args(["--message", &id, "--risk", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Resisted risk #0"));

    hl(&config)
        .args(["push", "--attribute", "prowess", "--dice", "1", "--faces", "4"])
        .args(["--message", &id, "--risk", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already pushed"));

    hl(&config)
        .args(["push", "--attribute", "prowess", "--dice", "1", "--faces", "4"])
        .args(["--message", &id[..8], "--risk", "1"])
        .assert()
        .success();
}

#[test]
fn push_unknown_risk_fails() {
    let (_dir, config) = campaign();
    let threat = posted(&config, &["threat", "--dice", "1", "--faces", "3"]);
    let id = threat["id"].as_str().unwrap().to_string();
    hl(&config)
        .args(["push", "--attribute", "insight", "--dice", "1", "--faces", "4"])
        .args(["--message", &id, "--risk", "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no risk #3"));
}

// ---------------------------------------------------------------------------
// reference tables
// ---------------------------------------------------------------------------

#[test]
fn modifiers_lists_catalog() {
    let (_dir, config) = campaign();
    hl(&config)
        .arg("modifiers")
        .assert()
        .success()
        .stdout(predicate::str::contains("spirit_pact"))
        .stdout(predicate::str::contains("Target Prepared"))
        .stdout(predicate::str::contains("reduce effect"));
}

#[test]
fn hints_lists_attributes_and_stress() {
    let (_dir, config) = campaign();
    hl(&config)
        .arg("hints")
        .assert()
        .success()
        .stdout(predicate::str::contains("physical harm"))
        .stdout(predicate::str::contains("Resolve"))
        .stdout(predicate::str::contains("Stress Cost"))
        .stdout(predicate::str::contains("Result"));
}

#[test]
fn hints_single_consequence() {
    let (_dir, config) = campaign();
    hl(&config)
        .args(["hints", "fear"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Resolve resists fear"));
}

// ---------------------------------------------------------------------------
// log and config
// ---------------------------------------------------------------------------

#[test]
fn log_empty() {
    let (_dir, config) = campaign();
    hl(&config)
        .arg("log")
        .assert()
        .success()
        .stdout(predicate::str::contains("No messages yet"));
}

#[test]
fn log_shows_recent_messages() {
    let (_dir, config) = campaign();
    posted(&config, &["threat", "--faces", "6", "--speaker", "Ada"]);
    posted(
        &config,
        &["push", "--attribute", "insight", "--dice", "1", "--faces", "2", "--speaker", "Kit"],
    );
    hl(&config)
        .args(["log", "--limit", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("showing 1 of 2"))
        .stdout(predicate::str::contains("Kit"))
        .stdout(predicate::str::contains("Ada").not());
}

#[test]
fn config_saves_settings() {
    let (_dir, config) = campaign();
    hl(&config)
        .args(["config", "--seed", "7", "--enable-threat-rolls", "false"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved"));
    let saved: Value = serde_json::from_str(&fs::read_to_string(&config).unwrap()).unwrap();
    assert_eq!(saved["seed"], 7);
    assert_eq!(saved["enableThreatRolls"], false);

    hl(&config)
        .args(["config", "--clear-seed"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(random)"));
}

#[test]
fn config_show_without_changes_does_not_write() {
    let (_dir, config) = campaign();
    hl(&config)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("enableThreatRolls"));
    assert!(!config.exists());
}
