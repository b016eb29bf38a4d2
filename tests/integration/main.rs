//! Integration tests for the codesift CLI
//!
//! These tests run the real binary against stdin and temporary files.

use assert_cmd::cargo;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper function to create a codesift command
fn codesift() -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(cargo::cargo_bin!("codesift"));
    cmd.env_remove("BOT_TOKEN")
        .env_remove("CODESIFT_BIND")
        .env_remove("CODESIFT_PORT")
        .env_remove("RUST_LOG");
    cmd
}

const CODE_A: &str = "abcd1234efgh5678IJ";
const CODE_B: &str = "ZZZZ0000YYYY1111XX";

// =============================================================================
// BASIC COMMANDS
// =============================================================================

#[test]
fn test_version() {
    codesift()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("codesift v"));
}

#[test]
fn test_version_json() {
    codesift()
        .args(["--json", "version"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"version\""));
}

#[test]
fn test_help_lists_commands() {
    codesift()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("check"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn test_no_command_prints_hint() {
    codesift()
        .assert()
        .success()
        .stdout(predicate::str::contains("codesift --help"));
}

// =============================================================================
// CHECK
// =============================================================================

#[test]
fn test_check_stdin() {
    let input = format!("1. {CODE_A}\n2. short\n3. {CODE_A}\n4. {CODE_B}\n");

    codesift()
        .arg("check")
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("❌ Invalid codes:\n2. short\n"))
        .stdout(predicate::str::contains(format!("1. {CODE_A} 🔴\n3. {CODE_A} 🔴\n")))
        .stdout(predicate::str::contains("✅ Total unique valid codes: 2\n"))
        .stdout(predicate::str::contains(format!("```text\n{CODE_A}\n{CODE_B}\n```")));
}

#[test]
fn test_check_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("codes.txt");
    fs::write(&path, format!("{CODE_B}\r\n{CODE_A}\r\n")).unwrap();

    codesift()
        .arg("check")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("✅ No invalid code"))
        .stdout(predicate::str::contains("✅ No duplicate code"))
        .stdout(predicate::str::contains(format!("```text\n{CODE_B}\n{CODE_A}\n```")));
}

#[test]
fn test_check_dash_reads_stdin() {
    codesift()
        .args(["check", "-"])
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("✅ Total unique valid codes: 0"));
}

#[test]
fn test_check_json() {
    let output = codesift()
        .args(["--json", "check"])
        .write_stdin(format!("{CODE_A}\nnope\n{CODE_A}"))
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["valid_count"], 2);
    assert_eq!(json["invalid"][0]["index"], 2);
    assert_eq!(json["duplicates"][0]["marker"], "red");
    assert_eq!(json["unique_codes"], serde_json::json!([CODE_A]));
}

#[test]
fn test_check_stats_go_to_stderr() {
    codesift()
        .args(["check", "--stats"])
        .write_stdin(format!("{CODE_A}\n{CODE_A}"))
        .assert()
        .success()
        .stderr(predicate::str::contains("1 duplicate group(s)"))
        .stdout(predicate::str::contains("duplicate group(s)").not());
}

#[test]
fn test_check_missing_file() {
    let temp = TempDir::new().unwrap();

    codesift()
        .arg("check")
        .arg(temp.path().join("absent.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read"));
}

#[test]
fn test_check_binary_input_prints_fallback() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("codes.bin");
    fs::write(&path, [0x31, 0x2e, 0x20, 0xff, 0xfe, 0x0a]).unwrap();

    codesift()
        .arg("check")
        .arg(&path)
        .assert()
        .failure()
        .stdout(predicate::str::contains("⚠️ Bot is currently unstable."))
        .stderr(predicate::str::contains("not valid UTF-8"));
}

// =============================================================================
// CONFIG
// =============================================================================

#[test]
fn test_config_shows_defaults_for_missing_file() {
    let temp = TempDir::new().unwrap();

    codesift()
        .arg("--config")
        .arg(temp.path().join("config.toml"))
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("port = 8080"))
        .stdout(predicate::str::contains("token").not());
}

#[test]
fn test_config_masks_token_and_applies_env() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, "[bot]\ntoken = \"123:secret\"\n").unwrap();

    let output = codesift()
        .arg("--config")
        .arg(&path)
        .args(["--json", "config"])
        .env("CODESIFT_PORT", "9090")
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["bot"]["token"], "***");
    assert_eq!(json["server"]["port"], 9090);
}

#[test]
fn test_config_rejects_bad_port() {
    let temp = TempDir::new().unwrap();

    codesift()
        .arg("--config")
        .arg(temp.path().join("config.toml"))
        .arg("config")
        .env("CODESIFT_PORT", "eighty")
        .assert()
        .failure()
        .stderr(predicate::str::contains("CODESIFT_PORT"));
}

#[test]
fn test_bot_requires_token() {
    let temp = TempDir::new().unwrap();

    codesift()
        .arg("--config")
        .arg(temp.path().join("config.toml"))
        .arg("bot")
        .assert()
        .failure()
        .stderr(predicate::str::contains("BOT_TOKEN is missing"));
}
