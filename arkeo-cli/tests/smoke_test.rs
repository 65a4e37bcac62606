//! Smoke tests for arkeo-cli
//!
//! These tests verify basic functionality of the CLI without requiring
//! network access or a running node.

use std::process::{Command, Output};
use tempfile::TempDir;

fn run_cli(args: &[&str]) -> (Output, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config = temp_dir.path().join("config.toml");

    let output = Command::new("cargo")
        .args(["run", "-q", "-p", "arkeo-cli", "--bin", "arkeo-query", "--"])
        .args(args)
        .arg("--config")
        .arg(&config)
        .env_remove("ARKEO_API")
        .env_remove("ARKEO_NETWORK")
        .current_dir(env!("CARGO_MANIFEST_DIR"))
        .output()
        .expect("Failed to execute command");

    if !output.status.success() {
        eprintln!("stdout: {}", String::from_utf8_lossy(&output.stdout));
        eprintln!("stderr: {}", String::from_utf8_lossy(&output.stderr));
    }
    (output, temp_dir)
}

/// Test that the CLI can show help
#[test]
fn test_cli_help() {
    let (output, _dir) = run_cli(&["--help"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("providers"), "Help should mention 'providers'");
    assert!(stdout.contains("decode"), "Help should mention 'decode'");
}

/// Test that version is shown
#[test]
fn test_cli_version() {
    let (output, _dir) = run_cli(&["--version"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("arkeo-query"));
}

/// Test that the service table is printed as JSON
#[test]
fn test_cli_services_json() {
    let (output, _dir) = run_cli(&["services", "--json"]);
    assert!(output.status.success());

    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("services --json should print JSON");
    let names: Vec<&str> = value
        .as_array()
        .expect("expected an array")
        .iter()
        .filter_map(|entry| entry["name"].as_str())
        .collect();
    assert!(names.contains(&"btc-mainnet-fullnode"));
}

/// Test encode and decode without a node
#[test]
fn test_cli_encode_decode() {
    let (output, _dir) = run_cli(&[
        "encode",
        "/arkeo.arkeo.MsgCloseContract",
        r#"{"creator": "AQID", "contract_id": "42"}"#,
        "--json",
    ]);
    assert!(output.status.success());
    let any: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(any["@type"], "/arkeo.arkeo.MsgCloseContract");
    assert_eq!(any["value"], "CgMBAgMQKg==");

    let (output, _dir) = run_cli(&[
        "decode",
        "--type",
        "/arkeo.arkeo.MsgCloseContract",
        "CgMBAgMQKg==",
        "--json",
    ]);
    assert!(output.status.success());
    let msg: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(msg["contract_id"], "42");
    assert_eq!(msg["creator"], "AQID");
}

/// Test that validation failures exit with an error
#[test]
fn test_cli_validate_rejects_invalid() {
    let (output, _dir) = run_cli(&["validate", "/arkeo.arkeo.MsgCloseContract", "{}"]);
    assert!(!output.status.success());
}

/// Test that an unreachable gateway is reported as a failure
#[test]
fn test_cli_params_unreachable() {
    let (output, _dir) = run_cli(&["params", "--api-url", "http://127.0.0.1:9", "--timeout", "2"]);
    let stderr = String::from_utf8_lossy(&output.stderr).to_lowercase();

    assert!(!output.status.success());
    assert!(stderr.contains("module parameters"));
}

/// Test that config init writes the file and show reads it back
#[test]
fn test_cli_config_init_and_show() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("arkeo").join("config.toml");
    let config = config.to_str().unwrap();

    let output = Command::new("cargo")
        .args(["run", "-q", "-p", "arkeo-cli", "--bin", "arkeo-query", "--"])
        .args(["config", "init", "--api-url", "http://node:1317", "--config", config])
        .current_dir(env!("CARGO_MANIFEST_DIR"))
        .output()
        .expect("Failed to execute command");
    assert!(output.status.success());

    let output = Command::new("cargo")
        .args(["run", "-q", "-p", "arkeo-cli", "--bin", "arkeo-query", "--"])
        .args(["config", "show", "--json", "--config", config])
        .env_remove("ARKEO_API")
        .current_dir(env!("CARGO_MANIFEST_DIR"))
        .output()
        .expect("Failed to execute command");
    assert!(output.status.success());

    let shown: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(shown["api_url"], "http://node:1317");
}
