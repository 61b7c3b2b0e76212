//! Integration tests for the hexboard binary
//!
//! Runs the compiled CLI end to end: profile listing, rendering, JSON output
//! and error reporting

use std::process::{Command, Output};

use hexboard_core::{Distribution, Profile};
use serde_json::Value;

fn hexboard(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_hexboard"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run hexboard")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_profiles_listing() {
    let output = hexboard(&["profiles"]);
    assert!(output.status.success());
    let text = stdout(&output);
    for profile in Profile::ALL {
        assert!(text.contains(profile.name()), "missing {}", profile.name());
    }
}

#[test]
fn test_generate_both_views() {
    let output = hexboard(&["generate", "--seed", "7"]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("VISUAL LAYOUT"));
    assert!(text.contains("LIST VIEW"));
    assert!(text.contains("Board Statistics"));
    assert!(text.contains("Score"));
}

#[test]
fn test_generate_is_reproducible() {
    let a = stdout(&hexboard(&["generate", "--seed", "99", "--view", "list"]));
    let b = stdout(&hexboard(&["generate", "--seed", "99", "--view", "list"]));
    assert_eq!(a, b);
    assert!(!a.contains("VISUAL LAYOUT"));
}

#[test]
fn test_generate_json_batch() {
    let output = hexboard(&["generate", "--seed", "1", "--json", "-n", "3", "--profile", "custom"]);
    assert!(output.status.success());
    let json: Value = serde_json::from_str(&stdout(&output)).unwrap();
    let boards = json.as_array().unwrap();
    assert_eq!(boards.len(), 3);
    for entry in boards {
        assert_eq!(entry["status"], "validated");
        assert_eq!(entry["board"]["hexes"].as_array().unwrap().len(), 19);
    }
}

#[test]
fn test_unknown_profile_fails() {
    let output = hexboard(&["generate", "--profile", "seafarers"]);
    assert!(!output.status.success());
    let err = String::from_utf8_lossy(&output.stderr);
    assert!(err.contains("Unknown profile"), "stderr: {}", err);
}

#[test]
fn test_distribution_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dist.json");
    Profile::Base.distribution().save(&path).unwrap();
    assert!(Distribution::load(&path).is_ok());

    let output = hexboard(&["generate", "--seed", "3", "--json", "--distribution", path.to_str().unwrap()]);
    assert!(output.status.success());
    let json: Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(json[0]["board"]["layout"], "Standard");
}

#[test]
fn test_strict_mode_reports_exhausted_search() {
    // Zero attempts never reach a valid board
    let output = hexboard(&["generate", "--attempts", "0", "--strict"]);
    assert!(!output.status.success());
    let err = String::from_utf8_lossy(&output.stderr);
    assert!(err.contains("hard constraints"), "stderr: {}", err);
}

#[test]
fn test_negative_weight_rejected() {
    let output = hexboard(&["generate", "--seed", "1", "--cluster-weight=-2"]);
    assert!(!output.status.success());
    let err = String::from_utf8_lossy(&output.stderr);
    assert!(err.contains("non-negative"), "stderr: {}", err);
}
