//! End-to-end CLI integration tests
//!
//! These tests invoke the compiled binary as a subprocess to verify
//! that the CLI behaves correctly from a user's perspective.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;

/// Returns a Command configured to run our binary.
///
/// Note: `cargo_bin` is marked deprecated for edge cases involving custom
/// cargo build directories, but works correctly for standard project layouts.
#[allow(deprecated)]
fn cmd() -> Command {
    Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap()
}

/// Write a document to a temp file and return the handle.
fn document(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

/// A 100+-word body where the keyphrase "plant pots" dominates in its
/// written form.
fn aligned_body() -> String {
    format!(
        "Plant pots are the quickest way to refresh a room. {}",
        "Choose plant pots that match the light in your home. ".repeat(15)
    )
}

// =============================================================================
// Help & Version
// =============================================================================

#[test]
fn help_flag_shows_usage() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("Options:"));
}

#[test]
fn version_only_prints_bare_version() {
    cmd()
        .arg("--version-only")
        .assert()
        .success()
        .stdout(predicate::str::diff(format!(
            "{}\n",
            env!("CARGO_PKG_VERSION")
        )));
}

// =============================================================================
// Score Command
// =============================================================================

#[test]
fn score_reports_results_and_overall() {
    let file = document(&aligned_body());
    cmd()
        .arg("score")
        .arg(file.path())
        .args(["--keyword", "plant pots"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ranking intention"))
        .stdout(predicate::str::contains("Text length"))
        .stdout(predicate::str::contains("Overall:"));
}

#[test]
fn score_json_outputs_valid_aggregation() {
    let file = document(&aligned_body());
    let output = cmd()
        .arg("score")
        .arg(file.path())
        .args(["--keyword", "plant pots"])
        .arg("--json")
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value =
        serde_json::from_str(&stdout).expect("score --json should output valid JSON");

    assert!(json["results"].is_array());
    assert!(json["overall_score"].is_number());
    // The aligned body reflects its keyphrase, so ranking intention is good.
    let scores: Vec<f64> = json["results"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|r| r["score"].as_f64())
        .collect();
    assert!(scores.contains(&9.0));
}

#[test]
fn score_without_keyword_rates_overall_na() {
    let file = document(&aligned_body());
    let output = cmd()
        .arg("score")
        .arg(file.path())
        .arg("--json")
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["overall_rating"], "na");
}

#[test]
fn score_empty_document_fails() {
    let file = document("   \n");
    cmd()
        .arg("score")
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("no scorable text"));
}

#[test]
fn score_missing_file_fails() {
    cmd()
        .arg("score")
        .arg("does-not-exist.md")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}

// =============================================================================
// Words Command
// =============================================================================

#[test]
fn words_ranks_prominent_words() {
    let file = document(&aligned_body());
    cmd()
        .arg("words")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("plant"));
}

#[test]
fn words_json_outputs_result_fields() {
    let file = document(&aligned_body());
    let output = cmd()
        .arg("words")
        .arg(file.path())
        .args(["--title", "Plant pots"])
        .arg("--json")
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert!(json["prominent_words"].is_array());
    assert_eq!(json["has_title"], true);
    assert_eq!(json["has_meta_description"], false);
}

#[test]
fn words_short_document_returns_no_suggestions() {
    let file = document("Too short for suggestions.");
    let output = cmd()
        .arg("words")
        .arg(file.path())
        .arg("--json")
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["prominent_words"].as_array().unwrap().len(), 0);
}

// =============================================================================
// Info Command
// =============================================================================

#[test]
fn info_shows_package_name_and_version() {
    cmd()
        .arg("info")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_NAME")))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn info_json_outputs_valid_json() {
    let output = cmd().arg("info").arg("--json").assert().success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value =
        serde_json::from_str(&stdout).expect("info --json should output valid JSON");

    assert_eq!(json["name"], env!("CARGO_PKG_NAME"));
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
}
