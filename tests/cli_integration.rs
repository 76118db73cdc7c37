//! Integration tests for the secretview CLI.
//!
//! These tests exercise the binary end-to-end using `assert_cmd`,
//! feeding it the JSON fixtures under `tests/fixtures/`.

use assert_cmd::Command;
use assert_fs::prelude::*;
use assert_fs::TempDir;
use predicates::prelude::*;
use serde_json::Value;

/// Helper: get a Command pointing at the secretview binary.
fn secretview() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("secretview").expect("binary should exist")
}

fn fixture_path(name: &str) -> String {
    format!("{}/tests/fixtures/{name}", env!("CARGO_MANIFEST_DIR"))
}

fn canonical() -> Value {
    serde_json::from_str(include_str!("fixtures/secret_detail.json")).unwrap()
}

fn stdout_json(cmd: &mut Command) -> Value {
    let output = cmd.output().expect("run secretview");
    assert!(output.status.success(), "{output:?}");
    serde_json::from_slice(&output.stdout).expect("stdout is JSON")
}

#[test]
fn help_flag_shows_usage() {
    secretview()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Project stored secrets into canonical API responses",
        ))
        .stdout(predicate::str::contains("detail"))
        .stdout(predicate::str::contains("show"))
        .stdout(predicate::str::contains("batch"))
        .stdout(predicate::str::contains("validate"));
}

#[test]
fn version_flag_shows_version() {
    secretview()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("secretview"));
}

#[test]
fn no_args_shows_help() {
    secretview()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

// ---------------------------------------------------------------------------
// detail
// ---------------------------------------------------------------------------

#[test]
fn detail_from_secret_matches_canonical() {
    let out = stdout_json(secretview().args(["detail", fixture_path("secret.json").as_str()]));
    assert_eq!(out, canonical());
}

#[test]
fn detail_from_pair_with_content_matches_canonical() {
    let out = stdout_json(secretview().args([
        "detail",
        fixture_path("series_and_content.json").as_str(),
        "--from",
        "series-and-content",
        "--content",
        "YXNkZGFz",
    ]));
    assert_eq!(out, canonical());
}

#[test]
fn detail_from_sanitized_has_no_content() {
    let out = stdout_json(secretview().args([
        "detail",
        fixture_path("sanitized.json").as_str(),
        "--from",
        "sanitized",
    ]));

    let mut expected = canonical();
    expected.as_object_mut().unwrap().remove("content");
    assert_eq!(out, expected);
}

#[test]
fn detail_from_series_uses_defaults() {
    let out = stdout_json(secretview().args([
        "detail",
        fixture_path("series.json").as_str(),
        "--from",
        "series",
    ]));

    assert_eq!(out["name"], "secret-name");
    assert_eq!(out["version"], 1);
    assert_eq!(out["checksum"], "");
    assert_eq!(out["metadata"], serde_json::json!({}));
    assert_eq!(out["expiry"], 0);
}

#[test]
fn detail_reads_stdin() {
    let out = stdout_json(
        secretview()
            .args(["detail", "-", "--from", "sanitized"])
            .write_stdin(include_str!("fixtures/sanitized.json")),
    );
    assert_eq!(out["name"], "secret-name");
}

#[test]
fn redact_content_setting_drops_payload() {
    let tmp = TempDir::new().unwrap();
    tmp.child(".secretview.toml")
        .write_str("redact_content = true\npretty_json = false\n")
        .unwrap();

    let out = stdout_json(secretview().args([
        "--config-dir",
        tmp.path().to_str().unwrap(),
        "detail",
        fixture_path("secret.json").as_str(),
    ]));
    assert!(out.get("content").is_none());
}

#[test]
fn detail_with_wrong_shape_fails() {
    secretview()
        .args(["detail", fixture_path("series.json").as_str(), "--from", "secret"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Schema error"));
}

#[test]
fn detail_with_unknown_shape_fails() {
    secretview()
        .args(["detail", fixture_path("series.json").as_str(), "--from", "blob"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown source shape"));
}

#[test]
fn detail_on_missing_file_fails() {
    let tmp = TempDir::new().unwrap();
    secretview()
        .args(["detail", tmp.path().join("nope.json").to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

// ---------------------------------------------------------------------------
// show / batch / validate
// ---------------------------------------------------------------------------

#[test]
fn show_prints_table_without_payload() {
    secretview()
        .args(["show", fixture_path("secret.json").as_str()])
        .assert()
        .success()
        .stdout(predicate::str::contains("secret-name"))
        .stdout(predicate::str::contains("text/plain"))
        .stdout(predicate::str::contains("YXNkZGFz").not());
}

#[test]
fn batch_folds_lookups_and_warns_on_errors() {
    let output = secretview()
        .args(["batch", fixture_path("lookups.json").as_str()])
        .output()
        .unwrap();

    assert!(output.status.success());
    let out: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        out,
        serde_json::json!({
            "successSecrets": {"api-key": "sk-123", "tls-key": "asddas"},
            "errorSecrets": {"db-password": "access denied"}
        })
    );
    assert!(String::from_utf8_lossy(&output.stderr).contains("1 of 3 lookup(s) failed"));
}

#[test]
fn validate_accepts_canonical_detail() {
    secretview()
        .args(["validate", fixture_path("secret_detail.json").as_str()])
        .assert()
        .success()
        .stdout(predicate::str::contains("secret-name"));
}

#[test]
fn validate_rejects_detail_missing_name() {
    let tmp = TempDir::new().unwrap();
    let doc = tmp.child("bad.json");
    doc.write_str(r#"{"checksum": "c", "createdAtSeconds": 1, "createdBy": "a", "updatedAtSeconds": 1, "updatedBy": "b", "expiry": 0}"#)
        .unwrap();

    secretview()
        .args(["validate", doc.path().to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("name"));
}

#[test]
fn validate_batch_rejects_overlap() {
    let tmp = TempDir::new().unwrap();
    let doc = tmp.child("batch.json");
    doc.write_str(r#"{"successSecrets": {"a": "x"}, "errorSecrets": {"a": "denied"}}"#)
        .unwrap();

    secretview()
        .args(["validate", "--batch", doc.path().to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("appears in both"));
}

#[test]
fn completions_generates_script() {
    secretview()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("secretview"));
}
