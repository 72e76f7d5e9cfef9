use std::process::{Command, Output};

use crate::common::{write_catalog, CATALOG};

fn mimic(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_mimic"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn version_and_help() {
    let output = mimic(&["version"]);
    assert!(output.status.success());
    assert_eq!(
        stdout(&output).trim(),
        format!("mimic {}", env!("CARGO_PKG_VERSION"))
    );

    let output = mimic(&["help"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("generate <catalog.json>"));

    let output = mimic(&["frobnicate"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Unknown command: frobnicate"));
}

#[test]
fn check_exits_non_zero_on_problems() {
    let (_dir, path) = write_catalog(CATALOG);
    let output = mimic(&["check", path.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));
    let err = stderr(&output);
    assert!(err.contains("error[M0001]"));
    assert!(err.contains("1 request failed; 4 blueprints generated"));
}

#[test]
fn check_reports_json_lines_on_request() {
    let (_dir, path) = write_catalog(CATALOG);
    let output = mimic(&["check", path.to_str().unwrap(), "--message-format=json"]);
    assert_eq!(output.status.code(), Some(1));
    let records: Vec<serde_json::Value> = stderr(&output)
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["code"], "M0001");
    assert_eq!(records[0]["subject"], "Acme.Missing");
    assert_eq!(records[1]["tally"]["failed"], 1);
    assert_eq!(records[1]["tally"]["succeeded"], 4);
}

#[test]
fn generate_writes_json_to_stdout() {
    let (_dir, path) = write_catalog(CATALOG);
    let output = mimic(&["generate", path.to_str().unwrap(), "--jobs=2"]);
    assert_eq!(output.status.code(), Some(1));
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report.as_array().unwrap().len(), 5);
}

#[test]
fn generate_outline_of_a_clean_catalog() {
    let (_dir, path) = write_catalog(r#"{
      "types": [{ "key": { "namespace": "Acme", "name": "Widget" }, "kind": "class" }],
      "requests": [{
        "target": { "key": { "namespace": "Acme", "name": "Widget" } },
        "generated": { "namespace": "Acme.Testing", "name": "WidgetStandIn" }
      }]
    }"#);
    let output = mimic(&["generate", path.to_str().unwrap(), "--format=outline"]);
    assert!(output.status.success(), "{}", stderr(&output));
    assert!(stdout(&output).starts_with("// stand-in for Acme.Widget\n"));
}

#[test]
fn catalog_problems_are_reported() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent.json");
    let output = mimic(&["generate", missing.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("error[M0901]"));

    let (_dir, path) = write_catalog("{ not json");
    let output = mimic(&["check", path.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("error[M0902]"));
}

#[test]
fn bad_options_are_rejected() {
    let (_dir, path) = write_catalog("{}");
    let output = mimic(&["generate", path.to_str().unwrap(), "--format=yaml"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("unknown format 'yaml'"));
}

#[test]
fn explain_known_and_unknown_codes() {
    let output = mimic(&["explain", "m0004"]);
    assert!(output.status.success());
    assert!(!stdout(&output).trim().is_empty());

    let output = mimic(&["explain", "E0001"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Unknown error code: E0001"));
}
