use pretty_assertions::assert_eq;
use serde_json::Value;

use mimic_diagnostic::ErrorCode;
use mimicc::commands::{
    check_catalog, generate_catalog, GenerateOptions, OutputFormat, Tally,
};

use crate::common::{catalog, clean_catalog, Collected};

fn generate_json(options: &GenerateOptions) -> (Value, Tally, Collected) {
    let mut out = Vec::new();
    let mut collected = Collected::default();
    let summary = generate_catalog(&catalog(), options, &mut out, &mut collected).unwrap();
    (serde_json::from_slice(&out).unwrap(), summary, collected)
}

#[test]
fn json_report_covers_every_request() {
    let (report, summary, collected) = generate_json(&GenerateOptions::default());
    assert_eq!(
        summary,
        Tally {
            succeeded: 4,
            failed: 1
        }
    );

    let entries = report.as_array().unwrap();
    let generated: Vec<&str> = entries
        .iter()
        .map(|e| e["generated"].as_str().unwrap())
        .collect();
    assert_eq!(
        generated,
        vec![
            "Acme.Testing.WidgetStandIn",
            "Acme.Testing.LedgerStandIn",
            "Acme.Testing.RepoStandIn<K, V>",
            "Acme.Testing.SecondStandIn",
            "Acme.Testing.MissingStandIn",
        ]
    );

    let widget = &entries[0]["blueprint"];
    assert_eq!(widget["inherits"], Value::Bool(true));
    let names: Vec<&str> = widget["members"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["generated_name"].as_str().unwrap())
        .collect();
    assert_eq!(
        names,
        vec!["Spin", "Spin_Int32", "Label", "Equals", "GetHashCode", "ToString"]
    );

    assert_eq!(entries[1]["blueprint"]["inherits"], Value::Bool(false));
    assert_eq!(entries[4]["error"]["code"], "M0001");
    assert!(entries[4].get("blueprint").is_none());

    assert_eq!(collected.diagnostics.len(), 1);
    let diag = &collected.diagnostics[0];
    assert_eq!(diag.code, ErrorCode::M0001);
    assert!(diag
        .notes
        .contains(&"while generating `Acme.Testing.MissingStandIn`".to_string()));
}

#[test]
fn fail_fast_stops_before_the_first_failure() {
    let options = GenerateOptions {
        fail_fast: true,
        ..GenerateOptions::default()
    };
    let (report, summary, collected) = generate_json(&options);
    assert_eq!(report.as_array().unwrap().len(), 4);
    assert_eq!(summary.failed, 1);
    assert_eq!(collected.diagnostics.len(), 1);
}

#[test]
fn outline_renders_each_blueprint() {
    let options = GenerateOptions {
        format: OutputFormat::Outline,
        ..GenerateOptions::default()
    };
    let mut out = Vec::new();
    let mut collected = Collected::default();
    let summary = generate_catalog(&clean_catalog(), &options, &mut out, &mut collected).unwrap();
    assert_eq!(summary.exit_code(), 0);
    assert!(collected.diagnostics.is_empty());

    let text = String::from_utf8(out).unwrap();
    assert_eq!(text.matches("// stand-in for ").count(), 4);
    assert!(text.contains("public class WidgetStandIn : Acme.Widget"));
    assert!(text.contains("public class SecondStandIn : Acme.Testing.WidgetStandIn"));
    assert!(text.contains("class RepoStandIn<K, V>"));
    assert!(text.contains("// Label: hide, fallback fail-fast"));
}

#[test]
fn check_reports_and_summarizes() {
    let mut collected = Collected::default();
    let summary = check_catalog(&catalog(), Some(2), &mut collected);
    assert_eq!(summary.exit_code(), 1);
    assert_eq!(
        collected.tally,
        Some(Tally {
            succeeded: 4,
            failed: 1
        })
    );
    assert_eq!(collected.diagnostics[0].code, ErrorCode::M0001);

    let mut collected = Collected::default();
    let summary = check_catalog(&clean_catalog(), None, &mut collected);
    assert_eq!(summary.exit_code(), 0);
    assert_eq!(
        collected.tally,
        Some(Tally {
            succeeded: 4,
            failed: 0
        })
    );
}
