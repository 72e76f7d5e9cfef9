use super::*;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use crate::ErrorCode;

fn lines(output: &[u8]) -> Vec<Value> {
    std::str::from_utf8(output)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

#[test]
fn one_object_per_diagnostic() {
    let mut output = Vec::new();
    let mut emitter = JsonEmitter::new(&mut output);
    emitter.emit(
        &Diagnostic::error(ErrorCode::M0001)
            .with_message("unknown target type `Acme.\"Odd\"`")
            .with_subject("Acme.Odd")
            .with_note("not in catalog"),
    );
    emitter.emit(&Diagnostic::error(ErrorCode::M0006).with_message("cycle"));
    emitter.flush();

    let records = lines(&output);
    assert_eq!(records.len(), 2);
    assert_eq!(
        records[0],
        json!({
            "code": "M0001",
            "severity": "error",
            "message": "unknown target type `Acme.\"Odd\"`",
            "subject": "Acme.Odd",
            "member": null,
            "notes": ["not in catalog"],
            "suggestions": [],
        })
    );
    assert_eq!(records[1]["code"], "M0006");
}

#[test]
fn finish_appends_the_tally() {
    let mut output = Vec::new();
    let mut emitter = JsonEmitter::new(&mut output);
    emitter.emit(&Diagnostic::error(ErrorCode::M0007).with_message("dependency"));
    emitter.finish(Tally {
        succeeded: 3,
        failed: 1,
    });

    let records = lines(&output);
    assert_eq!(
        records.last(),
        Some(&json!({ "tally": { "succeeded": 3, "failed": 1 } }))
    );
}
