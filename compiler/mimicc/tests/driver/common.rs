//! Shared catalog fixtures and sinks.

use std::path::PathBuf;

use mimic_diagnostic::emitter::{DiagnosticEmitter, Tally};
use mimic_diagnostic::Diagnostic;
use mimicc::Catalog;
use tempfile::TempDir;

/// A catalog exercising every request outcome:
/// 1. a plain class with an overload
/// 2. a sealed class
/// 3. an unbound generic interface
/// 4. a request targeting request 1's generated type
/// 5. an unknown target
pub const CATALOG: &str = r#"{
  "types": [
    {
      "key": { "namespace": "Acme", "name": "Widget" },
      "kind": "class",
      "members": [
        { "kind": "method", "name": "Spin", "modifiers": "VIRTUAL" },
        {
          "kind": "method",
          "name": "Spin",
          "parameters": [
            {
              "name": "turns",
              "ty": {
                "kind": "named",
                "key": { "namespace": "System", "name": "Int32" },
                "is_value_type": true
              }
            }
          ]
        },
        {
          "kind": "method",
          "name": "Label",
          "return_type": {
            "kind": "named",
            "key": { "namespace": "System", "name": "String" }
          }
        }
      ]
    },
    {
      "key": { "namespace": "Acme", "name": "Ledger" },
      "kind": "class",
      "modifiers": "SEALED",
      "members": [
        {
          "kind": "method",
          "name": "Total",
          "return_type": {
            "kind": "named",
            "key": { "namespace": "System", "name": "Int64" },
            "is_value_type": true
          }
        }
      ]
    },
    {
      "key": { "namespace": "Acme", "name": "IRepo", "arity": 2 },
      "kind": "interface",
      "type_params": [{ "name": "TKey" }, { "name": "TValue" }],
      "members": [
        {
          "kind": "method",
          "name": "Find",
          "parameters": [
            {
              "name": "key",
              "ty": { "kind": "param", "name": "TKey", "owner": "type", "position": 0 }
            }
          ],
          "return_type": {
            "kind": "param",
            "name": "TValue",
            "owner": "type",
            "position": 1,
            "nullable": true
          }
        }
      ]
    }
  ],
  "requests": [
    {
      "target": { "key": { "namespace": "Acme", "name": "Widget" } },
      "generated": { "namespace": "Acme.Testing", "name": "WidgetStandIn" }
    },
    {
      "target": { "key": { "namespace": "Acme", "name": "Ledger" } },
      "generated": { "namespace": "Acme.Testing", "name": "LedgerStandIn" }
    },
    {
      "target": { "key": { "namespace": "Acme", "name": "IRepo", "arity": 2 } },
      "generated": {
        "namespace": "Acme.Testing",
        "name": "RepoStandIn",
        "type_params": ["K", "V"]
      },
      "policy": { "mode": "unbound_generic" }
    },
    {
      "target": { "key": { "namespace": "Acme.Testing", "name": "WidgetStandIn" } },
      "generated": { "namespace": "Acme.Testing", "name": "SecondStandIn" }
    },
    {
      "target": { "key": { "namespace": "Acme", "name": "Missing" } },
      "generated": { "namespace": "Acme.Testing", "name": "MissingStandIn" }
    }
  ]
}"#;

pub fn catalog() -> Catalog {
    Catalog::parse(CATALOG, "fixture.json").unwrap()
}

/// The fixture without its failing request.
pub fn clean_catalog() -> Catalog {
    let mut catalog = catalog();
    catalog.requests.pop();
    catalog
}

/// Write `text` to a fresh temporary directory.
pub fn write_catalog(text: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.json");
    std::fs::write(&path, text).unwrap();
    (dir, path)
}

/// Emitter that keeps everything it is given.
#[derive(Default)]
pub struct Collected {
    pub diagnostics: Vec<Diagnostic>,
    pub tally: Option<Tally>,
}

impl DiagnosticEmitter for Collected {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        self.diagnostics.push(diagnostic.clone());
    }

    fn finish(&mut self, tally: Tally) {
        self.tally = Some(tally);
    }

    fn flush(&mut self) {}
}
