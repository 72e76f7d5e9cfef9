//! Catalog files.
//!
//! A catalog is a JSON document holding the type universe a batch resolves
//! against and the requests to run:
//!
//! ```json
//! {
//!   "root": { "namespace": "System", "name": "Object" },
//!   "types": [
//!     { "key": { "namespace": "Acme", "name": "Widget" }, "kind": "class" }
//!   ],
//!   "requests": [
//!     {
//!       "target": { "key": { "namespace": "Acme", "name": "Widget" } },
//!       "generated": { "namespace": "Acme.Testing", "name": "WidgetStandIn" }
//!     }
//!   ]
//! }
//! ```
//!
//! `root` defaults to `System.Object`.

use std::path::{Path, PathBuf};

use mimic_blueprint::GenerationRequest;
use mimic_diagnostic::{Diagnostic, ErrorCode};
use mimic_ir::{well_known, TypeDefinition, TypeKey, TypeTable};

/// On-disk layout of a catalog.
#[derive(Clone, Debug, Default, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogFile {
    #[serde(default)]
    pub root: Option<TypeKey>,
    #[serde(default)]
    pub types: Vec<TypeDefinition>,
    #[serde(default)]
    pub requests: Vec<GenerationRequest>,
}

/// A loaded catalog: definitions indexed for lookup, requests in file order.
#[derive(Clone, Debug)]
pub struct Catalog {
    pub table: TypeTable,
    pub requests: Vec<GenerationRequest>,
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("cannot read catalog `{}`: {source}", .path.display())]
    Unreadable {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("malformed catalog `{origin}`: {source}")]
    Malformed {
        origin: String,
        source: serde_json::Error,
    },

    #[error("malformed catalog `{origin}`: `{key}` is defined more than once")]
    DuplicateType { origin: String, key: TypeKey },
}

impl CatalogError {
    pub fn code(&self) -> ErrorCode {
        match self {
            CatalogError::Unreadable { .. } => ErrorCode::M0901,
            CatalogError::Malformed { .. } | CatalogError::DuplicateType { .. } => {
                ErrorCode::M0902
            }
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.code()).with_message(self.to_string());
        match self {
            CatalogError::Unreadable { path, .. } => diag.with_subject(path.display().to_string()),
            CatalogError::Malformed { origin, source } => diag
                .with_subject(origin.clone())
                .with_note(format!("at line {}, column {}", source.line(), source.column())),
            CatalogError::DuplicateType { origin, key } => diag
                .with_subject(origin.clone())
                .with_suggestion(format!("keep a single definition of `{key}`")),
        }
    }
}

impl Catalog {
    /// Read and parse the catalog at `path`.
    pub fn load(path: &Path) -> Result<Catalog, CatalogError> {
        let text = std::fs::read_to_string(path).map_err(|source| CatalogError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text, &path.display().to_string())
    }

    /// Parse catalog text. `origin` names the source in error messages.
    pub fn parse(text: &str, origin: &str) -> Result<Catalog, CatalogError> {
        let file: CatalogFile =
            serde_json::from_str(text).map_err(|source| CatalogError::Malformed {
                origin: origin.to_string(),
                source,
            })?;
        Self::from_file(file, origin)
    }

    pub fn from_file(file: CatalogFile, origin: &str) -> Result<Catalog, CatalogError> {
        let root = file.root.unwrap_or_else(well_known::object_key);
        let mut table = TypeTable::with_root(root);
        for definition in file.types {
            let key = definition.key().clone();
            if table.insert(definition).is_some() {
                return Err(CatalogError::DuplicateType {
                    origin: origin.to_string(),
                    key,
                });
            }
        }
        tracing::debug!(
            origin,
            types = table.len(),
            requests = file.requests.len(),
            "catalog loaded"
        );
        Ok(Catalog {
            table,
            requests: file.requests,
        })
    }
}
