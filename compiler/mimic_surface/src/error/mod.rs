//! Fatal preconditions of surface discovery.

use std::fmt;

use mimic_diagnostic::{Diagnostic, ErrorCode};
use mimic_ir::{TypeKey, TypeKind};

/// What is wrong with the metadata reachable from a target.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum MetadataFault {
    /// A base type is referenced but has no definition.
    MissingBase(TypeKey),
    /// An implemented interface is referenced but has no definition.
    MissingInterface(TypeKey),
    /// The base-type chain revisits this type.
    CyclicBase(TypeKey),
}

impl fmt::Display for MetadataFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetadataFault::MissingBase(key) => write!(f, "base type `{key}` is not defined"),
            MetadataFault::MissingInterface(key) => {
                write!(f, "interface `{key}` is not defined")
            }
            MetadataFault::CyclicBase(key) => {
                write!(f, "base-type chain loops back to `{key}`")
            }
        }
    }
}

/// A structural graph could not be built for a target.
///
/// Local to one request: the caller reports it and moves on.
#[derive(Clone, Eq, PartialEq, Debug, thiserror::Error)]
pub enum SurfaceError {
    #[error("unknown target type `{target}`")]
    UnknownTarget { target: TypeKey },

    #[error("cannot generate a stand-in for {kind} `{target}`")]
    UnsupportedKind { target: TypeKey, kind: TypeKind },

    #[error("malformed metadata for `{target}`: {fault}")]
    MalformedMetadata { target: TypeKey, fault: MetadataFault },
}

impl SurfaceError {
    pub fn code(&self) -> ErrorCode {
        match self {
            SurfaceError::UnknownTarget { .. } => ErrorCode::M0001,
            SurfaceError::UnsupportedKind { .. } => ErrorCode::M0002,
            SurfaceError::MalformedMetadata { .. } => ErrorCode::M0003,
        }
    }

    /// The type the report is about.
    pub fn target(&self) -> &TypeKey {
        match self {
            SurfaceError::UnknownTarget { target }
            | SurfaceError::UnsupportedKind { target, .. }
            | SurfaceError::MalformedMetadata { target, .. } => target,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.code())
            .with_message(self.to_string())
            .with_subject(self.target().to_string());
        match self {
            SurfaceError::UnknownTarget { target } if target.is_generic() => diag.with_note(
                format!("generic types are looked up by name and arity ({} here)", target.arity),
            ),
            SurfaceError::UnknownTarget { .. } => diag,
            SurfaceError::UnsupportedKind { .. } => diag
                .with_note("stand-ins can be generated for classes, records, structs and interfaces"),
            SurfaceError::MalformedMetadata { fault, .. } => match fault {
                MetadataFault::MissingBase(key) | MetadataFault::MissingInterface(key) => {
                    diag.with_suggestion(format!("add a definition for `{key}` to the catalog"))
                }
                MetadataFault::CyclicBase(_) => {
                    diag.with_suggestion("break the cycle in the base-type chain")
                }
            },
        }
    }
}

#[cfg(test)]
mod tests;
