//! Error codes for all generator diagnostics.
//!
//! Each error code is a unique identifier (e.g., `M0004`) with the first digit
//! indicating the stage. Used for `mimic explain` lookups and documentation.

use std::fmt;

/// Error codes for all generator diagnostics.
///
/// Format: M#### where the first digit indicates the stage:
/// - M0xxx: Resolution (surface discovery, correspondence, batch ordering)
/// - M01xx: Runtime signals raised by generated stand-ins
/// - M09xx: Driver input errors
/// - M9xxx: Internal errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Resolution Errors (M00xx)
    /// Target type could not be resolved
    M0001,
    /// Target type kind is not supported
    M0002,
    /// Malformed type metadata (missing base/interface, cyclic base chain)
    M0003,
    /// Generic arity mismatch between generated and target type
    M0004,
    /// Invalid generated-type parameters
    M0005,
    /// Circular target reference between requests
    M0006,
    /// Request depends on a failed request
    M0007,

    // Runtime Signals (M01xx)
    /// Member invoked with no override, no fallback, and no live target
    M0101,

    // Driver Errors (M09xx)
    /// Catalog file could not be read
    M0901,
    /// Catalog file is malformed
    M0902,

    // Internal Errors (M9xxx)
    /// Internal generator error
    M9001,
}

impl ErrorCode {
    /// All error codes, in declaration order.
    pub const ALL: &[ErrorCode] = &[
        ErrorCode::M0001,
        ErrorCode::M0002,
        ErrorCode::M0003,
        ErrorCode::M0004,
        ErrorCode::M0005,
        ErrorCode::M0006,
        ErrorCode::M0007,
        ErrorCode::M0101,
        ErrorCode::M0901,
        ErrorCode::M0902,
        ErrorCode::M9001,
    ];

    /// Get the code as a string (e.g., "M0004").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::M0001 => "M0001",
            ErrorCode::M0002 => "M0002",
            ErrorCode::M0003 => "M0003",
            ErrorCode::M0004 => "M0004",
            ErrorCode::M0005 => "M0005",
            ErrorCode::M0006 => "M0006",
            ErrorCode::M0007 => "M0007",
            ErrorCode::M0101 => "M0101",
            ErrorCode::M0901 => "M0901",
            ErrorCode::M0902 => "M0902",
            ErrorCode::M9001 => "M9001",
        }
    }

    /// One-line summary, used as a fallback title.
    pub fn summary(&self) -> &'static str {
        match self {
            ErrorCode::M0001 => "unknown target type",
            ErrorCode::M0002 => "unsupported target kind",
            ErrorCode::M0003 => "malformed type metadata",
            ErrorCode::M0004 => "generic arity mismatch",
            ErrorCode::M0005 => "invalid generated-type parameters",
            ErrorCode::M0006 => "circular target reference",
            ErrorCode::M0007 => "dependency failed",
            ErrorCode::M0101 => "unmocked member",
            ErrorCode::M0901 => "catalog unreadable",
            ErrorCode::M0902 => "catalog malformed",
            ErrorCode::M9001 => "internal error",
        }
    }

    /// Check if this is a resolution error (M00xx range).
    pub fn is_resolution_error(&self) -> bool {
        self.as_str().starts_with("M00")
    }

    /// Check if this is a runtime signal (M01xx range).
    pub fn is_runtime_signal(&self) -> bool {
        self.as_str().starts_with("M01")
    }

    /// Check if this is a driver input error (M09xx range).
    pub fn is_driver_error(&self) -> bool {
        self.as_str().starts_with("M09")
    }

    /// Check if this is an internal error (M9xxx range).
    pub fn is_internal_error(&self) -> bool {
        self.as_str().starts_with("M9")
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ErrorCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_uppercase();
        Self::ALL
            .iter()
            .find(|code| code.as_str() == upper)
            .copied()
            .ok_or(())
    }
}
