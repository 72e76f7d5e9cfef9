//! Embedded error documentation for `mimic explain`.
//!
//! Each error code has a markdown file in this directory, embedded at
//! compile time and looked up with `ErrorDocs::get()`.

use crate::ErrorCode;

/// Registry of embedded error documentation.
pub struct ErrorDocs;

impl ErrorDocs {
    /// Get the documentation for an error code.
    ///
    /// Returns `Some(markdown)` if documentation exists for the code,
    /// `None` otherwise.
    pub fn get(code: ErrorCode) -> Option<&'static str> {
        DOCS.iter().find(|(c, _)| *c == code).map(|(_, doc)| *doc)
    }

    /// Get all documented error codes.
    pub fn all_codes() -> impl Iterator<Item = ErrorCode> {
        DOCS.iter().map(|(code, _)| *code)
    }

    /// Check if an error code has documentation.
    pub fn has_docs(code: ErrorCode) -> bool {
        DOCS.iter().any(|(c, _)| *c == code)
    }
}

static DOCS: &[(ErrorCode, &str)] = &[
    // Resolution errors (M00xx)
    (ErrorCode::M0001, include_str!("M0001.md")),
    (ErrorCode::M0002, include_str!("M0002.md")),
    (ErrorCode::M0003, include_str!("M0003.md")),
    (ErrorCode::M0004, include_str!("M0004.md")),
    (ErrorCode::M0005, include_str!("M0005.md")),
    (ErrorCode::M0006, include_str!("M0006.md")),
    (ErrorCode::M0007, include_str!("M0007.md")),
    // Runtime signals (M01xx)
    (ErrorCode::M0101, include_str!("M0101.md")),
    // Driver errors (M09xx)
    (ErrorCode::M0901, include_str!("M0901.md")),
    (ErrorCode::M0902, include_str!("M0902.md")),
    // Internal errors (M9xxx)
    (ErrorCode::M9001, include_str!("M9001.md")),
];

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
