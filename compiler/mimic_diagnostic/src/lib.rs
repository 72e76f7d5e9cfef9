//! Diagnostics for the stand-in generation pipeline.
//!
//! Fatal preconditions are local to one generation request. They never
//! abort a batch; they become a [`Diagnostic`] carrying:
//! - an [`ErrorCode`] for searchability (`mimic explain M0004`)
//! - the offending type as the diagnostic's subject
//! - notes and suggestions a host can surface verbatim
//!
//! Emitters render diagnostics for terminals and for tooling (JSON).

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod errors;

pub use diagnostic::{Diagnostic, Severity};
pub use error_code::ErrorCode;
pub use errors::ErrorDocs;
