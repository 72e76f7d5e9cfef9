//! Sinks for problem reports.
//!
//! A batch run reports each failed request as it is found and closes the
//! report with a [`Tally`]:
//! - [`TerminalEmitter`]: `error[M0004]: ...` blocks for people
//! - [`JsonEmitter`]: one JSON object per line for tooling

mod json;
mod terminal;

pub use json::JsonEmitter;
pub use terminal::{ColorMode, TerminalEmitter};

use crate::Diagnostic;

/// Request counts of a finished batch.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct Tally {
    pub succeeded: usize,
    pub failed: usize,
}

impl Tally {
    /// Process exit status: 1 if any request failed.
    pub fn exit_code(self) -> i32 {
        i32::from(self.failed > 0)
    }
}

pub trait DiagnosticEmitter {
    fn emit(&mut self, diagnostic: &Diagnostic);

    /// Close the report of a batch run. Implies [`flush`](Self::flush).
    fn finish(&mut self, tally: Tally);

    fn flush(&mut self);
}
