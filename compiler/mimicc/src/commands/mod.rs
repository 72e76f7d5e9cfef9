//! Command handlers for the `mimic` CLI.
//!
//! Each handler has a core taking a loaded [`Catalog`] and explicit sinks,
//! used by tests, and a `*_file` wrapper used by the binary that reads the
//! catalog, reports to stderr and returns the process exit code.

mod check;
mod explain;
mod generate;
mod options;

pub use check::{check_catalog, check_file};
pub use explain::explain_error;
pub use generate::{generate_catalog, generate_file};
pub use options::{parse_generate_options, GenerateOptions, MessageFormat, OutputFormat};

pub use mimic_diagnostic::emitter::Tally;

use std::io::IsTerminal;

use mimic_blueprint::GenerationRequest;
use mimic_diagnostic::emitter::{ColorMode, DiagnosticEmitter, JsonEmitter, TerminalEmitter};

use crate::batch::Outcome;
use crate::catalog::Catalog;

/// Problem reporter writing to stderr in `format`.
pub(super) fn stderr_emitter(format: MessageFormat) -> Box<dyn DiagnosticEmitter> {
    match format {
        MessageFormat::Human => {
            let is_tty = std::io::stderr().is_terminal();
            Box::new(TerminalEmitter::with_color_mode(
                std::io::stderr(),
                ColorMode::Auto,
                is_tty,
            ))
        }
        MessageFormat::Json => Box::new(JsonEmitter::new(std::io::stderr())),
    }
}

/// Load a catalog, reporting failure as a diagnostic.
pub(super) fn load_catalog(path: &str, format: MessageFormat) -> Option<Catalog> {
    match Catalog::load(std::path::Path::new(path)) {
        Ok(catalog) => Some(catalog),
        Err(err) => {
            let mut emitter = stderr_emitter(format);
            emitter.emit(&err.to_diagnostic());
            emitter.flush();
            None
        }
    }
}

/// Emit a diagnostic for every failed outcome and count both kinds.
pub(super) fn report_problems(
    requests: &[GenerationRequest],
    outcomes: &[Outcome],
    emitter: &mut dyn DiagnosticEmitter,
) -> Tally {
    let mut summary = Tally::default();
    for (request, outcome) in requests.iter().zip(outcomes) {
        match outcome {
            Ok(_) => summary.succeeded += 1,
            Err(problem) => {
                summary.failed += 1;
                let diag = problem
                    .to_diagnostic()
                    .with_note(format!("while generating `{}`", request.generated));
                emitter.emit(&diag);
            }
        }
    }
    summary
}
