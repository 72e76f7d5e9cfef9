//! The `check` command: resolve every request, report problems only.

use mimic_diagnostic::emitter::DiagnosticEmitter;

use crate::batch::{run_batch, BatchOptions};
use crate::catalog::Catalog;

use super::{load_catalog, report_problems, stderr_emitter, MessageFormat, Tally};

pub fn check_catalog(
    catalog: &Catalog,
    jobs: Option<usize>,
    diagnostics: &mut dyn DiagnosticEmitter,
) -> Tally {
    let outcomes = run_batch(&catalog.table, &catalog.requests, &BatchOptions { jobs });
    let summary = report_problems(&catalog.requests, &outcomes, diagnostics);
    diagnostics.finish(summary);
    summary
}

/// `mimic check <catalog.json>`. Returns the exit code.
pub fn check_file(path: &str, jobs: Option<usize>, messages: MessageFormat) -> i32 {
    let Some(catalog) = load_catalog(path, messages) else {
        return 1;
    };
    check_catalog(&catalog, jobs, stderr_emitter(messages).as_mut()).exit_code()
}
