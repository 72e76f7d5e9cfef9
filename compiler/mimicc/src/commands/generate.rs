//! The `generate` command: build every request and write the results.

use std::io::{self, Write};

use mimic_blueprint::{Blueprint, Problem};
use mimic_diagnostic::emitter::DiagnosticEmitter;
use mimic_emit::{CodeEmitter, OutlineEmitter};

use crate::batch::{run_batch, BatchOptions};
use crate::catalog::Catalog;

use super::{load_catalog, report_problems, stderr_emitter, GenerateOptions, OutputFormat, Tally};

/// One entry of the JSON report.
#[derive(serde::Serialize)]
struct Entry<'a> {
    generated: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    blueprint: Option<&'a Blueprint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<Failure>,
}

#[derive(serde::Serialize)]
struct Failure {
    code: &'static str,
    message: String,
}

impl Failure {
    fn new(problem: &Problem) -> Self {
        Failure {
            code: problem.code().as_str(),
            message: problem.to_string(),
        }
    }
}

/// Generate every request in `catalog`, writing results to `out` and
/// problems to `diagnostics`.
///
/// With `fail_fast`, output stops before the first failed request; its
/// problem is still reported.
pub fn generate_catalog(
    catalog: &Catalog,
    options: &GenerateOptions,
    out: &mut dyn Write,
    diagnostics: &mut dyn DiagnosticEmitter,
) -> io::Result<Tally> {
    let batch = BatchOptions { jobs: options.jobs };
    let outcomes = run_batch(&catalog.table, &catalog.requests, &batch);

    let mut shown = outcomes.len();
    if options.fail_fast {
        if let Some(first) = outcomes.iter().position(Result::is_err) {
            shown = first;
        }
    }
    let reported = (shown + 1).min(outcomes.len());
    let summary = report_problems(
        &catalog.requests[..reported],
        &outcomes[..reported],
        diagnostics,
    );

    let pairs = catalog.requests.iter().zip(&outcomes).take(shown);
    match options.format {
        OutputFormat::Json => {
            let entries: Vec<Entry<'_>> = pairs
                .map(|(request, outcome)| Entry {
                    generated: request.generated.display_name(),
                    blueprint: outcome.as_ref().ok(),
                    error: outcome.as_ref().err().map(Failure::new),
                })
                .collect();
            serde_json::to_writer_pretty(&mut *out, &entries)?;
            writeln!(out)?;
        }
        OutputFormat::Outline => {
            let emitter = OutlineEmitter;
            let mut first = true;
            for blueprint in pairs.filter_map(|(_, outcome)| outcome.as_ref().ok()) {
                if !first {
                    writeln!(out)?;
                }
                first = false;
                out.write_all(emitter.render(blueprint).as_bytes())?;
            }
        }
    }
    out.flush()?;
    diagnostics.flush();
    Ok(summary)
}

/// `mimic generate <catalog.json>`. Returns the exit code.
pub fn generate_file(path: &str, options: &GenerateOptions) -> i32 {
    let Some(catalog) = load_catalog(path, options.messages) else {
        return 1;
    };
    let mut diagnostics = stderr_emitter(options.messages);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match generate_catalog(&catalog, options, &mut out, diagnostics.as_mut()) {
        Ok(summary) => summary.exit_code(),
        Err(e) => {
            eprintln!("error writing output: {e}");
            1
        }
    }
}
