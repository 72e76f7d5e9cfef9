//! Structured problem reports.
//!
//! Every fatal precondition of a request is a [`Problem`]. A problem aborts
//! the one blueprint it belongs to and nothing else; the host turns it into
//! a [`Diagnostic`] and carries on with the batch.

use mimic_diagnostic::{Diagnostic, ErrorCode};
use mimic_ir::TypeKey;
use mimic_surface::SurfaceError;

use crate::GenerationMode;

#[derive(Clone, Eq, PartialEq, Debug, thiserror::Error)]
pub enum Problem {
    #[error(transparent)]
    Surface(#[from] SurfaceError),

    #[error(
        "generic arity mismatch: `{target}` has {target_arity} type parameter(s), \
         `{generated}` supplies {generated_arity} in {mode} mode"
    )]
    ArityMismatch {
        target: TypeKey,
        generated: String,
        mode: GenerationMode,
        target_arity: usize,
        generated_arity: usize,
    },

    #[error("invalid type parameters on `{generated}`: {reason}")]
    InvalidGeneratedParameters {
        target: TypeKey,
        generated: String,
        reason: String,
    },

    #[error("circular target reference: {}", render_cycle(.cycle))]
    CircularReference { target: TypeKey, cycle: Vec<TypeKey> },

    /// `target` is the generated type of a request that failed.
    #[error("`{generated}` depends on `{target}`, whose generation failed")]
    DependencyFailed { target: TypeKey, generated: String },
}

fn render_cycle(cycle: &[TypeKey]) -> String {
    let mut names: Vec<String> = cycle.iter().map(ToString::to_string).collect();
    if let Some(first) = names.first().cloned() {
        names.push(first);
    }
    names.join(" -> ")
}

impl Problem {
    pub fn code(&self) -> ErrorCode {
        match self {
            Problem::Surface(err) => err.code(),
            Problem::ArityMismatch { .. } => ErrorCode::M0004,
            Problem::InvalidGeneratedParameters { .. } => ErrorCode::M0005,
            Problem::CircularReference { .. } => ErrorCode::M0006,
            Problem::DependencyFailed { .. } => ErrorCode::M0007,
        }
    }

    /// The offending type.
    pub fn target(&self) -> &TypeKey {
        match self {
            Problem::Surface(err) => err.target(),
            Problem::ArityMismatch { target, .. }
            | Problem::InvalidGeneratedParameters { target, .. }
            | Problem::CircularReference { target, .. }
            | Problem::DependencyFailed { target, .. } => target,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        if let Problem::Surface(err) = self {
            return err.to_diagnostic();
        }
        let diag = Diagnostic::error(self.code())
            .with_message(self.to_string())
            .with_subject(self.target().to_string());
        match self {
            Problem::Surface(_) => diag,
            Problem::ArityMismatch {
                target,
                generated,
                mode,
                target_arity,
                ..
            } => match mode {
                GenerationMode::UnboundGeneric => diag
                    .with_note("unbound generic mode pairs type parameters one-for-one")
                    .with_suggestion(format!(
                        "declare {target_arity} type parameter(s) on `{generated}`"
                    )),
                GenerationMode::ClosedGeneric => diag
                    .with_note("closed generic mode needs every type argument of the target")
                    .with_suggestion(format!("supply {target_arity} type argument(s) for `{target}`")),
                GenerationMode::NonGeneric => diag.with_suggestion(
                    "use unbound or closed generic mode for a generic target",
                ),
            },
            Problem::InvalidGeneratedParameters { .. } => {
                diag.with_suggestion("give every generated type parameter a distinct identifier")
            }
            Problem::CircularReference { .. } => {
                diag.with_note("no request on a cycle can be resolved first")
            }
            Problem::DependencyFailed { target, .. } => diag.with_note(format!(
                "fix the problem reported for the request generating `{target}`"
            )),
        }
    }
}

#[cfg(test)]
mod tests;
