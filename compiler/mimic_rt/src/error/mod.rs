//! Runtime errors raised by a stand-in.

use std::fmt;

use mimic_diagnostic::{Diagnostic, ErrorCode};

/// A call nothing could answer.
///
/// Raised instead of returning `null` for a non-nullable result, so a
/// missing setup shows up at the call that needed it.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct UnmockedMember {
    /// Override slot of the member.
    pub member: String,
    /// Name the target declares.
    pub original_name: String,
    pub declaring_type: String,
    /// `out` parameter that could not be assigned, if that is what failed.
    pub parameter: Option<String>,
}

impl fmt::Display for UnmockedMember {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "`{}.{}` has no override, no live target, and no fallback",
            self.declaring_type, self.original_name
        )?;
        if let Some(parameter) = &self.parameter {
            write!(f, " for out parameter `{parameter}`")?;
        }
        Ok(())
    }
}

#[derive(Clone, Eq, PartialEq, Debug, thiserror::Error)]
pub enum RuntimeError {
    #[error("unmocked member: {0}")]
    Unmocked(UnmockedMember),

    #[error("stand-in has no member `{name}`")]
    UnknownMember { name: String },

    #[error("`{member}` takes {expected} argument(s), {actual} supplied")]
    ArgumentCount {
        member: String,
        expected: usize,
        actual: usize,
    },
}

impl RuntimeError {
    pub fn code(&self) -> ErrorCode {
        match self {
            RuntimeError::Unmocked(_) => ErrorCode::M0101,
            RuntimeError::UnknownMember { .. } | RuntimeError::ArgumentCount { .. } => {
                ErrorCode::M9001
            }
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.code()).with_message(self.to_string());
        match self {
            RuntimeError::Unmocked(unmocked) => diag
                .with_subject(unmocked.declaring_type.clone())
                .with_member(unmocked.original_name.clone())
                .with_suggestion(format!(
                    "install an override for `{}` or attach a live target",
                    unmocked.member
                )),
            RuntimeError::UnknownMember { .. } | RuntimeError::ArgumentCount { .. } => diag,
        }
    }
}

#[cfg(test)]
mod tests;
