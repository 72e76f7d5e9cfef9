//! Generic-parameter correspondence between target and generated type.
//!
//! A correspondence is total or empty, never partial:
//! - `Empty`: neither side is generic
//! - `Unbound`: every target parameter is paired, by position, with one of
//!   the generated type's own parameters
//! - `Closed`: every target parameter is paired with a concrete argument
//!
//! Two ways to apply it exist. [`GenericCorrespondence::apply`] rewrites
//! rendered type text by whole-identifier substitution, for emitters that
//! work on strings. [`GenericCorrespondence::substitute`] rewrites a
//! [`TypeRef`] structurally, for fallback decisions and blueprint export.

use std::borrow::Cow;

use mimic_ir::{sanitize_identifier, NamedType, ParamOwner, ParamRef, TypeDescriptor, TypeRef};

use crate::{GenerationMode, GenerationRequest, Problem};

/// Target parameter paired with a generated parameter.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParamMapping {
    pub target: String,
    pub generated: String,
}

/// Target parameter paired with a concrete argument.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Substitution {
    pub param: String,
    pub argument: TypeRef,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "kind", rename_all = "snake_case")
)]
pub enum GenericCorrespondence {
    #[default]
    Empty,
    Unbound { pairs: Vec<ParamMapping> },
    Closed { substitutions: Vec<Substitution> },
}

impl GenericCorrespondence {
    /// Compute the correspondence for `request` against the target's open
    /// definition.
    ///
    /// # Errors
    ///
    /// [`Problem::InvalidGeneratedParameters`] for duplicate or malformed
    /// generated parameter names; [`Problem::ArityMismatch`] when the two
    /// sides cannot be paired totally under the request's mode.
    pub fn compute(target: &TypeDescriptor, request: &GenerationRequest) -> Result<Self, Problem> {
        let generated = &request.generated;
        validate_generated_params(target, request)?;

        let mode = request.policy.mode;
        let mismatch = |supplied: usize| Problem::ArityMismatch {
            target: target.key.clone(),
            generated: generated.display_name(),
            mode,
            target_arity: target.arity(),
            generated_arity: supplied,
        };

        match mode {
            GenerationMode::NonGeneric => {
                if target.arity() != 0 || !generated.type_params.is_empty() {
                    return Err(mismatch(generated.type_params.len()));
                }
                Ok(GenericCorrespondence::Empty)
            }
            GenerationMode::UnboundGeneric => {
                if target.arity() != generated.type_params.len() {
                    return Err(mismatch(generated.type_params.len()));
                }
                if target.arity() == 0 {
                    return Ok(GenericCorrespondence::Empty);
                }
                let pairs = target
                    .type_params
                    .iter()
                    .zip(&generated.type_params)
                    .map(|(t, g)| ParamMapping {
                        target: t.name.clone(),
                        generated: g.clone(),
                    })
                    .collect();
                Ok(GenericCorrespondence::Unbound { pairs })
            }
            GenerationMode::ClosedGeneric => {
                let args = &request.target.args;
                if target.arity() != args.len() {
                    return Err(mismatch(args.len()));
                }
                if target.arity() == 0 {
                    return Ok(GenericCorrespondence::Empty);
                }
                let substitutions = target
                    .type_params
                    .iter()
                    .zip(args)
                    .map(|(t, a)| Substitution {
                        param: t.name.clone(),
                        argument: a.clone(),
                    })
                    .collect();
                Ok(GenericCorrespondence::Closed { substitutions })
            }
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, GenericCorrespondence::Empty)
    }

    pub fn len(&self) -> usize {
        match self {
            GenericCorrespondence::Empty => 0,
            GenericCorrespondence::Unbound { pairs } => pairs.len(),
            GenericCorrespondence::Closed { substitutions } => substitutions.len(),
        }
    }

    /// Replacement text for a target parameter name.
    pub fn lookup(&self, name: &str) -> Option<Cow<'_, str>> {
        match self {
            GenericCorrespondence::Empty => None,
            GenericCorrespondence::Unbound { pairs } => pairs
                .iter()
                .find(|p| p.target == name)
                .map(|p| Cow::Borrowed(p.generated.as_str())),
            GenericCorrespondence::Closed { substitutions } => substitutions
                .iter()
                .find(|s| s.param == name)
                .map(|s| Cow::Owned(s.argument.render())),
        }
    }

    /// Substitute every target parameter in rendered type text.
    ///
    /// Whole identifiers only, all at once: `TKey` is untouched by a `T`
    /// mapping, and `T -> U, U -> T` swaps. Identifiers right after a `.`
    /// are name qualifiers, not parameters, and are left alone.
    pub fn apply(&self, text: &str) -> String {
        if self.is_empty() {
            return text.to_string();
        }
        let mut out = String::with_capacity(text.len());
        let mut rest = text;
        let mut prev: Option<char> = None;
        while let Some(c) = rest.chars().next() {
            if is_ident_char(c) {
                let end = rest
                    .find(|ch: char| !is_ident_char(ch))
                    .unwrap_or(rest.len());
                let token = &rest[..end];
                match self.lookup(token) {
                    Some(replacement) if prev != Some('.') => out.push_str(&replacement),
                    _ => out.push_str(token),
                }
                prev = token.chars().last();
                rest = &rest[end..];
            } else {
                out.push(c);
                prev = Some(c);
                rest = &rest[c.len_utf8()..];
            }
        }
        out
    }

    /// Structural substitution of type-level parameters.
    pub fn substitute(&self, ty: &TypeRef) -> TypeRef {
        if self.is_empty() {
            return ty.clone();
        }
        ty.substitute(&mut |p| self.argument_for(p))
    }

    pub fn substitute_named(&self, named: &NamedType) -> NamedType {
        if self.is_empty() {
            return named.clone();
        }
        named.substitute(&mut |p| self.argument_for(p))
    }

    fn argument_for(&self, param: &ParamRef) -> Option<TypeRef> {
        if param.owner != ParamOwner::Type {
            return None;
        }
        match self {
            GenericCorrespondence::Empty => None,
            GenericCorrespondence::Unbound { pairs } => pairs
                .iter()
                .enumerate()
                .find(|(_, p)| p.target == param.name)
                .map(|(i, p)| {
                    let position = u16::try_from(i).unwrap_or(u16::MAX);
                    TypeRef::type_param(p.generated.clone(), position)
                }),
            GenericCorrespondence::Closed { substitutions } => substitutions
                .iter()
                .find(|s| s.param == param.name)
                .map(|s| s.argument.clone()),
        }
    }
}

fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn validate_generated_params(
    target: &TypeDescriptor,
    request: &GenerationRequest,
) -> Result<(), Problem> {
    let generated = &request.generated;
    let invalid = |reason: String| Problem::InvalidGeneratedParameters {
        target: target.key.clone(),
        generated: generated.display_name(),
        reason,
    };

    for (i, name) in generated.type_params.iter().enumerate() {
        if name.is_empty() || sanitize_identifier(name) != *name {
            return Err(invalid(format!("`{name}` is not a valid identifier")));
        }
        if generated.type_params[..i].contains(name) {
            return Err(invalid(format!("`{name}` is declared more than once")));
        }
    }
    Ok(())
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
