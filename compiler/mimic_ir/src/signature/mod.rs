//! Structural member identity.
//!
//! Reflective member handles are not comparable across independently built
//! descriptions, so identity is computed from structure: kind, name,
//! method-level arity, parameter passing and types, return type, and the
//! explicit-interface target. Nullable annotations never participate.
//!
//! Two keys exist:
//! - [`SignatureKey`]: full identity, used to deduplicate the member universe.
//! - [`CallKey`]: the part a caller can observe (no return type, no
//!   interface), used to find members that cannot coexist as implicit
//!   implementations on one type.

use smallvec::SmallVec;

use crate::{MemberDescriptor, MemberKind};

/// One parameter's contribution to a key.
#[derive(Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
pub struct ParamToken {
    pub by_ref: bool,
    pub ty: String,
}

/// Parameter list of a key; most members have few parameters.
pub type ParamTokens = SmallVec<[ParamToken; 4]>;

/// Full structural identity of a member.
#[derive(Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
pub struct SignatureKey {
    pub kind: MemberKind,
    pub name: String,
    pub generic_arity: usize,
    pub params: ParamTokens,
    pub return_token: String,
    /// Identity token of the explicit-interface target.
    pub interface: Option<String>,
}

/// Caller-observable shape of a member.
#[derive(Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
pub struct CallKey {
    pub kind: MemberKind,
    pub name: String,
    pub generic_arity: usize,
    pub params: ParamTokens,
}

impl SignatureKey {
    pub fn of(member: &MemberDescriptor) -> Self {
        SignatureKey {
            kind: member.kind,
            name: member.name.clone(),
            generic_arity: member.generic_arity(),
            params: param_tokens(member),
            return_token: member.return_type.identity_token(),
            interface: member
                .explicit_interface
                .as_ref()
                .map(crate::NamedType::identity_token),
        }
    }

    /// Same key with the explicit-interface target dropped.
    #[must_use]
    pub fn without_interface(&self) -> SignatureKey {
        SignatureKey {
            interface: None,
            ..self.clone()
        }
    }

    pub fn call_key(&self) -> CallKey {
        CallKey {
            kind: self.kind,
            name: self.name.clone(),
            generic_arity: self.generic_arity,
            params: self.params.clone(),
        }
    }
}

impl CallKey {
    pub fn of(member: &MemberDescriptor) -> Self {
        CallKey {
            kind: member.kind,
            name: member.name.clone(),
            generic_arity: member.generic_arity(),
            params: param_tokens(member),
        }
    }
}

fn param_tokens(member: &MemberDescriptor) -> ParamTokens {
    member
        .parameters
        .iter()
        .map(|p| ParamToken {
            by_ref: p.modifier.is_by_ref(),
            ty: p.ty.identity_token(),
        })
        .collect()
}

#[cfg(test)]
mod tests;
