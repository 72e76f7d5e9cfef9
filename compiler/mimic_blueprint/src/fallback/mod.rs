//! Return fallbacks for members invoked without an installed override.
//!
//! The boundary between "return a default" and "fail fast" is a product
//! decision, so it sits behind [`FallbackPolicy`]. [`DefaultFallback`] is
//! the stock policy:
//!
//! | Type | Fallback |
//! |------|----------|
//! | `void`, setter-only, event | `Unit` |
//! | value type, `struct`-constrained or unconstrained `T?` | `DefaultValue` |
//! | nullable reference | `Null` |
//! | method-level `T` with `new()` | `NewInstance` |
//! | anything else | `FailFast` |

use std::fmt;

use mimic_ir::{GenericParam, ParamOwner, ParamRef, TypeRef};

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum ReturnFallback {
    /// Nothing to return.
    Unit,
    /// The type's zero value (`default`).
    DefaultValue,
    Null,
    /// A freshly constructed instance (`new T()`).
    NewInstance,
    /// Raise the unmocked-member signal.
    FailFast,
}

impl ReturnFallback {
    pub fn as_str(self) -> &'static str {
        match self {
            ReturnFallback::Unit => "unit",
            ReturnFallback::DefaultValue => "default",
            ReturnFallback::Null => "null",
            ReturnFallback::NewInstance => "new",
            ReturnFallback::FailFast => "fail-fast",
        }
    }
}

impl fmt::Display for ReturnFallback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Generic parameters in scope for a member.
#[derive(Copy, Clone, Debug)]
pub struct FallbackScope<'a> {
    /// The target's type-level parameters.
    pub type_params: &'a [GenericParam],
    /// The member's own parameters.
    pub method_params: &'a [GenericParam],
}

impl<'a> FallbackScope<'a> {
    pub fn new(type_params: &'a [GenericParam], method_params: &'a [GenericParam]) -> Self {
        FallbackScope {
            type_params,
            method_params,
        }
    }

    /// Declaration of a referenced parameter, looked up by name.
    pub fn param(&self, param: &ParamRef) -> Option<&'a GenericParam> {
        let list = match param.owner {
            ParamOwner::Type => self.type_params,
            ParamOwner::Method => self.method_params,
        };
        list.iter().find(|p| p.name == param.name)
    }
}

/// Decides what a member yields when nothing else answers the call.
pub trait FallbackPolicy: Send + Sync {
    /// Fallback for a value of type `ty`. `ty` has already been passed
    /// through the request's correspondence.
    fn fallback(&self, ty: &TypeRef, scope: &FallbackScope<'_>) -> ReturnFallback;
}

#[derive(Copy, Clone, Debug, Default)]
pub struct DefaultFallback;

impl FallbackPolicy for DefaultFallback {
    fn fallback(&self, ty: &TypeRef, scope: &FallbackScope<'_>) -> ReturnFallback {
        match ty {
            TypeRef::Void => ReturnFallback::Unit,
            TypeRef::Named(named) if named.is_value_type => ReturnFallback::DefaultValue,
            TypeRef::Param(param) => param_fallback(param, scope),
            _ if ty.is_nullable() => ReturnFallback::Null,
            _ => ReturnFallback::FailFast,
        }
    }
}

fn param_fallback(param: &ParamRef, scope: &FallbackScope<'_>) -> ReturnFallback {
    let decl = scope.param(param);
    let value_type = decl.is_some_and(GenericParam::is_value_type);
    let reference_type = decl.is_some_and(GenericParam::is_reference_type);

    if value_type {
        return ReturnFallback::DefaultValue;
    }
    if param.nullable {
        return if reference_type {
            ReturnFallback::Null
        } else {
            ReturnFallback::DefaultValue
        };
    }
    if param.owner == ParamOwner::Method && decl.is_some_and(GenericParam::has_default_constructor)
    {
        return ReturnFallback::NewInstance;
    }
    ReturnFallback::FailFast
}

#[cfg(test)]
mod tests;
