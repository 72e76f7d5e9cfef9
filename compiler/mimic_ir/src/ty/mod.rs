//! Symbolic type references.
//!
//! A `TypeRef` is what member signatures, base types and interface lists are
//! made of. References stay symbolic all the way to the emitter: generic
//! parameters remain `Param` nodes and are only replaced through explicit
//! substitution (structural, via [`TypeRef::substitute`]) or through a
//! correspondence applied to rendered text.
//!
//! # Nullability
//!
//! The `nullable` flag is an annotation on reference types (`string?`). A
//! nullable value type is not a flag; it is the value type
//! `System.Nullable<T>`. Identity comparisons ignore the annotation (see
//! [`TypeRef::identity_token`]).

mod render;

pub use render::sanitize_identifier;

use std::collections::BTreeSet;

use crate::TypeKey;

/// A reference to a type as it appears in a signature.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "kind", rename_all = "snake_case")
)]
pub enum TypeRef {
    /// No value (`void` return, event accessor result).
    Void,
    /// A class, struct, interface or delegate, possibly constructed.
    Named(NamedType),
    /// A generic parameter of the enclosing type or method.
    Param(ParamRef),
    /// A single- or multi-dimensional array.
    Array(ArrayType),
}

/// A reference to a named type definition with its type arguments.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NamedType {
    pub key: TypeKey,
    /// Type arguments; empty for non-generic types and open definitions
    /// referenced by key only.
    #[cfg_attr(feature = "serde", serde(default))]
    pub args: Vec<TypeRef>,
    /// Whether the definition is a value type (struct, enum, record struct).
    #[cfg_attr(feature = "serde", serde(default))]
    pub is_value_type: bool,
    /// Nullable reference annotation.
    #[cfg_attr(feature = "serde", serde(default))]
    pub nullable: bool,
}

/// Which declaration owns a generic parameter.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum ParamOwner {
    Type,
    Method,
}

/// A reference to a generic parameter.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParamRef {
    pub name: String,
    pub owner: ParamOwner,
    /// Zero-based position in the owner's parameter list.
    #[cfg_attr(feature = "serde", serde(default))]
    pub position: u16,
    #[cfg_attr(feature = "serde", serde(default))]
    pub nullable: bool,
}

/// An array type.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArrayType {
    pub element: Box<TypeRef>,
    #[cfg_attr(feature = "serde", serde(default = "default_rank"))]
    pub rank: u8,
    #[cfg_attr(feature = "serde", serde(default))]
    pub nullable: bool,
}

#[cfg(feature = "serde")]
fn default_rank() -> u8 {
    1
}

impl NamedType {
    pub fn new(key: TypeKey) -> Self {
        NamedType {
            key,
            args: Vec::new(),
            is_value_type: false,
            nullable: false,
        }
    }

    /// A value-type reference (struct, enum, record struct).
    pub fn value(key: TypeKey) -> Self {
        NamedType {
            is_value_type: true,
            ..Self::new(key)
        }
    }

    #[must_use]
    pub fn with_args(mut self, args: Vec<TypeRef>) -> Self {
        self.args = args;
        self
    }

    /// Simple name without namespace or type arguments.
    pub fn short_name(&self) -> &str {
        &self.key.name
    }

    pub fn render(&self) -> String {
        TypeRef::Named(self.clone()).render()
    }

    pub fn render_short(&self) -> String {
        TypeRef::Named(self.clone()).render_short()
    }

    /// Nullability-erased rendering, used for identity comparisons.
    pub fn identity_token(&self) -> String {
        TypeRef::Named(self.clone()).identity_token()
    }

    /// The argument this reference supplies for a type-level parameter of
    /// its definition, if it supplies one.
    ///
    /// Open definitions supply nothing, so their members keep their own
    /// symbolic parameters.
    pub fn argument_for(&self, param: &ParamRef) -> Option<TypeRef> {
        if param.owner != ParamOwner::Type {
            return None;
        }
        self.args.get(usize::from(param.position)).cloned()
    }

    /// Substitute parameters inside the type arguments.
    #[must_use]
    pub fn substitute<F>(&self, f: &mut F) -> NamedType
    where
        F: FnMut(&ParamRef) -> Option<TypeRef>,
    {
        NamedType {
            key: self.key.clone(),
            args: self.args.iter().map(|a| a.substitute(f)).collect(),
            is_value_type: self.is_value_type,
            nullable: self.nullable,
        }
    }
}

impl From<NamedType> for TypeRef {
    fn from(named: NamedType) -> Self {
        TypeRef::Named(named)
    }
}

impl TypeRef {
    /// Reference type by key.
    pub fn named(key: TypeKey) -> Self {
        TypeRef::Named(NamedType::new(key))
    }

    /// Value type by key.
    pub fn value(key: TypeKey) -> Self {
        TypeRef::Named(NamedType::value(key))
    }

    /// Type-level generic parameter.
    pub fn type_param(name: impl Into<String>, position: u16) -> Self {
        TypeRef::Param(ParamRef {
            name: name.into(),
            owner: ParamOwner::Type,
            position,
            nullable: false,
        })
    }

    /// Method-level generic parameter.
    pub fn method_param(name: impl Into<String>, position: u16) -> Self {
        TypeRef::Param(ParamRef {
            name: name.into(),
            owner: ParamOwner::Method,
            position,
            nullable: false,
        })
    }

    /// Single-dimensional array of `element`.
    pub fn array(element: TypeRef) -> Self {
        TypeRef::Array(ArrayType {
            element: Box::new(element),
            rank: 1,
            nullable: false,
        })
    }

    /// The same reference with the nullable annotation set.
    ///
    /// No-op on `Void`. On value types the flag is ignored by every query;
    /// use `System.Nullable<T>` for nullable value types.
    #[must_use]
    pub fn nullable(self) -> Self {
        self.with_nullable(true)
    }

    #[must_use]
    pub fn with_nullable(self, nullable: bool) -> Self {
        match self {
            TypeRef::Void => TypeRef::Void,
            TypeRef::Named(mut n) => {
                n.nullable = nullable;
                TypeRef::Named(n)
            }
            TypeRef::Param(mut p) => {
                p.nullable = nullable;
                TypeRef::Param(p)
            }
            TypeRef::Array(mut a) => {
                a.nullable = nullable;
                TypeRef::Array(a)
            }
        }
    }

    #[inline]
    pub fn is_void(&self) -> bool {
        matches!(self, TypeRef::Void)
    }

    /// Named value type. Generic parameters answer `false` here; their
    /// value-ness depends on constraints the caller must consult.
    pub fn is_value_type(&self) -> bool {
        matches!(self, TypeRef::Named(n) if n.is_value_type)
    }

    /// Nullable reference annotation present.
    pub fn is_nullable(&self) -> bool {
        match self {
            TypeRef::Void => false,
            TypeRef::Named(n) => n.nullable && !n.is_value_type,
            TypeRef::Param(p) => p.nullable,
            TypeRef::Array(a) => a.nullable,
        }
    }

    /// The generic parameter this reference names, if any.
    pub fn as_param(&self) -> Option<&ParamRef> {
        match self {
            TypeRef::Param(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_named(&self) -> Option<&NamedType> {
        match self {
            TypeRef::Named(n) => Some(n),
            _ => None,
        }
    }

    /// Copy with every nullable annotation removed, recursively.
    #[must_use]
    pub fn erase_nullability(&self) -> TypeRef {
        match self {
            TypeRef::Void => TypeRef::Void,
            TypeRef::Named(n) => TypeRef::Named(NamedType {
                key: n.key.clone(),
                args: n.args.iter().map(TypeRef::erase_nullability).collect(),
                is_value_type: n.is_value_type,
                nullable: false,
            }),
            TypeRef::Param(p) => TypeRef::Param(ParamRef {
                nullable: false,
                ..p.clone()
            }),
            TypeRef::Array(a) => TypeRef::Array(ArrayType {
                element: Box::new(a.element.erase_nullability()),
                rank: a.rank,
                nullable: false,
            }),
        }
    }

    /// Structural substitution of generic parameters.
    ///
    /// `f` returns the replacement for a parameter, or `None` to keep it. A
    /// nullable parameter replaced by a reference type keeps its annotation.
    #[must_use]
    pub fn substitute<F>(&self, f: &mut F) -> TypeRef
    where
        F: FnMut(&ParamRef) -> Option<TypeRef>,
    {
        match self {
            TypeRef::Void => TypeRef::Void,
            TypeRef::Named(n) => TypeRef::Named(n.substitute(f)),
            TypeRef::Param(p) => match f(p) {
                Some(replacement) if p.nullable && !replacement.is_value_type() => {
                    replacement.nullable()
                }
                Some(replacement) => replacement,
                None => self.clone(),
            },
            TypeRef::Array(a) => TypeRef::Array(ArrayType {
                element: Box::new(a.element.substitute(f)),
                rank: a.rank,
                nullable: a.nullable,
            }),
        }
    }

    /// Add every namespace this reference mentions to `out`.
    pub fn collect_namespaces(&self, out: &mut BTreeSet<String>) {
        match self {
            TypeRef::Void | TypeRef::Param(_) => {}
            TypeRef::Named(n) => {
                if !n.key.namespace.is_empty() {
                    out.insert(n.key.namespace.clone());
                }
                for arg in &n.args {
                    arg.collect_namespaces(out);
                }
            }
            TypeRef::Array(a) => a.element.collect_namespaces(out),
        }
    }
}

impl std::fmt::Display for TypeRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}
