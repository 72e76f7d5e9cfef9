//! Member descriptors.
//!
//! A `MemberDescriptor` is an immutable snapshot of one declared member:
//! method, property, indexer or event. The builder-style constructors exist
//! for providers and tests; nothing mutates a descriptor once it is handed to
//! the graph builder.

use bitflags::bitflags;

use crate::{Accessibility, GenericParam, NamedType, ParamRef, TypeRef};

/// Member category.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum MemberKind {
    Method,
    Property,
    Indexer,
    Event,
}

impl MemberKind {
    pub fn as_str(self) -> &'static str {
        match self {
            MemberKind::Method => "method",
            MemberKind::Property => "property",
            MemberKind::Indexer => "indexer",
            MemberKind::Event => "event",
        }
    }
}

/// How a member came to exist in metadata.
///
/// Only `Ordinary` members are candidates for the structural surface;
/// accessor methods are represented by their owning property or event.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum MemberOrigin {
    #[default]
    Ordinary,
    /// Compiler-synthesized property/event accessor (`get_X`, `add_X`).
    Accessor,
    Constructor,
    Destructor,
    Operator,
    Conversion,
}

bitflags! {
    /// Member modifiers relevant to overriding.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct MemberModifiers: u8 {
        const VIRTUAL = 1 << 0;
        const ABSTRACT = 1 << 1;
        const OVERRIDE = 1 << 2;
        const SEALED = 1 << 3;
        const STATIC = 1 << 4;
        /// Hides an inherited member (`new`).
        const NEW = 1 << 5;
    }
}

bitflags! {
    /// Accessors present on a property, indexer or event.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Accessors: u8 {
        const GET = 1 << 0;
        const SET = 1 << 1;
        const INIT = 1 << 2;
        const ADD = 1 << 3;
        const REMOVE = 1 << 4;
    }
}

/// Parameter passing modifier.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum ParamModifier {
    #[default]
    None,
    Ref,
    Out,
    In,
    Params,
}

impl ParamModifier {
    /// `ref`, `out` and `in` all pass by reference.
    pub fn is_by_ref(self) -> bool {
        matches!(self, ParamModifier::Ref | ParamModifier::Out | ParamModifier::In)
    }

    /// Prefix used in disambiguation suffixes (`RefInt32`).
    pub fn suffix_prefix(self) -> &'static str {
        match self {
            ParamModifier::None | ParamModifier::Params => "",
            ParamModifier::Ref => "Ref",
            ParamModifier::Out => "Out",
            ParamModifier::In => "In",
        }
    }

    pub fn keyword(self) -> Option<&'static str> {
        match self {
            ParamModifier::None => None,
            ParamModifier::Ref => Some("ref"),
            ParamModifier::Out => Some("out"),
            ParamModifier::In => Some("in"),
            ParamModifier::Params => Some("params"),
        }
    }
}

/// A declared parameter.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Parameter {
    pub name: String,
    pub ty: TypeRef,
    #[cfg_attr(feature = "serde", serde(default))]
    pub modifier: ParamModifier,
    #[cfg_attr(feature = "serde", serde(default))]
    pub has_default: bool,
}

impl Parameter {
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Parameter {
            name: name.into(),
            ty,
            modifier: ParamModifier::None,
            has_default: false,
        }
    }

    #[must_use]
    pub fn with_modifier(mut self, modifier: ParamModifier) -> Self {
        self.modifier = modifier;
        self
    }
}

/// One declared member of a type.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MemberDescriptor {
    pub kind: MemberKind,
    /// Unqualified name. Indexers are named `Item`.
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub origin: MemberOrigin,
    #[cfg_attr(feature = "serde", serde(default))]
    pub parameters: Vec<Parameter>,
    /// Method return type, property/indexer type, or event delegate type.
    #[cfg_attr(feature = "serde", serde(default = "void"))]
    pub return_type: TypeRef,
    #[cfg_attr(feature = "serde", serde(default))]
    pub returns_by_ref: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub accessibility: Accessibility,
    #[cfg_attr(feature = "serde", serde(default))]
    pub modifiers: MemberModifiers,
    #[cfg_attr(feature = "serde", serde(default))]
    pub accessors: Accessors,
    /// Method-level generic parameters.
    #[cfg_attr(feature = "serde", serde(default))]
    pub type_params: Vec<GenericParam>,
    /// Interface this member explicitly implements, if any.
    #[cfg_attr(feature = "serde", serde(default))]
    pub explicit_interface: Option<NamedType>,
}

#[cfg(feature = "serde")]
fn void() -> TypeRef {
    TypeRef::Void
}

impl MemberDescriptor {
    fn new(kind: MemberKind, name: impl Into<String>, return_type: TypeRef) -> Self {
        MemberDescriptor {
            kind,
            name: name.into(),
            origin: MemberOrigin::Ordinary,
            parameters: Vec::new(),
            return_type,
            returns_by_ref: false,
            accessibility: Accessibility::Public,
            modifiers: MemberModifiers::empty(),
            accessors: Accessors::empty(),
            type_params: Vec::new(),
            explicit_interface: None,
        }
    }

    /// A `void` method.
    pub fn method(name: impl Into<String>) -> Self {
        Self::new(MemberKind::Method, name, TypeRef::Void)
    }

    /// A get/set property.
    pub fn property(name: impl Into<String>, ty: TypeRef) -> Self {
        let mut member = Self::new(MemberKind::Property, name, ty);
        member.accessors = Accessors::GET | Accessors::SET;
        member
    }

    /// A get/set indexer named `Item`.
    pub fn indexer(ty: TypeRef, parameters: Vec<Parameter>) -> Self {
        let mut member = Self::new(MemberKind::Indexer, "Item", ty);
        member.accessors = Accessors::GET | Accessors::SET;
        member.parameters = parameters;
        member
    }

    /// An event with add/remove accessors.
    pub fn event(name: impl Into<String>, handler: TypeRef) -> Self {
        let mut member = Self::new(MemberKind::Event, name, handler);
        member.accessors = Accessors::ADD | Accessors::REMOVE;
        member
    }

    #[must_use]
    pub fn returns(mut self, ty: TypeRef) -> Self {
        self.return_type = ty;
        self
    }

    #[must_use]
    pub fn param(mut self, name: impl Into<String>, ty: TypeRef) -> Self {
        self.parameters.push(Parameter::new(name, ty));
        self
    }

    #[must_use]
    pub fn with_parameter(mut self, parameter: Parameter) -> Self {
        self.parameters.push(parameter);
        self
    }

    #[must_use]
    pub fn with_type_param(mut self, param: GenericParam) -> Self {
        self.type_params.push(param);
        self
    }

    #[must_use]
    pub fn with_modifiers(mut self, modifiers: MemberModifiers) -> Self {
        self.modifiers |= modifiers;
        self
    }

    #[must_use]
    pub fn with_accessibility(mut self, accessibility: Accessibility) -> Self {
        self.accessibility = accessibility;
        self
    }

    #[must_use]
    pub fn with_accessors(mut self, accessors: Accessors) -> Self {
        self.accessors = accessors;
        self
    }

    #[must_use]
    pub fn with_origin(mut self, origin: MemberOrigin) -> Self {
        self.origin = origin;
        self
    }

    /// Mark as an explicit implementation of `interface`. Explicit
    /// implementations are private in metadata.
    #[must_use]
    pub fn implementing(mut self, interface: NamedType) -> Self {
        self.explicit_interface = Some(interface);
        self.accessibility = Accessibility::Private;
        self
    }

    #[inline]
    pub fn is_static(&self) -> bool {
        self.modifiers.contains(MemberModifiers::STATIC)
    }

    #[inline]
    pub fn is_sealed(&self) -> bool {
        self.modifiers.contains(MemberModifiers::SEALED)
    }

    /// Can be overridden by a derived type: virtual, abstract, or an
    /// override that is not sealed.
    pub fn is_overridable(&self) -> bool {
        !self.is_sealed()
            && !self.is_static()
            && self.modifiers.intersects(
                MemberModifiers::VIRTUAL | MemberModifiers::ABSTRACT | MemberModifiers::OVERRIDE,
            )
    }

    #[inline]
    pub fn is_explicit_interface(&self) -> bool {
        self.explicit_interface.is_some()
    }

    /// Method-level generic arity.
    #[inline]
    pub fn generic_arity(&self) -> usize {
        self.type_params.len()
    }

    /// Whether invoking the member yields a value: non-void methods,
    /// readable properties and indexers. Events never do.
    pub fn produces_value(&self) -> bool {
        match self.kind {
            MemberKind::Method => !self.return_type.is_void(),
            MemberKind::Property | MemberKind::Indexer => {
                self.accessors.contains(Accessors::GET) && !self.return_type.is_void()
            }
            MemberKind::Event => false,
        }
    }

    /// Copy with every type reference passed through `f`.
    ///
    /// Covers parameters, return type, method type-parameter bounds and the
    /// explicit-interface target. Used to express members inherited from a
    /// constructed base or interface in the inheriting type's own parameters.
    #[must_use]
    pub fn substitute<F>(&self, f: &mut F) -> MemberDescriptor
    where
        F: FnMut(&ParamRef) -> Option<TypeRef>,
    {
        MemberDescriptor {
            parameters: self
                .parameters
                .iter()
                .map(|p| Parameter {
                    ty: p.ty.substitute(f),
                    ..p.clone()
                })
                .collect(),
            return_type: self.return_type.substitute(f),
            type_params: self
                .type_params
                .iter()
                .map(|tp| GenericParam {
                    bounds: tp.bounds.iter().map(|b| b.substitute(f)).collect(),
                    ..tp.clone()
                })
                .collect(),
            explicit_interface: self.explicit_interface.as_ref().map(|i| i.substitute(f)),
            ..self.clone()
        }
    }

    /// Human-readable signature, e.g. `Foo<T>(System.Int32, ref T)`.
    pub fn display_signature(&self) -> String {
        let mut out = self.name.clone();
        if !self.type_params.is_empty() {
            let names: Vec<&str> = self.type_params.iter().map(|p| p.name.as_str()).collect();
            out.push('<');
            out.push_str(&names.join(", "));
            out.push('>');
        }
        if self.kind == MemberKind::Method || !self.parameters.is_empty() {
            let (open, close) = if self.kind == MemberKind::Indexer {
                ('[', ']')
            } else {
                ('(', ')')
            };
            out.push(open);
            let params: Vec<String> = self
                .parameters
                .iter()
                .map(|p| match p.modifier.keyword() {
                    Some(kw) => format!("{kw} {}", p.ty.render()),
                    None => p.ty.render(),
                })
                .collect();
            out.push_str(&params.join(", "));
            out.push(close);
        }
        out
    }
}
