//! Type descriptors and full type definitions.
//!
//! `TypeDescriptor` is the identity-plus-shape snapshot of a type (kind,
//! accessibility, modifiers, generic parameters). `TypeDefinition` adds the
//! structural surface a provider answers for: base type, direct interfaces,
//! declared members.

use bitflags::bitflags;

use crate::{MemberDescriptor, NamedType, TypeKey, TypeRef};

/// Kind of a type definition.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum TypeKind {
    Class,
    Struct,
    Interface,
    Record,
    RecordStruct,
    Enum,
    Delegate,
}

impl TypeKind {
    /// Value types are never inheritable and answer zero-value fallbacks.
    pub fn is_value_type(self) -> bool {
        matches!(self, TypeKind::Struct | TypeKind::RecordStruct | TypeKind::Enum)
    }

    /// Record-like kinds carry compiler-synthesized value equality.
    pub fn is_record(self) -> bool {
        matches!(self, TypeKind::Record | TypeKind::RecordStruct)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TypeKind::Class => "class",
            TypeKind::Struct => "struct",
            TypeKind::Interface => "interface",
            TypeKind::Record => "record",
            TypeKind::RecordStruct => "record struct",
            TypeKind::Enum => "enum",
            TypeKind::Delegate => "delegate",
        }
    }
}

impl std::fmt::Display for TypeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Declared accessibility of a type or member.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Accessibility {
    #[default]
    Public,
    ProtectedInternal,
    Protected,
    Internal,
    PrivateProtected,
    Private,
}

impl Accessibility {
    /// Visible to a derived type in another assembly.
    pub fn is_externally_visible(self) -> bool {
        matches!(
            self,
            Accessibility::Public | Accessibility::Protected | Accessibility::ProtectedInternal
        )
    }

    /// Visible only to code in the declaring assembly (or narrower, for
    /// `private protected`), but not private.
    pub fn is_assembly_scoped(self) -> bool {
        matches!(
            self,
            Accessibility::Internal | Accessibility::PrivateProtected
        )
    }

    /// Whether a generated type may see a type or member with this
    /// accessibility.
    pub fn is_accessible(self, include_internals: bool) -> bool {
        self.is_externally_visible() || (include_internals && self.is_assembly_scoped())
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Accessibility::Public => "public",
            Accessibility::ProtectedInternal => "protected internal",
            Accessibility::Protected => "protected",
            Accessibility::Internal => "internal",
            Accessibility::PrivateProtected => "private protected",
            Accessibility::Private => "private",
        }
    }
}

bitflags! {
    /// Type-level modifiers.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct TypeModifiers: u8 {
        const STATIC = 1 << 0;
        const SEALED = 1 << 1;
        const ABSTRACT = 1 << 2;
    }
}

bitflags! {
    /// Constraints on a generic parameter.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct GenericConstraints: u8 {
        /// `where T : class`
        const REFERENCE_TYPE = 1 << 0;
        /// `where T : class?`
        const NULLABLE_REFERENCE_TYPE = 1 << 1;
        /// `where T : struct`
        const VALUE_TYPE = 1 << 2;
        /// `where T : unmanaged` (implies `struct`)
        const UNMANAGED = 1 << 3;
        /// `where T : notnull`
        const NOT_NULL = 1 << 4;
        /// `where T : new()`
        const DEFAULT_CONSTRUCTOR = 1 << 5;
    }
}

/// A generic parameter declaration on a type or method.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenericParam {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub constraints: GenericConstraints,
    /// Base type and interface bounds.
    #[cfg_attr(feature = "serde", serde(default))]
    pub bounds: Vec<TypeRef>,
}

impl GenericParam {
    pub fn new(name: impl Into<String>) -> Self {
        GenericParam {
            name: name.into(),
            constraints: GenericConstraints::empty(),
            bounds: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_constraints(mut self, constraints: GenericConstraints) -> Self {
        self.constraints = constraints;
        self
    }

    #[must_use]
    pub fn with_bound(mut self, bound: TypeRef) -> Self {
        self.bounds.push(bound);
        self
    }

    /// Known to be instantiated with a value type.
    pub fn is_value_type(&self) -> bool {
        self.constraints
            .intersects(GenericConstraints::VALUE_TYPE | GenericConstraints::UNMANAGED)
    }

    /// Known to be instantiated with a reference type.
    pub fn is_reference_type(&self) -> bool {
        self.constraints.intersects(
            GenericConstraints::REFERENCE_TYPE | GenericConstraints::NULLABLE_REFERENCE_TYPE,
        )
    }

    pub fn has_default_constructor(&self) -> bool {
        self.constraints
            .contains(GenericConstraints::DEFAULT_CONSTRUCTOR)
    }
}

/// Identity and shape of a type, independent of its members.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TypeDescriptor {
    pub key: TypeKey,
    pub kind: TypeKind,
    #[cfg_attr(feature = "serde", serde(default))]
    pub accessibility: Accessibility,
    #[cfg_attr(feature = "serde", serde(default))]
    pub modifiers: TypeModifiers,
    /// Declared type parameters; length equals `key.arity`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub type_params: Vec<GenericParam>,
}

impl TypeDescriptor {
    pub fn new(key: TypeKey, kind: TypeKind) -> Self {
        TypeDescriptor {
            key,
            kind,
            accessibility: Accessibility::Public,
            modifiers: TypeModifiers::empty(),
            type_params: Vec::new(),
        }
    }

    #[inline]
    pub fn arity(&self) -> usize {
        self.type_params.len()
    }

    #[inline]
    pub fn is_sealed(&self) -> bool {
        self.modifiers.contains(TypeModifiers::SEALED)
    }

    #[inline]
    pub fn is_static(&self) -> bool {
        self.modifiers.contains(TypeModifiers::STATIC)
    }

    #[inline]
    pub fn is_interface(&self) -> bool {
        self.kind == TypeKind::Interface
    }

    pub fn type_param(&self, name: &str) -> Option<&GenericParam> {
        self.type_params.iter().find(|p| p.name == name)
    }

    /// Reference to the open definition: arguments are the type's own
    /// parameters, so member signatures keep symbolic parameters.
    pub fn self_reference(&self) -> NamedType {
        let args = self
            .type_params
            .iter()
            .enumerate()
            .map(|(i, p)| TypeRef::type_param(p.name.clone(), position(i)))
            .collect();
        NamedType {
            key: self.key.clone(),
            args,
            is_value_type: self.kind.is_value_type(),
            nullable: false,
        }
    }
}

/// A type's full structural surface as a provider describes it.
#[derive(Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TypeDefinition {
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub descriptor: TypeDescriptor,
    /// Direct base type, expressed in this type's own parameters.
    #[cfg_attr(feature = "serde", serde(default))]
    pub base_type: Option<NamedType>,
    /// Directly implemented (or, for interfaces, extended) interfaces.
    #[cfg_attr(feature = "serde", serde(default))]
    pub interfaces: Vec<NamedType>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub members: Vec<MemberDescriptor>,
}

impl TypeDefinition {
    pub fn new(descriptor: TypeDescriptor) -> Self {
        TypeDefinition {
            descriptor,
            base_type: None,
            interfaces: Vec::new(),
            members: Vec::new(),
        }
    }

    pub fn class(namespace: &str, name: &str) -> Self {
        Self::new(TypeDescriptor::new(
            TypeKey::simple(namespace, name),
            TypeKind::Class,
        ))
    }

    pub fn interface(namespace: &str, name: &str) -> Self {
        Self::new(TypeDescriptor::new(
            TypeKey::simple(namespace, name),
            TypeKind::Interface,
        ))
    }

    pub fn of_kind(namespace: &str, name: &str, kind: TypeKind) -> Self {
        Self::new(TypeDescriptor::new(TypeKey::simple(namespace, name), kind))
    }

    #[inline]
    pub fn key(&self) -> &TypeKey {
        &self.descriptor.key
    }

    /// Declare type parameters; the key's arity follows.
    #[must_use]
    pub fn with_type_params(mut self, params: Vec<GenericParam>) -> Self {
        self.descriptor.key.arity = u16::try_from(params.len()).unwrap_or(u16::MAX);
        self.descriptor.type_params = params;
        self
    }

    #[must_use]
    pub fn with_modifiers(mut self, modifiers: TypeModifiers) -> Self {
        self.descriptor.modifiers |= modifiers;
        self
    }

    #[must_use]
    pub fn with_accessibility(mut self, accessibility: Accessibility) -> Self {
        self.descriptor.accessibility = accessibility;
        self
    }

    #[must_use]
    pub fn with_base(mut self, base: NamedType) -> Self {
        self.base_type = Some(base);
        self
    }

    #[must_use]
    pub fn with_interface(mut self, interface: NamedType) -> Self {
        self.interfaces.push(interface);
        self
    }

    #[must_use]
    pub fn with_member(mut self, member: MemberDescriptor) -> Self {
        self.members.push(member);
        self
    }

    /// Reference to this definition by its own parameters.
    pub fn self_reference(&self) -> NamedType {
        self.descriptor.self_reference()
    }
}

fn position(index: usize) -> u16 {
    u16::try_from(index).unwrap_or(u16::MAX)
}
