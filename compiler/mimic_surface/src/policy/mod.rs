//! Inheritance and root-member decisions shared by every stage.
//!
//! The graph builder and the blueprint builder both ask these functions;
//! neither re-derives the answers locally.

use rustc_hash::FxHashSet;

use mimic_ir::{
    well_known, MemberDescriptor, MemberKind, MemberModifiers, MemberOrigin,
    NamedType, Parameter, SignatureKey, TypeDescriptor, TypeKind, TypeMetadataProvider,
};

use crate::{Priority, ResolvedMember};

/// Kinds a stand-in can be generated for.
pub fn is_supported_kind(kind: TypeKind) -> bool {
    matches!(
        kind,
        TypeKind::Class
            | TypeKind::Record
            | TypeKind::Struct
            | TypeKind::RecordStruct
            | TypeKind::Interface
    )
}

/// Whether a generated type can inherit from `target`.
///
/// Only the type's own shape matters. A class with no overridable member is
/// still inheritable, so the stand-in stays assignable to it.
pub fn is_inheritable(target: &TypeDescriptor) -> bool {
    matches!(target.kind, TypeKind::Class | TypeKind::Record)
        && !target.is_sealed()
        && !target.is_static()
}

/// Whether a resolved member stands for a root-type member.
///
/// True for tier-2 members and for overridable members whose signature
/// matches a root member (an `override ToString()` declared by the target).
pub fn is_root_member(member: &ResolvedMember, root: &RootSurface) -> bool {
    member.priority == Priority::Root
        || (member.member.is_overridable()
            && !member.is_explicit_interface()
            && root.matches(&member.member))
}

/// The virtual members every type inherits from the universal root.
#[derive(Clone, Debug)]
pub struct RootSurface {
    pub declaring_type: NamedType,
    pub members: Vec<MemberDescriptor>,
    keys: FxHashSet<SignatureKey>,
}

impl RootSurface {
    /// Root members from the provider's root definition, or the built-in
    /// `Equals`/`GetHashCode`/`ToString` set when the provider has none.
    pub fn resolve(provider: &dyn TypeMetadataProvider) -> Self {
        let root_key = provider.root_type();
        let declaring_type = NamedType::new(root_key.clone());
        match provider.definition(root_key) {
            Some(def) => {
                let members = def
                    .members
                    .iter()
                    .filter(|m| {
                        m.origin == MemberOrigin::Ordinary
                            && !m.is_static()
                            && m.is_overridable()
                            && m.accessibility.is_externally_visible()
                    })
                    .cloned()
                    .collect();
                Self::new(declaring_type, members)
            }
            None => Self::builtin(declaring_type),
        }
    }

    /// `Equals(object?) -> bool`, `GetHashCode() -> int`, `ToString() -> string?`.
    pub fn builtin(declaring_type: NamedType) -> Self {
        let members = vec![
            MemberDescriptor::method("Equals")
                .with_parameter(Parameter::new("obj", well_known::object().nullable()))
                .returns(well_known::boolean())
                .with_modifiers(MemberModifiers::VIRTUAL),
            MemberDescriptor::method("GetHashCode")
                .returns(well_known::int32())
                .with_modifiers(MemberModifiers::VIRTUAL),
            MemberDescriptor::method("ToString")
                .returns(well_known::string().nullable())
                .with_modifiers(MemberModifiers::VIRTUAL),
        ];
        Self::new(declaring_type, members)
    }

    fn new(declaring_type: NamedType, members: Vec<MemberDescriptor>) -> Self {
        let keys = members.iter().map(SignatureKey::of).collect();
        RootSurface {
            declaring_type,
            members,
            keys,
        }
    }

    /// Signature match against a root member, ignoring nullability.
    pub fn matches(&self, member: &MemberDescriptor) -> bool {
        self.keys.contains(&SignatureKey::of(member).without_interface())
    }
}

/// Decides which root members a target leaves out of tier 2.
pub trait RootMemberFilter: Send + Sync {
    fn excludes(&self, target: &TypeDescriptor, member: &MemberDescriptor) -> bool;
}

/// Records synthesize sealed value equality; `Equals(object)` and
/// `GetHashCode()` cannot be overridden on them.
#[derive(Copy, Clone, Debug, Default)]
pub struct RecordEqualityFilter;

impl RootMemberFilter for RecordEqualityFilter {
    fn excludes(&self, target: &TypeDescriptor, member: &MemberDescriptor) -> bool {
        target.kind.is_record() && is_value_equality(member)
    }
}

fn is_value_equality(member: &MemberDescriptor) -> bool {
    if member.kind != MemberKind::Method || member.generic_arity() != 0 {
        return false;
    }
    match member.name.as_str() {
        "Equals" => member.parameters.len() == 1,
        "GetHashCode" => member.parameters.is_empty(),
        _ => false,
    }
}
