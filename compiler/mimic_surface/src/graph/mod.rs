//! The structural graph of one target type.

use mimic_ir::{MemberDescriptor, NamedType, SignatureKey, TypeDescriptor};

use crate::policy::{self, RootSurface};

/// Priority tier of a resolved member. Lower tiers win deduplication.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Priority {
    /// Declared by the target or one of its base types.
    Declared = 0,
    /// Declared by an interface of an interface target.
    Interface = 1,
    /// Synthesized from the universal root type.
    Root = 2,
}

/// A member that survived qualification, sealing and deduplication.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct ResolvedMember {
    /// The member, expressed in the target's own generic parameters.
    pub member: MemberDescriptor,
    /// Where the member was declared (constructed as seen from the target).
    pub declaring_type: NamedType,
    pub priority: Priority,
    /// Always `false` for members in a graph; sealed members are blocked.
    pub sealed: bool,
    /// Interface overload that cannot be implemented implicitly next to
    /// another member with the same call shape. Its `explicit_interface`
    /// has been set to the declaring interface.
    pub requires_explicit: bool,
    /// Identity key, unique within the graph.
    pub key: SignatureKey,
}

impl ResolvedMember {
    #[inline]
    pub fn name(&self) -> &str {
        &self.member.name
    }

    #[inline]
    pub fn is_explicit_interface(&self) -> bool {
        self.member.is_explicit_interface()
    }
}

/// Base chain, interface closure and resolved members of a target.
///
/// Built over the target's open definition: signatures mention the target's
/// own type parameters symbolically, never placeholders.
#[derive(Clone, Debug)]
pub struct StructuralGraph {
    pub target: TypeDescriptor,
    /// Base types, most-derived first, excluding the root type.
    pub base_types: Vec<NamedType>,
    /// Deduplicated transitive interfaces in deterministic order. Contains
    /// the target itself when the target is an interface.
    pub interfaces: Vec<NamedType>,
    /// Resolved members in resolution order.
    pub members: Vec<ResolvedMember>,
    /// Root members this graph was resolved against.
    pub root: RootSurface,
}

impl StructuralGraph {
    /// Whether a generated type may inherit from the target.
    pub fn is_inheritable(&self) -> bool {
        policy::is_inheritable(&self.target)
    }

    /// Whether `member` must be treated as a root-type member.
    pub fn is_root_member(&self, member: &ResolvedMember) -> bool {
        policy::is_root_member(member, &self.root)
    }

    pub fn members_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a ResolvedMember> {
        self.members.iter().filter(move |m| m.name() == name)
    }

    pub fn members_at(&self, priority: Priority) -> impl Iterator<Item = &ResolvedMember> {
        self.members.iter().filter(move |m| m.priority == priority)
    }
}
