//! Structural graph construction.
//!
//! # Passes
//!
//! 1. **Declared**: the target, then each base type most-derived first. The
//!    first occurrence of a signature wins; sealed members block every later
//!    occurrence of their signature.
//! 2. **Interface** (interface targets only): members of the other
//!    interfaces in the closure. Overloads that cannot coexist as implicit
//!    implementations are turned into explicit-interface members.
//! 3. **Root**: virtual members of the universal root type that nothing
//!    above already supplied, minus what the [`RootMemberFilter`] excludes.
//!
//! Bases from the first inaccessible one upward contribute no members, but
//! their interfaces still belong to the closure.

use std::cmp::Ordering;

use rustc_hash::{FxHashMap, FxHashSet};

use mimic_ir::{
    CallKey, MemberDescriptor, MemberOrigin, NamedType, SignatureKey, TypeDefinition, TypeKey,
    TypeMetadataProvider,
};

use crate::policy::{self, RecordEqualityFilter, RootMemberFilter, RootSurface};
use crate::{MetadataFault, Priority, ResolvedMember, StructuralGraph, SurfaceError};

/// Builds a [`StructuralGraph`] for a target type.
///
/// Holds no state between builds; one builder can serve any number of
/// targets, from any number of threads.
pub struct StructuralGraphBuilder<'a> {
    provider: &'a dyn TypeMetadataProvider,
    root_filter: &'a dyn RootMemberFilter,
}

/// A type definition together with the reference it was reached through.
struct Source<'a> {
    def: &'a TypeDefinition,
    reference: NamedType,
}

impl<'a> StructuralGraphBuilder<'a> {
    pub fn new(provider: &'a dyn TypeMetadataProvider) -> Self {
        StructuralGraphBuilder {
            provider,
            root_filter: &RecordEqualityFilter,
        }
    }

    /// Replace the default [`RecordEqualityFilter`].
    #[must_use]
    pub fn with_root_filter(mut self, filter: &'a dyn RootMemberFilter) -> Self {
        self.root_filter = filter;
        self
    }

    /// Resolve the structural surface of `target`.
    ///
    /// `target` names the open definition; constructed forms of a generic
    /// target share its graph.
    ///
    /// # Errors
    ///
    /// Fails when the target is unknown or of an unsupported kind, or when a
    /// base type or interface reachable from it has no definition.
    #[tracing::instrument(level = "debug", skip_all, fields(target = %target, include_internals = include_internals))]
    pub fn build(
        &self,
        target: &TypeKey,
        include_internals: bool,
    ) -> Result<StructuralGraph, SurfaceError> {
        let def = self
            .provider
            .definition(target)
            .ok_or_else(|| SurfaceError::UnknownTarget {
                target: target.clone(),
            })?;
        if !policy::is_supported_kind(def.descriptor.kind) {
            return Err(SurfaceError::UnsupportedKind {
                target: target.clone(),
                kind: def.descriptor.kind,
            });
        }

        let own = Source {
            def,
            reference: def.self_reference(),
        };
        let bases = self.walk_bases(def, include_internals)?;
        let interfaces = self.collect_interfaces(&own, &bases, include_internals)?;
        let root = RootSurface::resolve(self.provider);

        let mut resolver = MemberResolver::new(include_internals, &interfaces);
        resolver.declared(&own);
        for base in &bases.visible {
            resolver.declared(base);
        }
        if def.descriptor.is_interface() {
            resolver.inherited_interfaces(&interfaces, target);
        }
        resolver.root(&root, def, self.root_filter);

        let graph = StructuralGraph {
            target: def.descriptor.clone(),
            base_types: bases.visible.into_iter().map(|b| b.reference).collect(),
            interfaces: interfaces.into_iter().map(|i| i.reference).collect(),
            members: resolver.members,
            root,
        };
        tracing::debug!(
            bases = graph.base_types.len(),
            interfaces = graph.interfaces.len(),
            members = graph.members.len(),
            "structural graph resolved"
        );
        Ok(graph)
    }

    /// Base types, most-derived first, up to (excluding) the root type.
    ///
    /// The first base not visible under `include_internals` ends the visible
    /// chain. Its ancestors are still walked so their interfaces stay part of
    /// the closure.
    fn walk_bases(
        &self,
        def: &'a TypeDefinition,
        include_internals: bool,
    ) -> Result<BaseChain<'a>, SurfaceError> {
        let target = def.key();
        let root = self.provider.root_type();
        let mut visited = FxHashSet::default();
        visited.insert(target.clone());

        let mut chain = BaseChain::default();
        let mut next = def.base_type.clone();
        while let Some(reference) = next {
            if &reference.key == root {
                break;
            }
            if !visited.insert(reference.key.clone()) {
                return Err(malformed(target, MetadataFault::CyclicBase(reference.key)));
            }
            let Some(base) = self.provider.definition(&reference.key) else {
                return Err(malformed(target, MetadataFault::MissingBase(reference.key)));
            };
            let visible = chain.hidden.is_empty()
                && base.descriptor.accessibility.is_accessible(include_internals);
            if !visible && chain.hidden.is_empty() {
                tracing::debug!(base = %reference.key, "stopping at inaccessible base type");
            }
            next = base
                .base_type
                .as_ref()
                .map(|b| b.substitute(&mut |p| reference.argument_for(p)));
            let source = Source {
                def: base,
                reference,
            };
            if visible {
                chain.visible.push(source);
            } else {
                chain.hidden.push(source);
            }
        }
        Ok(chain)
    }

    /// Transitive interface closure of the target and all of its bases,
    /// visible or not.
    fn collect_interfaces(
        &self,
        own: &Source<'a>,
        bases: &BaseChain<'a>,
        include_internals: bool,
    ) -> Result<Vec<Source<'a>>, SurfaceError> {
        let mut closure = InterfaceClosure {
            provider: self.provider,
            target: own.def.key(),
            include_internals,
            seen: FxHashSet::default(),
            found: Vec::new(),
        };

        if own.def.descriptor.is_interface() {
            closure.seen.insert(own.reference.identity_token());
            closure.found.push(Source {
                def: own.def,
                reference: own.reference.clone(),
            });
        }
        let mut pending: Vec<NamedType> = own.def.interfaces.clone();
        for base in &bases.visible {
            pending.extend(base.interfaces());
        }
        closure.drain(pending)?;

        let reached = closure.found.len();
        closure.drain(bases.hidden.iter().flat_map(Source::interfaces).collect())?;
        for iface in &closure.found[reached..] {
            tracing::warn!(
                interface = %iface.reference.key,
                target = %closure.target,
                "interface reachable only through an inaccessible base type"
            );
        }

        let mut found = closure.found;
        found.sort_by(|a, b| interface_order(&a.reference, &b.reference));
        Ok(found)
    }
}

impl Source<'_> {
    /// Directly implemented interfaces, in terms of this reference's
    /// arguments.
    fn interfaces(&self) -> Vec<NamedType> {
        self.def
            .interfaces
            .iter()
            .map(|i| i.substitute(&mut |p| self.reference.argument_for(p)))
            .collect()
    }
}

/// Base types split at the first inaccessible one.
#[derive(Default)]
struct BaseChain<'a> {
    /// Contribute members and appear in the graph.
    visible: Vec<Source<'a>>,
    /// Contribute interfaces only.
    hidden: Vec<Source<'a>>,
}

/// Worklist state for [`StructuralGraphBuilder::collect_interfaces`].
struct InterfaceClosure<'a> {
    provider: &'a dyn TypeMetadataProvider,
    target: &'a TypeKey,
    include_internals: bool,
    seen: FxHashSet<String>,
    found: Vec<Source<'a>>,
}

impl InterfaceClosure<'_> {
    fn drain(&mut self, mut pending: Vec<NamedType>) -> Result<(), SurfaceError> {
        while let Some(reference) = pending.pop() {
            if !self.seen.insert(reference.identity_token()) {
                continue;
            }
            let Some(iface) = self.provider.definition(&reference.key) else {
                return Err(malformed(
                    self.target,
                    MetadataFault::MissingInterface(reference.key),
                ));
            };
            let source = Source {
                def: iface,
                reference,
            };
            pending.extend(source.interfaces());
            if !iface.descriptor.accessibility.is_accessible(self.include_internals) {
                tracing::warn!(interface = %source.reference.key, "skipping inaccessible interface");
                continue;
            }
            self.found.push(source);
        }
        Ok(())
    }
}

/// Name, then arity, then full rendering.
fn interface_order(a: &NamedType, b: &NamedType) -> Ordering {
    a.key
        .name
        .cmp(&b.key.name)
        .then(a.key.arity.cmp(&b.key.arity))
        .then_with(|| a.render().cmp(&b.render()))
}

fn malformed(target: &TypeKey, fault: MetadataFault) -> SurfaceError {
    SurfaceError::MalformedMetadata {
        target: target.clone(),
        fault,
    }
}

/// Member qualification filter.
///
/// Accessors, constructors, destructors, operators and conversions are
/// represented elsewhere or not at all. Static members never qualify. Private
/// members qualify only as explicit-interface implementations.
fn qualifies(member: &MemberDescriptor, include_internals: bool) -> bool {
    if member.origin != MemberOrigin::Ordinary || member.is_static() {
        return false;
    }
    member.is_explicit_interface() || member.accessibility.is_accessible(include_internals)
}

/// Accumulates resolved members across the three passes.
struct MemberResolver {
    include_internals: bool,
    interface_tokens: FxHashSet<String>,
    seen: FxHashSet<SignatureKey>,
    blocked: FxHashSet<SignatureKey>,
    members: Vec<ResolvedMember>,
}

/// An interface member waiting for the explicit-emission decision.
struct Candidate {
    member: MemberDescriptor,
    declaring_type: NamedType,
    key: SignatureKey,
}

impl MemberResolver {
    fn new(include_internals: bool, interfaces: &[Source<'_>]) -> Self {
        MemberResolver {
            include_internals,
            interface_tokens: interfaces
                .iter()
                .map(|i| i.reference.identity_token())
                .collect(),
            seen: FxHashSet::default(),
            blocked: FxHashSet::default(),
            members: Vec::new(),
        }
    }

    /// Substituted, qualifying members of `source`, with sealed ones
    /// recorded as blockers and filtered out.
    fn qualifying(&mut self, source: &Source<'_>) -> Vec<(MemberDescriptor, SignatureKey)> {
        let mut out = Vec::new();
        for declared in &source.def.members {
            if !qualifies(declared, self.include_internals) {
                continue;
            }
            let member = declared.substitute(&mut |p| source.reference.argument_for(p));
            let key = SignatureKey::of(&member);
            if member.is_sealed() {
                tracing::trace!(
                    member = %member.display_signature(),
                    from = %source.reference.key,
                    "sealed member blocks its signature"
                );
                self.blocked.insert(key);
                continue;
            }
            if let Some(iface) = &member.explicit_interface {
                if !self.interface_tokens.contains(&iface.identity_token()) {
                    tracing::trace!(
                        member = %member.display_signature(),
                        interface = %iface.key,
                        "dropping implementation of an interface outside the surface"
                    );
                    continue;
                }
            }
            out.push((member, key));
        }
        out
    }

    /// Pass 1 step: members declared by the target or one of its bases.
    fn declared(&mut self, source: &Source<'_>) {
        for (member, key) in self.qualifying(source) {
            self.admit(member, source.reference.clone(), Priority::Declared, key);
        }
    }

    /// Pass 2: members contributed by the interfaces of an interface target.
    fn inherited_interfaces(&mut self, interfaces: &[Source<'_>], target: &TypeKey) {
        let declared_calls: FxHashSet<CallKey> =
            self.members.iter().map(|m| m.key.call_key()).collect();

        let mut candidates = Vec::new();
        let mut scoped_seen = FxHashSet::default();
        for source in interfaces.iter().filter(|s| &s.reference.key != target) {
            let interface_token = source.reference.identity_token();
            for (member, key) in self.qualifying(source) {
                if self.seen.contains(&key) || self.blocked.contains(&key) {
                    continue;
                }
                let scoped = SignatureKey {
                    interface: Some(interface_token.clone()),
                    ..key.clone()
                };
                if !scoped_seen.insert(scoped) {
                    continue;
                }
                candidates.push(Candidate {
                    member,
                    declaring_type: source.reference.clone(),
                    key,
                });
            }
        }

        let mut call_counts: FxHashMap<CallKey, usize> = FxHashMap::default();
        for candidate in &candidates {
            *call_counts.entry(candidate.key.call_key()).or_default() += 1;
        }

        for Candidate {
            mut member,
            declaring_type,
            key,
        } in candidates
        {
            let call = key.call_key();
            let collides = declared_calls.contains(&call)
                || call_counts.get(&call).copied().unwrap_or(0) > 1;
            if collides && !member.is_explicit_interface() {
                tracing::debug!(
                    member = %member.name,
                    interface = %declaring_type.key,
                    "ambiguous interface overload requires explicit implementation"
                );
                member.explicit_interface = Some(declaring_type.clone());
                let key = SignatureKey::of(&member);
                if self.admit(member, declaring_type, Priority::Interface, key) {
                    if let Some(last) = self.members.last_mut() {
                        last.requires_explicit = true;
                    }
                }
            } else {
                self.admit(member, declaring_type, Priority::Interface, key);
            }
        }
    }

    /// Pass 3: root-type members not already supplied.
    fn root(&mut self, root: &RootSurface, target: &TypeDefinition, filter: &dyn RootMemberFilter) {
        for member in &root.members {
            if filter.excludes(&target.descriptor, member) {
                tracing::trace!(member = %member.name, "root member excluded by filter");
                continue;
            }
            let key = SignatureKey::of(member);
            self.admit(
                member.clone(),
                root.declaring_type.clone(),
                Priority::Root,
                key,
            );
        }
    }

    /// Add a member unless its key is taken or blocked. Returns whether it
    /// was added.
    fn admit(
        &mut self,
        member: MemberDescriptor,
        declaring_type: NamedType,
        priority: Priority,
        key: SignatureKey,
    ) -> bool {
        if self.blocked.contains(&key) || !self.seen.insert(key.clone()) {
            return false;
        }
        self.members.push(ResolvedMember {
            sealed: member.is_sealed(),
            member,
            declaring_type,
            priority,
            requires_explicit: false,
            key,
        });
        true
    }
}
