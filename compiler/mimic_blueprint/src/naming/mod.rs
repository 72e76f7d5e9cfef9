//! Naming conflict resolution.
//!
//! Every blueprint member gets a generated name, unique within the
//! blueprint, decided once and up front. Members are grouped by their
//! original name; a group of one keeps that name. Larger groups are
//! disambiguated tier by tier, each tier touching only members still in
//! conflict after the previous one:
//!
//! 1. explicit-interface members carry their interface's short name as a
//!    prefix (`IFoo_X`); this applies to groups of one as well
//! 2. generic methods get their method-level arity (`Map_Arity2`)
//! 3. members with parameters get their normalized parameter types
//!    (`Foo_Int32`, `Parse_String_OutInt32`); anything still clashing is
//!    numbered in order (`Foo`, `Foo_2`)
//!
//! A final pass settles clashes between groups. A member still carrying its
//! original name always keeps it, so a generated `Foo_Int32` can never
//! shadow a declared member called `Foo_Int32`, whatever the declaration
//! order; the generated name is numbered instead.

use rustc_hash::{FxHashMap, FxHashSet};

use mimic_ir::{sanitize_identifier, NamedType, Parameter};

use crate::GenericCorrespondence;

/// What the resolver needs to know about one member.
#[derive(Copy, Clone, Debug)]
pub struct NameRequest<'a> {
    pub original: &'a str,
    pub explicit_interface: Option<&'a NamedType>,
    pub generic_arity: usize,
    pub parameters: &'a [Parameter],
}

/// Generated names for `members`, in the same order.
pub fn resolve_names(
    members: &[NameRequest<'_>],
    correspondence: &GenericCorrespondence,
) -> Vec<String> {
    let mut names: Vec<String> = members
        .iter()
        .map(|m| match m.explicit_interface {
            Some(iface) => format!("{}_{}", interface_prefix(iface, correspondence), m.original),
            None => m.original.to_string(),
        })
        .collect();

    for group in groups_by_original_name(members) {
        if group.len() < 2 {
            continue;
        }

        for i in colliding(&group, &names) {
            let arity = members[i].generic_arity;
            if arity > 0 {
                names[i] = format!("{}_Arity{arity}", names[i]);
            }
        }

        for i in colliding(&group, &names) {
            if !members[i].parameters.is_empty() {
                let suffix = parameter_suffix(members[i].parameters, correspondence);
                names[i] = format!("{}_{suffix}", names[i]);
            }
        }

        let mut occurrences: FxHashMap<String, usize> = FxHashMap::default();
        for &i in &group {
            let seen = occurrences.entry(names[i].clone()).or_insert(0);
            *seen += 1;
            if *seen > 1 {
                names[i] = format!("{}_{}", names[i], *seen);
            }
        }
    }

    ensure_unique(&mut names, members);
    names
}

/// Short, namespace- and argument-free interface name, passed through the
/// correspondence.
pub fn interface_prefix(iface: &NamedType, correspondence: &GenericCorrespondence) -> String {
    correspondence.apply(&sanitize_identifier(&iface.key.name))
}

/// Underscore-joined normalized parameter types, with `Ref`/`Out`/`In`
/// prefixes for by-reference parameters.
pub fn parameter_suffix(parameters: &[Parameter], correspondence: &GenericCorrespondence) -> String {
    parameters
        .iter()
        .map(|p| {
            format!(
                "{}{}",
                p.modifier.suffix_prefix(),
                correspondence.substitute(&p.ty).normalized_name()
            )
        })
        .collect::<Vec<_>>()
        .join("_")
}

/// Member indices grouped by original name, groups in first-seen order.
fn groups_by_original_name(members: &[NameRequest<'_>]) -> Vec<Vec<usize>> {
    let mut slots: FxHashMap<&str, usize> = FxHashMap::default();
    let mut groups: Vec<Vec<usize>> = Vec::new();
    for (i, member) in members.iter().enumerate() {
        let slot = *slots.entry(member.original).or_insert_with(|| {
            groups.push(Vec::new());
            groups.len() - 1
        });
        groups[slot].push(i);
    }
    groups
}

/// Indices in `group` whose current name is shared with another member of
/// the group.
fn colliding(group: &[usize], names: &[String]) -> Vec<usize> {
    let mut counts: FxHashMap<&str, usize> = FxHashMap::default();
    for &i in group {
        *counts.entry(names[i].as_str()).or_default() += 1;
    }
    group
        .iter()
        .copied()
        .filter(|&i| counts.get(names[i].as_str()).copied().unwrap_or(0) > 1)
        .collect()
}

/// Number generated names that clash across groups.
///
/// A member whose name is still its original name keeps it; only names the
/// tiers produced are numbered, in member order.
fn ensure_unique(names: &mut [String], members: &[NameRequest<'_>]) {
    let assigned: FxHashSet<String> = names.iter().cloned().collect();
    let kept: Vec<bool> = names
        .iter()
        .zip(members)
        .map(|(name, m)| name == m.original)
        .collect();
    let mut taken: FxHashSet<String> = names
        .iter()
        .zip(&kept)
        .filter(|(_, kept)| **kept)
        .map(|(name, _)| name.clone())
        .collect();

    for (name, kept) in names.iter_mut().zip(kept) {
        if kept || taken.insert(name.clone()) {
            continue;
        }
        let mut n = 2usize;
        let unique = loop {
            let candidate = format!("{name}_{n}");
            if !assigned.contains(&candidate) && !taken.contains(&candidate) {
                break candidate;
            }
            n += 1;
        };
        tracing::trace!(from = %name, to = %unique, "renamed to keep names unique");
        taken.insert(unique.clone());
        *name = unique;
    }
}
