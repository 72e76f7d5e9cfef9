//! Per-member implementation strategy.

use std::fmt;

use mimic_surface::{ResolvedMember, StructuralGraph};

/// How a generated member relates to the member it mirrors.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum ImplementationStrategy {
    /// `override` of an inherited virtual or abstract member.
    Override,
    /// `new` member hiding a non-overridable inherited one.
    Hide,
    /// Plain public member satisfying an interface implicitly.
    InterfaceOnly,
    /// Explicit implementation, reachable only through the interface.
    ExplicitInterface,
}

impl ImplementationStrategy {
    /// Decide the strategy for `member` of `graph`.
    ///
    /// Rules apply in order:
    /// 1. explicit-interface members are implemented explicitly
    /// 2. root-type members are overridden
    /// 3. without inheritance, everything else is interface-only
    /// 4. overridable members are overridden, the rest hidden
    pub fn decide(graph: &StructuralGraph, member: &ResolvedMember, inherits: bool) -> Self {
        if member.is_explicit_interface() {
            ImplementationStrategy::ExplicitInterface
        } else if graph.is_root_member(member) {
            ImplementationStrategy::Override
        } else if !inherits {
            ImplementationStrategy::InterfaceOnly
        } else if member.member.is_overridable() {
            ImplementationStrategy::Override
        } else {
            ImplementationStrategy::Hide
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ImplementationStrategy::Override => "override",
            ImplementationStrategy::Hide => "hide",
            ImplementationStrategy::InterfaceOnly => "interface-only",
            ImplementationStrategy::ExplicitInterface => "explicit-interface",
        }
    }
}

impl fmt::Display for ImplementationStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests;
