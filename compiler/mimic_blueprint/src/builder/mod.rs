//! Blueprint construction.
//!
//! [`BlueprintBuilder::build`] turns a structural graph and a request into
//! a [`Blueprint`]. The steps run strictly in order, each reading only what
//! earlier steps produced:
//!
//! 1. generic correspondence
//! 2. inheritance decision
//! 3. interface list
//! 4. member conversion, symbolic types kept
//! 5. correspondence stamping
//! 6. naming conflict resolution
//! 7. implementation strategy
//! 8. return fallbacks
//! 9. exclusion filter
//! 10. namespace aggregation
//!
//! Exclusion runs after naming so that excluding a member never renames a
//! surviving one.

use std::collections::BTreeSet;

use mimic_ir::{GenericParam, TypeRef};
use mimic_surface::{ResolvedMember, StructuralGraph};

use crate::blueprint::generated_type_params;
use crate::naming::{self, NameRequest};
use crate::{
    Blueprint, BlueprintMember, BlueprintParameter, DefaultFallback, FallbackPolicy,
    FallbackScope, GenerationRequest, GenericCorrespondence, ImplementationStrategy, Problem,
    ReturnFallback,
};

/// Builds blueprints from structural graphs.
///
/// Holds no state beyond the fallback policy; one builder may serve any
/// number of requests, from any number of threads.
#[derive(Copy, Clone)]
pub struct BlueprintBuilder<'a> {
    fallback: &'a dyn FallbackPolicy,
}

impl Default for BlueprintBuilder<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> BlueprintBuilder<'a> {
    /// Builder using [`DefaultFallback`].
    pub fn new() -> Self {
        BlueprintBuilder {
            fallback: &DefaultFallback,
        }
    }

    #[must_use]
    pub fn with_fallback_policy(mut self, policy: &'a dyn FallbackPolicy) -> Self {
        self.fallback = policy;
        self
    }

    /// Resolve `graph` into a blueprint for `request`.
    ///
    /// # Errors
    ///
    /// Fails when the generic correspondence cannot be computed: an arity
    /// mismatch under the request's mode, or invalid generated parameters.
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(target = %graph.target.key, generated = %request.generated)
    )]
    pub fn build(
        &self,
        graph: &StructuralGraph,
        request: &GenerationRequest,
    ) -> Result<Blueprint, Problem> {
        let correspondence = GenericCorrespondence::compute(&graph.target, request)?;
        let inherits = graph.is_inheritable();
        let interfaces = graph.interfaces.clone();
        tracing::debug!(
            inherits,
            interfaces = interfaces.len(),
            correspondence = correspondence.len(),
            "blueprint shape decided"
        );

        let requests: Vec<NameRequest<'_>> = graph
            .members
            .iter()
            .map(|resolved| NameRequest {
                original: &resolved.member.name,
                explicit_interface: resolved.member.explicit_interface.as_ref(),
                generic_arity: resolved.member.generic_arity(),
                parameters: &resolved.member.parameters,
            })
            .collect();
        let names = naming::resolve_names(&requests, &correspondence);

        let generated_params =
            generated_type_params(&graph.target, &request.generated, &correspondence);
        let scope_params: &[GenericParam] = match correspondence {
            GenericCorrespondence::Unbound { .. } => &generated_params,
            _ => &graph.target.type_params,
        };

        let mut members: Vec<BlueprintMember> = graph
            .members
            .iter()
            .zip(names)
            .map(|(resolved, generated_name)| {
                let member = convert(resolved, &correspondence, generated_name);
                let strategy = ImplementationStrategy::decide(graph, resolved, inherits);
                self.with_fallbacks(BlueprintMember { strategy, ..member }, scope_params)
            })
            .collect();

        let excluded = &request.policy.excluded;
        if !excluded.is_empty() {
            members.retain(|m| {
                let keep = !excluded.contains(&m.original_name);
                if !keep {
                    tracing::debug!(member = %m.generated_name, "excluded by policy");
                }
                keep
            });
        }

        let mut blueprint = Blueprint {
            target: graph.target.clone(),
            generated: request.generated.clone(),
            inherits,
            interfaces,
            members,
            correspondence,
            namespaces: BTreeSet::new(),
        };
        blueprint.namespaces = collect_namespaces(&blueprint);
        tracing::debug!(members = blueprint.members.len(), "blueprint resolved");
        Ok(blueprint)
    }

    fn with_fallbacks(
        &self,
        mut member: BlueprintMember,
        type_params: &[GenericParam],
    ) -> BlueprintMember {
        let scope = FallbackScope::new(type_params, &member.type_params);
        let fallback = if member.produces_value() {
            self.fallback
                .fallback(&member.resolve_type(&member.return_type), &scope)
        } else {
            ReturnFallback::Unit
        };
        let out_fallbacks: Vec<_> = member
            .parameters
            .iter()
            .map(|p| {
                p.is_out()
                    .then(|| self.fallback.fallback(&member.resolve_type(&p.ty), &scope))
            })
            .collect();

        member.fallback = fallback;
        for (param, out) in member.parameters.iter_mut().zip(out_fallbacks) {
            param.fallback = out;
        }
        member
    }
}

/// Symbolic copy of a resolved member, stamped with the correspondence.
/// Strategy and fallbacks are placeholders until their steps run.
fn convert(
    resolved: &ResolvedMember,
    correspondence: &GenericCorrespondence,
    generated_name: String,
) -> BlueprintMember {
    let member = &resolved.member;
    BlueprintMember {
        generated_name,
        original_name: member.name.clone(),
        kind: member.kind,
        declaring_type: resolved.declaring_type.clone(),
        priority: resolved.priority,
        strategy: ImplementationStrategy::InterfaceOnly,
        fallback: ReturnFallback::Unit,
        parameters: member
            .parameters
            .iter()
            .map(|p| BlueprintParameter {
                name: p.name.clone(),
                ty: p.ty.clone(),
                modifier: p.modifier,
                has_default: p.has_default,
                fallback: None,
            })
            .collect(),
        return_type: member.return_type.clone(),
        returns_by_ref: member.returns_by_ref,
        type_params: member.type_params.clone(),
        accessors: member.accessors,
        accessibility: member.accessibility,
        explicit_interface: member.explicit_interface.clone(),
        correspondence: correspondence.clone(),
    }
}

/// Namespaces of the target reference, its interfaces, and every surviving
/// member's signature, all in the generated type's terms.
fn collect_namespaces(blueprint: &Blueprint) -> BTreeSet<String> {
    let mut out = BTreeSet::new();
    TypeRef::from(blueprint.target_reference()).collect_namespaces(&mut out);
    for iface in blueprint.implemented_interfaces() {
        TypeRef::from(iface).collect_namespaces(&mut out);
    }
    for member in &blueprint.members {
        member.resolve_type(&member.return_type).collect_namespaces(&mut out);
        for param in &member.parameters {
            member.resolve_type(&param.ty).collect_namespaces(&mut out);
        }
        for bound in member.type_params.iter().flat_map(|tp| &tp.bounds) {
            member.resolve_type(bound).collect_namespaces(&mut out);
        }
    }
    out
}
