//! The finished, conflict-free blueprint.
//!
//! A blueprint keeps every type reference symbolic, in the target's own
//! generic parameters. Each member carries the correspondence, so an
//! emitter renders through [`BlueprintMember::render_type`] and never
//! branches on genericity itself.

use std::collections::BTreeSet;

use mimic_ir::{
    Accessibility, Accessors, GenericParam, MemberDescriptor, MemberKind, MemberModifiers,
    MemberOrigin, NamedType, ParamModifier, Parameter, TypeDefinition, TypeDescriptor, TypeKind,
    TypeRef,
};
use mimic_surface::Priority;

use crate::{GeneratedType, GenericCorrespondence, ImplementationStrategy, ReturnFallback};

/// A parameter of a blueprint member.
#[derive(Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BlueprintParameter {
    pub name: String,
    pub ty: TypeRef,
    pub modifier: ParamModifier,
    pub has_default: bool,
    /// What an `out` parameter is assigned when nothing answers the call.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub fallback: Option<ReturnFallback>,
}

impl BlueprintParameter {
    pub fn is_out(&self) -> bool {
        self.modifier == ParamModifier::Out
    }
}

/// One member the generated type implements.
#[derive(Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BlueprintMember {
    /// Unique within the blueprint; names the override slot.
    pub generated_name: String,
    pub original_name: String,
    pub kind: MemberKind,
    pub declaring_type: NamedType,
    pub priority: Priority,
    pub strategy: ImplementationStrategy,
    pub fallback: ReturnFallback,
    pub parameters: Vec<BlueprintParameter>,
    pub return_type: TypeRef,
    pub returns_by_ref: bool,
    /// Method-level generic parameters.
    pub type_params: Vec<GenericParam>,
    pub accessors: Accessors,
    pub accessibility: Accessibility,
    pub explicit_interface: Option<NamedType>,
    pub correspondence: GenericCorrespondence,
}

impl BlueprintMember {
    #[inline]
    pub fn is_explicit_interface(&self) -> bool {
        self.explicit_interface.is_some()
    }

    /// Method-level generic arity.
    #[inline]
    pub fn generic_arity(&self) -> usize {
        self.type_params.len()
    }

    /// Fully qualified text for `ty` in the generated type's terms.
    pub fn render_type(&self, ty: &TypeRef) -> String {
        self.correspondence.apply(&ty.render())
    }

    /// `ty` in the generated type's terms, structurally.
    pub fn resolve_type(&self, ty: &TypeRef) -> TypeRef {
        self.correspondence.substitute(ty)
    }

    /// Whether invoking the member yields a value.
    pub fn produces_value(&self) -> bool {
        match self.kind {
            MemberKind::Method => !self.return_type.is_void(),
            MemberKind::Property | MemberKind::Indexer => {
                self.accessors.contains(Accessors::GET) && !self.return_type.is_void()
            }
            MemberKind::Event => false,
        }
    }

    /// The member as the generated type declares it: original name, types
    /// passed through the correspondence, modifiers following the strategy.
    pub fn to_descriptor(&self) -> MemberDescriptor {
        let mut member = MemberDescriptor {
            kind: self.kind,
            name: self.original_name.clone(),
            origin: MemberOrigin::Ordinary,
            parameters: self
                .parameters
                .iter()
                .map(|p| Parameter {
                    name: p.name.clone(),
                    ty: self.resolve_type(&p.ty),
                    modifier: p.modifier,
                    has_default: p.has_default,
                })
                .collect(),
            return_type: self.resolve_type(&self.return_type),
            returns_by_ref: self.returns_by_ref,
            accessibility: Accessibility::Public,
            modifiers: MemberModifiers::empty(),
            accessors: self.accessors,
            type_params: self
                .type_params
                .iter()
                .map(|tp| GenericParam {
                    bounds: tp.bounds.iter().map(|b| self.resolve_type(b)).collect(),
                    ..tp.clone()
                })
                .collect(),
            explicit_interface: None,
        };
        match self.strategy {
            ImplementationStrategy::Override => {
                member.accessibility = self.accessibility;
                member.modifiers = MemberModifiers::OVERRIDE;
            }
            ImplementationStrategy::Hide => {
                member.accessibility = self.accessibility;
                member.modifiers = MemberModifiers::NEW;
            }
            ImplementationStrategy::InterfaceOnly => {}
            ImplementationStrategy::ExplicitInterface => {
                if let Some(iface) = &self.explicit_interface {
                    member = member.implementing(self.correspondence.substitute_named(iface));
                }
            }
        }
        member
    }
}

/// Everything an emitter needs to produce one stand-in type.
#[derive(Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Blueprint {
    pub target: TypeDescriptor,
    pub generated: GeneratedType,
    /// Whether the generated type derives from the target.
    pub inherits: bool,
    /// Every interface of the target's transitive closure, once each.
    pub interfaces: Vec<NamedType>,
    pub members: Vec<BlueprintMember>,
    pub correspondence: GenericCorrespondence,
    /// Namespaces referenced by the target, its interfaces and members.
    pub namespaces: BTreeSet<String>,
}

impl Blueprint {
    /// Member by generated name.
    pub fn member(&self, generated_name: &str) -> Option<&BlueprintMember> {
        self.members
            .iter()
            .find(|m| m.generated_name == generated_name)
    }

    /// Members mirroring `original_name`, in blueprint order.
    pub fn members_named<'a>(
        &'a self,
        original_name: &'a str,
    ) -> impl Iterator<Item = &'a BlueprintMember> {
        self.members
            .iter()
            .filter(move |m| m.original_name == original_name)
    }

    /// The target as the generated type sees it (closed arguments or the
    /// generated type's own parameters).
    pub fn target_reference(&self) -> NamedType {
        self.correspondence
            .substitute_named(&self.target.self_reference())
    }

    /// Base type of the generated type, if it inherits.
    pub fn base_type(&self) -> Option<NamedType> {
        self.inherits.then(|| self.target_reference())
    }

    /// Interfaces in the generated type's terms.
    pub fn implemented_interfaces(&self) -> Vec<NamedType> {
        self.interfaces
            .iter()
            .map(|i| self.correspondence.substitute_named(i))
            .collect()
    }

    /// Type parameters of the generated type. In unbound mode each one
    /// carries the constraints of the target parameter it mirrors.
    pub fn generated_type_params(&self) -> Vec<GenericParam> {
        generated_type_params(&self.target, &self.generated, &self.correspondence)
    }

    /// Definition of the generated type, so another request can target it.
    pub fn export(&self) -> TypeDefinition {
        let mut descriptor = TypeDescriptor::new(self.generated.key(), TypeKind::Class);
        descriptor.accessibility = self.generated.accessibility;
        descriptor.type_params = self.generated_type_params();

        TypeDefinition {
            descriptor,
            base_type: self.base_type(),
            interfaces: self.implemented_interfaces(),
            members: self
                .members
                .iter()
                .map(BlueprintMember::to_descriptor)
                .collect(),
        }
    }
}

pub(crate) fn generated_type_params(
    target: &TypeDescriptor,
    generated: &GeneratedType,
    correspondence: &GenericCorrespondence,
) -> Vec<GenericParam> {
    let unbound = matches!(correspondence, GenericCorrespondence::Unbound { .. });
    generated
        .type_params
        .iter()
        .enumerate()
        .map(|(i, name)| match target.type_params.get(i) {
            Some(mirrored) if unbound => GenericParam {
                name: name.clone(),
                constraints: mirrored.constraints,
                bounds: mirrored
                    .bounds
                    .iter()
                    .map(|b| correspondence.substitute(b))
                    .collect(),
            },
            _ => GenericParam::new(name.clone()),
        })
        .collect()
}
