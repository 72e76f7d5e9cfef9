use super::*;
use pretty_assertions::assert_eq;

use mimic_ir::{
    well_known, MemberDescriptor, MemberModifiers, NamedType, TypeDefinition, TypeKey, TypeKind,
    TypeModifiers, TypeTable,
};
use mimic_surface::StructuralGraphBuilder;

fn strategies(table: &TypeTable, target: &str) -> Vec<(String, ImplementationStrategy)> {
    let graph = StructuralGraphBuilder::new(table)
        .build(&TypeKey::simple("Acme", target), false)
        .unwrap();
    let inherits = graph.is_inheritable();
    graph
        .members
        .iter()
        .map(|m| {
            (
                m.member.name.clone(),
                ImplementationStrategy::decide(&graph, m, inherits),
            )
        })
        .collect()
}

fn service() -> TypeDefinition {
    TypeDefinition::class("Acme", "Service")
        .with_member(MemberDescriptor::method("Run").with_modifiers(MemberModifiers::VIRTUAL))
        .with_member(MemberDescriptor::method("Stop").with_modifiers(MemberModifiers::ABSTRACT))
        .with_member(MemberDescriptor::method("Name").returns(well_known::string()))
}

fn s(name: &str, strategy: ImplementationStrategy) -> (String, ImplementationStrategy) {
    (name.to_string(), strategy)
}

#[test]
fn inheritable_class() {
    let table = TypeTable::new().with(service());
    assert_eq!(
        strategies(&table, "Service"),
        vec![
            s("Run", ImplementationStrategy::Override),
            s("Stop", ImplementationStrategy::Override),
            s("Name", ImplementationStrategy::Hide),
            s("Equals", ImplementationStrategy::Override),
            s("GetHashCode", ImplementationStrategy::Override),
            s("ToString", ImplementationStrategy::Override),
        ]
    );
}

#[test]
fn sealed_class_is_interface_only() {
    let table = TypeTable::new().with(service().with_modifiers(TypeModifiers::SEALED));
    let got = strategies(&table, "Service");
    assert_eq!(got[0], s("Run", ImplementationStrategy::InterfaceOnly));
    assert_eq!(got[2], s("Name", ImplementationStrategy::InterfaceOnly));
    // root members stay overrides even without inheritance
    assert_eq!(got[3], s("Equals", ImplementationStrategy::Override));
}

#[test]
fn declared_root_override_is_an_override() {
    let table = TypeTable::new().with(
        TypeDefinition::of_kind("Acme", "Point", TypeKind::Struct).with_member(
            MemberDescriptor::method("ToString")
                .returns(well_known::string())
                .with_modifiers(MemberModifiers::OVERRIDE),
        ),
    );
    let got = strategies(&table, "Point");
    assert_eq!(got[0], s("ToString", ImplementationStrategy::Override));
}

#[test]
fn explicit_members_win_over_everything() {
    let disposable = TypeDefinition::interface("Acme", "IDisposable")
        .with_member(MemberDescriptor::method("Dispose"));
    let table = TypeTable::new().with(disposable).with(
        TypeDefinition::class("Acme", "Handle")
            .with_interface(NamedType::new(TypeKey::simple("Acme", "IDisposable")))
            .with_member(
                MemberDescriptor::method("Dispose")
                    .implementing(NamedType::new(TypeKey::simple("Acme", "IDisposable"))),
            ),
    );
    let got = strategies(&table, "Handle");
    assert_eq!(got[0], s("Dispose", ImplementationStrategy::ExplicitInterface));
}

#[test]
fn interface_members_are_interface_only() {
    let table = TypeTable::new().with(
        TypeDefinition::interface("Acme", "IClock")
            .with_member(MemberDescriptor::property("Now", well_known::int64())),
    );
    let got = strategies(&table, "IClock");
    assert_eq!(got[0], s("Now", ImplementationStrategy::InterfaceOnly));
}

#[test]
fn display_names() {
    assert_eq!(ImplementationStrategy::ExplicitInterface.to_string(), "explicit-interface");
    assert_eq!(ImplementationStrategy::Hide.as_str(), "hide");
}
