use super::*;
use pretty_assertions::assert_eq;

use mimic_blueprint::{
    generate, GeneratedType, GenerationMode, GenerationPolicy, GenerationRequest,
};
use mimic_ir::{
    well_known, MemberDescriptor, NamedType, ParamModifier, Parameter, TypeDefinition, TypeKey,
    TypeTable,
};

#[test]
fn class_outline() {
    let table = TypeTable::new().with(
        TypeDefinition::class("Acme", "Widget")
            .with_member(MemberDescriptor::method("Foo"))
            .with_member(MemberDescriptor::method("Foo").param("count", well_known::int32())),
    );
    let blueprint = generate(
        &table,
        &GenerationRequest::new(
            NamedType::new(TypeKey::simple("Acme", "Widget")),
            GeneratedType::new("Acme.Testing", "WidgetStandIn"),
        ),
    )
    .unwrap();

    let expected = "\
// stand-in for Acme.Widget
namespace Acme.Testing
{
    using Acme;
    using System;

    public class WidgetStandIn : Acme.Widget
    {
        // Foo: hide, fallback unit
        public new void Foo();

        // Foo_Int32: hide, fallback unit
        public new void Foo(System.Int32 count);

        // Equals: override, fallback default
        public override System.Boolean Equals(System.Object? obj);

        // GetHashCode: override, fallback default
        public override System.Int32 GetHashCode();

        // ToString: override, fallback null
        public override System.String? ToString();
    }
}
";
    assert_eq!(OutlineEmitter.render(&blueprint), expected);
}

#[test]
fn generic_interface_outline() {
    let key = TypeRef::type_param("TKey", 0);
    let value = TypeRef::type_param("TValue", 1);
    let disposable = NamedType::new(TypeKey::simple("System", "IDisposable"));
    let table = TypeTable::new()
        .with(
            TypeDefinition::interface("System", "IDisposable")
                .with_member(MemberDescriptor::method("Dispose")),
        )
        .with(
            TypeDefinition::interface("Acme", "IStore")
                .with_type_params(vec![
                    GenericParam::new("TKey").with_constraints(GenericConstraints::NOT_NULL),
                    GenericParam::new("TValue").with_constraints(
                        GenericConstraints::REFERENCE_TYPE | GenericConstraints::DEFAULT_CONSTRUCTOR,
                    ),
                ])
                .with_interface(disposable)
                .with_member(
                    MemberDescriptor::method("TryGet")
                        .param("key", key.clone())
                        .with_parameter(
                            Parameter::new("value", value.clone()).with_modifier(ParamModifier::Out),
                        )
                        .returns(well_known::boolean()),
                )
                .with_member(MemberDescriptor::indexer(
                    value.clone(),
                    vec![Parameter::new("key", key)],
                ))
                .with_member(
                    MemberDescriptor::property("Count", well_known::int32())
                        .with_accessors(Accessors::GET),
                )
                .with_member(MemberDescriptor::event("Changed", well_known::event_handler())),
        );
    let request = GenerationRequest::new(
        NamedType::new(TypeKey::new("Acme", "IStore", 2)),
        GeneratedType::new("", "StoreStandIn").with_type_params(["K", "V"]),
    )
    .with_policy(GenerationPolicy::new(GenerationMode::UnboundGeneric));
    let text = OutlineEmitter.render(&generate(&table, &request).unwrap());
    let lines: Vec<&str> = text.lines().map(str::trim).collect();

    assert_eq!(lines[0], "// stand-in for Acme.IStore<K, V>");
    assert!(lines.contains(&"public class StoreStandIn<K, V> : System.IDisposable, Acme.IStore<K, V>"));
    assert!(lines.contains(&"where K : notnull"));
    assert!(lines.contains(&"where V : class, new()"));
    assert!(lines.contains(&"public System.Boolean TryGet(K key, out V value);"));
    assert!(lines.contains(&"public V this[K key] { get; set; }"));
    assert!(lines.contains(&"public System.Int32 Count { get; }"));
    assert!(lines.contains(&"public event System.EventHandler Changed;"));
    assert!(lines.contains(&"// Item: interface-only, fallback fail-fast"));
    assert!(text.ends_with("}\n"));
    assert!(!text.contains("namespace"));
}
