use super::*;
use crate::{well_known, GenericParam, NamedType, ParamModifier, Parameter, TypeKey, TypeRef};

#[test]
fn independently_built_descriptors_share_a_key() {
    let a = MemberDescriptor::method("Find")
        .param("name", well_known::string())
        .returns(well_known::object());
    let b = MemberDescriptor::method("Find")
        .param("other", well_known::string().nullable())
        .returns(well_known::object().nullable());
    assert_eq!(SignatureKey::of(&a), SignatureKey::of(&b));
}

#[test]
fn method_type_parameter_names_do_not_matter() {
    let a = MemberDescriptor::method("Map")
        .with_type_param(GenericParam::new("T"))
        .param("value", TypeRef::method_param("T", 0));
    let b = MemberDescriptor::method("Map")
        .with_type_param(GenericParam::new("U"))
        .param("value", TypeRef::method_param("U", 0));
    assert_eq!(SignatureKey::of(&a), SignatureKey::of(&b));
}

#[test]
fn by_ref_passing_distinguishes() {
    let by_value = MemberDescriptor::method("Swap").param("x", well_known::int32());
    let by_ref = MemberDescriptor::method("Swap").with_parameter(
        Parameter::new("x", well_known::int32()).with_modifier(ParamModifier::Ref),
    );
    assert_ne!(SignatureKey::of(&by_value), SignatureKey::of(&by_ref));
}

#[test]
fn explicit_interface_distinguishes_identity_but_not_call_shape() {
    let foo = NamedType::new(TypeKey::simple("Acme", "IFoo"));
    let bar = NamedType::new(TypeKey::simple("Acme", "IBar"));
    let x_foo = MemberDescriptor::method("X").implementing(foo);
    let x_bar = MemberDescriptor::method("X").implementing(bar);

    let k_foo = SignatureKey::of(&x_foo);
    let k_bar = SignatureKey::of(&x_bar);
    assert_ne!(k_foo, k_bar);
    assert_eq!(k_foo.without_interface(), k_bar.without_interface());
    assert_eq!(k_foo.call_key(), k_bar.call_key());
}

#[test]
fn call_key_ignores_return_type() {
    let generic_enum = MemberDescriptor::method("GetEnumerator").returns(TypeRef::named(
        TypeKey::new("System.Collections.Generic", "IEnumerator", 1),
    ));
    let plain_enum = MemberDescriptor::method("GetEnumerator")
        .returns(TypeRef::named(TypeKey::simple("System.Collections", "IEnumerator")));
    assert_ne!(SignatureKey::of(&generic_enum), SignatureKey::of(&plain_enum));
    assert_eq!(CallKey::of(&generic_enum), CallKey::of(&plain_enum));
}

#[test]
fn kind_participates() {
    let prop = MemberDescriptor::property("Value", well_known::int32());
    let method = MemberDescriptor::method("Value").returns(well_known::int32());
    assert_ne!(SignatureKey::of(&prop), SignatureKey::of(&method));
}
