use super::*;
use pretty_assertions::assert_eq;

use mimic_ir::{well_known, GenericConstraints};

fn decide(ty: &TypeRef, type_params: &[GenericParam], method_params: &[GenericParam]) -> ReturnFallback {
    DefaultFallback.fallback(ty, &FallbackScope::new(type_params, method_params))
}

#[test]
fn named_types() {
    assert_eq!(decide(&TypeRef::Void, &[], &[]), ReturnFallback::Unit);
    assert_eq!(decide(&well_known::int32(), &[], &[]), ReturnFallback::DefaultValue);
    assert_eq!(
        decide(&well_known::nullable_value(well_known::int32()), &[], &[]),
        ReturnFallback::DefaultValue
    );
    assert_eq!(decide(&well_known::string().nullable(), &[], &[]), ReturnFallback::Null);
    assert_eq!(decide(&well_known::string(), &[], &[]), ReturnFallback::FailFast);
    assert_eq!(
        decide(&TypeRef::array(well_known::byte()), &[], &[]),
        ReturnFallback::FailFast
    );
    assert_eq!(
        decide(&TypeRef::array(well_known::byte()).nullable(), &[], &[]),
        ReturnFallback::Null
    );
}

#[test]
fn generic_parameters() {
    let unconstrained = [GenericParam::new("T")];
    let structs = [GenericParam::new("T").with_constraints(GenericConstraints::VALUE_TYPE)];
    let classes = [GenericParam::new("T").with_constraints(GenericConstraints::REFERENCE_TYPE)];
    let creatable = [GenericParam::new("T").with_constraints(GenericConstraints::DEFAULT_CONSTRUCTOR)];

    let type_t = TypeRef::type_param("T", 0);
    let method_t = TypeRef::method_param("T", 0);

    assert_eq!(decide(&type_t, &unconstrained, &[]), ReturnFallback::FailFast);
    assert_eq!(decide(&type_t, &structs, &[]), ReturnFallback::DefaultValue);
    assert_eq!(decide(&type_t.clone().nullable(), &unconstrained, &[]), ReturnFallback::DefaultValue);
    assert_eq!(decide(&type_t.clone().nullable(), &classes, &[]), ReturnFallback::Null);
    assert_eq!(decide(&method_t, &[], &creatable), ReturnFallback::NewInstance);
    // type-level new() does not qualify
    assert_eq!(decide(&type_t, &creatable, &[]), ReturnFallback::FailFast);
}

#[test]
fn policies_are_replaceable() {
    struct NeverFail;
    impl FallbackPolicy for NeverFail {
        fn fallback(&self, ty: &TypeRef, _: &FallbackScope<'_>) -> ReturnFallback {
            if ty.is_void() {
                ReturnFallback::Unit
            } else {
                ReturnFallback::DefaultValue
            }
        }
    }
    let scope = FallbackScope::new(&[], &[]);
    assert_eq!(NeverFail.fallback(&well_known::string(), &scope), ReturnFallback::DefaultValue);
}
