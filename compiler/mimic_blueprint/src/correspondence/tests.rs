use super::*;
use pretty_assertions::assert_eq;

use mimic_ir::{well_known, GenericParam, TypeDefinition, TypeKey};

use crate::{GeneratedType, GenerationPolicy};

fn repo() -> TypeDescriptor {
    TypeDefinition::interface("Acme", "IRepo")
        .with_type_params(vec![GenericParam::new("TKey"), GenericParam::new("TValue")])
        .descriptor
}

fn request(target: NamedType, params: &[&str], mode: GenerationMode) -> GenerationRequest {
    GenerationRequest::new(
        target,
        GeneratedType::new("Acme.Testing", "RepoStandIn").with_type_params(params.iter().copied()),
    )
    .with_policy(GenerationPolicy::new(mode))
}

fn open_repo() -> NamedType {
    NamedType::new(TypeKey::new("Acme", "IRepo", 2))
}

#[test]
fn unbound_pairs_positionally() {
    let corr = GenericCorrespondence::compute(
        &repo(),
        &request(open_repo(), &["K", "V"], GenerationMode::UnboundGeneric),
    )
    .unwrap();
    assert_eq!(
        corr,
        GenericCorrespondence::Unbound {
            pairs: vec![
                ParamMapping {
                    target: "TKey".into(),
                    generated: "K".into()
                },
                ParamMapping {
                    target: "TValue".into(),
                    generated: "V".into()
                },
            ]
        }
    );
    assert_eq!(corr.len(), 2);
}

#[test]
fn unbound_arity_mismatch_is_fatal() {
    let err = GenericCorrespondence::compute(
        &repo(),
        &request(open_repo(), &["T"], GenerationMode::UnboundGeneric),
    )
    .unwrap_err();
    assert_eq!(
        err,
        Problem::ArityMismatch {
            target: TypeKey::new("Acme", "IRepo", 2),
            generated: "Acme.Testing.RepoStandIn<T>".into(),
            mode: GenerationMode::UnboundGeneric,
            target_arity: 2,
            generated_arity: 1,
        }
    );
}

#[test]
fn closed_pairs_with_arguments() {
    let target = open_repo().with_args(vec![well_known::int32(), well_known::string()]);
    let corr = GenericCorrespondence::compute(
        &repo(),
        &request(target, &[], GenerationMode::ClosedGeneric),
    )
    .unwrap();
    assert_eq!(corr.lookup("TKey").as_deref(), Some("System.Int32"));
    assert_eq!(corr.lookup("TValue").as_deref(), Some("System.String"));
    assert_eq!(corr.lookup("T"), None);
}

#[test]
fn closed_needs_every_argument() {
    let target = open_repo().with_args(vec![well_known::int32()]);
    let err = GenericCorrespondence::compute(
        &repo(),
        &request(target, &[], GenerationMode::ClosedGeneric),
    )
    .unwrap_err();
    assert_eq!(err.code(), mimic_diagnostic::ErrorCode::M0004);
}

#[test]
fn non_generic_mode_rejects_generic_targets() {
    let err = GenericCorrespondence::compute(
        &repo(),
        &request(open_repo(), &[], GenerationMode::NonGeneric),
    )
    .unwrap_err();
    assert!(matches!(err, Problem::ArityMismatch { target_arity: 2, .. }));

    let plain = TypeDefinition::class("Acme", "Plain").descriptor;
    let corr = GenericCorrespondence::compute(
        &plain,
        &request(NamedType::new(plain.key.clone()), &[], GenerationMode::NonGeneric),
    )
    .unwrap();
    assert!(corr.is_empty());
}

#[test]
fn non_generic_target_in_generic_modes_is_empty() {
    let plain = TypeDefinition::class("Acme", "Plain").descriptor;
    for mode in [GenerationMode::UnboundGeneric, GenerationMode::ClosedGeneric] {
        let corr = GenericCorrespondence::compute(
            &plain,
            &request(NamedType::new(plain.key.clone()), &[], mode),
        )
        .unwrap();
        assert_eq!(corr, GenericCorrespondence::Empty);
    }
}

#[test]
fn duplicate_generated_parameters_are_rejected() {
    let err = GenericCorrespondence::compute(
        &repo(),
        &request(open_repo(), &["T", "T"], GenerationMode::UnboundGeneric),
    )
    .unwrap_err();
    assert_eq!(err.code(), mimic_diagnostic::ErrorCode::M0005);
    assert!(err.to_string().contains("`T` is declared more than once"));

    let err = GenericCorrespondence::compute(
        &repo(),
        &request(open_repo(), &["K", "1V"], GenerationMode::UnboundGeneric),
    )
    .unwrap_err();
    assert!(err.to_string().contains("`1V` is not a valid identifier"));
}

#[test]
fn apply_replaces_whole_identifiers_only() {
    let corr = GenericCorrespondence::Unbound {
        pairs: vec![
            ParamMapping {
                target: "T".into(),
                generated: "TItem".into(),
            },
            ParamMapping {
                target: "TKey".into(),
                generated: "K".into(),
            },
        ],
    };
    assert_eq!(
        corr.apply("Dictionary<TKey, List<T>>"),
        "Dictionary<K, List<TItem>>"
    );
    assert_eq!(corr.apply("T[]?"), "TItem[]?");
    assert_eq!(corr.apply("Acme.T.Nested<T>"), "Acme.T.Nested<TItem>");
    assert_eq!(corr.apply("Tuple<T1, T_>"), "Tuple<T1, T_>");
}

#[test]
fn apply_is_simultaneous() {
    let corr = GenericCorrespondence::Unbound {
        pairs: vec![
            ParamMapping {
                target: "T".into(),
                generated: "U".into(),
            },
            ParamMapping {
                target: "U".into(),
                generated: "T".into(),
            },
        ],
    };
    assert_eq!(corr.apply("Func<T, U>"), "Func<U, T>");
}

#[test]
fn empty_correspondence_is_identity() {
    let corr = GenericCorrespondence::Empty;
    assert_eq!(corr.apply("List<T>"), "List<T>");
    let ty = TypeRef::type_param("T", 0);
    assert_eq!(corr.substitute(&ty), ty);
}

#[test]
fn substitute_is_structural() {
    let corr = GenericCorrespondence::Closed {
        substitutions: vec![Substitution {
            param: "T".into(),
            argument: well_known::string(),
        }],
    };
    let list_of_t: TypeRef = NamedType::new(TypeKey::new("Acme", "List", 1))
        .with_args(vec![TypeRef::type_param("T", 0).nullable()])
        .into();
    assert_eq!(
        corr.substitute(&list_of_t).render(),
        "Acme.List<System.String?>"
    );

    // method-level parameters never take part
    let method_t = TypeRef::method_param("T", 0);
    assert_eq!(corr.substitute(&method_t), method_t);
}

#[test]
fn unbound_substitute_renames_parameters() {
    let corr = GenericCorrespondence::Unbound {
        pairs: vec![ParamMapping {
            target: "TValue".into(),
            generated: "V".into(),
        }],
    };
    assert_eq!(
        corr.substitute(&TypeRef::type_param("TValue", 0)),
        TypeRef::type_param("V", 0)
    );
}
