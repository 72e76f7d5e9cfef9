use super::*;
use pretty_assertions::assert_eq;

#[test]
fn codes_follow_variant() {
    let key = TypeKey::simple("Acme", "Widget");
    assert_eq!(
        SurfaceError::UnknownTarget { target: key.clone() }.code(),
        ErrorCode::M0001
    );
    assert_eq!(
        SurfaceError::UnsupportedKind {
            target: key.clone(),
            kind: TypeKind::Enum,
        }
        .code(),
        ErrorCode::M0002
    );
    assert_eq!(
        SurfaceError::MalformedMetadata {
            target: key.clone(),
            fault: MetadataFault::CyclicBase(key),
        }
        .code(),
        ErrorCode::M0003
    );
}

#[test]
fn diagnostic_names_the_offending_type() {
    let err = SurfaceError::UnsupportedKind {
        target: TypeKey::simple("System", "DayOfWeek"),
        kind: TypeKind::Enum,
    };
    let diag = err.to_diagnostic();
    assert_eq!(diag.code, ErrorCode::M0002);
    assert_eq!(diag.subject.as_deref(), Some("System.DayOfWeek"));
    assert_eq!(
        diag.message,
        "cannot generate a stand-in for enum `System.DayOfWeek`"
    );
    assert_eq!(diag.notes.len(), 1);
}

#[test]
fn missing_definition_suggests_adding_it() {
    let err = SurfaceError::MalformedMetadata {
        target: TypeKey::simple("Acme", "Widget"),
        fault: MetadataFault::MissingInterface(TypeKey::new("Acme", "IPart", 1)),
    };
    let diag = err.to_diagnostic();
    assert!(diag.message.contains("interface `Acme.IPart`1` is not defined"));
    assert_eq!(
        diag.suggestions,
        vec!["add a definition for `Acme.IPart`1` to the catalog".to_string()]
    );
}
