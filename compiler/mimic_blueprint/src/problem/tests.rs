use super::*;
use mimic_surface::MetadataFault;
use pretty_assertions::assert_eq;

fn key(name: &str) -> TypeKey {
    TypeKey::simple("Acme", name)
}

#[test]
fn surface_errors_keep_their_code() {
    let problem: Problem = SurfaceError::UnknownTarget { target: key("Gone") }.into();
    assert_eq!(problem.code(), ErrorCode::M0001);
    assert_eq!(problem.target(), &key("Gone"));
    assert_eq!(problem.to_string(), "unknown target type `Acme.Gone`");

    let malformed: Problem = SurfaceError::MalformedMetadata {
        target: key("A"),
        fault: MetadataFault::CyclicBase(key("A")),
    }
    .into();
    assert_eq!(malformed.to_diagnostic().code, ErrorCode::M0003);
}

#[test]
fn arity_mismatch_diagnostic() {
    let problem = Problem::ArityMismatch {
        target: TypeKey::new("Acme", "Repo", 2),
        generated: "Acme.RepoStandIn<T>".to_string(),
        mode: GenerationMode::UnboundGeneric,
        target_arity: 2,
        generated_arity: 1,
    };
    assert_eq!(problem.code(), ErrorCode::M0004);

    let diag = problem.to_diagnostic();
    assert_eq!(diag.subject.as_deref(), Some("Acme.Repo`2"));
    assert_eq!(
        diag.message,
        "generic arity mismatch: `Acme.Repo`2` has 2 type parameter(s), \
         `Acme.RepoStandIn<T>` supplies 1 in unbound generic mode"
    );
    assert_eq!(
        diag.suggestions,
        vec!["declare 2 type parameter(s) on `Acme.RepoStandIn<T>`".to_string()]
    );
}

#[test]
fn cycle_is_rendered_closed() {
    let problem = Problem::CircularReference {
        target: key("AStandIn"),
        cycle: vec![key("AStandIn"), key("BStandIn")],
    };
    assert_eq!(problem.code(), ErrorCode::M0006);
    assert_eq!(
        problem.to_string(),
        "circular target reference: Acme.AStandIn -> Acme.BStandIn -> Acme.AStandIn"
    );
}

#[test]
fn dependency_failure_points_at_dependency() {
    let problem = Problem::DependencyFailed {
        target: key("Inner"),
        generated: "Acme.Testing.Wrapper".into(),
    };
    assert_eq!(problem.target(), &key("Inner"));
    let diag = problem.to_diagnostic();
    assert_eq!(diag.code, ErrorCode::M0007);
    assert!(diag.notes[0].contains("`Acme.Inner`"));
}
