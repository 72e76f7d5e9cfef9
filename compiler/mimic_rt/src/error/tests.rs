use super::*;
use pretty_assertions::assert_eq;

fn unmocked() -> UnmockedMember {
    UnmockedMember {
        member: "GetName".into(),
        original_name: "GetName".into(),
        declaring_type: "Acme.Person".into(),
        parameter: None,
    }
}

#[test]
fn unmocked_names_member_and_type() {
    let err = RuntimeError::Unmocked(unmocked());
    assert_eq!(
        err.to_string(),
        "unmocked member: `Acme.Person.GetName` has no override, no live target, and no fallback"
    );
    assert_eq!(err.code(), ErrorCode::M0101);

    let diag = err.to_diagnostic();
    assert_eq!(diag.subject.as_deref(), Some("Acme.Person"));
    assert_eq!(diag.member.as_deref(), Some("GetName"));
}

#[test]
fn out_parameter_is_named() {
    let err = UnmockedMember {
        parameter: Some("value".into()),
        ..unmocked()
    };
    assert!(err.to_string().ends_with("for out parameter `value`"));
}

#[test]
fn misuse_is_internal() {
    let err = RuntimeError::ArgumentCount {
        member: "Save".into(),
        expected: 2,
        actual: 1,
    };
    assert_eq!(err.to_string(), "`Save` takes 2 argument(s), 1 supplied");
    assert_eq!(err.code(), ErrorCode::M9001);
}
