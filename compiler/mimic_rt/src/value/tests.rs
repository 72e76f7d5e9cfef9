use super::*;
use pretty_assertions::assert_eq;

use mimic_ir::well_known;

#[test]
fn display() {
    assert_eq!(Value::Unit.to_string(), "()");
    assert_eq!(Value::str("hi").to_string(), "\"hi\"");
    assert_eq!(
        Value::List(vec![Value::Int(1), Value::Null]).to_string(),
        "[1, null]"
    );
    assert_eq!(
        Value::Default(well_known::int32()).to_string(),
        "default(System.Int32)"
    );
    assert_eq!(
        Value::Instance(TypeRef::method_param("T", 0)).to_string(),
        "new T()"
    );
}

#[test]
fn replies_collect_out_values() {
    let reply = Reply::new(Value::Bool(true)).with_out(42).with_out("x");
    assert_eq!(reply.outs, vec![Value::Int(42), Value::str("x")]);
    assert_eq!(Reply::from(Value::Unit).outs, Vec::<Value>::new());
}
