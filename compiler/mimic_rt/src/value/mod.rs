//! Values flowing through a stand-in.

use std::fmt;

use mimic_ir::TypeRef;

/// A runtime value.
///
/// Fallbacks produce the symbolic `Default` and `Instance` values; the rest
/// are supplied by overrides and live targets.
#[derive(Clone, PartialEq, Debug)]
pub enum Value {
    Unit,
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    List(Vec<Value>),
    /// The zero value of a type.
    Default(TypeRef),
    /// A freshly constructed instance of a type.
    Instance(TypeRef),
}

impl Value {
    pub fn str(s: impl Into<String>) -> Self {
        Value::Str(s.into())
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Unit => f.write_str("()"),
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::Str(s) => write!(f, "{s:?}"),
            Value::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Value::Default(ty) => write!(f, "default({ty})"),
            Value::Instance(ty) => write!(f, "new {ty}()"),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(i64::from(n))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

/// The answer to one call: the returned value plus whatever was assigned to
/// `out` parameters, in parameter order.
#[derive(Clone, PartialEq, Debug)]
pub struct Reply {
    pub value: Value,
    pub outs: Vec<Value>,
}

impl Reply {
    pub fn new(value: Value) -> Self {
        Reply {
            value,
            outs: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_out(mut self, value: impl Into<Value>) -> Self {
        self.outs.push(value.into());
        self
    }
}

impl From<Value> for Reply {
    fn from(value: Value) -> Self {
        Reply::new(value)
    }
}

#[cfg(test)]
mod tests;
