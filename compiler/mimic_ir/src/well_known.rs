//! Well-known types of the universal `System` namespace.
//!
//! Catalogs may describe these types themselves; the constructors here only
//! build references, they do not imply a definition exists.

use crate::{TypeKey, TypeRef};

pub const SYSTEM: &str = "System";

/// Key of the universal root type.
pub fn object_key() -> TypeKey {
    TypeKey::simple(SYSTEM, "Object")
}

pub fn object() -> TypeRef {
    TypeRef::named(object_key())
}

pub fn string() -> TypeRef {
    TypeRef::named(TypeKey::simple(SYSTEM, "String"))
}

pub fn int32() -> TypeRef {
    TypeRef::value(TypeKey::simple(SYSTEM, "Int32"))
}

pub fn int64() -> TypeRef {
    TypeRef::value(TypeKey::simple(SYSTEM, "Int64"))
}

pub fn boolean() -> TypeRef {
    TypeRef::value(TypeKey::simple(SYSTEM, "Boolean"))
}

pub fn byte() -> TypeRef {
    TypeRef::value(TypeKey::simple(SYSTEM, "Byte"))
}

pub fn double() -> TypeRef {
    TypeRef::value(TypeKey::simple(SYSTEM, "Double"))
}

/// `System.Nullable<inner>`; a value type.
pub fn nullable_value(inner: TypeRef) -> TypeRef {
    crate::NamedType::value(TypeKey::new(SYSTEM, "Nullable", 1))
        .with_args(vec![inner])
        .into()
}

/// `System.EventHandler`, the default event delegate type.
pub fn event_handler() -> TypeRef {
    TypeRef::named(TypeKey::simple(SYSTEM, "EventHandler"))
}
