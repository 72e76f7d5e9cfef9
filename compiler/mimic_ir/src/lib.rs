//! Structural type metadata for the Mimic stand-in generator.
//!
//! Everything the resolution pipeline reasons about lives here as plain,
//! immutable data:
//! - [`TypeKey`]: identity of a type definition
//! - [`TypeRef`]: symbolic type references (named, generic parameter, array)
//! - [`TypeDescriptor`] / [`TypeDefinition`]: a type's shape and surface
//! - [`MemberDescriptor`]: one declared method, property, indexer or event
//! - [`SignatureKey`] / [`CallKey`]: structural member identity
//! - [`TypeMetadataProvider`]: where definitions come from
//!
//! All types are `Clone + Eq + Hash`; none hold interior mutability, so
//! snapshots can be shared freely across threads building independent
//! blueprints.

mod descriptor;
mod key;
mod member;
mod provider;
mod signature;
mod ty;
pub mod well_known;

pub use descriptor::{
    Accessibility, GenericConstraints, GenericParam, TypeDefinition, TypeDescriptor, TypeKind,
    TypeModifiers,
};
pub use key::TypeKey;
pub use member::{
    Accessors, MemberDescriptor, MemberKind, MemberModifiers, MemberOrigin, ParamModifier,
    Parameter,
};
pub use provider::{Layered, TypeMetadataProvider, TypeTable};
pub use signature::{CallKey, ParamToken, ParamTokens, SignatureKey};
pub use ty::{sanitize_identifier, ArrayType, NamedType, ParamOwner, ParamRef, TypeRef};
