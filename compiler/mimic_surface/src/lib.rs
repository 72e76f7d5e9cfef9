//! Structural surface discovery for stand-in generation.
//!
//! Given a target type, [`StructuralGraphBuilder`] walks its base-type chain
//! and transitive interface set and resolves the deduplicated member universe
//! a stand-in must implement. Each [`ResolvedMember`] carries provenance (the
//! declaring type) and a [`Priority`] tier:
//!
//! | Tier | Source |
//! |------|--------|
//! | 0 | the target and its base types, most-derived first |
//! | 1 | interfaces, only when the target itself is an interface |
//! | 2 | virtual members of the universal root type |
//!
//! The [`policy`] module holds the inheritance and root-member decisions
//! shared with the blueprint builder, so the two stages never disagree.

mod builder;
mod error;
mod graph;
pub mod policy;

pub use builder::StructuralGraphBuilder;
pub use error::{MetadataFault, SurfaceError};
pub use graph::{Priority, ResolvedMember, StructuralGraph};
pub use policy::{RecordEqualityFilter, RootMemberFilter, RootSurface};
