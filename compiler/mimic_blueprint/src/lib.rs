//! Blueprint resolution for stand-in generation.
//!
//! A blueprint says exactly how a delegating stand-in must be shaped: which
//! members it implements, under which generated name, with which modifier,
//! with which generic correspondence, and what each member yields when no
//! override answers a call.
//!
//! # Pipeline
//!
//! ```text
//! GenerationRequest
//!     │
//!     ▼
//! StructuralGraphBuilder ──► StructuralGraph      (mimic_surface)
//!     │
//!     ▼
//! BlueprintBuilder ──► Blueprint ──► CodeEmitter  (mimic_emit)
//! ```
//!
//! [`generate`] runs both stages for one request. Both builders are
//! stateless, so independent requests may run on separate threads.

mod blueprint;
mod builder;
mod correspondence;
mod fallback;
pub mod naming;
mod problem;
mod request;
mod strategy;

pub use blueprint::{Blueprint, BlueprintMember, BlueprintParameter};
pub use builder::BlueprintBuilder;
pub use correspondence::{GenericCorrespondence, ParamMapping, Substitution};
pub use fallback::{DefaultFallback, FallbackPolicy, FallbackScope, ReturnFallback};
pub use problem::Problem;
pub use request::{
    ExclusionList, GeneratedType, GenerationMode, GenerationPolicy, GenerationRequest,
};
pub use strategy::ImplementationStrategy;

use mimic_ir::TypeMetadataProvider;
use mimic_surface::StructuralGraphBuilder;

/// Build the structural graph for `request` and resolve it into a
/// blueprint, with the stock root filter and fallback policy.
///
/// # Errors
///
/// Any [`Problem`] the request runs into; nothing is partially produced.
#[tracing::instrument(
    level = "debug",
    skip_all,
    fields(target = %request.target.key, generated = %request.generated)
)]
pub fn generate(
    provider: &dyn TypeMetadataProvider,
    request: &GenerationRequest,
) -> Result<Blueprint, Problem> {
    let graph = StructuralGraphBuilder::new(provider)
        .build(&request.target.key, request.policy.include_internals)?;
    BlueprintBuilder::new().build(&graph, request)
}
