//! Runtime behavior of a generated stand-in.
//!
//! A [`StandIn`] is built from a blueprint and answers calls the way
//! emitted code does. Each call is dispatched in order to:
//! 1. an override installed with [`StandIn::setup`]
//! 2. a live target installed with [`StandIn::attach`]
//! 3. the member's fallback from the blueprint
//!
//! A `FailFast` fallback raises [`RuntimeError::Unmocked`], naming the
//! member and its declaring type. Every call is recorded, whoever answers
//! it.

mod error;
mod stand_in;
mod value;

pub use error::{RuntimeError, UnmockedMember};
pub use stand_in::{Handler, LiveTarget, StandIn};
pub use value::{Reply, Value};
