//! The Mimic driver.
//!
//! Loads a catalog of type definitions and generation requests, runs the
//! requests as a dependency-ordered parallel batch, and reports the results.
//! The `mimic` binary is a thin argument parser over [`commands`].

pub mod batch;
pub mod catalog;
pub mod commands;
pub mod tracing_setup;

pub use batch::{run_batch, BatchOptions, Outcome};
pub use catalog::{Catalog, CatalogError, CatalogFile};
