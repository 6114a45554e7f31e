//! CLI command implementations.
//!
//! The stage exposes a single operation: run the validate-and-copy
//! pipeline once.

pub mod run;

pub use run::{run_stage, RunConfig};
