//! Filesystem and output concerns: enumeration, tree copy, summary
//! writers.

pub mod copier;
pub mod output;
pub mod walker;
