//! Core types shared across the pipeline stages.

pub mod errors;

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::PathBuf;

/// Outcome of a recoverable pipeline stage.
///
/// Stages that may fail without ending the run return this instead of a
/// bare `Result`, so the "log and continue" decision is written out at
/// the call site rather than implied by a swallowed error.
#[derive(Debug)]
pub enum StageOutcome<T> {
    /// The stage finished normally.
    Success(T),
    /// The stage failed; the pipeline continues with the fallback value.
    Recovered { value: T, reason: String },
}

/// Run-scoped tally for a single pipeline invocation.
///
/// `invalid_files` starts at zero, is incremented once per file that
/// fails format parsing, and is never decremented.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub files_scanned: usize,
    pub invalid_files: usize,
    pub copy_succeeded: bool,
    pub generated_at: DateTime<Utc>,
}

impl RunSummary {
    /// Whether the run passed validation. Copy failures do not affect
    /// the verdict.
    pub fn passed(&self) -> bool {
        self.invalid_files == 0
    }
}
