// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod io;
pub mod oracle;
pub mod pipeline;
pub mod progress;

// Re-export commonly used types
pub use crate::core::errors::{Error, Result};
pub use crate::core::{RunSummary, StageOutcome};

pub use crate::config::StageConfig;

pub use crate::io::output::{create_writer, OutputFormat, OutputWriter};

pub use crate::oracle::{DecodeFailure, DicomOracle, FormatOracle};

pub use crate::progress::{LogSink, SilentSink, StageSink};
