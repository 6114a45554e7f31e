use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::config::{INPUT_PATHS_ENV, OUTPUT_PATHS_ENV};
use crate::io;

#[derive(Parser, Debug)]
#[command(name = "dicomcheck")]
#[command(about = "Validate a directory of DICOM files and copy it to an output location", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Input locator (`<name>:<dir>`); the second segment is the input directory
    #[arg(long = "input-paths", env = INPUT_PATHS_ENV)]
    pub input_paths: Option<String>,

    /// Output locator (`<name>:<dir>`); the second segment is the output directory
    #[arg(long = "output-paths", env = OUTPUT_PATHS_ENV)]
    pub output_paths: Option<String>,

    /// Output format for the run summary
    #[arg(short, long, value_enum, default_value = "terminal")]
    pub format: OutputFormat,

    /// Summary file (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Increase verbosity level (can be repeated: -v, -vv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbosity: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary
    Terminal,
    /// Machine-readable summary
    Json,
}

impl From<OutputFormat> for io::output::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Terminal => io::output::OutputFormat::Terminal,
            OutputFormat::Json => io::output::OutputFormat::Json,
        }
    }
}
