use crate::cli;
use crate::config::StageConfig;
use crate::core::errors::Result;
use crate::io::output;
use crate::oracle::DicomOracle;
use crate::pipeline;
use crate::progress::LogSink;
use std::path::PathBuf;

pub struct RunConfig {
    pub input_paths: Option<String>,
    pub output_paths: Option<String>,
    pub format: cli::OutputFormat,
    pub output: Option<PathBuf>,
}

/// Resolve configuration, run the pipeline once, write the summary, and
/// apply the pass/fail verdict.
pub fn run_stage(config: RunConfig) -> Result<()> {
    let stage_config = StageConfig::resolve(
        config.input_paths.as_deref(),
        config.output_paths.as_deref(),
    )?;
    let oracle = DicomOracle::new();
    let sink = LogSink;

    let summary = pipeline::run(&stage_config, &oracle, &sink);

    let mut writer = output::create_writer(config.output.as_deref(), config.format.into())?;
    writer.write_summary(&summary)?;

    pipeline::verdict(&summary)
}
