use anyhow::Result;
use clap::Parser;
use dicomcheck::cli::Cli;
use dicomcheck::commands::{run_stage, RunConfig};

const APP_NAME: &str = env!("CARGO_PKG_NAME");

// Main orchestrator function
fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbosity);

    log::info!("Program {APP_NAME} started.");
    let outcome = run_stage(RunConfig {
        input_paths: cli.input_paths,
        output_paths: cli.output_paths,
        format: cli.format,
        output: cli.output,
    });
    log::info!("Program {APP_NAME} exited.");

    outcome.map_err(Into::into)
}

/// Best-effort logging setup; a failed init is never fatal.
fn init_logging(verbosity: u8) {
    let default_filter = match verbosity {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let env = env_logger::Env::default().default_filter_or(default_filter);
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp_secs()
        .try_init();
}
