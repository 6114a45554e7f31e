//! The stage pipeline: enumerate, validate, copy, report.
//!
//! Control flows strictly top to bottom and every stage runs exactly
//! once per invocation. Failure policy is written out at each call
//! site: enumeration and copy failures degrade the run and it
//! continues; only the final verdict over the validation tally can end
//! it unsuccessfully.

use crate::config::StageConfig;
use crate::core::errors::{Error, Result};
use crate::core::{RunSummary, StageOutcome};
use crate::io::{copier, walker};
use crate::oracle::FormatOracle;
use crate::progress::StageSink;
use chrono::Utc;
use std::path::{Path, PathBuf};

/// Execute the pipeline once and return the run summary.
///
/// This never fails: recoverable stage failures are reported through
/// `sink` and the run continues with degraded results. Apply
/// [`verdict`] to the returned summary to obtain the run's outcome.
pub fn run(config: &StageConfig, oracle: &dyn FormatOracle, sink: &dyn StageSink) -> RunSummary {
    sink.info(&format!(
        "Files in {}: {:?}",
        config.input_dir.display(),
        walker::top_level_file_names(&config.input_dir)
    ));

    sink.stage(&format!(
        "Scanning input directory {}",
        config.input_dir.display()
    ));
    // A missing or unreadable input directory degrades to an empty scan.
    let files = match enumerate_stage(&config.input_dir) {
        StageOutcome::Success(files) => files,
        StageOutcome::Recovered { value, reason } => {
            sink.warn(&reason);
            value
        }
    };

    let invalid_files = validate_stage(&files, oracle);

    sink.stage(&format!(
        "Copying DICOM from {} to {}",
        config.input_dir.display(),
        config.output_dir.display()
    ));
    // Copy failures are logged and never change the run's outcome.
    let copy_succeeded = match copy_stage(config) {
        StageOutcome::Success(()) => true,
        StageOutcome::Recovered { reason, .. } => {
            sink.error(&reason);
            false
        }
    };

    sink.info(&format!(
        "Files in {}: {:?}",
        config.output_dir.display(),
        walker::top_level_file_names(&config.output_dir)
    ));

    let summary = RunSummary {
        input_dir: config.input_dir.clone(),
        output_dir: config.output_dir.clone(),
        files_scanned: files.len(),
        invalid_files,
        copy_succeeded,
        generated_at: Utc::now(),
    };
    report_stage(&summary, sink);
    summary
}

/// Apply the run's pass/fail policy: any invalid file is fatal.
pub fn verdict(summary: &RunSummary) -> Result<()> {
    if summary.invalid_files > 0 {
        return Err(Error::InvalidFiles {
            count: summary.invalid_files,
        });
    }
    Ok(())
}

fn enumerate_stage(input_dir: &Path) -> StageOutcome<Vec<PathBuf>> {
    match walker::list_files(input_dir) {
        Ok(files) => StageOutcome::Success(files),
        Err(err) => StageOutcome::Recovered {
            value: Vec::new(),
            reason: format!("Failed to list files: {err:#}"),
        },
    }
}

/// Count the files the oracle cannot decode. Which files failed is not
/// retained, only the tally.
fn validate_stage(files: &[PathBuf], oracle: &dyn FormatOracle) -> usize {
    files
        .iter()
        .filter(|file| oracle.decode(file).is_err())
        .count()
}

fn copy_stage(config: &StageConfig) -> StageOutcome<()> {
    match copier::copy_tree(&config.input_dir, &config.output_dir) {
        Ok(()) => StageOutcome::Success(()),
        Err(err) => StageOutcome::Recovered {
            value: (),
            reason: format!("Failed to copy files: {err:#}"),
        },
    }
}

fn report_stage(summary: &RunSummary, sink: &dyn StageSink) {
    sink.info(&format!(
        "Scanned {} file(s) with {} invalid DICOM part-10 file(s).",
        summary.files_scanned, summary.invalid_files
    ));
}
