//! Run configuration resolved from environment-style locators.
//!
//! Input and output directories arrive as colon-delimited locators of the
//! form `<name>:<dir>`, either on the command line or through the
//! `DICOMCHECK_INPUT_PATHS` / `DICOMCHECK_OUTPUT_PATHS` environment
//! variables. The second colon-delimited segment is the effective
//! directory. Neither directory is checked for existence here; downstream
//! stages fail naturally if they are missing.

use crate::core::errors::{Error, Result};
use std::path::PathBuf;

/// Environment variable carrying the input locator.
pub const INPUT_PATHS_ENV: &str = "DICOMCHECK_INPUT_PATHS";

/// Environment variable carrying the output locator.
pub const OUTPUT_PATHS_ENV: &str = "DICOMCHECK_OUTPUT_PATHS";

/// Directory used when a locator is not configured at all.
///
/// The output side falls back to the same directory as the input side.
pub const DEFAULT_DIR: &str = "/input";

/// Immutable configuration for a single run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageConfig {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
}

impl StageConfig {
    /// Resolve the run configuration from raw locator values.
    ///
    /// `None` means the locator was not configured; the default
    /// directory is used. A locator that is present but has no
    /// directory segment is a configuration error.
    pub fn resolve(input_locator: Option<&str>, output_locator: Option<&str>) -> Result<Self> {
        Ok(Self {
            input_dir: resolve_dir(input_locator)?,
            output_dir: resolve_dir(output_locator)?,
        })
    }
}

/// Pure function to select the effective directory for one locator.
fn resolve_dir(locator: Option<&str>) -> Result<PathBuf> {
    match locator {
        None => Ok(PathBuf::from(DEFAULT_DIR)),
        Some(raw) => locator_dir(raw),
    }
}

/// Pure function to extract the second colon-delimited segment.
fn locator_dir(raw: &str) -> Result<PathBuf> {
    let mut segments = raw.split(':');
    let _name = segments.next();
    match segments.next() {
        Some(dir) if !dir.is_empty() => Ok(PathBuf::from(dir)),
        _ => Err(Error::Config(format!(
            "locator {raw:?} has no directory segment (expected <name>:<dir>)"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn unset_locators_fall_back_to_default_dir() {
        let config = StageConfig::resolve(None, None).unwrap();
        assert_eq!(config.input_dir, PathBuf::from("/input"));
        // The output default is the input default, not an output-specific one.
        assert_eq!(config.output_dir, PathBuf::from("/input"));
    }

    #[test]
    fn locator_selects_second_segment() {
        let config = StageConfig::resolve(
            Some("payload:/data/in"),
            Some("results:/data/out"),
        )
        .unwrap();
        assert_eq!(config.input_dir, PathBuf::from("/data/in"));
        assert_eq!(config.output_dir, PathBuf::from("/data/out"));
    }

    #[test]
    fn extra_segments_beyond_the_second_are_ignored() {
        let config = StageConfig::resolve(Some("a:/in:b:/other"), None).unwrap();
        assert_eq!(config.input_dir, PathBuf::from("/in"));
    }

    #[test]
    fn locator_without_directory_segment_is_an_error() {
        let err = StageConfig::resolve(Some("/data/in"), None).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn locator_with_empty_directory_segment_is_an_error() {
        let err = StageConfig::resolve(Some("payload:"), None).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
