//! Image format oracle: the black-box "is this file a well-formed DICOM
//! object" capability.
//!
//! The pipeline never inspects why a file failed to decode; any failure
//! of any subtype counts as one invalid file. Keeping the oracle behind
//! a single-method trait lets the validator run against fake
//! implementations in tests.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// A file the oracle could not parse as a DICOM part-10 object.
#[derive(Debug, Clone, Error)]
#[error("failed to decode {}: {}", .path.display(), .message)]
pub struct DecodeFailure {
    pub path: PathBuf,
    pub message: String,
}

/// Attempts to parse a file as a recognized medical-image container
/// format, succeeding or failing without further detail.
pub trait FormatOracle: Send + Sync {
    fn decode(&self, path: &Path) -> Result<(), DecodeFailure>;
}

/// Production oracle backed by the `dicom` crate's part-10 file reader.
#[derive(Debug, Default, Clone)]
pub struct DicomOracle;

impl DicomOracle {
    pub fn new() -> Self {
        Self
    }
}

impl FormatOracle for DicomOracle {
    fn decode(&self, path: &Path) -> Result<(), DecodeFailure> {
        dicom::object::open_file(path)
            .map(|_| ())
            .map_err(|err| DecodeFailure {
                path: path.to_path_buf(),
                message: err.to_string(),
            })
    }
}
