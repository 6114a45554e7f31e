//! End-to-end pipeline runs against the real DICOM oracle.

mod common;

use dicomcheck::io::walker;
use dicomcheck::{pipeline, DicomOracle, SilentSink, StageConfig};
use std::fs;
use tempfile::TempDir;

fn stage_config(input: &TempDir, output: &TempDir) -> StageConfig {
    StageConfig {
        input_dir: input.path().to_path_buf(),
        output_dir: output.path().to_path_buf(),
    }
}

#[test]
fn mixed_payload_is_tallied_copied_and_fails_the_run() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();

    common::write_valid_dicom(&input.path().join("a.dcm"), "1.2.826.0.1.3680043.2.1.1");
    common::write_corrupt_dicom(&input.path().join("b.dcm"));
    fs::create_dir(input.path().join("sub")).unwrap();
    common::write_valid_dicom(
        &input.path().join("sub").join("c.dcm"),
        "1.2.826.0.1.3680043.2.1.2",
    );

    let files = walker::list_files(input.path()).unwrap();
    assert_eq!(files.len(), 3);

    let summary = pipeline::run(
        &stage_config(&input, &output),
        &DicomOracle::new(),
        &SilentSink,
    );

    assert_eq!(summary.files_scanned, 3);
    assert_eq!(summary.invalid_files, 1);
    assert!(summary.copy_succeeded);

    // The whole tree is copied, invalid file included.
    for name in ["a.dcm", "b.dcm"] {
        assert_eq!(
            fs::read(output.path().join(name)).unwrap(),
            fs::read(input.path().join(name)).unwrap(),
        );
    }
    assert_eq!(
        fs::read(output.path().join("sub").join("c.dcm")).unwrap(),
        fs::read(input.path().join("sub").join("c.dcm")).unwrap(),
    );

    let err = pipeline::verdict(&summary).unwrap_err();
    assert!(err.to_string().contains('1'));
}

#[test]
fn all_valid_payload_passes() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();

    common::write_valid_dicom(&input.path().join("a.dcm"), "1.2.826.0.1.3680043.2.1.3");
    common::write_valid_dicom(&input.path().join("b.dcm"), "1.2.826.0.1.3680043.2.1.4");

    let summary = pipeline::run(
        &stage_config(&input, &output),
        &DicomOracle::new(),
        &SilentSink,
    );

    assert_eq!(summary.files_scanned, 2);
    assert_eq!(summary.invalid_files, 0);
    assert!(pipeline::verdict(&summary).is_ok());

    // Output regular-file set covers the input set, byte for byte.
    for name in ["a.dcm", "b.dcm"] {
        assert_eq!(
            fs::read(output.path().join(name)).unwrap(),
            fs::read(input.path().join(name)).unwrap(),
        );
    }
}

#[test]
fn valid_fixture_is_accepted_by_the_real_oracle() {
    use dicomcheck::FormatOracle;

    let dir = TempDir::new().unwrap();
    let path = dir.path().join("probe.dcm");
    common::write_valid_dicom(&path, "1.2.826.0.1.3680043.2.1.5");

    assert!(DicomOracle::new().decode(&path).is_ok());
}
