//! Shared fixtures for integration tests.

use dicom::core::{DataElement, PrimitiveValue, VR};
use dicom::dictionary_std::tags;
use dicom::object::{FileMetaTableBuilder, InMemDicomObject};
use std::fs::File;
use std::io::Write;
use std::path::Path;

const SOP_CLASS: &str = "1.2.840.10008.5.1.4.1.1.7";
const TRANSFER_SYNTAX: &str = "1.2.840.10008.1.2.1";

/// Write a minimal well-formed DICOM part-10 file at `path`.
pub fn write_valid_dicom(path: &Path, sop_instance: &str) {
    let mut obj = InMemDicomObject::new_empty();
    obj.put(DataElement::new(
        tags::SOP_CLASS_UID,
        VR::UI,
        PrimitiveValue::from(SOP_CLASS),
    ));
    obj.put(DataElement::new(
        tags::SOP_INSTANCE_UID,
        VR::UI,
        PrimitiveValue::from(sop_instance),
    ));
    obj.put(DataElement::new(
        tags::PATIENT_NAME,
        VR::PN,
        PrimitiveValue::from("Doe^Jane"),
    ));

    let file_obj = obj
        .with_meta(
            FileMetaTableBuilder::new()
                .transfer_syntax(TRANSFER_SYNTAX)
                .media_storage_sop_class_uid(SOP_CLASS)
                .media_storage_sop_instance_uid(sop_instance),
        )
        .expect("build file meta table");
    file_obj.write_to_file(path).expect("write DICOM fixture");
}

/// Write a file that carries the part-10 magic but a corrupted meta
/// group, so the decoder rejects it.
pub fn write_corrupt_dicom(path: &Path) {
    let mut contents = vec![0u8; 128];
    contents.extend_from_slice(b"DICM");
    contents.extend_from_slice(b"garbage where the file meta group should be");
    File::create(path)
        .expect("create corrupt fixture")
        .write_all(&contents)
        .expect("write corrupt fixture");
}
