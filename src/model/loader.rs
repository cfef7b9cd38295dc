use super::metadata::{self, MetadataRecord};
use crate::image_pipeline;
use dicom::object::open_file;
use iced::widget::image::Handle;
use std::path::Path;

/// Parses one slice and extracts its metadata.
///
/// The dataset lives only for the duration of this call. A parse failure
/// is a per-file failure reported to the caller, never fatal.
pub fn extract_slice(path: &Path) -> Result<MetadataRecord, String> {
    log::info!("Loading DICOM file: {}", path.display());
    let object = open_file(path).map_err(|err| {
        let message = format!("{}: failed to open DICOM file ({err})", path.display());
        log::error!("{message}");
        message
    })?;

    Ok(metadata::extract(&object))
}

/// Parses one slice again and decodes its first frame for display.
///
/// Kept independent of [`extract_slice`] so a slow or failing decode never
/// holds back the metadata. `Ok(None)` means the object is valid but has
/// no frames to preview.
pub fn decode_slice(path: &Path) -> Result<Option<Handle>, String> {
    let object = open_file(path)
        .map_err(|err| format!("{}: failed to open DICOM file ({err})", path.display()))?;

    image_pipeline::first_frame(&object)
}
