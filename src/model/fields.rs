use dicom::core::Tag;

/// How a field's raw value is read from the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Unsigned16,
}

/// One entry of the fixed metadata field set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDef {
    pub label: &'static str,
    pub tag: Tag,
    pub kind: FieldKind,
}

pub const PATIENT_NAME: &str = "Patient Name";
pub const PATIENT_ID: &str = "Patient ID";
pub const PATIENT_BIRTH_DATE: &str = "Patient Birth Date";
pub const PATIENT_SEX: &str = "Patient Sex";

const fn text(label: &'static str, group: u16, element: u16) -> FieldDef {
    FieldDef {
        label,
        tag: Tag(group, element),
        kind: FieldKind::Text,
    }
}

const fn unsigned16(label: &'static str, group: u16, element: u16) -> FieldDef {
    FieldDef {
        label,
        tag: Tag(group, element),
        kind: FieldKind::Unsigned16,
    }
}

/// The full field set in display order: patient, study, series, equipment,
/// acquisition, then identifiers.
pub const FIELDS: &[FieldDef] = &[
    text(PATIENT_NAME, 0x0010, 0x0010),
    text(PATIENT_ID, 0x0010, 0x0020),
    text(PATIENT_BIRTH_DATE, 0x0010, 0x0030),
    text(PATIENT_SEX, 0x0010, 0x0040),
    text("Study Date", 0x0008, 0x0020),
    text("Study Time", 0x0008, 0x0030),
    text("Study Description", 0x0008, 0x1030),
    text("Accession Number", 0x0008, 0x0050),
    text("Referring Physician", 0x0008, 0x0090),
    text("Series Description", 0x0008, 0x103E),
    text("Series Number", 0x0020, 0x0011),
    text("Instance Number", 0x0020, 0x0013),
    text("Modality", 0x0008, 0x0060),
    text("Manufacturer", 0x0008, 0x0070),
    text("Institution Name", 0x0008, 0x0080),
    text("Station Name", 0x0008, 0x1010),
    text("Device Serial Number", 0x0018, 0x1000),
    text("Software Versions", 0x0018, 0x1020),
    text("Body Part Examined", 0x0018, 0x0015),
    text("Slice Thickness", 0x0018, 0x0050),
    text("KVP", 0x0018, 0x0060),
    text("Exposure Time", 0x0018, 0x1150),
    text("X-Ray Tube Current", 0x0018, 0x1151),
    text("Image Position (Patient)", 0x0020, 0x0032),
    text("Image Orientation (Patient)", 0x0020, 0x0037),
    text("Pixel Spacing", 0x0028, 0x0030),
    unsigned16("Rows", 0x0028, 0x0010),
    unsigned16("Columns", 0x0028, 0x0011),
    text("SOP Class UID", 0x0008, 0x0016),
    text("SOP Instance UID", 0x0008, 0x0018),
    text("Study Instance UID", 0x0020, 0x000D),
    text("Series Instance UID", 0x0020, 0x000E),
];
