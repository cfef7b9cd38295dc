use super::fields::{FieldKind, FIELDS};
use dicom::core::Tag;
use dicom::object::InMemDicomObject;

/// Placeholder for fields the dataset does not carry.
pub const UNKNOWN: &str = "Unknown";

/// Ordered label → value mapping over the fixed field set.
///
/// `extract` produces a record containing every fixed label exactly once,
/// in dictionary order. Partial records only occur before the first file
/// is loaded and in tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetadataRecord {
    entries: Vec<(String, String)>,
}

impl MetadataRecord {
    /// Record with every fixed field set to `"Unknown"`, used when a slice
    /// fails to parse.
    pub fn unknown() -> Self {
        Self::from_entries(
            FIELDS
                .iter()
                .map(|field| (field.label.to_string(), UNKNOWN.to_string()))
                .collect(),
        )
    }

    pub fn from_entries(entries: Vec<(String, String)>) -> Self {
        Self { entries }
    }

    pub fn get(&self, label: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key == label)
            .map(|(_, value)| value.as_str())
    }

    /// Overwrites the value for `label` if the label is present; otherwise
    /// leaves the record unchanged.
    pub fn replace(&mut self, label: &str, value: &str) {
        if let Some(entry) = self.entries.iter_mut().find(|(key, _)| key == label) {
            entry.1 = value.to_string();
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl IntoIterator for MetadataRecord {
    type Item = (String, String);
    type IntoIter = std::vec::IntoIter<(String, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// Reads the fixed field set out of a parsed dataset.
///
/// Fields absent from the dataset, or present but empty, yield `"Unknown"`.
/// Rows and Columns are read as unsigned 16-bit integers and stringified.
pub fn extract(dataset: &InMemDicomObject) -> MetadataRecord {
    let entries = FIELDS
        .iter()
        .map(|field| {
            let value = match field.kind {
                FieldKind::Text => string_value(dataset, field.tag),
                FieldKind::Unsigned16 => {
                    u16_value(dataset, field.tag).map(|number| number.to_string())
                }
            };
            (
                field.label.to_string(),
                value.unwrap_or_else(|| UNKNOWN.to_string()),
            )
        })
        .collect();

    MetadataRecord { entries }
}

fn string_value(dataset: &InMemDicomObject, tag: Tag) -> Option<String> {
    dataset
        .element(tag)
        .ok()
        .and_then(|element| element.to_str().ok())
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn u16_value(dataset: &InMemDicomObject, tag: Tag) -> Option<u16> {
    dataset
        .element(tag)
        .ok()
        .and_then(|element| element.to_int::<u16>().ok())
}
