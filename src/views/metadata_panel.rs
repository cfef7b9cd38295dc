use crate::message::Message;
use crate::model::MetadataRecord;
use crate::utils::truncate_value;
use iced::widget::text::Wrapping;
use iced::widget::{row, scrollable, text, Column};
use iced::{Element, Length};

/// Label/value list over the fixed field set for the current slice.
///
/// Expects the record with anonymization already applied when the toggle
/// is on; this panel only renders.
pub fn metadata_panel(
    file_label: Option<String>,
    record: Option<MetadataRecord>,
    series_empty: bool,
) -> Element<'static, Message> {
    let Some(record) = record else {
        return if series_empty {
            text("Import DICOM files to view their metadata").into()
        } else {
            text("Loading metadata for the current slice").into()
        };
    };

    if record.is_empty() {
        return text("No metadata available").into();
    }

    let mut table = Column::new();
    for (label, value) in record {
        table = table.push(
            row![
                text(label).width(Length::FillPortion(2)),
                text(truncate_value(&value))
                    .width(Length::FillPortion(3))
                    .wrapping(Wrapping::Word),
            ]
            .spacing(12),
        );
    }

    let mut content = Column::new();
    if let Some(file_label) = file_label {
        content = content.push(text(format!("File: {file_label}")).size(16));
    }

    content.push(scrollable(table.spacing(8))).spacing(12).into()
}
