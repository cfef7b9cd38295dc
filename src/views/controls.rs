use crate::message::Message;
use crate::model::{Direction, SeriesState};
use iced::widget::{button, checkbox, row, text};
use iced::{Alignment, Element};

/// File picker, slice navigation, and the anonymize toggle.
///
/// Previous/Next are only pressable for a series with more than one
/// slice; for shorter series the wheel doubles as zoom instead.
pub fn controls(series: &SeriesState) -> Element<'static, Message> {
    let pick_button = button("Import DICOM Files").on_press(Message::PickFiles);

    let navigable = series.len() > 1;
    let previous_button = button("Previous")
        .on_press_maybe(navigable.then_some(Message::Advance(Direction::Previous)));
    let next_button =
        button("Next").on_press_maybe(navigable.then_some(Message::Advance(Direction::Next)));

    let position: Element<'static, Message> = match series.current_file() {
        Some(file) => text(format!(
            "Slice {} / {} ({})",
            series.index() + 1,
            series.len(),
            file.name()
        ))
        .into(),
        None => text("No files loaded").into(),
    };

    let anonymize_toggle = checkbox("Anonymize patient fields", series.anonymize_enabled())
        .on_toggle(|_| Message::ToggleAnonymize);

    row![
        pick_button,
        previous_button,
        next_button,
        position,
        anonymize_toggle
    ]
    .spacing(12)
    .align_y(Alignment::Center)
    .into()
}
