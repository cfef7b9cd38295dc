use crate::message::Message;
use iced::widget::image::Handle;
use iced::widget::{text, Image};
use iced::{Element, Length};

/// Base edge length of the display region; the zoom scale multiplies it.
pub const VIEWPORT_SIZE: f32 = 512.0;

/// What the rendering surface currently holds for the slice being shown.
#[derive(Debug, Clone, Default)]
pub enum FramePreview {
    /// Decode task still running.
    #[default]
    Pending,
    Ready(Handle),
    /// Decode failed, or the object carries no frames.
    Unavailable,
}

/// The rendering surface for the current slice.
///
/// Shows the decoded frame scaled by the zoom factor, or a placeholder
/// while nothing is bound to the surface (no selection, decode still
/// pending, or a failed slice).
pub fn image_panel(
    frame: &FramePreview,
    zoom: f32,
    series_empty: bool,
    slice_failed: bool,
) -> Element<'static, Message> {
    if let FramePreview::Ready(handle) = frame {
        let side = Length::Fixed(VIEWPORT_SIZE * zoom);
        return Image::new(handle.clone()).width(side).height(side).into();
    }

    if series_empty {
        return text("Select DICOM files to preview a slice").into();
    }

    match frame {
        FramePreview::Unavailable => text("No frame preview available").into(),
        FramePreview::Pending if slice_failed => text("No frame preview available").into(),
        _ => text("Decoding frame preview").into(),
    }
}
