use crate::model::{Direction, MetadataRecord, SliceFile};
use iced::widget::image::Handle;

/// Messages dispatched through the application update loop.
///
/// `MetadataLoaded` and `FrameDecoded` carry the generation of the load
/// cycle that produced them; completions from superseded cycles are
/// discarded by the update loop.
#[derive(Debug, Clone)]
pub enum Message {
    PickFiles,
    FilesSelected(Vec<SliceFile>),
    Advance(Direction),
    WheelScrolled(f32),
    ToggleAnonymize,
    MetadataLoaded {
        generation: u64,
        result: Result<MetadataRecord, String>,
    },
    FrameDecoded {
        generation: u64,
        result: Result<Option<Handle>, String>,
    },
}
