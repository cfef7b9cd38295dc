pub mod controls;
pub mod metadata_panel;
pub mod viewport;

pub use controls::controls;
pub use metadata_panel::metadata_panel;
pub use viewport::{image_panel, FramePreview};
