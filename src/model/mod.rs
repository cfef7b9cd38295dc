pub mod anonymize;
pub mod fields;
pub mod loader;
pub mod metadata;
pub mod series;

pub use anonymize::anonymize;
pub use metadata::MetadataRecord;
pub use series::{Direction, SeriesState, SliceFile, WheelOutcome};
