use super::metadata::MetadataRecord;
use std::path::PathBuf;

/// Multiplier applied to the zoom scale per wheel step.
pub const ZOOM_STEP: f32 = 1.05;

const MIN_ZOOM: f32 = 0.1;
const MAX_ZOOM: f32 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Previous,
}

/// One selected file of the active series.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SliceFile {
    pub path: PathBuf,
}

impl SliceFile {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

/// What a single wheel event was interpreted as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WheelOutcome {
    /// Series has more than one slice: the wheel changed the index.
    SliceChanged,
    /// Series has at most one slice: the wheel scaled the viewport.
    Zoomed,
    /// Zero delta, nothing to do.
    Ignored,
}

/// Navigation state for the active series: file list, current index,
/// extracted metadata, anonymization toggle, and viewport zoom.
///
/// The index is only meaningful while `files` is non-empty, and then
/// always stays within `[0, files.len())`.
#[derive(Debug)]
pub struct SeriesState {
    files: Vec<SliceFile>,
    index: usize,
    metadata: Option<MetadataRecord>,
    anonymize: bool,
    zoom: f32,
}

impl Default for SeriesState {
    fn default() -> Self {
        Self {
            files: Vec::new(),
            index: 0,
            metadata: None,
            anonymize: false,
            zoom: 1.0,
        }
    }
}

impl SeriesState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the series wholesale: index back to 0, metadata cleared,
    /// zoom reset. The anonymization toggle is preserved. An empty list
    /// returns the state machine to `Empty`.
    pub fn select_files(&mut self, files: Vec<SliceFile>) {
        self.files = files;
        self.index = 0;
        self.metadata = None;
        self.zoom = 1.0;
    }

    /// Moves the index circularly. No-op for series of at most one slice.
    /// Returns whether the index changed.
    pub fn advance(&mut self, direction: Direction) -> bool {
        if self.files.len() <= 1 {
            return false;
        }
        let length = self.files.len();
        self.index = match direction {
            Direction::Next => (self.index + 1) % length,
            Direction::Previous => (self.index + length - 1) % length,
        };
        true
    }

    /// Interprets one wheel event: slice navigation when the series has
    /// more than one file, viewport zoom otherwise. Positive delta means
    /// next slice or zoom in.
    pub fn handle_wheel(&mut self, delta: f32) -> WheelOutcome {
        if delta == 0.0 {
            return WheelOutcome::Ignored;
        }
        if self.files.len() > 1 {
            let direction = if delta > 0.0 {
                Direction::Next
            } else {
                Direction::Previous
            };
            self.advance(direction);
            WheelOutcome::SliceChanged
        } else {
            let factor = if delta > 0.0 { ZOOM_STEP } else { 1.0 / ZOOM_STEP };
            self.zoom = (self.zoom * factor).clamp(MIN_ZOOM, MAX_ZOOM);
            WheelOutcome::Zoomed
        }
    }

    pub fn toggle_anonymize(&mut self) {
        self.anonymize = !self.anonymize;
    }

    pub fn set_metadata(&mut self, metadata: MetadataRecord) {
        self.metadata = Some(metadata);
    }

    pub fn clear_metadata(&mut self) {
        self.metadata = None;
    }

    pub fn current_file(&self) -> Option<&SliceFile> {
        self.files.get(self.index)
    }

    pub fn metadata(&self) -> Option<&MetadataRecord> {
        self.metadata.as_ref()
    }

    pub fn anonymize_enabled(&self) -> bool {
        self.anonymize
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slices(count: usize) -> Vec<SliceFile> {
        (0..count)
            .map(|index| SliceFile::new(PathBuf::from(format!("slice_{index}.dcm"))))
            .collect()
    }

    #[test]
    fn starts_empty() {
        let state = SeriesState::new();
        assert!(state.is_empty());
        assert!(state.current_file().is_none());
        assert!(state.metadata().is_none());
    }

    #[test]
    fn select_files_resets_index_and_metadata_but_keeps_toggle() {
        let mut state = SeriesState::new();
        state.toggle_anonymize();
        state.select_files(slices(3));
        state.set_metadata(MetadataRecord::unknown());
        state.advance(Direction::Next);

        state.select_files(slices(2));
        assert_eq!(state.index(), 0);
        assert!(state.metadata().is_none());
        assert!(state.anonymize_enabled());
    }

    #[test]
    fn selecting_no_files_returns_to_empty() {
        let mut state = SeriesState::new();
        state.select_files(slices(2));
        state.select_files(Vec::new());
        assert!(state.is_empty());
        assert!(state.current_file().is_none());
    }

    #[test]
    fn advance_wraps_around_in_both_directions() {
        let mut state = SeriesState::new();
        state.select_files(slices(4));
        for _ in 0..4 {
            assert!(state.advance(Direction::Next));
        }
        assert_eq!(state.index(), 0);
        for _ in 0..4 {
            assert!(state.advance(Direction::Previous));
        }
        assert_eq!(state.index(), 0);

        assert!(state.advance(Direction::Previous));
        assert_eq!(state.index(), 3);
    }

    #[test]
    fn advance_is_a_noop_for_short_series() {
        let mut state = SeriesState::new();
        assert!(!state.advance(Direction::Next));

        state.select_files(slices(1));
        assert!(!state.advance(Direction::Next));
        assert!(!state.advance(Direction::Previous));
        assert_eq!(state.index(), 0);
    }

    #[test]
    fn wheel_navigates_when_more_than_one_slice() {
        let mut state = SeriesState::new();
        state.select_files(slices(3));
        assert_eq!(state.handle_wheel(1.0), WheelOutcome::SliceChanged);
        assert_eq!(state.index(), 1);
        assert_eq!(state.handle_wheel(-1.0), WheelOutcome::SliceChanged);
        assert_eq!(state.index(), 0);
        assert_eq!(state.zoom(), 1.0);
    }

    #[test]
    fn wheel_zooms_a_single_slice() {
        let mut state = SeriesState::new();
        state.select_files(slices(1));
        assert_eq!(state.handle_wheel(-1.0), WheelOutcome::Zoomed);
        assert!((state.zoom() - 1.0 / ZOOM_STEP).abs() < 1e-6);
        assert_eq!(state.index(), 0);

        assert_eq!(state.handle_wheel(1.0), WheelOutcome::Zoomed);
        assert!((state.zoom() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn zoom_stays_clamped() {
        let mut state = SeriesState::new();
        state.select_files(slices(1));
        for _ in 0..200 {
            state.handle_wheel(1.0);
        }
        assert!(state.zoom() <= 10.0);
        for _ in 0..400 {
            state.handle_wheel(-1.0);
        }
        assert!(state.zoom() >= 0.1);
    }

    #[test]
    fn zero_delta_is_ignored() {
        let mut state = SeriesState::new();
        state.select_files(slices(2));
        assert_eq!(state.handle_wheel(0.0), WheelOutcome::Ignored);
        assert_eq!(state.index(), 0);
    }

    #[test]
    fn toggle_flips_in_any_state() {
        let mut state = SeriesState::new();
        assert!(!state.anonymize_enabled());
        state.toggle_anonymize();
        assert!(state.anonymize_enabled());
        state.toggle_anonymize();
        assert!(!state.anonymize_enabled());
    }
}
