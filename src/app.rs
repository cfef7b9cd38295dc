use crate::message::Message;
use crate::model::metadata::UNKNOWN;
use crate::model::{anonymize, loader, MetadataRecord, SeriesState, SliceFile};
use crate::model::{Direction, WheelOutcome};
use crate::views::{controls, image_panel, metadata_panel, FramePreview};
use iced::widget::text::Wrapping;
use iced::widget::{column, container, row, text};
use iced::{
    application, event, keyboard, mouse, window, Alignment, Element, Event, Length, Subscription,
    Task, Theme,
};
use rfd::AsyncFileDialog;

const APP_TITLE: &str = "MediView";

pub fn run() -> iced::Result {
    let _ = env_logger::Builder::from_default_env()
        .format_timestamp_secs()
        .try_init();

    application(APP_TITLE, App::update, App::view)
        .subscription(App::subscription)
        .theme(App::theme)
        .run()
}

/// Application state.
///
/// Owns the navigation state machine plus the state of the one live
/// extraction/render cycle: the bound frame, the per-slice error, and the
/// generation counter that identifies the cycle. Every (files, index)
/// change bumps the generation, so late completions from a superseded
/// cycle can be recognized and dropped.
#[derive(Default)]
pub struct App {
    series: SeriesState,
    generation: u64,
    frame: FramePreview,
    last_error: Option<String>,
}

impl App {
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::PickFiles => Task::perform(
                async {
                    match AsyncFileDialog::new().pick_files().await {
                        Some(handles) => handles
                            .into_iter()
                            .map(|handle| SliceFile::new(handle.path().to_path_buf()))
                            .collect(),
                        None => Vec::new(),
                    }
                },
                Message::FilesSelected,
            ),
            Message::FilesSelected(files) => {
                self.series.select_files(files);
                self.sync_current_slice()
            }
            Message::Advance(direction) => {
                if self.series.advance(direction) {
                    self.sync_current_slice()
                } else {
                    Task::none()
                }
            }
            Message::WheelScrolled(delta) => match self.series.handle_wheel(delta) {
                WheelOutcome::SliceChanged => self.sync_current_slice(),
                WheelOutcome::Zoomed | WheelOutcome::Ignored => Task::none(),
            },
            Message::ToggleAnonymize => {
                self.series.toggle_anonymize();
                Task::none()
            }
            Message::MetadataLoaded { generation, result } => {
                if generation != self.generation {
                    log::debug!("Discarding metadata from a superseded load cycle");
                    return Task::none();
                }
                match result {
                    Ok(record) => {
                        log::debug!(
                            "Metadata ready: {} fields, Modality {}",
                            record.len(),
                            record.get("Modality").unwrap_or(UNKNOWN)
                        );
                        self.series.set_metadata(record);
                        self.last_error = None;
                    }
                    Err(err) => {
                        // Failed slices show the all-Unknown record rather
                        // than carrying over the previous slice's values.
                        self.series.set_metadata(MetadataRecord::unknown());
                        self.last_error = Some(err);
                    }
                }
                Task::none()
            }
            Message::FrameDecoded { generation, result } => {
                if generation != self.generation {
                    log::debug!("Discarding frame from a superseded load cycle");
                    return Task::none();
                }
                match result {
                    Ok(Some(handle)) => self.frame = FramePreview::Ready(handle),
                    Ok(None) => {
                        log::info!("Object carries no frames to preview");
                        self.frame = FramePreview::Unavailable;
                    }
                    Err(err) => {
                        log::warn!("Unable to build frame preview: {err}");
                        self.frame = FramePreview::Unavailable;
                    }
                }
                Task::none()
            }
        }
    }

    /// Rebinds the rendering surface to the current slice.
    ///
    /// Called from every entry point that changes (files, index): the old
    /// frame is released first, the cycle generation advances, and two
    /// independent tasks are started for the new slice, one for metadata
    /// and one for the frame. Either may complete first; both are tagged
    /// with the generation they belong to.
    fn sync_current_slice(&mut self) -> Task<Message> {
        self.generation = self.generation.wrapping_add(1);
        self.frame = FramePreview::Pending;
        self.last_error = None;
        self.series.clear_metadata();

        let Some(file) = self.series.current_file() else {
            return Task::none();
        };

        let generation = self.generation;
        let metadata_path = file.path.clone();
        let frame_path = file.path.clone();

        Task::batch([
            Task::perform(
                async move { loader::extract_slice(&metadata_path) },
                move |result| Message::MetadataLoaded { generation, result },
            ),
            Task::perform(
                async move { loader::decode_slice(&frame_path) },
                move |result| Message::FrameDecoded { generation, result },
            ),
        ])
    }

    /// Arrow keys map to slice navigation. Wheel events are forwarded only
    /// when no widget consumed them, so scrolling the metadata panel never
    /// doubles as navigation.
    pub fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            keyboard::on_key_press(|key, _modifiers| match key {
                keyboard::Key::Named(keyboard::key::Named::ArrowRight) => {
                    Some(Message::Advance(Direction::Next))
                }
                keyboard::Key::Named(keyboard::key::Named::ArrowLeft) => {
                    Some(Message::Advance(Direction::Previous))
                }
                _ => None,
            }),
            event::listen_with(forward_unhandled_wheel),
        ])
    }

    pub fn view(&self) -> Element<'_, Message> {
        let controls_row = controls(&self.series);

        let file_label = self
            .series
            .current_file()
            .map(|file| file.path.display().to_string());
        let display_record = self.series.metadata().map(|record| {
            if self.series.anonymize_enabled() {
                anonymize(record)
            } else {
                record.clone()
            }
        });

        let metadata_content =
            metadata_panel(file_label, display_record, self.series.is_empty());
        let metadata_panel = container(metadata_content)
            .padding(16)
            .width(Length::FillPortion(2));

        let image_content = image_panel(
            &self.frame,
            self.series.zoom(),
            self.series.is_empty(),
            self.last_error.is_some(),
        );
        let image_panel = container(image_content)
            .padding(16)
            .width(Length::FillPortion(3))
            .height(Length::Fill)
            .align_x(Alignment::Center)
            .align_y(Alignment::Center);

        let mut content = column![row![metadata_panel, image_panel]
            .spacing(16)
            .width(Length::Fill)
            .height(Length::Fill)]
        .spacing(16);

        if let Some(error) = &self.last_error {
            content = content.push(text(error).size(16).wrapping(Wrapping::Word));
        }

        column![controls_row, content]
            .padding(20)
            .spacing(20)
            .align_x(Alignment::Start)
            .into()
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn forward_unhandled_wheel(
    event: Event,
    status: event::Status,
    _window: window::Id,
) -> Option<Message> {
    match (event, status) {
        (Event::Mouse(mouse::Event::WheelScrolled { delta }), event::Status::Ignored) => {
            let y = match delta {
                mouse::ScrollDelta::Lines { y, .. } | mouse::ScrollDelta::Pixels { y, .. } => y,
            };
            Some(Message::WheelScrolled(y))
        }
        _ => None,
    }
}
