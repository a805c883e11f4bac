use iced::widget::{column, container, horizontal_rule, scrollable, text, Column};
use iced::widget::image;
use iced::{Alignment, Element, Length, Task, Theme};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

mod api;
mod config;
mod effect;
mod error;
mod state;
mod ui;

use config::Config;
use state::data::Model;
use state::session::Session;
use state::update::{Cmd, Msg};
use ui::previews::PreviewCache;

/// Main application state
struct PetGallery {
    api: api::ImageApi,
    /// Every model the app has been in; the cursor picks the one on screen
    session: Session,
    /// Downloaded pictures, shared by all snapshots
    previews: PreviewCache,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// A model message, routed through the pure update
    App(Msg),
    /// Picture bytes arrived (or failed) for the given image id
    PreviewLoaded(String, Result<image::Handle, String>),
    /// User moved the time-travel slider
    TimeTravel(u32),
}

impl PetGallery {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        let config = Config::load();

        // Only fails when the TLS backend cannot be initialized
        let api = api::ImageApi::new(&config)
            .expect("Failed to initialize HTTP client");

        info!(
            animal = %config.default_animal,
            batch_size = config.batch_size,
            history_limit = config.history_limit,
            "pet gallery initialized"
        );

        let session = Session::new(
            Model::new(config.default_animal),
            config.history_limit,
            config.batch_size,
        );

        (
            PetGallery {
                api,
                session,
                previews: PreviewCache::new(),
            },
            Task::none(),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::App(msg) => {
                let cmd = match self.session.dispatch(msg) {
                    Cmd::LoadPreviews(images) => Cmd::LoadPreviews(self.previews.claim(images)),
                    other => other,
                };
                debug!(in_flight = self.session.in_flight(), "message dispatched");

                effect::perform(cmd, &self.api)
            }
            Message::PreviewLoaded(id, result) => {
                if let Err(err) = &result {
                    warn!(%id, error = %err, "picture download failed");
                }
                self.previews.insert(id, result);
                debug!(cached = self.previews.len(), "preview stored");
                Task::none()
            }
            Message::TimeTravel(index) => {
                self.session.travel_to(index as usize);
                Task::none()
            }
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<'_, Message> {
        let model = self.session.model();

        let content: Column<Message> = column![
            text("Pet Gallery").size(36),
            ui::controls::toolbar(model),
            ui::controls::status_line(model),
            ui::controls::time_travel(self.session.history()),
            horizontal_rule(1),
            scrollable(ui::gallery::grid(&model.images, &self.previews))
                .height(Length::Fill),
        ]
        .spacing(16)
        .padding(24)
        .align_x(Alignment::Center);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("pet_gallery=info")),
        )
        .init();

    iced::application(
        "Pet Gallery",
        PetGallery::update,
        PetGallery::view,
    )
    .theme(PetGallery::theme)
    .centered()
    .run_with(PetGallery::new)
}
