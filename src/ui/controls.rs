use iced::widget::{button, column, pick_list, row, slider, text, Row};
use iced::{Alignment, Color, Element};

use crate::state::data::{Animal, Model, Status};
use crate::state::history::History;
use crate::state::update::Msg;
use crate::Message;

/// Category picker plus fetch / remove buttons
pub fn toolbar(model: &Model) -> Element<'_, Message> {
    let loading = model.status.is_loading();
    let has_images = !model.images.is_empty();

    let fetch_label = if loading {
        "Fetching...".to_string()
    } else {
        format!("Fetch {}", model.animal)
    };

    let buttons: Row<Message> = row![
        pick_list(Animal::ALL, Some(model.animal), |animal| {
            Message::App(Msg::SelectAnimal(animal))
        }),
        button(text(fetch_label))
            .on_press_maybe((!loading).then_some(Message::App(Msg::Fetch)))
            .padding(10),
        button("Remove last")
            .on_press_maybe(has_images.then_some(Message::App(Msg::RemoveLast)))
            .padding(10),
        button("Remove all")
            .on_press_maybe(has_images.then_some(Message::App(Msg::RemoveAll)))
            .padding(10),
    ]
    .spacing(10)
    .align_y(Alignment::Center);

    buttons.into()
}

/// One line describing the last request
pub fn status_line(model: &Model) -> Element<'_, Message> {
    let count = model.images.len();

    let line = match &model.status {
        Status::Idle => text(format!("Ready. {} pictures.", count)),
        Status::Loading => text(format!("Loading {}...", model.animal)),
        Status::Success => text(format!("{} pictures.", count)),
        Status::Failure(message) => text(format!("Error: {}", message))
            .color(Color::from_rgb(0.95, 0.4, 0.4)),
    };

    line.size(16).into()
}

/// Slider over recorded snapshots
pub fn time_travel(history: &History<Model>) -> Element<'_, Message> {
    let last = history.len().saturating_sub(1) as u32;
    let snapshot = history.current();

    let position = if history.is_live() {
        format!("Live ({} snapshots)", history.len())
    } else {
        format!("Snapshot {} of {}", history.cursor() + 1, history.len())
    };

    let details = format!(
        "{}  ·  {}  ·  {}",
        position,
        snapshot.label,
        snapshot.recorded_at.format("%H:%M:%S"),
    );

    let live = button("Live")
        .on_press_maybe((!history.is_live()).then_some(Message::TimeTravel(last)))
        .padding(6);

    column![
        row![
            slider(0..=last, history.cursor() as u32, Message::TimeTravel),
            live,
        ]
        .spacing(10)
        .align_y(Alignment::Center),
        text(details).size(13),
    ]
    .spacing(6)
    .into()
}
