use iced::widget::{container, image, text, Column};
use iced::{Alignment, Element, Length};
use iced_aw::Wrap;

use super::previews::{Preview, PreviewCache};
use crate::state::data::PetImage;
use crate::Message;

/// Tile edge length in logical pixels
const TILE_SIZE: f32 = 200.0;

/// Grid of fetched pictures, oldest first
pub fn grid<'a>(images: &'a [PetImage], previews: &'a PreviewCache) -> Element<'a, Message> {
    if images.is_empty() {
        return container(text("No pictures yet. Press fetch!").size(18))
            .padding(40)
            .center_x(Length::Fill)
            .into();
    }

    let tiles: Vec<Element<Message>> = images.iter().map(|pet| tile(pet, previews)).collect();

    Wrap::with_elements(tiles).into()
}

fn tile<'a>(pet: &'a PetImage, previews: &'a PreviewCache) -> Element<'a, Message> {
    let body: Element<Message> = match previews.get(&pet.id) {
        Some(Preview::Ready(handle)) => image(handle.clone())
            .width(Length::Fixed(TILE_SIZE))
            .height(Length::Fixed(TILE_SIZE))
            .into(),
        Some(Preview::Failed(message)) => placeholder(format!("Could not load: {}", message)),
        Some(Preview::Loading) | None => placeholder("Loading...".to_string()),
    };

    let content: Column<Message> = Column::new()
        .push(body)
        .push(text(pet.id.as_str()).size(12))
        .spacing(4)
        .align_x(Alignment::Center);

    container(content).padding(5).into()
}

fn placeholder<'a>(label: String) -> Element<'a, Message> {
    container(text(label).size(12))
        .width(Length::Fixed(TILE_SIZE))
        .height(Length::Fixed(TILE_SIZE))
        .center_x(Length::Fixed(TILE_SIZE))
        .center_y(Length::Fixed(TILE_SIZE))
        .into()
}
