/// Command interpreter.
///
/// Turns a `Cmd` returned by `update` into an iced `Task`. This is the only
/// place that talks to the network.

use iced::widget::image;
use iced::Task;
use tracing::{info, warn};

use crate::api::ImageApi;
use crate::error::FetchError;
use crate::state::data::PetImage;
use crate::state::update::{Cmd, Msg};
use crate::Message;

pub fn perform(cmd: Cmd, api: &ImageApi) -> Task<Message> {
    match cmd {
        Cmd::None => Task::none(),
        Cmd::Fetch { animal, limit } => {
            info!(%animal, limit, "requesting pictures");
            let api = api.clone();
            Task::perform(
                async move { api.fetch_images(animal, limit).await },
                |result| Message::App(fetch_outcome(result)),
            )
        }
        Cmd::LoadPreviews(images) => Task::batch(images.into_iter().map(|pet| {
            let api = api.clone();
            Task::perform(
                async move {
                    let preview = api
                        .fetch_bytes(&pet.url)
                        .await
                        .map(image::Handle::from_bytes)
                        .map_err(|e| e.to_string());
                    (pet.id, preview)
                },
                |(id, preview)| Message::PreviewLoaded(id, preview),
            )
        })),
    }
}

/// Map a finished search onto the message fed back into `update`
pub fn fetch_outcome(result: Result<Vec<PetImage>, FetchError>) -> Msg {
    match result {
        Ok(images) => {
            info!(count = images.len(), "fetch succeeded");
            Msg::FetchSucceeded(images)
        }
        Err(err) => {
            warn!(error = %err, "fetch failed");
            Msg::FetchFailed(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_becomes_fetch_succeeded() {
        let images = vec![PetImage {
            id: "a".into(),
            url: "https://cdn2.thedogapi.com/images/a.jpg".into(),
        }];
        assert_eq!(fetch_outcome(Ok(images.clone())), Msg::FetchSucceeded(images));
    }

    #[test]
    fn test_error_becomes_failure_message() {
        let msg = fetch_outcome(Err(FetchError::Status { code: 429 }));
        assert_eq!(msg, Msg::FetchFailed("Server answered with HTTP 429".into()));
    }
}
