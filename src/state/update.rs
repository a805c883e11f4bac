/// Messages, commands and the pure transition function.
///
/// `update` never performs I/O. It returns the next `Model` together with a
/// `Cmd` describing the side effect the shell should run (see `effect.rs`).

use super::data::{Animal, Model, PetImage, Status};

/// An event coming from the user or from a finished request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User clicked the fetch button
    Fetch,
    /// Request finished and the payload passed validation
    FetchSucceeded(Vec<PetImage>),
    /// Request failed (network, HTTP status or schema)
    FetchFailed(String),
    /// Drop the newest picture
    RemoveLast,
    /// Clear the gallery
    RemoveAll,
    /// Switch the category used by the next fetch
    SelectAnimal(Animal),
}

/// A side effect for the shell to perform
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Cmd {
    #[default]
    None,
    /// GET a batch of random pictures
    Fetch { animal: Animal, limit: u8 },
    /// Download the picture bytes for display
    LoadPreviews(Vec<PetImage>),
}

impl Msg {
    /// Short description shown next to a history snapshot
    pub fn label(&self) -> String {
        match self {
            Msg::Fetch => "fetch".to_string(),
            Msg::FetchSucceeded(images) => format!("fetch ok (+{})", images.len()),
            Msg::FetchFailed(_) => "fetch failed".to_string(),
            Msg::RemoveLast => "remove last".to_string(),
            Msg::RemoveAll => "remove all".to_string(),
            Msg::SelectAnimal(animal) => format!("select {}", animal),
        }
    }
}

/// Compute the next model and the command to run.
///
/// `limit` is the batch size for fetches, taken from config.
pub fn update(model: &Model, msg: Msg, limit: u8) -> (Model, Cmd) {
    match msg {
        Msg::Fetch => (
            Model {
                status: Status::Loading,
                ..model.clone()
            },
            Cmd::Fetch {
                animal: model.animal,
                limit,
            },
        ),
        Msg::FetchSucceeded(fetched) => {
            let mut images = model.images.clone();
            images.extend(fetched.iter().cloned());
            (
                Model {
                    images,
                    status: Status::Success,
                    animal: model.animal,
                },
                Cmd::LoadPreviews(fetched),
            )
        }
        Msg::FetchFailed(message) => (
            Model {
                status: Status::Failure(message),
                ..model.clone()
            },
            Cmd::None,
        ),
        Msg::RemoveLast => {
            let mut images = model.images.clone();
            images.pop();
            (
                Model {
                    images,
                    ..model.clone()
                },
                Cmd::None,
            )
        }
        Msg::RemoveAll => (
            Model {
                images: Vec::new(),
                ..model.clone()
            },
            Cmd::None,
        ),
        Msg::SelectAnimal(animal) => (
            Model {
                animal,
                ..model.clone()
            },
            Cmd::None,
        ),
    }
}
