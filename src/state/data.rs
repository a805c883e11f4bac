/// Shared data structures for the application state
/// 
/// These structs represent the model that flows between
/// the update function and the UI layer.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which kind of animal the next fetch asks for
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Animal {
    #[default]
    Cat,
    Dog,
}

impl Animal {
    /// All selectable categories, in display order
    pub const ALL: &'static [Animal] = &[Animal::Cat, Animal::Dog];

    /// Parse a category name, ignoring case ("cat", "Dog", ...)
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "cat" | "cats" => Some(Animal::Cat),
            "dog" | "dogs" => Some(Animal::Dog),
            _ => None,
        }
    }
}

impl fmt::Display for Animal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Animal::Cat => write!(f, "Cats"),
            Animal::Dog => write!(f, "Dogs"),
        }
    }
}

/// A single fetched picture
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PetImage {
    /// Opaque id assigned by the remote API
    pub id: String,
    /// Absolute URL of the picture
    pub url: String,
}

/// Progress of the most recent request
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    Idle,
    Loading,
    Success,
    Failure(String),
}

impl Status {
    pub fn is_loading(&self) -> bool {
        matches!(self, Status::Loading)
    }
}

/// The whole UI state. Replaced wholesale on every message.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Model {
    pub images: Vec<PetImage>,
    pub status: Status,
    pub animal: Animal,
}

impl Model {
    /// Empty gallery with the given category preselected
    pub fn new(animal: Animal) -> Self {
        Self {
            animal,
            ..Self::default()
        }
    }
}
