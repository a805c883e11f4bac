/// Application configuration
///
/// Read from `config.toml` in the user's config directory:
/// - Linux: ~/.config/pet-gallery/config.toml
/// - macOS: ~/Library/Application Support/pet-gallery/config.toml
/// - Windows: %APPDATA%\pet-gallery\config.toml
///
/// Every field is optional. A few values can be overridden from the
/// environment (see `apply_env`).

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::warn;

use crate::error::ConfigError;
use crate::state::data::Animal;

/// The image APIs accept between 1 and 10 results per request without a key
pub const MAX_BATCH_SIZE: u8 = 10;

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Category selected at startup
    pub default_animal: Animal,
    /// Pictures requested per fetch
    pub batch_size: u8,
    /// Snapshots kept for the time-travel slider
    pub history_limit: usize,
    /// Per-request timeout
    pub timeout_secs: u64,
    pub cat_api_url: String,
    pub dog_api_url: String,
    /// Sent as `x-api-key` when present
    pub api_key: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_animal: Animal::Cat,
            batch_size: 1,
            history_limit: 200,
            timeout_secs: 15,
            cat_api_url: "https://api.thecatapi.com/v1/images/search".to_string(),
            dog_api_url: "https://api.thedogapi.com/v1/images/search".to_string(),
            api_key: None,
        }
    }
}

impl Config {
    /// Load the config file (if any) and apply environment overrides.
    /// A missing or broken file falls back to defaults; the environment
    /// still applies on top.
    pub fn load() -> Self {
        Self::load_from(Self::get_config_path().as_deref(), |key| std::env::var(key).ok())
    }

    fn load_from(path: Option<&Path>, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = match path {
            Some(path) if path.exists() => Self::from_file(path).unwrap_or_else(|err| {
                warn!(error = %err, "falling back to default config");
                Self::default()
            }),
            _ => Self::default(),
        };

        config.apply_env(lookup);
        config.normalized()
    }

    /// Path of the config file, if a config directory exists on this platform
    pub fn get_config_path() -> Option<PathBuf> {
        let mut path = dirs::config_dir()?;
        path.push("pet-gallery");
        path.push("config.toml");
        Some(path)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&text)
    }

    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str::<Config>(text)?.normalized())
    }

    /// Apply `PET_GALLERY_*` overrides. Unparseable values are ignored.
    fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(key) = lookup("PET_GALLERY_API_KEY").filter(|k| !k.trim().is_empty()) {
            self.api_key = Some(key);
        }

        if let Some(animal) = lookup("PET_GALLERY_ANIMAL").and_then(|v| Animal::parse(&v)) {
            self.default_animal = animal;
        }

        if let Some(size) = lookup("PET_GALLERY_BATCH_SIZE").and_then(|v| v.trim().parse().ok()) {
            self.batch_size = size;
        }
    }

    fn normalized(mut self) -> Self {
        self.batch_size = self.batch_size.clamp(1, MAX_BATCH_SIZE);
        self.timeout_secs = self.timeout_secs.max(1);
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Endpoint for the given category
    pub fn endpoint(&self, animal: Animal) -> &str {
        match animal {
            Animal::Cat => &self.cat_api_url,
            Animal::Dog => &self.dog_api_url,
        }
    }
}
