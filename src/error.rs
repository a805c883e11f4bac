/// Error types
///
/// Fetch errors end up as the text of `Status::Failure`, so their
/// `Display` output is what the user reads.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Server answered with HTTP {code}")]
    Status { code: u16 },

    #[error("Unexpected response: {0}")]
    Schema(#[from] serde_json::Error),

    #[error("Image {id} has an invalid url {url:?}: {reason}")]
    InvalidUrl {
        id: String,
        url: String,
        reason: String,
    },

    #[error("Response contained an image without an id")]
    EmptyId,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}
