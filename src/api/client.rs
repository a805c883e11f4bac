use reqwest::{Client, Request};
use tracing::debug;

use super::schema;
use crate::config::Config;
use crate::error::FetchError;
use crate::state::data::{Animal, PetImage};

/// HTTP client for the random-image endpoints.
///
/// Cheap to clone: `reqwest::Client` shares its connection pool.
#[derive(Debug, Clone)]
pub struct ImageApi {
    http: Client,
    cat_url: String,
    dog_url: String,
    api_key: Option<String>,
}

impl ImageApi {
    pub fn new(config: &Config) -> Result<Self, FetchError> {
        let http = Client::builder()
            .timeout(config.timeout())
            .user_agent(concat!("pet-gallery/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            cat_url: config.endpoint(Animal::Cat).to_string(),
            dog_url: config.endpoint(Animal::Dog).to_string(),
            api_key: config.api_key.clone(),
        })
    }

    fn endpoint(&self, animal: Animal) -> &str {
        match animal {
            Animal::Cat => &self.cat_url,
            Animal::Dog => &self.dog_url,
        }
    }

    /// Build the search request without sending it
    pub fn search_request(&self, animal: Animal, limit: u8) -> Result<Request, FetchError> {
        let mut builder = self
            .http
            .get(self.endpoint(animal))
            .query(&[("limit", limit)]);

        if let Some(key) = &self.api_key {
            builder = builder.header("x-api-key", key);
        }

        Ok(builder.build()?)
    }

    /// GET a batch of random pictures and validate the payload
    pub async fn fetch_images(&self, animal: Animal, limit: u8) -> Result<Vec<PetImage>, FetchError> {
        let request = self.search_request(animal, limit)?;
        debug!(url = %request.url(), "fetching images");

        let response = self.http.execute(request).await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                code: status.as_u16(),
            });
        }

        let body = response.text().await?;
        schema::parse_images(&body)
    }

    /// Download raw picture bytes for display
    pub async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let response = self.http.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                code: status.as_u16(),
            });
        }

        Ok(response.bytes().await?.to_vec())
    }
}
