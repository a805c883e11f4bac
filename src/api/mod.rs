/// Remote image API access
///
/// - HTTP client for the cat/dog endpoints (client.rs)
/// - Runtime validation of the JSON payload (schema.rs)

pub mod client;
pub mod schema;

pub use client::ImageApi;
