/// Validation of `/images/search` responses.
///
/// The payload must be a JSON array of objects carrying a string `id` and an
/// absolute http(s) `url`. Anything else in an entry (width, height, breeds)
/// is ignored.

use serde::Deserialize;
use url::Url;

use crate::error::FetchError;
use crate::state::data::PetImage;

#[derive(Deserialize, Debug)]
struct RawImage {
    id: String,
    url: String,
}

/// Parse and validate a response body
pub fn parse_images(body: &str) -> Result<Vec<PetImage>, FetchError> {
    let raw: Vec<RawImage> = serde_json::from_str(body)?;
    raw.into_iter().map(validate).collect()
}

fn validate(raw: RawImage) -> Result<PetImage, FetchError> {
    if raw.id.trim().is_empty() {
        return Err(FetchError::EmptyId);
    }

    let parsed = Url::parse(&raw.url).map_err(|e| FetchError::InvalidUrl {
        id: raw.id.clone(),
        url: raw.url.clone(),
        reason: e.to_string(),
    })?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(FetchError::InvalidUrl {
            reason: format!("unsupported scheme {}", parsed.scheme()),
            id: raw.id,
            url: raw.url,
        });
    }

    Ok(PetImage {
        id: raw.id,
        url: raw.url,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_cat_api_payload() {
        let body = r#"[
            {"id":"b7k","url":"https://cdn2.thecatapi.com/images/b7k.jpg","width":500,"height":375},
            {"id":"MTY3ODIyMQ","url":"https://cdn2.thecatapi.com/images/MTY3ODIyMQ.jpg","width":1024,"height":768}
        ]"#;

        let images = parse_images(body).unwrap();
        assert_eq!(images.len(), 2);
        assert_eq!(images[0].id, "b7k");
        assert_eq!(images[1].url, "https://cdn2.thecatapi.com/images/MTY3ODIyMQ.jpg");
    }

    #[test]
    fn test_empty_array_is_valid() {
        assert!(parse_images("[]").unwrap().is_empty());
    }

    #[test]
    fn test_object_instead_of_array_is_rejected() {
        let err = parse_images(r#"{"id":"x","url":"https://a/b.jpg"}"#).unwrap_err();
        assert!(matches!(err, FetchError::Schema(_)));
    }

    #[test]
    fn test_missing_url_is_rejected() {
        let err = parse_images(r#"[{"id":"x"}]"#).unwrap_err();
        assert!(matches!(err, FetchError::Schema(_)));
    }

    #[test]
    fn test_numeric_id_is_rejected() {
        let err = parse_images(r#"[{"id":7,"url":"https://a/b.jpg"}]"#).unwrap_err();
        assert!(matches!(err, FetchError::Schema(_)));
    }

    #[test]
    fn test_blank_id_is_rejected() {
        let err = parse_images(r#"[{"id":" ","url":"https://a/b.jpg"}]"#).unwrap_err();
        assert!(matches!(err, FetchError::EmptyId));
    }

    #[test]
    fn test_relative_url_is_rejected() {
        let err = parse_images(r#"[{"id":"x","url":"/images/x.jpg"}]"#).unwrap_err();
        assert!(matches!(err, FetchError::InvalidUrl { .. }));
    }

    #[test]
    fn test_non_http_scheme_is_rejected() {
        let err = parse_images(r#"[{"id":"x","url":"file:///etc/passwd"}]"#).unwrap_err();
        match err {
            FetchError::InvalidUrl { id, reason, .. } => {
                assert_eq!(id, "x");
                assert!(reason.contains("file"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
