use iced::widget::image;
use std::collections::HashMap;

use crate::state::data::PetImage;

/// Download state of one picture
#[derive(Debug, Clone)]
pub enum Preview {
    Loading,
    Ready(image::Handle),
    Failed(String),
}

/// Decoded pictures keyed by image id.
///
/// Lives beside the model rather than inside it, so history snapshots stay
/// plain data. Entries are never evicted: travelling back in time can show
/// any picture fetched during the session.
#[derive(Debug, Default)]
pub struct PreviewCache {
    entries: HashMap<String, Preview>,
}

impl PreviewCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep only the pictures that still need a download and mark them
    /// in flight. Ready or loading ids are skipped; failed ones are retried.
    pub fn claim(&mut self, images: Vec<PetImage>) -> Vec<PetImage> {
        images
            .into_iter()
            .filter(|image| match self.entries.get(&image.id) {
                Some(Preview::Ready(_)) | Some(Preview::Loading) => false,
                Some(Preview::Failed(_)) | None => {
                    self.entries.insert(image.id.clone(), Preview::Loading);
                    true
                }
            })
            .collect()
    }

    pub fn insert(&mut self, id: String, result: Result<image::Handle, String>) {
        let preview = match result {
            Ok(handle) => Preview::Ready(handle),
            Err(message) => Preview::Failed(message),
        };
        self.entries.insert(id, preview);
    }

    pub fn get(&self, id: &str) -> Option<&Preview> {
        self.entries.get(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pet(id: &str) -> PetImage {
        PetImage {
            id: id.to_string(),
            url: format!("https://cdn2.thecatapi.com/images/{id}.jpg"),
        }
    }

    #[test]
    fn test_claim_then_ready() {
        let mut cache = PreviewCache::new();
        let claimed = cache.claim(vec![pet("a"), pet("b")]);
        assert_eq!(claimed, vec![pet("a"), pet("b")]);

        assert!(matches!(cache.get("a"), Some(Preview::Loading)));
        assert_eq!(cache.len(), 2);

        cache.insert("a".into(), Ok(image::Handle::from_bytes(vec![0u8; 4])));
        assert!(matches!(cache.get("a"), Some(Preview::Ready(_))));
        assert!(matches!(cache.get("b"), Some(Preview::Loading)));
    }

    #[test]
    fn test_failed_download_keeps_message() {
        let mut cache = PreviewCache::new();
        cache.insert("x".into(), Err("Server answered with HTTP 404".into()));

        match cache.get("x") {
            Some(Preview::Failed(message)) => assert!(message.contains("404")),
            other => panic!("unexpected preview: {other:?}"),
        }
    }

    #[test]
    fn test_claim_skips_cached_and_in_flight() {
        let mut cache = PreviewCache::new();
        cache.insert("a".into(), Ok(image::Handle::from_bytes(vec![1u8])));
        cache.claim(vec![pet("b")]);

        let claimed = cache.claim(vec![pet("a"), pet("b"), pet("c")]);
        assert_eq!(claimed, vec![pet("c")]);
        assert!(matches!(cache.get("a"), Some(Preview::Ready(_))));
    }

    #[test]
    fn test_claim_dedupes_within_batch() {
        let mut cache = PreviewCache::new();
        let claimed = cache.claim(vec![pet("a"), pet("a")]);
        assert_eq!(claimed.len(), 1);
    }

    #[test]
    fn test_claim_retries_failed() {
        let mut cache = PreviewCache::new();
        cache.insert("x".into(), Err("timeout".into()));
        assert_eq!(cache.claim(vec![pet("x")]), vec![pet("x")]);
        assert!(matches!(cache.get("x"), Some(Preview::Loading)));
    }

    #[test]
    fn test_unknown_id() {
        assert!(PreviewCache::new().get("missing").is_none());
    }
}
