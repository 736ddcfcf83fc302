use super::{ImageProvider, ProviderImage};
use crate::{Error, Result};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
enum MockOutcome {
    Image(Vec<u8>, String),
    Unavailable(String),
    Failure(String),
}

/// Scripted image provider for tests. Queued outcomes are served in order,
/// cycling; an empty queue serves a tiny valid PNG.
#[derive(Clone)]
pub struct MockImageProvider {
    id: String,
    outcomes: Arc<Mutex<Vec<MockOutcome>>>,
    call_count: Arc<Mutex<usize>>,
}

impl MockImageProvider {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            outcomes: Arc::new(Mutex::new(Vec::new())),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    pub fn with_image_response(self, bytes: Vec<u8>, content_type: &str) -> Self {
        self.outcomes
            .lock()
            .unwrap()
            .push(MockOutcome::Image(bytes, content_type.to_string()));
        self
    }

    pub fn with_unavailable(self, reason: &str) -> Self {
        self.outcomes
            .lock()
            .unwrap()
            .push(MockOutcome::Unavailable(reason.to_string()));
        self
    }

    pub fn with_failure(self, reason: &str) -> Self {
        self.outcomes
            .lock()
            .unwrap()
            .push(MockOutcome::Failure(reason.to_string()));
        self
    }

    pub fn get_call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }
}

#[async_trait]
impl ImageProvider for MockImageProvider {
    fn id(&self) -> &str {
        &self.id
    }

    async fn generate(&self, _prompt: &str) -> Result<ProviderImage> {
        let mut count = self.call_count.lock().unwrap();
        *count += 1;

        let outcomes = self.outcomes.lock().unwrap();
        if outcomes.is_empty() {
            // 1x1 PNG
            return Ok(ProviderImage {
                bytes: vec![
                    0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49,
                    0x48, 0x44, 0x52, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x02,
                    0x00, 0x00, 0x00, 0x90, 0x77, 0x53, 0xDE, 0x00, 0x00, 0x00, 0x0C, 0x49, 0x44,
                    0x41, 0x54, 0x08, 0x99, 0x63, 0xF8, 0xCF, 0xC0, 0x00, 0x00, 0x00, 0x01, 0x00,
                    0x01, 0xE2, 0x25, 0x00, 0xBC, 0x00, 0x00, 0x00, 0x00, 0x49, 0x45, 0x4E, 0x44,
                    0xAE, 0x42, 0x60, 0x82,
                ],
                content_type: "image/png".to_string(),
            });
        }

        let index = (*count - 1) % outcomes.len();
        match &outcomes[index] {
            MockOutcome::Image(bytes, content_type) => Ok(ProviderImage {
                bytes: bytes.clone(),
                content_type: content_type.clone(),
            }),
            MockOutcome::Unavailable(reason) => Err(Error::ProviderUnavailable(reason.clone())),
            MockOutcome::Failure(reason) => Err(Error::Provider(reason.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_default_response_is_png() {
        let provider = MockImageProvider::new("mock");
        let image = provider.generate("anything").await.unwrap();
        assert_eq!(&image.bytes[..4], &[0x89, 0x50, 0x4E, 0x47]);
        assert_eq!(image.content_type, "image/png");
    }

    #[tokio::test]
    async fn test_outcomes_cycle_in_order() {
        let provider = MockImageProvider::new("mock")
            .with_unavailable("loading")
            .with_image_response(vec![1], "image/png");

        assert!(matches!(
            provider.generate("p").await,
            Err(Error::ProviderUnavailable(_))
        ));
        assert!(provider.generate("p").await.is_ok());
        // Cycles back.
        assert!(provider.generate("p").await.is_err());
        assert_eq!(provider.get_call_count(), 3);
    }
}
