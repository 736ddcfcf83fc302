//! Ordered provider fallback chain
//!
//! Tries providers strictly in priority order, one sequential request each,
//! no intra-provider retries. Transient unavailability advances the chain;
//! anything else terminates it. Success yields a `data:` URI ready for the
//! album result.

use super::{HfImageProvider, ImageProvider, ProviderImage};
use crate::models::Config;
use crate::{Error, Result};
use tracing::{debug, info, warn};

pub struct ProviderChain {
    providers: Vec<Box<dyn ImageProvider>>,
}

impl ProviderChain {
    /// Build the chain from configuration.
    ///
    /// Without an API credential the chain is empty: every fetch fails
    /// immediately, identical to exhaustion, and the caller falls back to
    /// procedural artwork.
    pub fn from_config(config: &Config) -> Self {
        let providers: Vec<Box<dyn ImageProvider>> = match &config.image_api_key {
            Some(key) => {
                let http_client = reqwest::Client::new();
                config
                    .image_models
                    .iter()
                    .map(|model| {
                        Box::new(
                            HfImageProvider::new_with_client(
                                key.clone(),
                                model.clone(),
                                http_client.clone(),
                            )
                            .with_base_url(config.image_api_base.clone()),
                        ) as Box<dyn ImageProvider>
                    })
                    .collect()
            }
            None => {
                info!("No IMAGE_API_KEY set; remote image generation disabled");
                Vec::new()
            }
        };

        Self { providers }
    }

    /// Build a chain from explicit providers (tests and harnesses).
    pub fn with_providers(providers: Vec<Box<dyn ImageProvider>>) -> Self {
        Self { providers }
    }

    /// Attempt each provider in order and return a base64 `data:` URI for
    /// the first image produced. `Err` means the chain is exhausted or hit
    /// a fatal failure; the caller decides how to recover.
    pub async fn fetch_cover(&self, prompt: &str) -> Result<String> {
        for provider in &self.providers {
            debug!("Attempting image provider {}", provider.id());
            match provider.generate(prompt).await {
                Ok(image) => {
                    info!(
                        "Provider {} produced {} bytes ({})",
                        provider.id(),
                        image.bytes.len(),
                        image.content_type
                    );
                    return Ok(to_data_uri(&image));
                }
                Err(Error::ProviderUnavailable(reason)) => {
                    warn!(
                        "Provider {} unavailable ({}); trying next",
                        provider.id(),
                        reason
                    );
                }
                Err(e) => {
                    warn!("Provider {} failed fatally: {}", provider.id(), e);
                    return Err(e);
                }
            }
        }

        Err(Error::Provider(
            "all image providers exhausted".to_string(),
        ))
    }
}

fn to_data_uri(image: &ProviderImage) -> String {
    use base64::Engine as _;
    format!(
        "data:{};base64,{}",
        image.content_type,
        base64::engine::general_purpose::STANDARD.encode(&image.bytes)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::MockImageProvider;

    fn boxed(provider: MockImageProvider) -> Box<dyn ImageProvider> {
        Box::new(provider)
    }

    #[tokio::test]
    async fn test_first_provider_success_short_circuits() {
        let first = MockImageProvider::new("first").with_image_response(vec![1, 2, 3], "image/png");
        let second = MockImageProvider::new("second");
        let second_probe = second.clone();

        let chain = ProviderChain::with_providers(vec![boxed(first), boxed(second)]);
        let uri = chain.fetch_cover("prompt").await.unwrap();

        assert!(uri.starts_with("data:image/png;base64,"));
        assert_eq!(second_probe.get_call_count(), 0);
    }

    #[tokio::test]
    async fn test_unavailable_advances_to_next_provider() {
        let first = MockImageProvider::new("first").with_unavailable("rate limited");
        let second =
            MockImageProvider::new("second").with_image_response(vec![4, 5], "image/jpeg");
        let first_probe = first.clone();

        let chain = ProviderChain::with_providers(vec![boxed(first), boxed(second)]);
        let uri = chain.fetch_cover("prompt").await.unwrap();

        assert!(uri.starts_with("data:image/jpeg;base64,"));
        assert_eq!(first_probe.get_call_count(), 1);
    }

    #[tokio::test]
    async fn test_fatal_error_stops_the_chain() {
        let first = MockImageProvider::new("first").with_failure("malformed payload");
        let second = MockImageProvider::new("second").with_image_response(vec![1], "image/png");
        let second_probe = second.clone();

        let chain = ProviderChain::with_providers(vec![boxed(first), boxed(second)]);
        let err = chain.fetch_cover("prompt").await.unwrap_err();

        assert!(matches!(err, Error::Provider(_)));
        assert_eq!(second_probe.get_call_count(), 0);
    }

    #[tokio::test]
    async fn test_all_unavailable_exhausts_chain() {
        let first = MockImageProvider::new("first").with_unavailable("loading");
        let second = MockImageProvider::new("second").with_unavailable("quota");

        let chain = ProviderChain::with_providers(vec![boxed(first), boxed(second)]);
        let err = chain.fetch_cover("prompt").await.unwrap_err();
        assert!(matches!(err, Error::Provider(_)));
    }

    #[tokio::test]
    async fn test_empty_chain_fails_immediately() {
        let chain = ProviderChain::with_providers(Vec::new());
        let err = chain.fetch_cover("prompt").await.unwrap_err();
        assert!(matches!(err, Error::Provider(_)));
    }

    #[tokio::test]
    async fn test_missing_credential_builds_empty_chain() {
        let config = Config {
            image_api_key: None,
            image_api_base: "https://example.invalid".to_string(),
            image_models: vec!["a/model".to_string()],
        };

        let chain = ProviderChain::from_config(&config);
        assert!(chain.fetch_cover("prompt").await.is_err());
    }

    #[test]
    fn test_data_uri_encoding() {
        let image = ProviderImage {
            bytes: vec![0x01, 0x02],
            content_type: "image/png".to_string(),
        };
        assert_eq!(to_data_uri(&image), "data:image/png;base64,AQI=");
    }
}
