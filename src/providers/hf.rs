//! Hosted-inference image provider
//!
//! Talks to a Hugging Face style inference endpoint: POST the prompt plus
//! generation parameters to `{base}/models/{model}` and get back either raw
//! image bytes with an image content-type, or a JSON envelope carrying a
//! base64 payload.

use super::{ImageProvider, ProviderImage};
use crate::models::{GenerationParameters, ImageEnvelope, ImageGenerationRequest};
use crate::{Error, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// Status codes that mean "this model may recover, try the next one":
/// payment required, gone/withdrawn, rate limited, still loading.
const TRY_NEXT_STATUSES: &[u16] = &[402, 404, 410, 429, 503];

const DEFAULT_BASE_URL: &str = "https://api-inference.huggingface.co";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub struct HfImageProvider {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
    parameters: GenerationParameters,
}

impl HfImageProvider {
    pub fn new(api_key: String, model: String) -> Self {
        Self::new_with_client(api_key, model, Client::new())
    }

    pub fn new_with_client(api_key: String, model: String, client: Client) -> Self {
        Self {
            client,
            api_key,
            model,
            base_url: DEFAULT_BASE_URL.to_string(),
            parameters: GenerationParameters::default(),
        }
    }

    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    pub fn with_parameters(mut self, parameters: GenerationParameters) -> Self {
        self.parameters = parameters;
        self
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}", self.base_url, self.model)
    }
}

/// Sniff a content-type from magic bytes when the envelope doesn't carry one.
fn sniff_content_type(bytes: &[u8]) -> &'static str {
    match bytes {
        [0xFF, 0xD8, 0xFF, ..] => "image/jpeg",
        [0x89, 0x50, 0x4E, 0x47, ..] => "image/png",
        [0x52, 0x49, 0x46, 0x46, _, _, _, _, 0x57, 0x45, 0x42, 0x50, ..] => "image/webp",
        _ => "image/png",
    }
}

#[async_trait]
impl ImageProvider for HfImageProvider {
    fn id(&self) -> &str {
        &self.model
    }

    async fn generate(&self, prompt: &str) -> Result<ProviderImage> {
        tracing::debug!("Sending image generation request to {}", self.model);

        let request = ImageGenerationRequest {
            inputs: prompt.to_string(),
            parameters: self.parameters.clone(),
        };

        let response = self
            .client
            .post(self.endpoint())
            .timeout(REQUEST_TIMEOUT)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Request to {} failed: {}", self.model, e);
                if e.is_timeout() {
                    Error::ProviderUnavailable(format!("{} timed out", self.model))
                } else {
                    Error::Provider(format!("{}: {}", self.model, e))
                }
            })?;

        let status = response.status();
        if TRY_NEXT_STATUSES.contains(&status.as_u16()) {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::ProviderUnavailable(format!(
                "{} returned status {}: {}",
                self.model, status, body
            )));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!("{} error (status {}): {}", self.model, status, body);
            return Err(Error::Provider(format!(
                "{} error (status {}): {}",
                self.model, status, body
            )));
        }

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_string();

        if content_type.starts_with("image/") {
            let bytes = response.bytes().await?.to_vec();
            return Ok(ProviderImage {
                bytes,
                content_type,
            });
        }

        // Some backends wrap the image in a JSON envelope instead.
        let body = response.text().await?;
        let envelope: ImageEnvelope = serde_json::from_str(&body).map_err(|e| {
            Error::Provider(format!(
                "{} returned unexpected payload ({}): {}",
                self.model, content_type, e
            ))
        })?;

        let encoded = envelope.image_base64.ok_or_else(|| {
            Error::Provider(format!("{} envelope contains no image data", self.model))
        })?;

        use base64::Engine as _;
        let bytes = base64::engine::general_purpose::STANDARD
            .decode(encoded.trim())
            .map_err(|e| Error::Provider(format!("{} sent invalid base64: {}", self.model, e)))?;

        let content_type = envelope
            .content_type
            .unwrap_or_else(|| sniff_content_type(&bytes).to_string());

        Ok(ProviderImage {
            bytes,
            content_type,
        })
    }
}
