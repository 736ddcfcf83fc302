//! Data models and structures
//!
//! Defines the core data structures for descriptions, moods, generated
//! albums, and API interactions with the generative-image providers.

use serde::{Deserialize, Serialize};

/// Maximum accepted length of a day description, in characters.
pub const MAX_DESCRIPTION_LEN: usize = 500;

/// Overall mood classified from a day description.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Positive,
    Negative,
    Neutral,
}

/// A validated day description. Construction enforces the input contract;
/// the text is immutable afterwards.
#[derive(Debug, Clone)]
pub struct Description(String);

impl Description {
    pub fn new(text: &str) -> crate::Result<Self> {
        if text.trim().is_empty() {
            return Err(crate::Error::Validation(
                "Description is required".to_string(),
            ));
        }
        if text.chars().count() > MAX_DESCRIPTION_LEN {
            return Err(crate::Error::Validation(format!(
                "Description too long (max {} characters)",
                MAX_DESCRIPTION_LEN
            )));
        }
        Ok(Self(text.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// The generated album. Serialized field names match the public API shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Album {
    pub title: String,
    pub artist: String,
    pub tracks: Vec<String>,
    pub genre: String,
    pub image_url: String,
    pub is_ai_generated: bool,
}

// Image provider API request/response models
#[derive(Debug, Serialize)]
pub struct ImageGenerationRequest {
    pub inputs: String,
    pub parameters: GenerationParameters,
}

#[derive(Debug, Clone, Serialize)]
pub struct GenerationParameters {
    pub width: u32,
    pub height: u32,
    pub num_inference_steps: u32,
    pub guidance_scale: f32,
}

impl Default for GenerationParameters {
    fn default() -> Self {
        Self {
            width: 512,
            height: 512,
            num_inference_steps: 25,
            guidance_scale: 7.5,
        }
    }
}

/// JSON envelope some providers return instead of raw image bytes.
#[derive(Debug, Deserialize)]
pub struct ImageEnvelope {
    #[serde(alias = "b64_json", alias = "image")]
    pub image_base64: Option<String>,
    pub content_type: Option<String>,
}

// Configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub image_api_key: Option<String>,
    pub image_api_base: String,
    pub image_models: Vec<String>,
}

impl Config {
    pub fn from_env() -> crate::Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            image_api_key: std::env::var("IMAGE_API_KEY").ok(),
            image_api_base: std::env::var("IMAGE_API_BASE")
                .unwrap_or_else(|_| "https://api-inference.huggingface.co".to_string()),
            image_models: std::env::var("IMAGE_MODELS")
                .map(|raw| {
                    raw.split(',')
                        .map(|m| m.trim().to_string())
                        .filter(|m| !m.is_empty())
                        .collect()
                })
                .unwrap_or_else(|_| {
                    vec![
                        "stabilityai/stable-diffusion-xl-base-1.0".to_string(),
                        "stabilityai/stable-diffusion-2-1".to_string(),
                    ]
                }),
        })
    }
}
