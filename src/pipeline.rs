//! Pipeline orchestration
//!
//! Sequences analysis, text synthesis, prompt construction, the provider
//! chain, and the procedural fallback into one album. Once a description
//! passes validation the pipeline always produces a complete result: image
//! generation failure is absorbed, never propagated.

use crate::models::{Album, Config, Description};
use crate::providers::ProviderChain;
use crate::templates::TRACK_COUNT;
use crate::{artwork, lexical, prompt, templates, Result};
use tracing::{info, warn};

pub struct Generator {
    chain: ProviderChain,
}

impl Generator {
    /// Construct a generator from environment configuration.
    pub fn from_env() -> Result<Self> {
        let config = Config::from_env()?;
        Ok(Self::with_chain(ProviderChain::from_config(&config)))
    }

    /// Construct a generator with an explicit provider chain (tests and
    /// harnesses).
    pub fn with_chain(chain: ProviderChain) -> Self {
        Self { chain }
    }

    /// Generate an album for `description`.
    ///
    /// The only error this returns is input validation; everything after
    /// that degrades internally.
    pub async fn generate(&self, description: &str) -> Result<Album> {
        let description = Description::new(description)?;
        let text = description.as_str();

        let mood = lexical::detect_mood(text);
        let keywords = lexical::extract_keywords(text);
        info!(
            "Analyzed description: mood={:?}, {} keyword(s)",
            mood,
            keywords.len()
        );

        // Text synthesis uses the process-wide RNG; the fallback artwork
        // below must stay input-seeded, so it never touches this generator.
        let (title, artist, tracks, genre, image_prompt) = {
            let mut rng = rand::thread_rng();
            (
                templates::generate_title(&keywords, mood, &mut rng),
                templates::generate_artist(&mut rng),
                templates::generate_tracks(&keywords, TRACK_COUNT, &mut rng),
                templates::pick_genre(&mut rng).to_string(),
                prompt::build_image_prompt(mood, &keywords, text, &mut rng),
            )
        };

        let (image_url, is_ai_generated) = match self.chain.fetch_cover(&image_prompt).await {
            Ok(uri) => (uri, true),
            Err(e) => {
                warn!(
                    "Remote image generation failed ({}); using procedural artwork",
                    e
                );
                (artwork::render_cover(text, mood), false)
            }
        };

        info!("Generated album \"{}\" by {}", title, artist);

        Ok(Album {
            title,
            artist,
            tracks,
            genre,
            image_url,
            is_ai_generated,
        })
    }
}
