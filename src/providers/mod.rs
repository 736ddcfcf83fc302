//! Remote generative-image providers
//!
//! Each provider is addressed by a stable identifier and turns an image
//! prompt into raw image bytes. The [`ProviderChain`] tries providers in
//! priority order, advancing past transient failures and terminating the
//! whole chain on anything fatal.

pub mod chain;
pub mod hf;
pub mod mock;

pub use chain::ProviderChain;
pub use hf::HfImageProvider;
pub use mock::MockImageProvider;

use crate::Result;
use async_trait::async_trait;

/// Decoded image returned by a provider.
#[derive(Debug, Clone)]
pub struct ProviderImage {
    pub bytes: Vec<u8>,
    pub content_type: String,
}

#[async_trait]
pub trait ImageProvider: Send + Sync {
    /// Stable identifier used in logs and provider-attempt records.
    fn id(&self) -> &str;

    /// Generate an image for `prompt`.
    ///
    /// Implementations signal transient unavailability with
    /// [`crate::Error::ProviderUnavailable`] (the chain advances) and
    /// anything else with a fatal error (the chain stops).
    async fn generate(&self, prompt: &str) -> Result<ProviderImage>;
}
