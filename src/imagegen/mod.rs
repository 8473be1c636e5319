//! Tiered image generation.
//!
//! Engines are held as an ordered list; the orchestrator walks the list and
//! commits to the first success. When every tier fails it substitutes a
//! placeholder result tagged `"error"` instead of surfacing anything, so
//! callers never handle an error from this module. The engine identifier on
//! each result records which tier actually produced the image.
pub mod openai;
pub mod pollinations;

use async_trait::async_trait;

use crate::config::Config;
use crate::error::AppResult;

pub use openai::OpenAiImageEngine;
pub use pollinations::PollinationsImageEngine;

/// Reference served when every tier is exhausted.
pub const PLACEHOLDER_IMAGE_URL: &str = "https://via.placeholder.com/1024?text=Generation+Failed";

/// Engine identifier attached to placeholder results.
pub const ERROR_ENGINE: &str = "error";

/// A generated image plus the provenance tag of the tier that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedImage {
    pub image_url: String,
    pub engine_used: String,
}

/// One ranked image backend.
#[async_trait]
pub trait ImageEngine: Send + Sync {
    /// Provenance tag reported on results from this engine.
    fn name(&self) -> &'static str;

    /// Produce a single image for `prompt` and return its reference.
    async fn generate(&self, prompt: &str) -> AppResult<String>;
}

pub struct TieredImageGenerator {
    tiers: Vec<Box<dyn ImageEngine>>,
}

impl TieredImageGenerator {
    pub fn new(tiers: Vec<Box<dyn ImageEngine>>) -> Self {
        TieredImageGenerator { tiers }
    }

    /// Build the default tier list from configuration: the paid engine first
    /// when a credential is present (and not overridden by `IMAGE_TIER=free`),
    /// the free engine always last.
    pub fn from_config(config: &Config) -> Self {
        let mut tiers: Vec<Box<dyn ImageEngine>> = Vec::new();
        if config.image_tier != "free" {
            if let Some(key) = &config.openai_api_key {
                tiers.push(Box::new(OpenAiImageEngine::new(
                    key.clone(),
                    config.openai_base_url.clone(),
                )));
            }
        }
        tiers.push(Box::new(PollinationsImageEngine::new(
            config.fallback_image_url.clone(),
            config.image_dir.clone(),
        )));
        TieredImageGenerator::new(tiers)
    }

    /// Generate one image, degrading through the tiers. Always returns a
    /// well-formed result; total exhaustion yields the placeholder tagged
    /// [`ERROR_ENGINE`].
    pub async fn generate(&self, prompt: &str) -> GeneratedImage {
        for tier in &self.tiers {
            match tier.generate(prompt).await {
                Ok(image_url) => {
                    tracing::info!(engine = tier.name(), "image generated");
                    return GeneratedImage {
                        image_url,
                        engine_used: tier.name().to_string(),
                    };
                }
                Err(e) => {
                    tracing::warn!(
                        engine = tier.name(),
                        error = %e,
                        "image engine failed, trying next tier"
                    );
                }
            }
        }
        GeneratedImage {
            image_url: PLACEHOLDER_IMAGE_URL.to_string(),
            engine_used: ERROR_ENGINE.to_string(),
        }
    }
}
