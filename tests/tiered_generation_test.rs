//! Tier-chain behavior of the image generation orchestrator, exercised with
//! in-memory engines so no network is involved.
use async_trait::async_trait;

use storyboard_engine::error::{AppError, AppResult};
use storyboard_engine::imagegen::{
    ImageEngine, TieredImageGenerator, ERROR_ENGINE, PLACEHOLDER_IMAGE_URL,
};

struct FixedEngine {
    name: &'static str,
    url: &'static str,
}

#[async_trait]
impl ImageEngine for FixedEngine {
    fn name(&self) -> &'static str {
        self.name
    }

    async fn generate(&self, _prompt: &str) -> AppResult<String> {
        Ok(self.url.to_string())
    }
}

struct FailingEngine {
    name: &'static str,
}

#[async_trait]
impl ImageEngine for FailingEngine {
    fn name(&self) -> &'static str {
        self.name
    }

    async fn generate(&self, _prompt: &str) -> AppResult<String> {
        Err(AppError::ImageGen("backend unavailable".to_string()))
    }
}

#[tokio::test]
async fn first_tier_success_short_circuits() {
    let generator = TieredImageGenerator::new(vec![
        Box::new(FixedEngine {
            name: "primary-high-quality",
            url: "https://images.example/a.png",
        }),
        Box::new(FixedEngine {
            name: "fallback-free-tier",
            url: "/static/generated/unused.jpg",
        }),
    ]);

    let result = generator.generate("a lighthouse at dusk").await;
    assert_eq!(result.engine_used, "primary-high-quality");
    assert_eq!(result.image_url, "https://images.example/a.png");
}

#[tokio::test]
async fn primary_failure_falls_through_to_the_free_tier() {
    let generator = TieredImageGenerator::new(vec![
        Box::new(FailingEngine {
            name: "primary-high-quality",
        }),
        Box::new(FixedEngine {
            name: "fallback-free-tier",
            url: "/static/generated/7f3a.jpg",
        }),
    ]);

    let result = generator.generate("a lighthouse at dusk").await;
    assert_eq!(result.engine_used, "fallback-free-tier");
    assert!(result.image_url.starts_with("/static/generated/"));
}

#[tokio::test]
async fn exhausted_tiers_yield_the_placeholder_without_erroring() {
    let generator = TieredImageGenerator::new(vec![
        Box::new(FailingEngine {
            name: "primary-high-quality",
        }),
        Box::new(FailingEngine {
            name: "fallback-free-tier",
        }),
    ]);

    let result = generator.generate("a lighthouse at dusk").await;
    assert_eq!(result.engine_used, ERROR_ENGINE);
    assert_eq!(result.image_url, PLACEHOLDER_IMAGE_URL);
}

#[tokio::test]
async fn an_empty_tier_list_still_returns_a_result() {
    let generator = TieredImageGenerator::new(Vec::new());
    let result = generator.generate("anything").await;
    assert_eq!(result.engine_used, ERROR_ENGINE);
    assert_eq!(result.image_url, PLACEHOLDER_IMAGE_URL);
}
