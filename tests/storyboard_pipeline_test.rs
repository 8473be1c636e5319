//! Panel assembly: concurrent fan-out must hand back panels in narrative
//! order no matter which task finishes first.
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use storyboard_engine::error::{AppError, AppResult};
use storyboard_engine::imagegen::{ImageEngine, TieredImageGenerator, ERROR_ENGINE};
use storyboard_engine::prompt::{enhance, Style};
use storyboard_engine::storyboard::assemble_panels;

/// Sleeps longer for earlier panels so completion order is the reverse of
/// dispatch order. The panel number is read out of the prompt text, which
/// carries the only digit (watercolor modifiers are digit-free).
struct ReverseDelayEngine;

fn panel_number(prompt: &str) -> u64 {
    prompt
        .chars()
        .find(|c| c.is_ascii_digit())
        .and_then(|c| c.to_digit(10))
        .unwrap_or(0) as u64
}

#[async_trait]
impl ImageEngine for ReverseDelayEngine {
    fn name(&self) -> &'static str {
        "delayed"
    }

    async fn generate(&self, prompt: &str) -> AppResult<String> {
        let n = panel_number(prompt);
        tokio::time::sleep(Duration::from_millis((6 - n) * 20)).await;
        Ok(format!("image://{}", n))
    }
}

struct PanickingEngine;

#[async_trait]
impl ImageEngine for PanickingEngine {
    fn name(&self) -> &'static str {
        "panicking"
    }

    async fn generate(&self, _prompt: &str) -> AppResult<String> {
        panic!("structural failure inside a panel task");
    }
}

struct FailingEngine;

#[async_trait]
impl ImageEngine for FailingEngine {
    fn name(&self) -> &'static str {
        "failing"
    }

    async fn generate(&self, _prompt: &str) -> AppResult<String> {
        Err(AppError::ImageGen("backend unavailable".to_string()))
    }
}

#[tokio::test]
async fn panels_come_back_in_narrative_order() {
    let generator = Arc::new(TieredImageGenerator::new(vec![Box::new(ReverseDelayEngine)]));
    let segments: Vec<String> = (1..=5).map(|i| format!("scene {}", i)).collect();

    let panels = assemble_panels(generator, segments.clone(), Style::Watercolor)
        .await
        .expect("assembly should succeed");

    assert_eq!(panels.len(), 5);
    for (i, panel) in panels.iter().enumerate() {
        assert_eq!(panel.panel_id, i + 1);
        assert_eq!(panel.original_text, segments[i]);
        assert_eq!(panel.enhanced_prompt, enhance(&segments[i], Style::Watercolor));
        assert_eq!(panel.image_url, format!("image://{}", i + 1));
        assert_eq!(panel.engine_used, "delayed");
    }
}

#[tokio::test]
async fn absorbed_engine_failures_still_produce_a_full_storyboard() {
    let generator = Arc::new(TieredImageGenerator::new(vec![Box::new(FailingEngine)]));
    let segments = vec!["scene one".to_string(), "scene two".to_string()];

    let panels = assemble_panels(generator, segments, Style::Cinematic)
        .await
        .expect("placeholder panels are not a failure");

    assert_eq!(panels.len(), 2);
    for panel in &panels {
        assert_eq!(panel.engine_used, ERROR_ENGINE);
    }
}

#[tokio::test]
async fn a_panicking_panel_task_fails_the_whole_request() {
    let generator = Arc::new(TieredImageGenerator::new(vec![Box::new(PanickingEngine)]));
    let segments = vec!["scene one".to_string()];

    let result = assemble_panels(generator, segments, Style::Cinematic).await;
    assert!(matches!(result, Err(AppError::Storyboard(_))));
}

#[tokio::test]
async fn no_segments_means_an_empty_storyboard() {
    let generator = Arc::new(TieredImageGenerator::new(vec![Box::new(ReverseDelayEngine)]));
    let panels = assemble_panels(generator, Vec::new(), Style::Cinematic)
        .await
        .expect("empty assembly should succeed");
    assert!(panels.is_empty());
}
