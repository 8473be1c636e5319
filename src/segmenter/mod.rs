//! Narrative segmentation with ranked fallback strategies.
//!
//! `Segmenter` holds an ordered list of strategies and commits to the first
//! one that yields a non-empty segment list. The LLM strategy is only
//! registered when a credential is configured; the heuristic strategy sits
//! last and never fails, so segmentation as a whole never surfaces an error.
pub mod heuristic;
pub mod llm;

use async_trait::async_trait;

use crate::config::Config;
use crate::error::AppResult;

pub use heuristic::HeuristicSegmenter;
pub use llm::LlmSegmenter;

/// One ranked segmentation strategy.
#[async_trait]
pub trait SegmentStrategy: Send + Sync {
    fn name(&self) -> &'static str;

    /// Attempt to split `text` into ordered visual beats. An error or an
    /// empty result hands control to the next strategy in line.
    async fn try_segment(&self, text: &str) -> AppResult<Vec<String>>;
}

pub struct Segmenter {
    strategies: Vec<Box<dyn SegmentStrategy>>,
}

impl Segmenter {
    pub fn new(strategies: Vec<Box<dyn SegmentStrategy>>) -> Self {
        Segmenter { strategies }
    }

    /// Build the default strategy chain from configuration: LLM first when a
    /// key is present, heuristic always last.
    pub fn from_config(config: &Config) -> Self {
        let mut strategies: Vec<Box<dyn SegmentStrategy>> = Vec::new();
        if let Some(key) = &config.openai_api_key {
            strategies.push(Box::new(LlmSegmenter::new(
                key.clone(),
                config.openai_base_url.clone(),
            )));
        }
        strategies.push(Box::new(HeuristicSegmenter));
        Segmenter::new(strategies)
    }

    /// Split `text` into an ordered list of segments.
    ///
    /// Non-empty input yields a non-empty list as long as the chain ends in
    /// the heuristic strategy; empty input yields an empty list.
    pub async fn segment(&self, text: &str) -> Vec<String> {
        for strategy in &self.strategies {
            match strategy.try_segment(text).await {
                Ok(segments) if !segments.is_empty() => {
                    tracing::info!(
                        strategy = strategy.name(),
                        count = segments.len(),
                        "segmented narrative"
                    );
                    return segments;
                }
                Ok(_) => {
                    tracing::warn!(strategy = strategy.name(), "strategy produced no segments");
                }
                Err(e) => {
                    tracing::warn!(
                        strategy = strategy.name(),
                        error = %e,
                        "segmentation strategy failed, falling through"
                    );
                }
            }
        }
        Vec::new()
    }
}
