//! Strategy-chain behavior of the segmenter: the first strategy to produce
//! a non-empty list wins, and failures fall through silently.
use async_trait::async_trait;

use storyboard_engine::error::{AppError, AppResult};
use storyboard_engine::segmenter::{HeuristicSegmenter, SegmentStrategy, Segmenter};

struct FixedStrategy {
    segments: Vec<&'static str>,
}

#[async_trait]
impl SegmentStrategy for FixedStrategy {
    fn name(&self) -> &'static str {
        "fixed"
    }

    async fn try_segment(&self, _text: &str) -> AppResult<Vec<String>> {
        Ok(self.segments.iter().map(|s| s.to_string()).collect())
    }
}

struct FailingStrategy;

#[async_trait]
impl SegmentStrategy for FailingStrategy {
    fn name(&self) -> &'static str {
        "failing"
    }

    async fn try_segment(&self, _text: &str) -> AppResult<Vec<String>> {
        Err(AppError::Segmentation("remote backend down".to_string()))
    }
}

#[tokio::test]
async fn a_successful_primary_strategy_short_circuits() {
    let segmenter = Segmenter::new(vec![
        Box::new(FixedStrategy {
            segments: vec!["The hero leaves home.", "The hero returns changed."],
        }),
        Box::new(HeuristicSegmenter),
    ]);

    let segments = segmenter.segment("ignored by the fixed strategy").await;
    assert_eq!(
        segments,
        vec!["The hero leaves home.", "The hero returns changed."]
    );
}

#[tokio::test]
async fn a_failing_primary_falls_back_to_the_heuristic() {
    let segmenter = Segmenter::new(vec![Box::new(FailingStrategy), Box::new(HeuristicSegmenter)]);

    let segments = segmenter.segment("A. B. C. D.").await;
    assert_eq!(segments, vec!["B.", "C.", "D."]);
}

#[tokio::test]
async fn an_empty_result_also_falls_through() {
    let segmenter = Segmenter::new(vec![
        Box::new(FixedStrategy { segments: vec![] }),
        Box::new(FixedStrategy {
            segments: vec!["only scene"],
        }),
    ]);

    let segments = segmenter.segment("whatever").await;
    assert_eq!(segments, vec!["only scene"]);
}

#[tokio::test]
async fn empty_input_yields_no_segments() {
    let segmenter = Segmenter::new(vec![Box::new(HeuristicSegmenter)]);
    assert!(segmenter.segment("").await.is_empty());
    assert!(segmenter.segment("   ").await.is_empty());
}

#[tokio::test]
async fn non_empty_input_always_yields_segments_with_the_heuristic_last() {
    let segmenter = Segmenter::new(vec![Box::new(FailingStrategy), Box::new(HeuristicSegmenter)]);
    let segments = segmenter
        .segment("A storm rolled in over the harbor and the boats scattered for shelter.")
        .await;
    assert!(!segments.is_empty());
}
