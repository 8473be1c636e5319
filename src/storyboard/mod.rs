//! Storyboard assembly: concurrent per-panel fan-out with ordered collection.
//!
//! Every segment is tagged with its 1-based panel id before dispatch, all
//! panel tasks are spawned up front, and the finished panels are reassembled
//! by that id rather than by completion order. A panel task that dies (panic
//! or abort) fails the whole storyboard; per-image failures never reach this
//! layer because the image generator absorbs them into placeholder results.
use std::sync::Arc;

use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::imagegen::TieredImageGenerator;
use crate::prompt::{enhance, Style};
use crate::segmenter::Segmenter;

/// One illustrated beat of the storyboard. Immutable once assembled.
#[derive(Debug, Clone, Serialize)]
pub struct Panel {
    pub panel_id: usize,
    pub original_text: String,
    pub enhanced_prompt: String,
    pub image_url: String,
    pub engine_used: String,
}

/// Full pipeline: segment the narrative, then render every segment
/// concurrently.
pub async fn build_storyboard(
    segmenter: &Segmenter,
    generator: Arc<TieredImageGenerator>,
    text: &str,
    style: Style,
) -> AppResult<Vec<Panel>> {
    let segments = segmenter.segment(text).await;
    assemble_panels(generator, segments, style).await
}

/// Render all segments concurrently and return panels ordered by id.
pub async fn assemble_panels(
    generator: Arc<TieredImageGenerator>,
    segments: Vec<String>,
    style: Style,
) -> AppResult<Vec<Panel>> {
    let mut handles = Vec::with_capacity(segments.len());
    for (i, segment) in segments.into_iter().enumerate() {
        let panel_id = i + 1;
        let enhanced_prompt = enhance(&segment, style);
        let generator = Arc::clone(&generator);
        let handle = tokio::spawn(async move {
            let image = generator.generate(&enhanced_prompt).await;
            Panel {
                panel_id,
                original_text: segment,
                enhanced_prompt,
                image_url: image.image_url,
                engine_used: image.engine_used,
            }
        });
        handles.push((panel_id, handle));
    }

    let mut panels = Vec::with_capacity(handles.len());
    for (panel_id, handle) in handles {
        let panel = handle.await.map_err(|e| {
            AppError::Storyboard(format!("Panel {} task failed: {}", panel_id, e))
        })?;
        panels.push(panel);
    }
    panels.sort_by_key(|p| p.panel_id);
    Ok(panels)
}
