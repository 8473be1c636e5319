//! Axum request handlers for the HTTP API.
use axum::extract::State;
use axum::http::{header, HeaderMap, HeaderValue, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use std::sync::Arc;

use crate::api::routes::AppState;
use crate::api::schemas::{SpeechAnalysis, SpeechRequest, StoryRequest, StoryResponse};
use crate::error::AppError;
use crate::prompt::Style;
use crate::speech::map_emotion;
use crate::storyboard;

pub async fn root() -> &'static str {
    "Storyboard Engine API"
}

/// Full storyboard pipeline: segment, enhance, render concurrently, return
/// panels in narrative order.
pub async fn generate_storyboard(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<StoryRequest>,
) -> Result<Json<StoryResponse>, (StatusCode, String)> {
    let style = Style::from_tag(&payload.style);
    let panels = storyboard::build_storyboard(
        &state.segmenter,
        Arc::clone(&state.image_generator),
        &payload.text,
        style,
    )
    .await
    .map_err(internal_error)?;

    let total_panels = panels.len();
    Ok(Json(StoryResponse { panels, total_panels }))
}

/// Classify sentiment, modulate the voice accordingly, and answer with the
/// rendered audio. Modulation metadata rides in response headers.
pub async fn synthesize_speech(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<SpeechRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let analysis = state
        .emotion_classifier
        .analyze(&payload.text)
        .await
        .map_err(internal_error)?;
    let prosody = map_emotion(&analysis.primary_emotion);

    let filepath = state
        .synthesizer
        .synthesize(&payload.text, &prosody)
        .await
        .map_err(internal_error)?;

    let bytes = tokio::fs::read(&filepath)
        .await
        .map_err(|e| internal_error(AppError::Io(e)))?;
    // Transient artifact: drop the file once its bytes are in hand.
    if let Err(e) = tokio::fs::remove_file(&filepath).await {
        tracing::warn!("Failed to remove transient audio file {}: {}", filepath, e);
    }

    let mut headers = HeaderMap::new();
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("audio/mpeg"));
    insert_header(&mut headers, "X-Detected-Emotion", &analysis.primary_emotion);
    insert_header(
        &mut headers,
        "X-Emotion-Confidence",
        &analysis.confidence.to_string(),
    );
    insert_header(&mut headers, "X-Modulation-Rate", prosody.rate);
    insert_header(&mut headers, "X-Modulation-Pitch", prosody.pitch);
    insert_header(&mut headers, "X-Modulation-Volume", prosody.volume);

    Ok((headers, bytes))
}

/// Debug surface: sentiment and modulation without generating audio.
pub async fn analyze_only(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<SpeechRequest>,
) -> Result<Json<SpeechAnalysis>, (StatusCode, String)> {
    let analysis = state
        .emotion_classifier
        .analyze(&payload.text)
        .await
        .map_err(internal_error)?;
    let modulations_applied = map_emotion(&analysis.primary_emotion);

    Ok(Json(SpeechAnalysis {
        detected_emotion: analysis.primary_emotion,
        confidence: analysis.confidence,
        modulations_applied,
    }))
}

fn internal_error(e: AppError) -> (StatusCode, String) {
    tracing::error!("Request failed: {:?}", e);
    (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
}

fn insert_header(headers: &mut HeaderMap, name: &'static str, value: &str) {
    if let Ok(v) = HeaderValue::from_str(value) {
        headers.insert(name, v);
    }
}
