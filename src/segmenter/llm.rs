//! LLM-backed segmentation over an OpenAI-style chat completions endpoint.
//!
//! One request per narrative; the model is instructed to answer with a raw
//! JSON array of scene strings. Responses are validated strictly and any
//! shortfall (transport error, bad status, unparsable or empty array) is
//! reported as an error so the chain can fall through to the heuristic.
use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};

use crate::error::{AppError, AppResult};
use crate::segmenter::SegmentStrategy;

const SEGMENT_MODEL: &str = "gpt-3.5-turbo";

const SYSTEM_PROMPT: &str = "You are a Storyboard Director. Your job is to split the user's narrative text into \
3 to 5 distinct visual scenes. \
Rules:\n\
1. Group short related sentences together (e.g., 'He jumped. It was high' -> 'He jumped high').\n\
2. Ensure every segment has enough context to generate a standalone image.\n\
3. If a character is mentioned (e.g., 'Bob the Robot'), ensure their identity is clear in every segment if needed.\n\
4. Return ONLY a raw JSON list of strings. No markdown.";

pub struct LlmSegmenter {
    client: Client,
    api_key: String,
    base_url: String,
}

impl LlmSegmenter {
    pub fn new(api_key: String, base_url: String) -> Self {
        let base = base_url.trim_end_matches('/').to_string();
        LlmSegmenter {
            client: Client::new(),
            api_key,
            base_url: base,
        }
    }
}

#[async_trait]
impl SegmentStrategy for LlmSegmenter {
    fn name(&self) -> &'static str {
        "llm"
    }

    async fn try_segment(&self, text: &str) -> AppResult<Vec<String>> {
        let url = format!("{}/chat/completions", self.base_url);
        tracing::debug!("Requesting LLM segmentation from {}", url);

        let body = json!({
            "model": SEGMENT_MODEL,
            "messages": [
                {"role": "system", "content": SYSTEM_PROMPT},
                {"role": "user", "content": text},
            ],
            "temperature": 0.3,
        });

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(AppError::HttpClient)?;

        if !response.status().is_success() {
            let status = response.status();
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read error body".to_string());
            return Err(AppError::Segmentation(format!(
                "Chat completion failed. Status: {}, Body: {}",
                status, error_body
            )));
        }

        let payload: Value = response.json().await.map_err(AppError::HttpClient)?;
        let content = payload["choices"][0]["message"]["content"]
            .as_str()
            .ok_or_else(|| {
                AppError::Segmentation("Response carried no message content".to_string())
            })?;

        parse_scene_list(content)
    }
}

/// Extract a JSON array of scene strings from raw model output.
///
/// Models sometimes wrap the array in a markdown code fence despite the
/// instruction not to; the fence markers are stripped before parsing.
pub fn parse_scene_list(content: &str) -> AppResult<Vec<String>> {
    let mut cleaned = content.trim();
    if let Some(rest) = cleaned.strip_prefix("```json") {
        cleaned = rest;
    } else if let Some(rest) = cleaned.strip_prefix("```") {
        cleaned = rest;
    }
    if let Some(rest) = cleaned.strip_suffix("```") {
        cleaned = rest;
    }
    let cleaned = cleaned.trim();

    let scenes: Vec<String> = serde_json::from_str(cleaned)
        .map_err(|e| AppError::Segmentation(format!("Unparsable scene list: {}", e)))?;
    if scenes.is_empty() {
        return Err(AppError::Segmentation("Model returned an empty scene list".to_string()));
    }
    Ok(scenes)
}
