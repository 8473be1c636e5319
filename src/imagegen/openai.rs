//! Paid high-quality tier: OpenAI image generation.
//!
//! One request per prompt, no retries; any failure hands off to the next
//! tier. Returns the remote URL reported by the API.
use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};

use crate::error::{AppError, AppResult};
use crate::imagegen::ImageEngine;

const IMAGE_MODEL: &str = "dall-e-3";
const IMAGE_SIZE: &str = "1024x1024";

pub struct OpenAiImageEngine {
    client: Client,
    api_key: String,
    base_url: String,
}

impl OpenAiImageEngine {
    pub fn new(api_key: String, base_url: String) -> Self {
        let base = base_url.trim_end_matches('/').to_string();
        OpenAiImageEngine {
            client: Client::new(),
            api_key,
            base_url: base,
        }
    }
}

#[async_trait]
impl ImageEngine for OpenAiImageEngine {
    fn name(&self) -> &'static str {
        "primary-high-quality"
    }

    async fn generate(&self, prompt: &str) -> AppResult<String> {
        let url = format!("{}/images/generations", self.base_url);
        tracing::debug!("Requesting image from {}", url);

        let body = json!({
            "model": IMAGE_MODEL,
            "prompt": prompt,
            "size": IMAGE_SIZE,
            "quality": "standard",
            "n": 1,
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
            return Err(AppError::ImageGen(format!(
                "Image request failed. Status: {}, Body: {}",
                status, error_body
            )));
        }

        let payload: Value = response.json().await.map_err(AppError::HttpClient)?;
        payload["data"][0]["url"]
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| AppError::ImageGen("Response carried no image URL".to_string()))
    }
}
