//! Free fallback tier: Stable Diffusion via the Pollinations endpoint.
//!
//! The prompt rides in the URL path, so it is percent-encoded; a random seed
//! defeats the endpoint's cache. Bytes land under the artifact directory with
//! a fresh UUID filename and the returned reference points at the static
//! mount serving that directory.
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::imagegen::ImageEngine;

const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

pub struct PollinationsImageEngine {
    client: Client,
    base_url: String,
    image_dir: String,
}

impl PollinationsImageEngine {
    pub fn new(base_url: String, image_dir: String) -> Self {
        let base = base_url.trim_end_matches('/').to_string();
        PollinationsImageEngine {
            client: Client::new(),
            base_url: base,
            image_dir,
        }
    }
}

#[async_trait]
impl ImageEngine for PollinationsImageEngine {
    fn name(&self) -> &'static str {
        "fallback-free-tier"
    }

    async fn generate(&self, prompt: &str) -> AppResult<String> {
        let encoded = urlencoding::encode(prompt);
        let seed = Uuid::new_v4().as_u128();
        let url = format!(
            "{}/{}?width=1024&height=1024&nologo=true&seed={}",
            self.base_url, encoded, seed
        );
        tracing::debug!("Fetching fallback image from {}", self.base_url);

        let response = self
            .client
            .get(&url)
            .timeout(FETCH_TIMEOUT)
            .send()
            .await
            .map_err(AppError::HttpClient)?;

        if !response.status().is_success() {
            return Err(AppError::ImageGen(format!(
                "Fallback image fetch failed: {:?}",
                response.status()
            )));
        }

        let bytes = response.bytes().await.map_err(AppError::HttpClient)?;
        let filename = format!("{}.jpg", Uuid::new_v4());
        let filepath = format!("{}/{}", self.image_dir.trim_end_matches('/'), filename);
        tokio::fs::write(&filepath, &bytes).await.map_err(AppError::Io)?;

        Ok(format!("/static/generated/{}", filename))
    }
}
