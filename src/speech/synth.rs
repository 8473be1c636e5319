//! Client for the speech synthesis sidecar.
//!
//! Posts text plus the voice and modulation triple; the response body is the
//! rendered audio stream, persisted under the audio artifact directory with a
//! fresh UUID filename. Files are transient; whoever serves them deletes
//! them afterwards.
use reqwest::Client;
use serde_json::json;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::speech::prosody::ProsodyParams;

pub struct SpeechSynthesizer {
    client: Client,
    url: String,
    voice: String,
    audio_dir: String,
}

impl SpeechSynthesizer {
    pub fn new(url: String, voice: String, audio_dir: String) -> Self {
        SpeechSynthesizer {
            client: Client::new(),
            url,
            voice,
            audio_dir,
        }
    }

    /// Render `text` with the given modulation and return the path of the
    /// written audio file.
    pub async fn synthesize(&self, text: &str, prosody: &ProsodyParams) -> AppResult<String> {
        tracing::debug!("Synthesizing speech via {}", self.url);
        let body = json!({
            "text": text,
            "voice": self.voice,
            "rate": prosody.rate,
            "pitch": prosody.pitch,
            "volume": prosody.volume,
        });

        let response = self
            .client
            .post(&self.url)
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
            return Err(AppError::Speech(format!(
                "Synthesis request failed. Status: {}, Body: {}",
                status, error_body
            )));
        }

        let bytes = response.bytes().await.map_err(AppError::HttpClient)?;
        let filename = format!("{}.mp3", Uuid::new_v4());
        let filepath = format!("{}/{}", self.audio_dir.trim_end_matches('/'), filename);
        tokio::fs::write(&filepath, &bytes).await.map_err(AppError::Io)?;

        Ok(filepath)
    }
}
