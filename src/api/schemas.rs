//! Request and response bodies for the HTTP API.
use serde::{Deserialize, Serialize};

use crate::speech::ProsodyParams;
use crate::storyboard::Panel;

#[derive(Debug, Deserialize)]
pub struct StoryRequest {
    pub text: String,
    /// Art style tag; unrecognized values render as cinematic.
    #[serde(default = "default_style")]
    pub style: String,
}

fn default_style() -> String {
    "cinematic".to_string()
}

#[derive(Debug, Serialize)]
pub struct StoryResponse {
    pub panels: Vec<Panel>,
    pub total_panels: usize,
}

#[derive(Debug, Deserialize)]
pub struct SpeechRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct SpeechAnalysis {
    pub detected_emotion: String,
    pub confidence: f64,
    pub modulations_applied: ProsodyParams,
}
