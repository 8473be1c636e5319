//! Env-driven configuration for the service and library.
//!
//! Values are read from the process environment; `dotenv` is loaded on demand
//! by the binaries. Defaults are provided for convenience during development.
//! The OpenAI key is deliberately optional: when absent the pipeline runs
//! entirely on the free fallback engines.
use std::env;

pub struct Config {
    /// Optional OpenAI credential; gates the LLM segmenter and the Tier-A
    /// image engine.
    pub openai_api_key: Option<String>,
    pub openai_base_url: String,
    /// "auto" (default) or "free" to skip the paid image tier even when a
    /// credential is present.
    pub image_tier: String,
    /// Free image endpoint; the URL-encoded prompt is appended as a path segment.
    pub fallback_image_url: String,
    pub image_dir: String,
    pub audio_dir: String,
    /// Sentiment classifier endpoint (HuggingFace-inference style).
    pub emotion_api_url: String,
    pub emotion_api_key: Option<String>,
    /// Speech synthesis sidecar endpoint.
    pub tts_url: String,
    pub tts_voice: String,
    pub api_host: String,
    pub api_port: String,
}

impl Config {
    pub fn dotenv_load() {
        dotenv::dotenv().ok();
    }

    pub fn new() -> Result<Self, env::VarError> {
        Ok(Config {
            openai_api_key: env::var("OPENAI_API_KEY").ok().filter(|k| !k.is_empty()),
            openai_base_url: env::var("OPENAI_BASE_URL")
                .unwrap_or_else(|_| "https://api.openai.com/v1".to_string()),
            image_tier: env::var("IMAGE_TIER").unwrap_or_else(|_| "auto".to_string()),
            fallback_image_url: env::var("FALLBACK_IMAGE_URL")
                .unwrap_or_else(|_| "https://image.pollinations.ai/prompt".to_string()),
            image_dir: env::var("IMAGE_DIR").unwrap_or_else(|_| "./static/generated".to_string()),
            audio_dir: env::var("AUDIO_DIR").unwrap_or_else(|_| "./data".to_string()),
            emotion_api_url: env::var("EMOTION_API_URL").unwrap_or_else(|_| {
                "https://api-inference.huggingface.co/models/j-hartmann/emotion-english-distilroberta-base"
                    .to_string()
            }),
            emotion_api_key: env::var("EMOTION_API_KEY").ok().filter(|k| !k.is_empty()),
            tts_url: env::var("TTS_URL").unwrap_or_else(|_| "http://localhost:5050/tts".to_string()),
            tts_voice: env::var("TTS_VOICE")
                .unwrap_or_else(|_| crate::speech::prosody::BASE_VOICE.to_string()),
            api_host: env::var("API_HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            api_port: env::var("API_PORT").unwrap_or_else(|_| "8190".to_string()),
        })
    }

    pub fn print_env_vars() {
        let masked = |k: &str| {
            env::var(k)
                .map(|v| if v.is_empty() { "<empty>".to_string() } else { "<set>".to_string() })
                .unwrap_or_else(|_| "<unset>".to_string())
        };
        println!("OPENAI_API_KEY: {}", masked("OPENAI_API_KEY"));
        println!("EMOTION_API_KEY: {}", masked("EMOTION_API_KEY"));
        println!("IMAGE_TIER: {}", env::var("IMAGE_TIER").unwrap_or_else(|_| "<unset>".to_string()));
        println!("IMAGE_DIR: {}", env::var("IMAGE_DIR").unwrap_or_else(|_| "<unset>".to_string()));
        println!("AUDIO_DIR: {}", env::var("AUDIO_DIR").unwrap_or_else(|_| "<unset>".to_string()));
        println!("TTS_URL: {}", env::var("TTS_URL").unwrap_or_else(|_| "<unset>".to_string()));
        println!("API_HOST: {}", env::var("API_HOST").unwrap_or_else(|_| "<unset>".to_string()));
        println!("API_PORT: {}", env::var("API_PORT").unwrap_or_else(|_| "<unset>".to_string()));
    }
}
