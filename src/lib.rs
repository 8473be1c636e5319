//! Storyboard Engine library
//!
//! Modules:
//! - `api`: Axum HTTP handlers, shared state, and request/response schemas.
//! - `segmenter`: Narrative segmentation with an LLM strategy falling back
//!   to a deterministic heuristic.
//! - `prompt`: Style-aware prompt enrichment for image generation.
//! - `imagegen`: Tiered image generation (paid engine, free engine,
//!   placeholder of last resort).
//! - `storyboard`: Concurrent panel fan-out with ordered reassembly.
//! - `speech`: Sentiment classification, prosody mapping, and TTS client.
//! - `config`: Env-driven configuration loader.
//! - `error`: Common error type and alias.
//!
//! Re-exports are provided for common types: `Config`, `Segmenter`,
//! `TieredImageGenerator`, `EmotionClassifier`, and `SpeechSynthesizer`.
pub mod api;
pub mod config;
pub mod error;
pub mod imagegen;
pub mod prompt;
pub mod segmenter;
pub mod speech;
pub mod storyboard;

pub use config::Config;
pub use imagegen::TieredImageGenerator;
pub use segmenter::Segmenter;
pub use speech::{EmotionClassifier, SpeechSynthesizer};
