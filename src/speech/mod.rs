//! Sentiment-driven speech: emotion classification, prosody mapping, and
//! synthesis against a remote TTS backend.
pub mod emotion;
pub mod prosody;
pub mod synth;

pub use emotion::{EmotionAnalysis, EmotionClassifier};
pub use prosody::{map_emotion, ProsodyParams, BASE_VOICE};
pub use synth::SpeechSynthesizer;
