//! Shared application state injected into every handler.
//!
//! Services are constructed once at process start in `main` and handed to
//! the router behind an `Arc`; nothing here is mutated after startup.
use std::sync::Arc;

use crate::imagegen::TieredImageGenerator;
use crate::segmenter::Segmenter;
use crate::speech::{EmotionClassifier, SpeechSynthesizer};

pub struct AppState {
    pub segmenter: Segmenter,
    pub image_generator: Arc<TieredImageGenerator>,
    pub emotion_classifier: EmotionClassifier,
    pub synthesizer: SpeechSynthesizer,
}
