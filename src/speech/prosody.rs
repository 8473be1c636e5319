//! Emotion-to-prosody lookup.
//!
//! Deltas are relative to the baseline neural voice. Unknown labels map to
//! the neutral entry, so the lookup is total.
use serde::Serialize;

/// Baseline voice all deltas apply to.
pub const BASE_VOICE: &str = "en-US-AriaNeural";

/// Speech modulation triple understood by the TTS backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProsodyParams {
    pub rate: &'static str,
    pub pitch: &'static str,
    pub volume: &'static str,
}

const NEUTRAL: ProsodyParams = ProsodyParams {
    rate: "+0%",
    pitch: "+0Hz",
    volume: "+0%",
};

/// Map a detected emotion label to its modulation triple.
pub fn map_emotion(emotion: &str) -> ProsodyParams {
    match emotion {
        // Faster, higher, louder: excitement reads as energy.
        "joy" => ProsodyParams {
            rate: "+20%",
            pitch: "+15Hz",
            volume: "+10%",
        },
        "surprise" => ProsodyParams {
            rate: "+25%",
            pitch: "+20Hz",
            volume: "+15%",
        },
        // Pitch drops slightly for authority while volume jumps.
        "anger" => ProsodyParams {
            rate: "+10%",
            pitch: "-5Hz",
            volume: "+30%",
        },
        "sadness" => ProsodyParams {
            rate: "-15%",
            pitch: "-15Hz",
            volume: "-20%",
        },
        "fear" => ProsodyParams {
            rate: "+15%",
            pitch: "+10Hz",
            volume: "+0%",
        },
        "disgust" => ProsodyParams {
            rate: "-10%",
            pitch: "-10Hz",
            volume: "-10%",
        },
        _ => NEUTRAL,
    }
}
