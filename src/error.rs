//! Common error type and result alias shared across the crate.
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("Segmentation error: {0}")]
    Segmentation(String),

    #[error("Image generation error: {0}")]
    ImageGen(String),

    #[error("Storyboard assembly error: {0}")]
    Storyboard(String),

    #[error("Emotion analysis error: {0}")]
    Emotion(String),

    #[error("Speech synthesis error: {0}")]
    Speech(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type AppResult<T> = Result<T, AppError>;
