use thiserror::Error;

use crate::detection::domain::detection::Detection;
use crate::detection::domain::detection_request::DetectionRequest;

#[derive(Error, Debug)]
pub enum DetectionError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("detector at {url} answered with status {status}")]
    Status { url: String, status: u16 },
    #[error("detector response could not be parsed: {0}")]
    Malformed(String),
}

/// Domain interface for the external emotion detector.
///
/// Implementations may hold connection state, hence `&mut self`.
pub trait EmotionDetector: Send {
    fn detect(&mut self, request: DetectionRequest) -> Result<Vec<Detection>, DetectionError>;
}
