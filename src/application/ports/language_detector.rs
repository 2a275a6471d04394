use std::path::Path;

use async_trait::async_trait;

use crate::domain::CostEstimate;

/// One provider's ability to name the language spoken in an audio file.
///
/// Implementations own their vendor-specific request and response handling
/// and must be callable concurrently. Timeouts are enforced by the caller.
#[async_trait]
pub trait LanguageDetector: Send + Sync {
    fn name(&self) -> &str;

    async fn identify(&self, audio_path: &Path) -> Result<Detection, DetectorError>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct Detection {
    pub language: String,
    pub cost: Option<CostEstimate>,
}

impl Detection {
    pub fn new(language: impl Into<String>, cost: Option<CostEstimate>) -> Self {
        Self {
            language: language.into(),
            cost,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DetectorError {
    #[error("audio file could not be read: {0}")]
    Io(#[from] std::io::Error),
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
    #[error("unsupported audio format: {0}")]
    UnsupportedFormat(String),
    #[error("authentication failed: {0}")]
    Authentication(String),
    #[error("audio rejected: {0}")]
    Rejected(String),
    #[error("configuration error: {0}")]
    Configuration(String),
}
