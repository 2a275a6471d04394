use std::path::Path;

use crate::infrastructure::connectors::audio_file::{self, SUPPORTED_EXTENSIONS};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Audio file not found: {0}")]
    NotFound(String),
    #[error("Unsupported file format: {extension}. Supported formats: {supported}")]
    UnsupportedFormat { extension: String, supported: String },
}

/// Checks the preconditions the coordinator relies on: the path names an
/// existing file with a supported audio extension.
pub async fn validate_audio_file(path: &Path) -> Result<(), ValidationError> {
    let is_file = tokio::fs::metadata(path)
        .await
        .map(|m| m.is_file())
        .unwrap_or(false);
    if !is_file {
        return Err(ValidationError::NotFound(path.display().to_string()));
    }

    if !audio_file::is_supported_extension(path) {
        let extension = audio_file::extension(path)
            .map(|e| format!(".{}", e))
            .unwrap_or_else(|| "(none)".to_string());
        return Err(ValidationError::UnsupportedFormat {
            extension,
            supported: SUPPORTED_EXTENSIONS
                .iter()
                .map(|e| format!(".{}", e))
                .collect::<Vec<_>>()
                .join(", "),
        });
    }

    Ok(())
}
