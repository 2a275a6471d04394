use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Input to a detection run. The boundary layer has already checked that the
/// path exists and carries a supported extension.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DetectionRequest {
    #[serde(rename = "audio_file_path", alias = "audio_path")]
    pub audio_path: PathBuf,
    #[serde(default)]
    pub ground_truth_language: Option<String>,
}

impl DetectionRequest {
    pub fn new(audio_path: impl Into<PathBuf>) -> Self {
        Self {
            audio_path: audio_path.into(),
            ground_truth_language: None,
        }
    }

    pub fn audio_path(&self) -> &Path {
        &self.audio_path
    }
}
