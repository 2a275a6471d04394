use std::path::Path;

use async_trait::async_trait;
use reqwest::multipart;
use serde::Deserialize;

use crate::application::ports::{Detection, DetectorError, LanguageDetector};

use super::audio_file;
use super::language::{detect_from_script, normalize_language_code};
use super::pricing::Pricing;
use super::vendor_response::{ensure_success, parse_json, request_failed};

const VENDOR: &str = "ElevenLabs";

/// Uses ElevenLabs speech-to-text with automatic language identification.
pub struct ElevenLabsDetector {
    name: String,
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
    pricing: Pricing,
}

impl ElevenLabsDetector {
    pub fn new(api_key: String, base_url: Option<String>, model: Option<String>) -> Self {
        Self {
            name: VENDOR.to_string(),
            client: reqwest::Client::new(),
            api_key,
            base_url: base_url
                .unwrap_or_else(|| "https://api.elevenlabs.io/v1".to_string())
                .trim_end_matches('/')
                .to_string(),
            model: model.unwrap_or_else(|| "scribe_v1".to_string()),
            pricing: Pricing::PerMinute {
                dollars_per_minute: 0.005,
                tokens_per_minute: 1000,
            },
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

#[derive(Deserialize)]
struct SpeechToTextResponse {
    #[serde(default)]
    language_code: Option<String>,
    #[serde(default)]
    detected_language: Option<String>,
    #[serde(default)]
    language: Option<String>,
    #[serde(default)]
    text: Option<String>,
}

impl SpeechToTextResponse {
    fn language(&self) -> Option<String> {
        [&self.language_code, &self.detected_language, &self.language]
            .into_iter()
            .flatten()
            .find_map(|raw| normalize_language_code(raw))
            .or_else(|| {
                self.text
                    .as_deref()
                    .and_then(detect_from_script)
                    .map(str::to_string)
            })
    }
}

#[async_trait]
impl LanguageDetector for ElevenLabsDetector {
    fn name(&self) -> &str {
        &self.name
    }

    async fn identify(&self, audio_path: &Path) -> Result<Detection, DetectorError> {
        let audio_data = audio_file::read(audio_path).await?;
        let size = audio_data.len() as u64;

        let file_part = multipart::Part::bytes(audio_data)
            .file_name(audio_file::file_name(audio_path))
            .mime_str(audio_file::mime_type(audio_path))
            .map_err(|e| DetectorError::ApiRequestFailed(format!("mime: {}", e)))?;

        let form = multipart::Form::new()
            .text("model_id", self.model.clone())
            .part("file", file_part);

        tracing::debug!(model = %self.model, bytes = size, "Sending audio to ElevenLabs speech-to-text");

        let response = self
            .client
            .post(format!("{}/speech-to-text", self.base_url))
            .header("xi-api-key", &self.api_key)
            .multipart(form)
            .send()
            .await
            .map_err(|e| request_failed(VENDOR, e))?;

        let response = ensure_success(VENDOR, response).await?;
        let result: SpeechToTextResponse = parse_json(VENDOR, response).await?;

        let language = result.language().ok_or_else(|| {
            DetectorError::InvalidResponse("ElevenLabs response carried no language".to_string())
        })?;

        tracing::info!(language = %language, "ElevenLabs detection completed");

        Ok(Detection::new(language, Some(self.pricing.estimate(size))))
    }
}
