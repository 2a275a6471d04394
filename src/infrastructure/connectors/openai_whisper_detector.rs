use std::path::Path;

use async_trait::async_trait;
use reqwest::multipart;
use serde::Deserialize;

use crate::application::ports::{Detection, DetectorError, LanguageDetector};

use super::audio_file;
use super::language::{FALLBACK_LANGUAGE, detect_from_script, normalize_language_code};
use super::pricing::Pricing;
use super::vendor_response::{ensure_success, parse_json, request_failed};

const VENDOR: &str = "OpenAI Whisper";

pub struct OpenAiWhisperDetector {
    name: String,
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
    pricing: Pricing,
}

impl OpenAiWhisperDetector {
    pub fn new(api_key: String, base_url: Option<String>, model: Option<String>) -> Self {
        Self {
            name: VENDOR.to_string(),
            client: reqwest::Client::new(),
            api_key,
            base_url: base_url
                .unwrap_or_else(|| "https://api.openai.com/v1".to_string())
                .trim_end_matches('/')
                .to_string(),
            model: model.unwrap_or_else(|| "whisper-1".to_string()),
            pricing: Pricing::PerMinute {
                dollars_per_minute: 0.006,
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
struct VerboseTranscription {
    #[serde(default)]
    language: Option<String>,
    #[serde(default)]
    text: String,
}

#[async_trait]
impl LanguageDetector for OpenAiWhisperDetector {
    fn name(&self) -> &str {
        &self.name
    }

    async fn identify(&self, audio_path: &Path) -> Result<Detection, DetectorError> {
        let audio_data = audio_file::read(audio_path).await?;
        let size = audio_data.len() as u64;
        let url = format!("{}/audio/transcriptions", self.base_url);

        let file_part = multipart::Part::bytes(audio_data)
            .file_name(audio_file::file_name(audio_path))
            .mime_str(audio_file::mime_type(audio_path))
            .map_err(|e| DetectorError::ApiRequestFailed(format!("mime: {}", e)))?;

        let form = multipart::Form::new()
            .text("model", self.model.clone())
            .text("response_format", "verbose_json")
            .part("file", file_part);

        tracing::debug!(model = %self.model, bytes = size, "Sending audio to OpenAI Whisper API");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .multipart(form)
            .send()
            .await
            .map_err(|e| request_failed(VENDOR, e))?;

        let response = ensure_success(VENDOR, response).await?;
        let transcription: VerboseTranscription = parse_json(VENDOR, response).await?;

        let language = transcription
            .language
            .as_deref()
            .and_then(normalize_language_code)
            .or_else(|| detect_from_script(&transcription.text).map(str::to_string))
            .unwrap_or_else(|| FALLBACK_LANGUAGE.to_string());

        tracing::info!(language = %language, "OpenAI Whisper detection completed");

        Ok(Detection::new(language, Some(self.pricing.estimate(size))))
    }
}
