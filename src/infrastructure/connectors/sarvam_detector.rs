use std::path::Path;

use async_trait::async_trait;
use reqwest::multipart;
use serde::Deserialize;

use crate::application::ports::{Detection, DetectorError, LanguageDetector};

use super::audio_file;
use super::language::{detect_from_script, normalize_language_code};
use super::pricing::Pricing;
use super::vendor_response::{ensure_success, parse_json, request_failed};

const VENDOR: &str = "Sarvam AI";

const DEFAULT_MODELS: [&str; 2] = ["saaras:v2.5", "saaras:turbo"];

/// Uses Sarvam's speech-to-text-translate endpoint, which reports the
/// source language it detected. Models are tried in order until one answers.
pub struct SarvamDetector {
    name: String,
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    models: Vec<String>,
    pricing: Pricing,
}

impl SarvamDetector {
    pub fn new(api_key: String, base_url: Option<String>, model: Option<String>) -> Self {
        let models = match model {
            Some(model) => vec![model],
            None => DEFAULT_MODELS.iter().map(|m| m.to_string()).collect(),
        };

        Self {
            name: VENDOR.to_string(),
            client: reqwest::Client::new(),
            api_key,
            base_url: base_url
                .unwrap_or_else(|| "https://api.sarvam.ai".to_string())
                .trim_end_matches('/')
                .to_string(),
            models,
            pricing: Pricing::PerMinute {
                dollars_per_minute: 0.02,
                tokens_per_minute: 100,
            },
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    async fn translate(
        &self,
        audio_path: &Path,
        audio_data: &[u8],
        model: &str,
    ) -> Result<String, DetectorError> {
        let file_part = multipart::Part::bytes(audio_data.to_vec())
            .file_name(audio_file::file_name(audio_path))
            .mime_str(audio_file::mime_type(audio_path))
            .map_err(|e| DetectorError::ApiRequestFailed(format!("mime: {}", e)))?;

        let form = multipart::Form::new()
            .text("model", model.to_string())
            .part("file", file_part);

        let response = self
            .client
            .post(format!("{}/speech-to-text-translate", self.base_url))
            .header("api-subscription-key", &self.api_key)
            .multipart(form)
            .send()
            .await
            .map_err(|e| request_failed(VENDOR, e))?;

        let response = ensure_success(VENDOR, response).await?;
        let result: TranslateResponse = parse_json(VENDOR, response).await?;

        result.language().ok_or_else(|| {
            DetectorError::InvalidResponse("Sarvam response carried no language".to_string())
        })
    }
}

#[derive(Deserialize)]
struct TranslateResponse {
    #[serde(default)]
    language_code: Option<String>,
    #[serde(default)]
    detected_language_code: Option<String>,
    #[serde(default)]
    transcript: Option<String>,
}

impl TranslateResponse {
    fn language(&self) -> Option<String> {
        [&self.language_code, &self.detected_language_code]
            .into_iter()
            .flatten()
            .find_map(|raw| normalize_language_code(raw))
            .or_else(|| {
                self.transcript
                    .as_deref()
                    .and_then(detect_from_script)
                    .map(str::to_string)
            })
    }
}

#[async_trait]
impl LanguageDetector for SarvamDetector {
    fn name(&self) -> &str {
        &self.name
    }

    async fn identify(&self, audio_path: &Path) -> Result<Detection, DetectorError> {
        let audio_data = audio_file::read(audio_path).await?;
        let size = audio_data.len() as u64;

        let mut last_error = None;
        for model in &self.models {
            tracing::debug!(model = %model, bytes = size, "Sending audio to Sarvam");

            match self.translate(audio_path, &audio_data, model).await {
                Ok(language) => {
                    tracing::info!(language = %language, model = %model, "Sarvam detection completed");
                    return Ok(Detection::new(language, Some(self.pricing.estimate(size))));
                }
                Err(e @ DetectorError::Authentication(_)) => return Err(e),
                Err(e) => {
                    tracing::warn!(model = %model, error = %e, "Sarvam model failed, trying next");
                    last_error = Some(e);
                }
            }
        }

        Err(last_error
            .unwrap_or_else(|| DetectorError::Configuration("no Sarvam models configured".to_string())))
    }
}
