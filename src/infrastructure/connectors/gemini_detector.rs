use std::path::Path;

use async_trait::async_trait;
use base64::{Engine as _, engine::general_purpose};
use serde::Deserialize;

use crate::application::ports::{Detection, DetectorError, LanguageDetector};

use super::audio_file;
use super::language::{FALLBACK_LANGUAGE, is_supported, normalize_language_code};
use super::pricing::Pricing;
use super::vendor_response::{ensure_success, parse_json, request_failed};

const VENDOR: &str = "Google Gemini";

const PROMPT: &str = "Analyze this audio file and detect the spoken language. \
Return only the ISO 639-1 language code (e.g. 'en' for English, 'hi' for Hindi, 'ta' for Tamil). \
Common Indian language codes: hi Hindi, ta Tamil, te Telugu, kn Kannada, ml Malayalam, \
bn Bengali, mr Marathi, gu Gujarati, pa Punjabi, ur Urdu, sa Sanskrit. \
Return only the language code, nothing else.";

/// Asks a Gemini model to name the language of inline base64 audio.
pub struct GeminiDetector {
    name: String,
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
    pricing: Pricing,
}

impl GeminiDetector {
    pub fn new(api_key: String, base_url: Option<String>, model: Option<String>) -> Self {
        Self {
            name: VENDOR.to_string(),
            client: reqwest::Client::new(),
            api_key,
            base_url: base_url
                .unwrap_or_else(|| "https://generativelanguage.googleapis.com/v1beta".to_string())
                .trim_end_matches('/')
                .to_string(),
            model: model.unwrap_or_else(|| "gemini-1.5-flash".to_string()),
            pricing: Pricing::PerToken {
                dollars_per_token: 0.0001,
            },
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Content,
}

#[derive(Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Deserialize)]
struct Part {
    #[serde(default)]
    text: Option<String>,
}

#[async_trait]
impl LanguageDetector for GeminiDetector {
    fn name(&self) -> &str {
        &self.name
    }

    async fn identify(&self, audio_path: &Path) -> Result<Detection, DetectorError> {
        let audio_data = audio_file::read(audio_path).await?;
        let size = audio_data.len() as u64;

        let body = serde_json::json!({
            "contents": [{
                "parts": [
                    { "text": PROMPT },
                    {
                        "inline_data": {
                            "mime_type": audio_file::mime_type(audio_path),
                            "data": general_purpose::STANDARD.encode(&audio_data),
                        }
                    }
                ]
            }]
        });

        let url = format!("{}/models/{}:generateContent", self.base_url, self.model);

        tracing::debug!(model = %self.model, bytes = size, "Sending audio to Gemini");

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await
            .map_err(|e| request_failed(VENDOR, e))?;

        let response = ensure_success(VENDOR, response).await?;
        let generated: GenerateContentResponse = parse_json(VENDOR, response).await?;

        let answer = generated
            .candidates
            .into_iter()
            .flat_map(|c| c.content.parts)
            .find_map(|p| p.text)
            .ok_or_else(|| DetectorError::InvalidResponse("Gemini returned no text".to_string()))?;

        // Anything outside the supported list is treated as English.
        let language = normalize_language_code(answer.trim_matches(|c: char| !c.is_alphanumeric()))
            .filter(|code| is_supported(code))
            .unwrap_or_else(|| FALLBACK_LANGUAGE.to_string());

        tracing::info!(language = %language, "Gemini detection completed");

        Ok(Detection::new(language, Some(self.pricing.estimate(size))))
    }
}
