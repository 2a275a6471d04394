use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;

use crate::application::ports::{Detection, DetectorError, LanguageDetector};

use super::audio_file;
use super::language::{
    FALLBACK_LANGUAGE, INDIAN_LANGUAGES, SUPPORTED_LANGUAGES, language_from_file_name,
};
use super::pricing::Pricing;

const CORRUPT_MARKER: &str = "corrupt";

/// Canned connector that answers from the file name after a simulated delay.
///
/// Outcomes are a pure function of the provider name and file name, so
/// repeated runs agree. A configurable share of file names fail, and any
/// name containing `corrupt` always does.
pub struct MockDetector {
    name: String,
    delay: Duration,
    recognized: Vec<String>,
    pricing: Pricing,
    failure_percent: u8,
}

impl MockDetector {
    pub fn new(name: impl Into<String>, delay: Duration, pricing: Pricing) -> Self {
        Self {
            name: name.into(),
            delay,
            recognized: SUPPORTED_LANGUAGES.iter().map(|c| c.to_string()).collect(),
            pricing,
            failure_percent: 0,
        }
    }

    pub fn openai() -> Self {
        Self::new(
            "OpenAI (Mock)",
            Duration::from_millis(500),
            Pricing::PerMinute {
                dollars_per_minute: 0.006,
                tokens_per_minute: 1000,
            },
        )
        .with_recognized(&INDIAN_LANGUAGES)
    }

    pub fn sarvam() -> Self {
        Self::new(
            "Sarvam AI (Mock)",
            Duration::from_millis(1500),
            Pricing::PerMegabyte {
                dollars_per_megabyte: 0.001,
            },
        )
    }

    /// Languages outside this set are reported as English.
    pub fn with_recognized(mut self, languages: &[&str]) -> Self {
        self.recognized = languages.iter().map(|c| c.to_string()).collect();
        self
    }

    pub fn with_failure_percent(mut self, percent: u8) -> Self {
        self.failure_percent = percent.min(100);
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_pricing(mut self, pricing: Pricing) -> Self {
        self.pricing = pricing;
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    fn simulated_outage(&self, file_name: &str) -> bool {
        if self.failure_percent == 0 {
            return false;
        }
        let roll = fnv1a(&[self.name.as_bytes(), file_name.as_bytes()]) % 100;
        roll < u64::from(self.failure_percent)
    }
}

#[async_trait]
impl LanguageDetector for MockDetector {
    fn name(&self) -> &str {
        &self.name
    }

    async fn identify(&self, audio_path: &Path) -> Result<Detection, DetectorError> {
        tokio::time::sleep(self.delay).await;

        let file_name = audio_file::file_name(audio_path);
        if file_name.to_lowercase().contains(CORRUPT_MARKER) {
            return Err(DetectorError::Rejected("invalid audio".to_string()));
        }
        if self.simulated_outage(&file_name) {
            return Err(DetectorError::ApiRequestFailed(format!(
                "{} simulated outage",
                self.name
            )));
        }

        let language = language_from_file_name(&file_name)
            .filter(|code| self.recognized.iter().any(|r| r == code))
            .unwrap_or(FALLBACK_LANGUAGE);

        let cost = audio_file::size_bytes(audio_path)
            .await
            .ok()
            .map(|size| self.pricing.estimate(size));

        tracing::debug!(provider = %self.name, language, "Mock detection completed");

        Ok(Detection::new(language, cost))
    }
}

fn fnv1a(parts: &[&[u8]]) -> u64 {
    const OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01b3;

    parts
        .iter()
        .flat_map(|part| part.iter().chain(std::iter::once(&0u8)))
        .fold(OFFSET, |hash, byte| (hash ^ u64::from(*byte)).wrapping_mul(PRIME))
}
