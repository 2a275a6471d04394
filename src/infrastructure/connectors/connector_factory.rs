use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::LanguageDetector;
use crate::application::services::{ConnectorRegistry, RegistryError};
use crate::presentation::config::{ProviderKind, ProviderSettings, Settings};

use super::elevenlabs_detector::ElevenLabsDetector;
use super::gemini_detector::GeminiDetector;
use super::mock_detector::MockDetector;
use super::openai_whisper_detector::OpenAiWhisperDetector;
use super::sarvam_detector::SarvamDetector;

pub struct ConnectorFactory;

#[derive(Debug, thiserror::Error)]
pub enum ConnectorFactoryError {
    #[error("missing API key for {provider}: set {env_var}")]
    MissingApiKey { provider: String, env_var: String },
    #[error(transparent)]
    Registry(#[from] RegistryError),
}

impl ConnectorFactory {
    pub fn create(
        settings: &ProviderSettings,
    ) -> Result<Arc<dyn LanguageDetector>, ConnectorFactoryError> {
        let connector: Arc<dyn LanguageDetector> = match settings.kind {
            ProviderKind::OpenAiMock => Arc::new(Self::configure_mock(MockDetector::openai(), settings)),
            ProviderKind::SarvamMock => Arc::new(Self::configure_mock(MockDetector::sarvam(), settings)),
            ProviderKind::OpenAi => {
                let key = Self::require_api_key(settings, "OpenAI Whisper")?;
                let detector =
                    OpenAiWhisperDetector::new(key, settings.base_url.clone(), settings.model.clone());
                match &settings.name {
                    Some(name) => Arc::new(detector.with_name(name)),
                    None => Arc::new(detector),
                }
            }
            ProviderKind::Gemini => {
                let key = Self::require_api_key(settings, "Google Gemini")?;
                let detector =
                    GeminiDetector::new(key, settings.base_url.clone(), settings.model.clone());
                match &settings.name {
                    Some(name) => Arc::new(detector.with_name(name)),
                    None => Arc::new(detector),
                }
            }
            ProviderKind::ElevenLabs => {
                let key = Self::require_api_key(settings, "ElevenLabs")?;
                let detector =
                    ElevenLabsDetector::new(key, settings.base_url.clone(), settings.model.clone());
                match &settings.name {
                    Some(name) => Arc::new(detector.with_name(name)),
                    None => Arc::new(detector),
                }
            }
            ProviderKind::Sarvam => {
                let key = Self::require_api_key(settings, "Sarvam AI")?;
                let detector =
                    SarvamDetector::new(key, settings.base_url.clone(), settings.model.clone());
                match &settings.name {
                    Some(name) => Arc::new(detector.with_name(name)),
                    None => Arc::new(detector),
                }
            }
        };

        tracing::info!(provider = %connector.name(), kind = ?settings.kind, "Connector created");
        Ok(connector)
    }

    /// Builds the registry from every enabled provider, in configured order.
    /// With no providers configured, the two mock connectors are registered.
    pub fn build_registry(settings: &Settings) -> Result<ConnectorRegistry, ConnectorFactoryError> {
        let defaults;
        let providers = if settings.providers.is_empty() {
            defaults = vec![
                ProviderSettings::new(ProviderKind::SarvamMock),
                ProviderSettings::new(ProviderKind::OpenAiMock),
            ];
            &defaults
        } else {
            &settings.providers
        };

        let mut builder = ConnectorRegistry::builder(settings.coordinator.default_timeout());
        for provider in providers.iter().filter(|p| p.enabled) {
            let connector = Self::create(provider)?;
            builder = match provider.timeout() {
                Some(timeout) => builder.register_with_timeout(connector, timeout),
                None => builder.register(connector),
            };
        }

        Ok(builder.build()?)
    }

    fn configure_mock(mut mock: MockDetector, settings: &ProviderSettings) -> MockDetector {
        if let Some(name) = &settings.name {
            mock = mock.with_name(name);
        }
        if let Some(delay_ms) = settings.delay_ms {
            mock = mock.with_delay(Duration::from_millis(delay_ms));
        }
        if let Some(percent) = settings.failure_percent {
            mock = mock.with_failure_percent(percent);
        }
        if let Some(pricing) = settings.pricing {
            mock = mock.with_pricing(pricing);
        }
        mock
    }

    fn require_api_key(
        settings: &ProviderSettings,
        provider: &str,
    ) -> Result<String, ConnectorFactoryError> {
        settings
            .resolve_api_key()
            .ok_or_else(|| ConnectorFactoryError::MissingApiKey {
                provider: provider.to_string(),
                env_var: settings
                    .api_key_env
                    .clone()
                    .or_else(|| settings.kind.default_api_key_env().map(str::to_string))
                    .unwrap_or_default(),
            })
    }
}
