use std::time::Duration;

use config::{Config, ConfigError, File, FileFormat};
use serde::Deserialize;

use crate::infrastructure::connectors::Pricing;

use super::environment::Environment;

pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
    pub logging: LoggingSettings,
    pub coordinator: CoordinatorSettings,
    pub providers: Vec<ProviderSettings>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// `EnvFilter` directive; `RUST_LOG` wins when set.
    pub level: Option<String>,
    pub json: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CoordinatorSettings {
    /// Applied to every provider without its own `timeout_ms`.
    pub default_timeout_ms: u64,
}

impl CoordinatorSettings {
    pub fn default_timeout(&self) -> Duration {
        Duration::from_millis(self.default_timeout_ms)
    }
}

impl Default for CoordinatorSettings {
    fn default() -> Self {
        Self {
            default_timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum ProviderKind {
    #[serde(rename = "openai_mock")]
    OpenAiMock,
    #[serde(rename = "sarvam_mock")]
    SarvamMock,
    #[serde(rename = "openai")]
    OpenAi,
    #[serde(rename = "gemini")]
    Gemini,
    #[serde(rename = "elevenlabs")]
    ElevenLabs,
    #[serde(rename = "sarvam")]
    Sarvam,
}

impl ProviderKind {
    pub fn default_api_key_env(&self) -> Option<&'static str> {
        match self {
            ProviderKind::OpenAiMock | ProviderKind::SarvamMock => None,
            ProviderKind::OpenAi => Some("OPENAI_API_KEY"),
            ProviderKind::Gemini => Some("GEMINI_API_KEY"),
            ProviderKind::ElevenLabs => Some("ELEVENLABS_API_KEY"),
            ProviderKind::Sarvam => Some("SARVAM_API_KEY"),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProviderSettings {
    pub kind: ProviderKind,
    /// Overrides the connector's built-in provider name.
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default = "enabled_by_default")]
    pub enabled: bool,
    #[serde(default)]
    pub timeout_ms: Option<u64>,
    /// Inline key. Prefer `api_key_env` outside of tests.
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub api_key_env: Option<String>,
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    /// Mock connectors only.
    #[serde(default)]
    pub delay_ms: Option<u64>,
    #[serde(default)]
    pub failure_percent: Option<u8>,
    #[serde(default)]
    pub pricing: Option<Pricing>,
}

fn enabled_by_default() -> bool {
    true
}

impl ProviderSettings {
    pub fn new(kind: ProviderKind) -> Self {
        Self {
            kind,
            name: None,
            enabled: true,
            timeout_ms: None,
            api_key: None,
            api_key_env: None,
            base_url: None,
            model: None,
            delay_ms: None,
            failure_percent: None,
            pricing: None,
        }
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_ms.map(Duration::from_millis)
    }

    /// Inline key first, then the configured or conventional environment variable.
    pub fn resolve_api_key(&self) -> Option<String> {
        if let Some(key) = self.api_key.as_ref().filter(|k| !k.trim().is_empty()) {
            return Some(key.clone());
        }

        let var = self
            .api_key_env
            .as_deref()
            .or_else(|| self.kind.default_api_key_env())?;
        std::env::var(var).ok().filter(|k| !k.trim().is_empty())
    }
}

impl Settings {
    /// Layers `config/default.toml`, `config/{environment}.toml` and `APP__*`
    /// environment variables, later sources winning. Both files are optional.
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", environment.config_name())).required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()
    }

    pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from_str(source, FileFormat::Toml))
            .build()?
            .try_deserialize()
    }
}
