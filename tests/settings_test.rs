use std::time::Duration;

use language_detective::application::ports::LanguageDetector;
use language_detective::infrastructure::connectors::{
    ConnectorFactory, ConnectorFactoryError, Pricing,
};
use language_detective::presentation::config::{
    DEFAULT_TIMEOUT_MS, Environment, ProviderKind, ProviderSettings, Settings,
};

const UNSET_KEY_VAR: &str = "LANGUAGE_DETECTIVE_TEST_UNSET_KEY";

#[test]
fn given_empty_source_when_parsing_settings_then_uses_defaults() {
    let settings = Settings::from_toml("").unwrap();

    assert_eq!(settings.server.host, "0.0.0.0");
    assert_eq!(settings.server.port, 8000);
    assert_eq!(settings.coordinator.default_timeout_ms, DEFAULT_TIMEOUT_MS);
    assert!(settings.providers.is_empty());
    assert!(!settings.logging.json);
}

#[test]
fn given_provider_table_when_parsing_settings_then_reads_every_field() {
    let settings = Settings::from_toml(
        r#"
        [server]
        port = 9000

        [coordinator]
        default_timeout_ms = 1500

        [[providers]]
        kind = "sarvam_mock"
        name = "Fast Sarvam"
        delay_ms = 10
        failure_percent = 25
        pricing = { model = "per_token", dollars_per_token = 0.5 }

        [[providers]]
        kind = "gemini"
        enabled = false
        timeout_ms = 60000
        api_key_env = "MY_GEMINI_KEY"
        "#,
    )
    .unwrap();

    assert_eq!(settings.server.port, 9000);
    assert_eq!(settings.coordinator.default_timeout(), Duration::from_millis(1500));
    assert_eq!(settings.providers.len(), 2);

    let mock = &settings.providers[0];
    assert_eq!(mock.kind, ProviderKind::SarvamMock);
    assert_eq!(mock.name.as_deref(), Some("Fast Sarvam"));
    assert!(mock.enabled);
    assert_eq!(mock.failure_percent, Some(25));
    assert_eq!(
        mock.pricing,
        Some(Pricing::PerToken {
            dollars_per_token: 0.5
        })
    );

    let gemini = &settings.providers[1];
    assert_eq!(gemini.kind, ProviderKind::Gemini);
    assert!(!gemini.enabled);
    assert_eq!(gemini.timeout(), Some(Duration::from_secs(60)));
    assert_eq!(gemini.api_key_env.as_deref(), Some("MY_GEMINI_KEY"));
}

#[test]
fn given_unknown_provider_kind_when_parsing_settings_then_fails() {
    let result = Settings::from_toml(
        r#"
        [[providers]]
        kind = "whisper_local"
        "#,
    );

    assert!(result.is_err());
}

#[test]
fn given_no_providers_when_building_registry_then_registers_both_mocks() {
    let settings = Settings::default();

    let registry = ConnectorFactory::build_registry(&settings).unwrap();

    assert_eq!(registry.names(), vec!["Sarvam AI (Mock)", "OpenAI (Mock)"]);
}

#[test]
fn given_disabled_provider_when_building_registry_then_skips_it() {
    let settings = Settings::from_toml(
        r#"
        [[providers]]
        kind = "openai_mock"

        [[providers]]
        kind = "elevenlabs"
        enabled = false
        "#,
    )
    .unwrap();

    let registry = ConnectorFactory::build_registry(&settings).unwrap();

    assert_eq!(registry.names(), vec!["OpenAI (Mock)"]);
}

#[test]
fn given_provider_timeouts_when_building_registry_then_applies_override_and_default() {
    let settings = Settings::from_toml(
        r#"
        [coordinator]
        default_timeout_ms = 2000

        [[providers]]
        kind = "sarvam_mock"
        timeout_ms = 50

        [[providers]]
        kind = "openai_mock"
        "#,
    )
    .unwrap();

    let registry = ConnectorFactory::build_registry(&settings).unwrap();

    assert_eq!(
        registry.get("Sarvam AI (Mock)").unwrap().timeout,
        Duration::from_millis(50)
    );
    assert_eq!(
        registry.get("OpenAI (Mock)").unwrap().timeout,
        Duration::from_millis(2000)
    );
}

#[test]
fn given_two_providers_with_same_name_when_building_registry_then_reports_duplicate() {
    let settings = Settings::from_toml(
        r#"
        [[providers]]
        kind = "openai_mock"

        [[providers]]
        kind = "sarvam_mock"
        name = "OpenAI (Mock)"
        "#,
    )
    .unwrap();

    let result = ConnectorFactory::build_registry(&settings);

    assert!(matches!(result, Err(ConnectorFactoryError::Registry(_))));
}

#[test]
fn given_real_provider_without_key_when_creating_then_reports_missing_env_var() {
    let mut provider = ProviderSettings::new(ProviderKind::Sarvam);
    provider.api_key_env = Some(UNSET_KEY_VAR.to_string());

    let result = ConnectorFactory::create(&provider);

    match result {
        Err(ConnectorFactoryError::MissingApiKey { provider, env_var }) => {
            assert_eq!(provider, "Sarvam AI");
            assert_eq!(env_var, UNSET_KEY_VAR);
        }
        Err(other) => panic!("expected MissingApiKey, got {}", other),
        Ok(_) => panic!("expected MissingApiKey, got a connector"),
    }
}

#[test]
fn given_inline_key_and_name_when_creating_real_provider_then_uses_name() {
    let mut provider = ProviderSettings::new(ProviderKind::Gemini);
    provider.api_key = Some("inline-key".to_string());
    provider.name = Some("Gemini Flash".to_string());

    let connector = ConnectorFactory::create(&provider).unwrap();

    assert_eq!(connector.name(), "Gemini Flash");
}

#[test]
fn given_blank_inline_key_when_resolving_then_falls_through_to_env_var() {
    let mut provider = ProviderSettings::new(ProviderKind::OpenAi);
    provider.api_key = Some("   ".to_string());
    provider.api_key_env = Some(UNSET_KEY_VAR.to_string());

    assert!(provider.resolve_api_key().is_none());
}

#[test]
fn given_environment_names_when_parsing_then_accepts_aliases() {
    assert_eq!("local".parse::<Environment>(), Ok(Environment::Local));
    assert_eq!("Development".parse::<Environment>(), Ok(Environment::Local));
    assert_eq!("test".parse::<Environment>(), Ok(Environment::Test));
    assert_eq!("production".parse::<Environment>(), Ok(Environment::Prod));
    assert!("staging".parse::<Environment>().is_err());
    assert_eq!(Environment::Prod.to_string(), "prod");
}
