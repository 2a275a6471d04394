use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::LanguageDetector;

/// Process-wide, read-only set of connectors in registration order.
pub struct ConnectorRegistry {
    entries: Vec<RegisteredConnector>,
}

#[derive(Clone)]
pub struct RegisteredConnector {
    pub connector: Arc<dyn LanguageDetector>,
    pub timeout: Duration,
}

impl RegisteredConnector {
    pub fn name(&self) -> &str {
        self.connector.name()
    }
}

impl ConnectorRegistry {
    pub fn builder(default_timeout: Duration) -> ConnectorRegistryBuilder {
        ConnectorRegistryBuilder {
            default_timeout,
            entries: Vec::new(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&RegisteredConnector> {
        self.entries.iter().find(|e| e.name() == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &RegisteredConnector> {
        self.entries.iter()
    }

    pub fn names(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.name().to_string()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

pub struct ConnectorRegistryBuilder {
    default_timeout: Duration,
    entries: Vec<(Arc<dyn LanguageDetector>, Option<Duration>)>,
}

impl ConnectorRegistryBuilder {
    pub fn register(mut self, connector: Arc<dyn LanguageDetector>) -> Self {
        self.entries.push((connector, None));
        self
    }

    pub fn register_with_timeout(
        mut self,
        connector: Arc<dyn LanguageDetector>,
        timeout: Duration,
    ) -> Self {
        self.entries.push((connector, Some(timeout)));
        self
    }

    pub fn build(self) -> Result<ConnectorRegistry, RegistryError> {
        let mut seen = HashSet::new();
        let mut entries = Vec::with_capacity(self.entries.len());

        for (connector, timeout) in self.entries {
            let name = connector.name().to_string();
            let timeout = timeout.unwrap_or(self.default_timeout);

            if timeout.is_zero() {
                return Err(RegistryError::ZeroTimeout(name));
            }
            if !seen.insert(name.clone()) {
                return Err(RegistryError::DuplicateProvider(name));
            }

            tracing::debug!(provider = %name, timeout_ms = timeout.as_millis() as u64, "Registered connector");
            entries.push(RegisteredConnector { connector, timeout });
        }

        Ok(ConnectorRegistry { entries })
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("provider registered twice: {0}")]
    DuplicateProvider(String),
    #[error("provider {0} has a zero timeout")]
    ZeroTimeout(String),
}
