mod environment;
mod settings;

pub use environment::{ENVIRONMENT_VAR, Environment};
pub use settings::{
    CoordinatorSettings, DEFAULT_TIMEOUT_MS, LoggingSettings, ProviderKind, ProviderSettings,
    ServerSettings, Settings,
};
