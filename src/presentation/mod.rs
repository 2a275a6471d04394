pub mod config;
pub mod handlers;
pub mod router;
pub mod state;
pub mod validation;

pub use config::{Environment, ProviderKind, ProviderSettings, Settings};
pub use router::create_router;
pub use state::AppState;
pub use validation::{ValidationError, validate_audio_file};
