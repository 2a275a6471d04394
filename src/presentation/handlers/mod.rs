mod detect;
mod error_response;
mod health;
mod metrics;
mod providers;
mod root;

pub use detect::{DetectionResponse, detect_all_handler, detect_one_handler};
pub use error_response::{ErrorResponse, error_response};
pub use health::health_handler;
pub use metrics::metrics_handler;
pub use providers::providers_handler;
pub use root::{SERVICE_NAME, root_handler};
