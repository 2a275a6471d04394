mod init_tracing;
mod request_id;
mod tracing_config;
mod vendor_message;

pub use init_tracing::init_tracing;
pub use request_id::{REQUEST_ID_HEADER, request_id_middleware, resolve_request_id};
pub use tracing_config::{DEFAULT_FILTER, TracingConfig};
pub use vendor_message::sanitize_vendor_message;
