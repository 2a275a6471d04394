mod aggregate_result;
mod cost_estimate;
mod detection_request;
mod duration_secs;
mod provider_outcome;
mod provider_status;

pub use aggregate_result::AggregateResult;
pub use cost_estimate::CostEstimate;
pub use detection_request::DetectionRequest;
pub use provider_outcome::ProviderOutcome;
pub use provider_status::ProviderStatus;
