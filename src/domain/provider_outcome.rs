use std::time::Duration;

use serde::Serialize;

use super::cost_estimate::CostEstimate;
use super::duration_secs;
use super::provider_status::ProviderStatus;

const UNKNOWN_FAILURE: &str = "provider failed without an error message";

/// Normalized result of one connector invocation.
///
/// Only the three constructors can build a value, so `detected_language` is
/// present exactly when `status` is `Success` and `error_message` is present
/// exactly when it is not.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProviderOutcome {
    provider_name: String,
    detected_language: Option<String>,
    #[serde(with = "duration_secs")]
    time_taken: Duration,
    estimated_cost: Option<CostEstimate>,
    status: ProviderStatus,
    error_message: Option<String>,
}

impl ProviderOutcome {
    pub fn success(
        provider_name: impl Into<String>,
        detected_language: impl Into<String>,
        time_taken: Duration,
        estimated_cost: Option<CostEstimate>,
    ) -> Self {
        Self {
            provider_name: provider_name.into(),
            detected_language: Some(detected_language.into()),
            time_taken,
            estimated_cost,
            status: ProviderStatus::Success,
            error_message: None,
        }
    }

    pub fn failure(
        provider_name: impl Into<String>,
        error_message: impl Into<String>,
        time_taken: Duration,
    ) -> Self {
        Self::unsuccessful(
            provider_name.into(),
            ProviderStatus::Failure,
            error_message.into(),
            time_taken,
        )
    }

    pub fn timed_out(provider_name: impl Into<String>, limit: Duration, time_taken: Duration) -> Self {
        Self::unsuccessful(
            provider_name.into(),
            ProviderStatus::Timeout,
            format!("provider did not respond within {} ms", limit.as_millis()),
            time_taken,
        )
    }

    fn unsuccessful(
        provider_name: String,
        status: ProviderStatus,
        error_message: String,
        time_taken: Duration,
    ) -> Self {
        let error_message = if error_message.trim().is_empty() {
            UNKNOWN_FAILURE.to_string()
        } else {
            error_message
        };

        Self {
            provider_name,
            detected_language: None,
            time_taken,
            estimated_cost: None,
            status,
            error_message: Some(error_message),
        }
    }

    pub fn provider_name(&self) -> &str {
        &self.provider_name
    }

    pub fn detected_language(&self) -> Option<&str> {
        self.detected_language.as_deref()
    }

    pub fn time_taken(&self) -> Duration {
        self.time_taken
    }

    pub fn estimated_cost(&self) -> Option<CostEstimate> {
        self.estimated_cost
    }

    pub fn status(&self) -> ProviderStatus {
        self.status
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}
