use std::time::Duration;

use serde::Serialize;

use super::duration_secs;
use super::provider_outcome::ProviderOutcome;

/// Outcome of a fan-out over every registered connector.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateResult {
    results: Vec<ProviderOutcome>,
    #[serde(with = "duration_secs")]
    total_time: Duration,
    successful_providers: usize,
    failed_providers: usize,
}

impl AggregateResult {
    /// Counts are derived from `results`; timeouts count as failures.
    pub fn new(results: Vec<ProviderOutcome>, total_time: Duration) -> Self {
        let successful_providers = results.iter().filter(|r| r.is_success()).count();
        let failed_providers = results.len() - successful_providers;

        Self {
            results,
            total_time,
            successful_providers,
            failed_providers,
        }
    }

    pub fn results(&self) -> &[ProviderOutcome] {
        &self.results
    }

    pub fn total_time(&self) -> Duration {
        self.total_time
    }

    pub fn successful_providers(&self) -> usize {
        self.successful_providers
    }

    pub fn failed_providers(&self) -> usize {
        self.failed_providers
    }
}
