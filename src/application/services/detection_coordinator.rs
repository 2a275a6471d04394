use std::path::PathBuf;
use std::sync::Arc;

use futures::future::join_all;
use tokio::task::{AbortHandle, JoinError};
use tokio::time::Instant;

use crate::domain::{AggregateResult, DetectionRequest, ProviderOutcome};

use super::connector_registry::{ConnectorRegistry, RegisteredConnector};
use super::coordinator_metrics::{CoordinatorMetrics, MetricsSnapshot};

/// Fans a request out to every registered connector and gathers the outcomes.
pub struct DetectionCoordinator {
    registry: Arc<ConnectorRegistry>,
    metrics: CoordinatorMetrics,
}

impl DetectionCoordinator {
    pub fn new(registry: Arc<ConnectorRegistry>) -> Self {
        Self {
            registry,
            metrics: CoordinatorMetrics::default(),
        }
    }

    /// Never fails: connector errors, panics and timeouts all become outcomes.
    /// `results` follows registration order, not completion order.
    pub async fn detect_all(&self, request: &DetectionRequest) -> AggregateResult {
        self.metrics.record_request();
        let started = Instant::now();

        let invocations = self
            .registry
            .iter()
            .map(|entry| invoke(entry.clone(), request.audio_path.clone()));
        let results = join_all(invocations).await;

        let total_time = started.elapsed();
        for outcome in &results {
            self.metrics.record_outcome(outcome);
        }

        let aggregate = AggregateResult::new(results, total_time);
        tracing::info!(
            providers = aggregate.results().len(),
            successful = aggregate.successful_providers(),
            failed = aggregate.failed_providers(),
            total_ms = total_time.as_millis() as u64,
            "Detection across all providers finished"
        );
        aggregate
    }

    pub async fn detect_one(
        &self,
        provider_name: &str,
        request: &DetectionRequest,
    ) -> Result<ProviderOutcome, CoordinatorError> {
        let entry = self
            .registry
            .get(provider_name)
            .ok_or_else(|| CoordinatorError::ProviderNotFound(provider_name.to_string()))?;

        self.metrics.record_request();
        let outcome = invoke(entry.clone(), request.audio_path.clone()).await;
        self.metrics.record_outcome(&outcome);
        Ok(outcome)
    }

    pub fn list_providers(&self) -> Vec<String> {
        self.registry.names()
    }

    pub fn metrics(&self) -> MetricsSnapshot {
        self.metrics.snapshot()
    }
}

/// Aborts the connector task when the invocation future is dropped, including
/// when its caller goes away mid-flight.
struct AbortOnDrop(AbortHandle);

impl Drop for AbortOnDrop {
    fn drop(&mut self) {
        self.0.abort();
    }
}

/// Runs one connector on its own task under its deadline. When the deadline
/// passes the task is aborted, so a late answer can never reach the result.
/// The task never outlives this future.
async fn invoke(entry: RegisteredConnector, audio_path: PathBuf) -> ProviderOutcome {
    let name = entry.name().to_string();
    let limit = entry.timeout;
    let connector = Arc::clone(&entry.connector);

    let started = Instant::now();
    let mut handle = tokio::spawn(async move { connector.identify(&audio_path).await });
    let _task = AbortOnDrop(handle.abort_handle());

    let outcome = match tokio::time::timeout(limit, &mut handle).await {
        Ok(Ok(Ok(detection))) => {
            ProviderOutcome::success(&name, detection.language, started.elapsed(), detection.cost)
        }
        Ok(Ok(Err(e))) => ProviderOutcome::failure(&name, e.to_string(), started.elapsed()),
        Ok(Err(join_error)) => {
            ProviderOutcome::failure(&name, describe_join_error(join_error), started.elapsed())
        }
        Err(_) => {
            handle.abort();
            ProviderOutcome::timed_out(&name, limit, started.elapsed())
        }
    };

    tracing::debug!(
        provider = %name,
        status = %outcome.status(),
        elapsed_ms = outcome.time_taken().as_millis() as u64,
        "Provider settled"
    );
    if let Some(error) = outcome.error_message() {
        tracing::warn!(provider = %name, status = %outcome.status(), error = %error, "Provider did not succeed");
    }

    outcome
}

fn describe_join_error(error: JoinError) -> String {
    if !error.is_panic() {
        return "provider task was cancelled".to_string();
    }

    let payload = error.into_panic();
    let message = payload
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic".to_string());
    format!("provider panicked: {}", message)
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CoordinatorError {
    #[error("Provider '{0}' not found")]
    ProviderNotFound(String),
}
