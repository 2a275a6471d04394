use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

use crate::domain::{ProviderOutcome, ProviderStatus};

/// Counters shared by concurrent requests. Each counter is updated on its own,
/// so a snapshot taken mid-request may be slightly behind.
#[derive(Debug, Default)]
pub struct CoordinatorMetrics {
    requests: AtomicU64,
    invocations: AtomicU64,
    successes: AtomicU64,
    failures: AtomicU64,
    timeouts: AtomicU64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub requests: u64,
    pub invocations: u64,
    pub successes: u64,
    pub failures: u64,
    pub timeouts: u64,
}

impl CoordinatorMetrics {
    pub fn record_request(&self) {
        self.requests.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_outcome(&self, outcome: &ProviderOutcome) {
        self.invocations.fetch_add(1, Ordering::Relaxed);
        let counter = match outcome.status() {
            ProviderStatus::Success => &self.successes,
            ProviderStatus::Failure => &self.failures,
            ProviderStatus::Timeout => &self.timeouts,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            requests: self.requests.load(Ordering::Relaxed),
            invocations: self.invocations.load(Ordering::Relaxed),
            successes: self.successes.load(Ordering::Relaxed),
            failures: self.failures.load(Ordering::Relaxed),
            timeouts: self.timeouts.load(Ordering::Relaxed),
        }
    }
}
