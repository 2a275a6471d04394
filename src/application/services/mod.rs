mod connector_registry;
mod coordinator_metrics;
mod detection_coordinator;

pub use connector_registry::{
    ConnectorRegistry, ConnectorRegistryBuilder, RegisteredConnector, RegistryError,
};
pub use coordinator_metrics::{CoordinatorMetrics, MetricsSnapshot};
pub use detection_coordinator::{CoordinatorError, DetectionCoordinator};
