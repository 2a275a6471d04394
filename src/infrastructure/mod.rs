pub mod connectors;
pub mod observability;
