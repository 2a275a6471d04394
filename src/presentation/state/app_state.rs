use std::sync::Arc;

use crate::application::services::DetectionCoordinator;

#[derive(Clone)]
pub struct AppState {
    pub coordinator: Arc<DetectionCoordinator>,
}

impl AppState {
    pub fn new(coordinator: Arc<DetectionCoordinator>) -> Self {
        Self { coordinator }
    }
}
