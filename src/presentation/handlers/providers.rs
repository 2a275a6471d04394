use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct ProvidersResponse {
    pub providers: Vec<String>,
    pub count: usize,
}

pub async fn providers_handler(State(state): State<AppState>) -> impl IntoResponse {
    let providers = state.coordinator.list_providers();
    let count = providers.len();
    (StatusCode::OK, Json(ProvidersResponse { providers, count }))
}
