use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::application::services::CoordinatorError;
use crate::domain::{AggregateResult, DetectionRequest};
use crate::presentation::state::AppState;
use crate::presentation::validation::validate_audio_file;

use super::error_response::error_response;

#[derive(Serialize)]
pub struct DetectionResponse {
    #[serde(flatten)]
    pub aggregate: AggregateResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ground_truth_language: Option<String>,
}

#[tracing::instrument(skip(state, request))]
pub async fn detect_all_handler(
    State(state): State<AppState>,
    Json(request): Json<DetectionRequest>,
) -> impl IntoResponse {
    tracing::debug!(audio = %request.audio_path.display(), "Detecting with all providers");

    if let Err(e) = validate_audio_file(&request.audio_path).await {
        tracing::warn!(error = %e, "Rejected detection request");
        return error_response(StatusCode::BAD_REQUEST, e.to_string());
    }

    let aggregate = state.coordinator.detect_all(&request).await;

    (
        StatusCode::OK,
        Json(DetectionResponse {
            aggregate,
            ground_truth_language: request.ground_truth_language,
        }),
    )
        .into_response()
}

#[tracing::instrument(skip(state, request))]
pub async fn detect_one_handler(
    State(state): State<AppState>,
    Path(provider_name): Path<String>,
    Json(request): Json<DetectionRequest>,
) -> impl IntoResponse {
    tracing::debug!(
        provider = %provider_name,
        audio = %request.audio_path.display(),
        "Detecting with one provider"
    );

    if let Err(e) = validate_audio_file(&request.audio_path).await {
        tracing::warn!(error = %e, "Rejected detection request");
        return error_response(StatusCode::BAD_REQUEST, e.to_string());
    }

    match state.coordinator.detect_one(&provider_name, &request).await {
        Ok(outcome) => (StatusCode::OK, Json(outcome)).into_response(),
        Err(e @ CoordinatorError::ProviderNotFound(_)) => {
            tracing::warn!(error = %e, "Unknown provider requested");
            error_response(StatusCode::NOT_FOUND, e.to_string())
        }
    }
}
