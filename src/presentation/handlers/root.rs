use std::collections::BTreeMap;

use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

pub const SERVICE_NAME: &str = "Language Detective Service";

#[derive(Serialize)]
pub struct RootResponse {
    pub message: String,
    pub version: String,
    pub endpoints: BTreeMap<&'static str, &'static str>,
}

pub async fn root_handler() -> impl IntoResponse {
    let endpoints = BTreeMap::from([
        ("detect_language", "/detect/language"),
        ("detect_language_single", "/detect/language/{provider_name}"),
        ("providers", "/providers"),
        ("metrics", "/metrics"),
        ("health", "/health"),
    ]);

    (
        StatusCode::OK,
        Json(RootResponse {
            message: SERVICE_NAME.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            endpoints,
        }),
    )
}
