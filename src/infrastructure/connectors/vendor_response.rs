use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::application::ports::DetectorError;
use crate::infrastructure::observability::sanitize_vendor_message;

/// Turns a non-2xx vendor reply into a typed error carrying the sanitized body.
pub async fn ensure_success(vendor: &str, response: Response) -> Result<Response, DetectorError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "unknown error".to_string());
    let message = format!("{} returned {}: {}", vendor, status, sanitize_vendor_message(&body));

    Err(match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => DetectorError::Authentication(message),
        StatusCode::UNSUPPORTED_MEDIA_TYPE => DetectorError::UnsupportedFormat(message),
        _ => DetectorError::ApiRequestFailed(message),
    })
}

pub async fn parse_json<T: DeserializeOwned>(
    vendor: &str,
    response: Response,
) -> Result<T, DetectorError> {
    response
        .json()
        .await
        .map_err(|e| {
            DetectorError::InvalidResponse(format!("{} parse response: {}", vendor, e.without_url()))
        })
}

pub fn request_failed(vendor: &str, error: reqwest::Error) -> DetectorError {
    let error = error.without_url();
    DetectorError::ApiRequestFailed(format!(
        "{} request: {}",
        vendor,
        sanitize_vendor_message(&error.to_string())
    ))
}
