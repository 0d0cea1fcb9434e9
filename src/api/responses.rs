//! Decoding helpers for backend response bodies.

use log::{debug, warn};
use serde::Deserialize;

use crate::error::{ApiError, ApiResult};
use crate::models::AtkItem;

/// Error body shapes the backend may send.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// Pulls a human-readable message out of an error response body.
///
/// JSON `{"error": ..}` wins over `{"message": ..}`; a plain-text body is used as-is.
pub(crate) fn extract_error_message(body: &str) -> Option<String> {
    let body = body.trim();
    if body.is_empty() {
        return None;
    }

    match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) => parsed
            .error
            .or(parsed.message)
            .map(|m| m.trim().to_string())
            .filter(|m| !m.is_empty()),
        Err(_) => Some(body.to_string()),
    }
}

/// Turns a non-2xx response into [`ApiError::HttpStatus`].
pub(crate) async fn error_from_response(response: reqwest::Response) -> ApiError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    debug!("Error response {status}: {body}");
    ApiError::HttpStatus {
        status,
        message: extract_error_message(&body),
    }
}

/// The list endpoint answers `null` for an empty table.
pub(crate) fn parse_item_list(body: &str) -> ApiResult<Vec<AtkItem>> {
    if body.trim().is_empty() {
        return Ok(Vec::new());
    }
    let items: Option<Vec<AtkItem>> = serde_json::from_str(body)?;
    Ok(items.unwrap_or_default())
}

/// Create/update may echo the item or return nothing at all.
///
/// An unreadable echo does not fail the mutation; the caller refetches anyway.
pub(crate) fn parse_optional_item(body: &str) -> Option<AtkItem> {
    if body.trim().is_empty() {
        return None;
    }
    match serde_json::from_str::<AtkItem>(body) {
        Ok(item) => Some(item),
        Err(e) => {
            warn!("Ignoring unreadable item in mutation response: {e}");
            None
        }
    }
}
