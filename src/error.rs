//! Error types for the ATK dashboard.

use thiserror::Error;

/// Transport-level failure talking to the ATK backend.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request never produced a response (unreachable host, refused connection, ...)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    /// Response body was not the JSON we expected
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    /// Non-2xx status; `message` is whatever the server put in the body
    #[error("HTTP error: {status}{}", message_suffix(.message))]
    HttpStatus {
        status: reqwest::StatusCode,
        message: Option<String>,
    },
}

fn message_suffix(message: &Option<String>) -> String {
    message
        .as_deref()
        .map(|m| format!(" - {m}"))
        .unwrap_or_default()
}

impl ApiError {
    /// Human-readable message supplied by the server, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::HttpStatus { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}

/// Client-side form validation failure. Blocks submission before any request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Nama ATK wajib diisi")]
    EmptyName,
    #[error("Jenis wajib diisi")]
    EmptyCategory,
    #[error("Jumlah stok harus berupa angka: '{0}'")]
    InvalidQuantity(String),
    #[error("Jumlah stok tidak boleh negatif: {0}")]
    NegativeQuantity(i64),
}

/// Anything a controller operation can fail with.
#[derive(Debug, Error)]
pub enum AtkError {
    #[error(transparent)]
    Transport(#[from] ApiError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// Submit called while the modal is closed
    #[error("No item is being edited")]
    NotEditing,
    /// Id not present in the active list
    #[error("ATK item {0} not found")]
    UnknownItem(crate::models::AtkId),
}

/// Result type alias for API operations
pub type ApiResult<T> = Result<T, ApiError>;
