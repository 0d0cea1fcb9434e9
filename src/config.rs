//! Backend location configuration.

use reqwest::Url;
use thiserror::Error;

use crate::api::AtkApi;

/// Where the dashboard looks for the backend unless told otherwise.
pub const DEFAULT_API_URL: &str = "http://localhost:5200";

/// Environment variable consulted when `--api-url` is not given.
pub const API_URL_ENV: &str = "ATK_API_URL";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid API URL '{url}': {reason}")]
    InvalidApiUrl { url: String, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    api_base_url: String,
}

impl AppConfig {
    /// Validates and normalises the backend base URL (no trailing slash).
    ///
    /// An empty string falls back to [`DEFAULT_API_URL`].
    pub fn new(api_base_url: &str) -> Result<Self, ConfigError> {
        let trimmed = api_base_url.trim().trim_end_matches('/');
        let candidate = if trimmed.is_empty() {
            DEFAULT_API_URL
        } else {
            trimmed
        };

        let parsed = Url::parse(candidate).map_err(|e| ConfigError::InvalidApiUrl {
            url: candidate.to_string(),
            reason: e.to_string(),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidApiUrl {
                url: candidate.to_string(),
                reason: format!("unsupported scheme '{}'", parsed.scheme()),
            });
        }

        log::debug!("Using ATK backend at {candidate}");
        Ok(Self {
            api_base_url: candidate.to_string(),
        })
    }

    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    pub fn api(&self) -> AtkApi {
        AtkApi::new(self.api_base_url.clone())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
        }
    }
}
