//! Remote data access for the ATK collection endpoint.
//!
//! [`AtkRepository`] is the seam the controller talks through; [`AtkApi`] is the
//! reqwest implementation used by the GUI and the CLI.

mod client;
mod responses;

use async_trait::async_trait;
use reqwest::Client;

use crate::error::ApiResult;
use crate::models::{AtkId, AtkItem, AtkPayload};

/// The four REST operations the dashboard needs from the backend.
#[async_trait]
pub trait AtkRepository: Send + Sync {
    /// `GET /api/atk`: all active (not soft-deleted) items.
    async fn list_items(&self) -> ApiResult<Vec<AtkItem>>;

    /// `POST /api/atk`. The server may answer with the created item or an empty body.
    async fn create_item(&self, payload: &AtkPayload) -> ApiResult<Option<AtkItem>>;

    /// `PUT /api/atk/{id}`. The server may answer with the updated item or an empty body.
    async fn update_item(&self, id: AtkId, payload: &AtkPayload) -> ApiResult<Option<AtkItem>>;

    /// `DELETE /api/atk/{id}`: the server marks the record inactive.
    async fn soft_delete_item(&self, id: AtkId) -> ApiResult<()>;
}

/// HTTP client for the ATK backend.
#[derive(Debug, Clone)]
pub struct AtkApi {
    pub(crate) client: Client,
    pub(crate) base_url: String,
}

impl AtkApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        log::info!("Creating ATK API client for {base_url}");
        Self {
            client: Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn collection_url(&self) -> String {
        format!("{}/api/atk", self.base_url)
    }

    pub(crate) fn item_url(&self, id: AtkId) -> String {
        format!("{}/api/atk/{id}", self.base_url)
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;
