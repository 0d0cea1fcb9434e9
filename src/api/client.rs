//! reqwest implementation of [`AtkRepository`].

use async_trait::async_trait;
use log::{debug, error, info};

use super::responses::{error_from_response, parse_item_list, parse_optional_item};
use super::{AtkApi, AtkRepository};
use crate::error::ApiResult;
use crate::models::{AtkId, AtkItem, AtkPayload};

#[async_trait]
impl AtkRepository for AtkApi {
    async fn list_items(&self) -> ApiResult<Vec<AtkItem>> {
        let url = self.collection_url();
        debug!("Fetching ATK items from: {url}");

        let response = self.client.get(&url).send().await?;
        debug!("List response status: {}", response.status());

        if !response.status().is_success() {
            let err = error_from_response(response).await;
            error!("Failed to list ATK items: {err}");
            return Err(err);
        }

        let body = response.text().await?;
        let items = parse_item_list(&body)?;
        info!("Fetched {} ATK items", items.len());
        Ok(items)
    }

    async fn create_item(&self, payload: &AtkPayload) -> ApiResult<Option<AtkItem>> {
        let url = self.collection_url();
        debug!("Creating ATK item at {url}: {payload:?}");

        let response = self.client.post(&url).json(payload).send().await?;
        debug!("Create response status: {}", response.status());

        if !response.status().is_success() {
            let err = error_from_response(response).await;
            error!("Failed to create ATK item '{}': {err}", payload.name);
            return Err(err);
        }

        let body = response.text().await?;
        let created = parse_optional_item(&body);
        info!(
            "Created ATK item '{}' (ID: {})",
            payload.name,
            created
                .as_ref()
                .map(|i| i.id.to_string())
                .unwrap_or_else(|| "unknown".to_string())
        );
        Ok(created)
    }

    async fn update_item(&self, id: AtkId, payload: &AtkPayload) -> ApiResult<Option<AtkItem>> {
        let url = self.item_url(id);
        debug!("Updating ATK item at {url}: {payload:?}");

        let response = self.client.put(&url).json(payload).send().await?;
        debug!("Update response status: {}", response.status());

        if !response.status().is_success() {
            let err = error_from_response(response).await;
            error!("Failed to update ATK item {id}: {err}");
            return Err(err);
        }

        let body = response.text().await?;
        info!("Updated ATK item {id}");
        Ok(parse_optional_item(&body))
    }

    async fn soft_delete_item(&self, id: AtkId) -> ApiResult<()> {
        let url = self.item_url(id);
        debug!("Soft-deleting ATK item at {url}");

        let response = self.client.delete(&url).send().await?;
        debug!("Delete response status: {}", response.status());

        if !response.status().is_success() {
            let err = error_from_response(response).await;
            error!("Failed to delete ATK item {id}: {err}");
            return Err(err);
        }

        info!("Soft-deleted ATK item {id}");
        Ok(())
    }
}
