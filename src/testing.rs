//! In-memory [`AtkRepository`] for controller tests.
//!
//! Behaves like the backend's own memory store: ids count up from the last
//! record, deletes only flip a flag, and deleted rows vanish from `list_items`.

use async_trait::async_trait;
use reqwest::StatusCode;
use std::sync::Mutex;

use crate::api::AtkRepository;
use crate::error::{ApiError, ApiResult};
use crate::models::{AtkId, AtkItem, AtkPayload};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CallCounts {
    pub list: usize,
    pub create: usize,
    pub update: usize,
    pub delete: usize,
}

impl CallCounts {
    pub fn writes(&self) -> usize {
        self.create + self.update + self.delete
    }
}

#[derive(Debug, Default)]
struct Inner {
    rows: Vec<(AtkItem, bool)>,
    calls: CallCounts,
    fail_list: bool,
    stall_list: bool,
    fail_writes: Option<Option<String>>,
}

#[derive(Debug, Default)]
pub struct FakeRepository {
    inner: Mutex<Inner>,
}

fn server_error(message: Option<String>) -> ApiError {
    ApiError::HttpStatus {
        status: StatusCode::INTERNAL_SERVER_ERROR,
        message,
    }
}

fn not_found() -> ApiError {
    ApiError::HttpStatus {
        status: StatusCode::NOT_FOUND,
        message: Some("not found".to_string()),
    }
}

impl FakeRepository {
    pub fn with_items(items: Vec<AtkItem>) -> Self {
        let repo = Self::default();
        repo.inner.lock().unwrap().rows = items.into_iter().map(|i| (i, false)).collect();
        repo
    }

    pub fn calls(&self) -> CallCounts {
        self.inner.lock().unwrap().calls
    }

    pub fn set_fail_list(&self, fail: bool) {
        self.inner.lock().unwrap().fail_list = fail;
    }

    /// Makes `list_items` hang forever, like a backend that never answers.
    pub fn set_stall_list(&self, stall: bool) {
        self.inner.lock().unwrap().stall_list = stall;
    }

    /// Makes every create/update/delete fail with a 500 carrying `message`.
    pub fn set_fail_writes(&self, message: Option<&str>) {
        self.inner.lock().unwrap().fail_writes = Some(message.map(str::to_string));
    }

    pub fn clear_failures(&self) {
        let mut inner = self.inner.lock().unwrap();
        inner.fail_list = false;
        inner.fail_writes = None;
    }

    pub fn is_soft_deleted(&self, id: AtkId) -> bool {
        self.inner
            .lock()
            .unwrap()
            .rows
            .iter()
            .any(|(item, deleted)| item.id == id && *deleted)
    }
}

#[async_trait]
impl AtkRepository for FakeRepository {
    async fn list_items(&self) -> ApiResult<Vec<AtkItem>> {
        let stall = self.inner.lock().unwrap().stall_list;
        if stall {
            std::future::pending::<()>().await;
        }
        let mut inner = self.inner.lock().unwrap();
        inner.calls.list += 1;
        if inner.fail_list {
            return Err(server_error(Some("failed to get data".to_string())));
        }
        Ok(inner
            .rows
            .iter()
            .filter(|(_, deleted)| !deleted)
            .map(|(item, _)| item.clone())
            .collect())
    }

    async fn create_item(&self, payload: &AtkPayload) -> ApiResult<Option<AtkItem>> {
        let mut inner = self.inner.lock().unwrap();
        inner.calls.create += 1;
        if let Some(message) = inner.fail_writes.clone() {
            return Err(server_error(message));
        }
        let id = inner.rows.last().map(|(item, _)| item.id + 1).unwrap_or(1);
        let item = AtkItem {
            id,
            name: payload.name.clone(),
            category: payload.category.clone(),
            quantity: payload.quantity,
        };
        inner.rows.push((item.clone(), false));
        Ok(Some(item))
    }

    async fn update_item(&self, id: AtkId, payload: &AtkPayload) -> ApiResult<Option<AtkItem>> {
        let mut inner = self.inner.lock().unwrap();
        inner.calls.update += 1;
        if let Some(message) = inner.fail_writes.clone() {
            return Err(server_error(message));
        }
        let (item, _) = inner
            .rows
            .iter_mut()
            .find(|(item, deleted)| item.id == id && !deleted)
            .ok_or_else(not_found)?;
        item.name = payload.name.clone();
        item.category = payload.category.clone();
        item.quantity = payload.quantity;
        Ok(Some(item.clone()))
    }

    async fn soft_delete_item(&self, id: AtkId) -> ApiResult<()> {
        let mut inner = self.inner.lock().unwrap();
        inner.calls.delete += 1;
        if let Some(message) = inner.fail_writes.clone() {
            return Err(server_error(message));
        }
        let (_, deleted) = inner
            .rows
            .iter_mut()
            .find(|(item, deleted)| item.id == id && !deleted)
            .ok_or_else(not_found)?;
        *deleted = true;
        Ok(())
    }
}

pub fn item(id: AtkId, name: &str, category: &str, quantity: u32) -> AtkItem {
    AtkItem {
        id,
        name: name.to_string(),
        category: category.to_string(),
        quantity,
    }
}
