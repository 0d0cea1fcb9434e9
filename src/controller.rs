//! Inventory view-state manager.
//!
//! [`InventoryController`] owns the item list, the busy/error flags, the modal
//! form and the current toast. Every operation replaces the [`ViewState`] record
//! as a whole; nothing outside the controller mutates it. Every mutation is
//! followed by a full refetch so the server stays the single source of truth.

use chrono::{DateTime, Local};
use log::{debug, error, info, warn};
use std::time::Instant;

use crate::api::AtkRepository;
use crate::confirm::{ConfirmPrompt, ConfirmationProvider};
use crate::error::AtkError;
use crate::models::{AtkId, AtkItem, EditBuffer, EditMode, InventoryStats};
use crate::notification::Notification;

pub const SAVE_FAILED_MESSAGE: &str = "Gagal menyimpan data";
pub const DELETE_FAILED_MESSAGE: &str = "Gagal menghapus data";
pub const DELETE_SUCCESS_TITLE: &str = "Berhasil!";
pub const DELETE_SUCCESS_TEXT: &str = "Data ATK berhasil dihapus (soft delete)";
pub const DELETE_FAILED_TITLE: &str = "Gagal!";

pub fn fetch_failed_message(location: &str) -> String {
    format!("Gagal mengambil data ATK. Pastikan backend berjalan di {location}")
}

/// Open modal form: what it does and the user's current input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    pub mode: EditMode,
    pub buffer: EditBuffer,
    /// Inline message shown inside the form after a rejected submit
    pub error: Option<String>,
}

impl EditSession {
    fn new(mode: EditMode, buffer: EditBuffer) -> Self {
        Self {
            mode,
            buffer,
            error: None,
        }
    }
}

/// Everything the dashboard renders.
///
/// Fetch status (`busy`, `error`) and the modal are independent flags.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    pub items: Vec<AtkItem>,
    pub busy: bool,
    pub error: Option<String>,
    pub modal: Option<EditSession>,
    pub notification: Option<Notification>,
    pub last_synced: Option<DateTime<Local>>,
}

impl ViewState {
    /// Derived on every call; the list is small and replaced wholesale.
    pub fn statistics(&self) -> InventoryStats {
        InventoryStats::from_items(&self.items)
    }

    pub fn is_modal_open(&self) -> bool {
        self.modal.is_some()
    }

    /// Table placeholder spinner: a fetch or mutation runs and no form covers it.
    pub fn show_loading(&self) -> bool {
        self.busy && self.modal.is_none()
    }

    fn working(self) -> Self {
        Self { busy: true, ..self }
    }

    fn idle(self) -> Self {
        Self {
            busy: false,
            ..self
        }
    }

    fn loaded(self, items: Vec<AtkItem>) -> Self {
        Self {
            items,
            busy: false,
            error: None,
            last_synced: Some(Local::now()),
            ..self
        }
    }

    fn fetch_failed(self, message: String) -> Self {
        Self {
            busy: false,
            error: Some(message),
            ..self
        }
    }

    fn with_modal(self, modal: Option<EditSession>) -> Self {
        Self { modal, ..self }
    }

    fn with_error(self, error: Option<String>) -> Self {
        Self { error, ..self }
    }

    fn with_notification(self, notification: Option<Notification>) -> Self {
        Self {
            notification,
            ..self
        }
    }
}

/// Result of [`InventoryController::remove`] when nothing went wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    Removed,
    Cancelled,
}

/// Operations take `&mut self`, so they never overlap; `busy` only tells the view
/// that a remote call is outstanding.
pub struct InventoryController<R> {
    repo: R,
    location: String,
    state: ViewState,
}

impl<R: AtkRepository> InventoryController<R> {
    /// `location` names the backend in user-facing fetch errors.
    pub fn new(repo: R, location: impl Into<String>) -> Self {
        Self {
            repo,
            location: location.into(),
            state: ViewState::default(),
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn snapshot(&self) -> ViewState {
        self.state.clone()
    }

    pub fn items(&self) -> &[AtkItem] {
        &self.state.items
    }

    pub fn statistics(&self) -> InventoryStats {
        self.state.statistics()
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    fn transition(&mut self, f: impl FnOnce(ViewState) -> ViewState) {
        let current = std::mem::take(&mut self.state);
        self.state = f(current);
    }

    fn set_modal_error(&mut self, message: String) {
        self.transition(|mut s| {
            let modal = s.modal.take().map(|m| EditSession {
                error: Some(message),
                ..m
            });
            s.with_modal(modal)
        });
    }

    /// Reloads the active list. On failure the previous list stays untouched.
    pub async fn refresh(&mut self) -> Result<(), AtkError> {
        debug!("Refreshing ATK list");
        self.transition(ViewState::working);

        match self.repo.list_items().await {
            Ok(items) => {
                info!("Loaded {} ATK items", items.len());
                self.transition(|s| s.loaded(items));
                Ok(())
            }
            Err(e) => {
                error!("Error fetching ATK items: {e}");
                let message = fetch_failed_message(&self.location);
                self.transition(|s| s.fetch_failed(message));
                Err(e.into())
            }
        }
    }

    /// Opens the form with a blank template.
    pub fn begin_create(&mut self) {
        debug!("Opening create form");
        self.transition(|s| {
            s.with_modal(Some(EditSession::new(EditMode::Create, EditBuffer::blank())))
        });
    }

    /// Opens the form on a copy of `item`; the list entry is not touched until submit succeeds.
    pub fn begin_edit(&mut self, item: &AtkItem) {
        debug!("Opening edit form for item {}", item.id);
        let buffer = EditBuffer::from_item(item);
        self.transition(|s| s.with_modal(Some(EditSession::new(EditMode::Edit, buffer))));
    }

    /// Closes the form and discards the buffer.
    pub fn cancel_edit(&mut self) {
        debug!("Closing form");
        self.transition(|s| s.with_modal(None));
    }

    /// Validates `buffer` and sends it as a create or update, depending on the open form.
    ///
    /// Invalid input never reaches the network. On any failure the form stays open
    /// holding `buffer`, so the user can retry without retyping.
    pub async fn submit(&mut self, buffer: EditBuffer) -> Result<Option<AtkItem>, AtkError> {
        let Some(session) = self.state.modal.clone() else {
            warn!("Submit without an open form");
            return Err(AtkError::NotEditing);
        };

        let retained = EditSession {
            buffer: buffer.clone(),
            error: None,
            ..session
        };
        self.transition(|s| s.with_modal(Some(retained)));

        let payload = match buffer.validate() {
            Ok(payload) => payload,
            Err(v) => {
                warn!("Rejected form input: {v}");
                self.set_modal_error(v.to_string());
                return Err(v.into());
            }
        };

        self.transition(ViewState::working);
        let result = match session.mode {
            EditMode::Create => self.repo.create_item(&payload).await,
            EditMode::Edit => self.repo.update_item(buffer.id, &payload).await,
        };

        match result {
            Ok(saved) => {
                info!("Saved ATK item '{}' ({:?})", payload.name, session.mode);
                self.transition(|s| s.idle().with_modal(None).with_error(None));
                if let Err(e) = self.refresh().await {
                    warn!("Saved, but the follow-up refresh failed: {e}");
                }
                Ok(saved)
            }
            Err(e) => {
                error!("Error saving ATK item: {e}");
                let message = e
                    .server_message()
                    .map(str::to_string)
                    .unwrap_or_else(|| SAVE_FAILED_MESSAGE.to_string());
                self.transition(|s| s.idle().with_error(Some(message.clone())));
                self.set_modal_error(message);
                Err(e.into())
            }
        }
    }

    /// Soft-deletes `id` after the user confirms through `confirmer`.
    ///
    /// Only this call waits for the answer; a "no" leaves everything as it was.
    pub async fn remove<C>(&mut self, id: AtkId, confirmer: &C) -> Result<RemoveOutcome, AtkError>
    where
        C: ConfirmationProvider + ?Sized,
    {
        if !confirmer.confirm(&ConfirmPrompt::delete_item()).await {
            info!("Delete of item {id} cancelled");
            return Ok(RemoveOutcome::Cancelled);
        }

        self.transition(ViewState::working);
        match self.repo.soft_delete_item(id).await {
            Ok(()) => {
                info!("Soft-deleted ATK item {id}");
                self.transition(|s| s.idle().with_error(None));
                if let Err(e) = self.refresh().await {
                    warn!("Deleted, but the follow-up refresh failed: {e}");
                }
                self.transition(|s| {
                    s.with_notification(Some(Notification::success(
                        DELETE_SUCCESS_TITLE,
                        DELETE_SUCCESS_TEXT,
                    )))
                });
                Ok(RemoveOutcome::Removed)
            }
            Err(e) => {
                error!("Error deleting ATK item {id}: {e}");
                let text = e
                    .server_message()
                    .map(str::to_string)
                    .unwrap_or_else(|| DELETE_FAILED_MESSAGE.to_string());
                self.transition(|s| {
                    s.idle()
                        .with_error(Some(DELETE_FAILED_MESSAGE.to_string()))
                        .with_notification(Some(Notification::error(DELETE_FAILED_TITLE, text)))
                });
                Err(e.into())
            }
        }
    }

    pub fn dismiss_notification(&mut self) {
        self.transition(|s| s.with_notification(None));
    }

    /// Drops the toast once its time-to-live has passed.
    pub fn expire_notification(&mut self, now: Instant) {
        if self
            .state
            .notification
            .as_ref()
            .is_some_and(|n| n.is_expired_at(now))
        {
            self.dismiss_notification();
        }
    }
}

impl<R> std::fmt::Debug for InventoryController<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InventoryController")
            .field("location", &self.location)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod tests;
