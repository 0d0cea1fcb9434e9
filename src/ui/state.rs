use eframe::egui;
use log::{debug, info, warn};
use std::sync::Arc;
use std::time::Instant;
use tokio::runtime::Runtime;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};
use tokio::sync::Mutex;

use crate::api::{AtkApi, AtkRepository};
use crate::config::AppConfig;
use crate::confirm::{AutoConfirm, ConfirmPrompt};
use crate::controller::{InventoryController, ViewState};
use crate::models::{AtkId, AtkItem, EditBuffer, EditMode};

type SharedController<R> = Arc<Mutex<InventoryController<R>>>;

/// Remote work handed to the runtime. One at a time; the UI disables actions meanwhile.
pub enum Operation {
    Refresh,
    Submit(EditBuffer),
    /// Already confirmed by the user.
    Remove(AtkId),
}

/// Delete confirmation currently on screen.
pub struct PendingConfirmation {
    pub item_id: AtkId,
    pub prompt: ConfirmPrompt,
}

/// Which form is open; the local buffer is reset only when this changes.
fn form_session(view: &ViewState) -> Option<(EditMode, AtkId)> {
    view.modal.as_ref().map(|m| (m.mode, m.buffer.id))
}

/// Everything the dashboard window keeps between frames.
pub struct DashboardState<R = AtkApi> {
    runtime: Runtime,
    controller: SharedController<R>,
    /// Latest view published by the controller
    pub view: ViewState,
    /// Editable copy of the open form's buffer
    pub form: Option<EditBuffer>,
    pub pending_confirmation: Option<PendingConfirmation>,
    in_flight: bool,
    initial_load_done: bool,
    view_sender: UnboundedSender<ViewState>,
    view_receiver: UnboundedReceiver<ViewState>,
}

impl DashboardState<AtkApi> {
    pub fn new(config: &AppConfig) -> std::io::Result<Self> {
        Self::with_repository(config.api(), config.api_base_url())
    }
}

impl<R: AtkRepository + 'static> DashboardState<R> {
    pub fn with_repository(repo: R, location: impl Into<String>) -> std::io::Result<Self> {
        let runtime = Runtime::new()?;
        let controller = InventoryController::new(repo, location);
        let (tx, rx) = unbounded_channel();
        Ok(Self {
            runtime,
            controller: Arc::new(Mutex::new(controller)),
            view: ViewState::default(),
            form: None,
            pending_confirmation: None,
            in_flight: false,
            initial_load_done: false,
            view_sender: tx,
            view_receiver: rx,
        })
    }

    /// True while a remote call is outstanding; every action trigger checks this.
    pub fn is_busy(&self) -> bool {
        self.in_flight || self.view.busy
    }

    /// Kicks off the first fetch on the first frame.
    pub fn ensure_loaded(&mut self, ctx: &egui::Context) {
        if !self.initial_load_done {
            self.initial_load_done = true;
            self.dispatch(ctx, Operation::Refresh);
        }
    }

    /// Applies views published by finished operations.
    pub fn poll(&mut self) {
        while let Ok(view) = self.view_receiver.try_recv() {
            self.in_flight = false;
            self.form = view.modal.as_ref().map(|m| m.buffer.clone());
            self.view = view;
        }
    }

    /// Runs a synchronous controller transition if no operation holds the controller.
    fn with_controller(&mut self, f: impl FnOnce(&mut InventoryController<R>)) {
        let view = match self.controller.try_lock() {
            Ok(mut guard) => {
                f(&mut guard);
                Some(guard.snapshot())
            }
            Err(_) => None,
        };
        let Some(view) = view else {
            debug!("Controller busy, ignoring UI action");
            return;
        };
        if form_session(&self.view) != form_session(&view) {
            self.form = view.modal.as_ref().map(|m| m.buffer.clone());
        }
        self.view = view;
    }

    pub fn dispatch(&mut self, ctx: &egui::Context, operation: Operation) {
        if self.in_flight {
            warn!("Operation already in flight, ignoring new request");
            return;
        }
        self.in_flight = true;

        let controller = Arc::clone(&self.controller);
        let sender = self.view_sender.clone();
        let ctx = ctx.clone();

        self.runtime.spawn(async move {
            let mut guard = controller.lock().await;
            let result = match operation {
                Operation::Refresh => guard.refresh().await,
                Operation::Submit(buffer) => guard.submit(buffer).await.map(|_| ()),
                Operation::Remove(id) => guard.remove(id, &AutoConfirm(true)).await.map(|_| ()),
            };
            if let Err(e) = result {
                debug!("Operation finished with error: {e}");
            }
            let _ = sender.send(guard.snapshot());
            ctx.request_repaint();
        });
    }

    pub fn refresh(&mut self, ctx: &egui::Context) {
        self.dispatch(ctx, Operation::Refresh);
    }

    pub fn begin_create(&mut self) {
        self.with_controller(|c| c.begin_create());
    }

    pub fn begin_edit(&mut self, item: &AtkItem) {
        self.with_controller(|c| c.begin_edit(item));
    }

    pub fn cancel_edit(&mut self) {
        self.with_controller(|c| c.cancel_edit());
    }

    pub fn submit_form(&mut self, ctx: &egui::Context) {
        if let Some(buffer) = self.form.clone() {
            self.dispatch(ctx, Operation::Submit(buffer));
        }
    }

    /// Shows the confirmation window. Nothing is sent until the user answers.
    pub fn request_remove(&mut self, id: AtkId) {
        if self.is_busy() {
            return;
        }
        self.pending_confirmation = Some(PendingConfirmation {
            item_id: id,
            prompt: ConfirmPrompt::delete_item(),
        });
    }

    /// A "yes" dispatches the delete; it waits on screen while another operation runs.
    pub fn answer_confirmation(&mut self, ctx: &egui::Context, confirmed: bool) {
        if confirmed && self.is_busy() {
            debug!("Delete confirmed while busy, keeping the dialog open");
            return;
        }
        let Some(pending) = self.pending_confirmation.take() else {
            return;
        };
        if confirmed {
            self.dispatch(ctx, Operation::Remove(pending.item_id));
        } else {
            info!("Delete of item {} cancelled", pending.item_id);
        }
    }

    pub fn dismiss_notification(&mut self) {
        self.with_controller(|c| c.dismiss_notification());
    }

    /// Expires the toast and schedules a repaint for when it should disappear.
    pub fn tick_notification(&mut self, ctx: &egui::Context) {
        let now = Instant::now();
        let Some(notification) = &self.view.notification else {
            return;
        };
        if notification.is_expired_at(now) {
            self.with_controller(|c| c.expire_notification(now));
        } else if let Some(remaining) = notification.remaining_at(now) {
            ctx.request_repaint_after(remaining);
        }
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod tests;
