//! ATK inventory dashboard.
//!
//! Lists, creates, edits and soft-deletes office-supply records held by a REST
//! backend. The [`controller`] module holds the view-state logic shared by the
//! egui window and the command-line subcommands.

pub mod api;
pub mod cli;
pub mod config;
pub mod confirm;
pub mod controller;
pub mod error;
pub mod formatters;
pub mod models;
pub mod notification;
pub mod ui;

#[cfg(test)]
pub(crate) mod testing;

// Re-export commonly used items
pub use api::{AtkApi, AtkRepository};
pub use config::AppConfig;
pub use confirm::{AutoConfirm, ConfirmPrompt, ConfirmationProvider, StdinConfirmation};
pub use controller::{EditSession, InventoryController, RemoveOutcome, ViewState};
pub use error::{ApiError, ApiResult, AtkError, ValidationError};
pub use models::{AtkId, AtkItem, AtkPayload, EditBuffer, EditMode, InventoryStats, StockLevel};
pub use notification::{Notification, NotificationKind};
