//! Command-line surface: no subcommand opens the dashboard window, the
//! subcommands drive the same controller headlessly.

use clap::{Parser, Subcommand};
use log::info;

use crate::api::AtkRepository;
use crate::config::{API_URL_ENV, DEFAULT_API_URL};
use crate::confirm::ConfirmationProvider;
use crate::controller::{InventoryController, RemoveOutcome};
use crate::error::AtkError;
use crate::formatters::{format_item_table, format_statistics};
use crate::models::{AtkId, EditBuffer};

/// ATK inventory dashboard
#[derive(Parser, Debug)]
#[command(name = "atk_inventory")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Base URL of the ATK backend
    #[arg(long, global = true, env = API_URL_ENV, default_value = DEFAULT_API_URL)]
    pub api_url: String,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print all active items
    List,
    /// Print item count, total stock and number of categories
    Stats,
    /// Create a new item
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        category: String,
        #[arg(long, default_value = "0")]
        quantity: String,
    },
    /// Change an existing item; omitted fields keep their current value
    Edit {
        id: AtkId,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        quantity: Option<String>,
    },
    /// Soft-delete an item
    Delete {
        id: AtkId,
        /// Skip the confirmation prompt
        #[arg(short, long, default_value_t = false)]
        yes: bool,
    },
}

/// Runs one subcommand and returns the text to print.
///
/// Mutations end with the refreshed table, the same resync the dashboard does.
pub async fn run_command<R, C>(
    controller: &mut InventoryController<R>,
    command: Command,
    confirmer: &C,
) -> Result<String, AtkError>
where
    R: AtkRepository,
    C: ConfirmationProvider + ?Sized,
{
    info!("Running command: {command:?}");
    match command {
        Command::List => {
            controller.refresh().await?;
            Ok(format_item_table(controller.items()))
        }
        Command::Stats => {
            controller.refresh().await?;
            Ok(format_statistics(&controller.statistics()))
        }
        Command::Add {
            name,
            category,
            quantity,
        } => {
            controller.begin_create();
            let buffer = EditBuffer {
                id: 0,
                name,
                category,
                quantity,
            };
            let label = buffer.name.trim().to_string();
            controller.submit(buffer).await?;
            Ok(format!(
                "Item '{label}' ditambahkan.\n{}",
                format_item_table(controller.items())
            ))
        }
        Command::Edit {
            id,
            name,
            category,
            quantity,
        } => {
            controller.refresh().await?;
            let item = controller
                .items()
                .iter()
                .find(|i| i.id == id)
                .cloned()
                .ok_or(AtkError::UnknownItem(id))?;

            controller.begin_edit(&item);
            let current = EditBuffer::from_item(&item);
            let buffer = EditBuffer {
                id,
                name: name.unwrap_or(current.name),
                category: category.unwrap_or(current.category),
                quantity: quantity.unwrap_or(current.quantity),
            };
            controller.submit(buffer).await?;
            Ok(format!(
                "Item {id} diperbarui.\n{}",
                format_item_table(controller.items())
            ))
        }
        Command::Delete { id, .. } => match controller.remove(id, confirmer).await? {
            RemoveOutcome::Removed => Ok(format!(
                "Item {id} dihapus (soft delete).\n{}",
                format_item_table(controller.items())
            )),
            RemoveOutcome::Cancelled => Ok("Dibatalkan.\n".to_string()),
        },
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
