//! Confirmation capability injected into delete.
//!
//! The controller only asks "may I?" and awaits a boolean; how the question
//! reaches a human (egui window, terminal prompt, nothing at all) is up to the
//! provider.

use async_trait::async_trait;
use log::{debug, warn};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

/// Text shown to the user before a destructive action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmPrompt {
    pub title: String,
    pub text: String,
    pub confirm_label: String,
    pub cancel_label: String,
}

impl ConfirmPrompt {
    pub fn delete_item() -> Self {
        Self {
            title: "Konfirmasi Hapus".to_string(),
            text: "Apakah Anda yakin ingin menghapus item ini?".to_string(),
            confirm_label: "Ya, Hapus!".to_string(),
            cancel_label: "Batal".to_string(),
        }
    }
}

#[async_trait]
pub trait ConfirmationProvider: Send + Sync {
    /// Resolves to `true` only if the user explicitly agreed.
    async fn confirm(&self, prompt: &ConfirmPrompt) -> bool;
}

/// Answers every prompt the same way (`--yes`, tests).
#[derive(Debug, Clone, Copy)]
pub struct AutoConfirm(pub bool);

#[async_trait]
impl ConfirmationProvider for AutoConfirm {
    async fn confirm(&self, prompt: &ConfirmPrompt) -> bool {
        debug!("Auto-answering '{}' with {}", prompt.title, self.0);
        self.0
    }
}

/// Asks on the terminal: `y`/`ya`/`yes` confirm, anything else cancels.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdinConfirmation;

pub(crate) fn is_affirmative(answer: &str) -> bool {
    matches!(
        answer.trim().to_lowercase().as_str(),
        "y" | "ya" | "yes"
    )
}

#[async_trait]
impl ConfirmationProvider for StdinConfirmation {
    async fn confirm(&self, prompt: &ConfirmPrompt) -> bool {
        let mut stdout = tokio::io::stdout();
        let question = format!(
            "{}\n{} [{} = y / {} = n]: ",
            prompt.title, prompt.text, prompt.confirm_label, prompt.cancel_label
        );
        if let Err(e) = stdout.write_all(question.as_bytes()).await {
            warn!("Failed to write confirmation prompt: {e}");
            return false;
        }
        let _ = stdout.flush().await;

        let mut line = String::new();
        match BufReader::new(tokio::io::stdin()).read_line(&mut line).await {
            Ok(_) => is_affirmative(&line),
            Err(e) => {
                warn!("Failed to read confirmation answer: {e}");
                false
            }
        }
    }
}

#[cfg(test)]
#[path = "confirm_tests.rs"]
mod tests;
