use eframe::egui;

use crate::confirm::ConfirmPrompt;

pub struct ConfirmDialog;

impl ConfirmDialog {
    /// `Some(answer)` on the frame a button is clicked. The confirm button waits for `confirm_enabled`.
    pub fn show(ctx: &egui::Context, prompt: &ConfirmPrompt, confirm_enabled: bool) -> Option<bool> {
        let mut answer = None;

        egui::Window::new(&prompt.title)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                ui.label(&prompt.text);
                ui.add_space(12.0);
                ui.horizontal(|ui| {
                    if ui.button(&prompt.cancel_label).clicked() {
                        answer = Some(false);
                    }
                    let confirm = egui::Button::new(
                        egui::RichText::new(&prompt.confirm_label).color(egui::Color32::WHITE),
                    )
                    .fill(egui::Color32::from_rgb(239, 68, 68));
                    if ui.add_enabled(confirm_enabled, confirm).clicked() {
                        answer = Some(true);
                    }
                });
            });

        answer
    }
}
