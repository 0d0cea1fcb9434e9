use eframe::egui;

use crate::models::{EditBuffer, EditMode};

pub enum FormAction {
    Submit,
    Cancel,
}

/// Create/edit modal.
pub struct ItemForm<'a> {
    pub mode: EditMode,
    pub buffer: &'a mut EditBuffer,
    pub error: Option<&'a str>,
    pub busy: bool,
}

impl<'a> ItemForm<'a> {
    pub fn new(
        mode: EditMode,
        buffer: &'a mut EditBuffer,
        error: Option<&'a str>,
        busy: bool,
    ) -> Self {
        Self {
            mode,
            buffer,
            error,
            busy,
        }
    }

    pub fn show(mut self, ctx: &egui::Context) -> Option<FormAction> {
        let mut action = None;
        let mut open = true;

        egui::Window::new(self.mode.title())
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .default_width(380.0)
            .show(ctx, |ui| {
                ui.add_enabled_ui(!self.busy, |ui| {
                    ui.label("Nama ATK *");
                    ui.add(
                        egui::TextEdit::singleline(&mut self.buffer.name)
                            .desired_width(f32::INFINITY)
                            .hint_text("Contoh: Pensil 2B"),
                    );
                    ui.add_space(8.0);

                    ui.label("Jenis *");
                    ui.add(
                        egui::TextEdit::singleline(&mut self.buffer.category)
                            .desired_width(f32::INFINITY)
                            .hint_text("Contoh: Alat Tulis"),
                    );
                    ui.add_space(8.0);

                    ui.label("Jumlah Stok *");
                    ui.add(
                        egui::TextEdit::singleline(&mut self.buffer.quantity)
                            .desired_width(f32::INFINITY)
                            .hint_text("0"),
                    );
                });

                if let Some(error) = self.error {
                    ui.add_space(8.0);
                    ui.colored_label(egui::Color32::RED, error);
                }

                ui.add_space(12.0);
                ui.horizontal(|ui| {
                    if ui.button("Batal").clicked() {
                        action = Some(FormAction::Cancel);
                    }
                    let label = if self.busy {
                        "Menyimpan..."
                    } else {
                        self.mode.submit_label()
                    };
                    if ui
                        .add_enabled(!self.busy, egui::Button::new(label))
                        .clicked()
                    {
                        action = Some(FormAction::Submit);
                    }
                });
            });

        if !open {
            action = Some(FormAction::Cancel);
        }
        action
    }
}
