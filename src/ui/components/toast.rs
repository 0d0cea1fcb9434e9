use eframe::egui;

use crate::notification::{Notification, NotificationKind};

pub struct Toast;

impl Toast {
    /// Top-right notification. Returns `true` when the user closed it.
    pub fn show(ctx: &egui::Context, notification: &Notification) -> bool {
        let mut dismissed = false;
        let color = match notification.kind {
            NotificationKind::Success => egui::Color32::from_rgb(16, 185, 129),
            NotificationKind::Error => egui::Color32::from_rgb(239, 68, 68),
        };

        egui::Area::new(egui::Id::new("atk_toast"))
            .anchor(egui::Align2::RIGHT_TOP, egui::vec2(-16.0, 16.0))
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                egui::Frame::popup(ui.style())
                    .stroke(egui::Stroke::new(2.0, color))
                    .show(ui, |ui| {
                        ui.set_max_width(320.0);
                        ui.horizontal(|ui| {
                            ui.colored_label(color, egui::RichText::new(&notification.title).strong());
                            if ui.small_button("x").clicked() {
                                dismissed = true;
                            }
                        });
                        ui.label(&notification.text);
                    });
            });

        dismissed
    }
}
