use eframe::egui;

use crate::models::InventoryStats;

pub struct StatCards;

impl StatCards {
    pub fn show(ui: &mut egui::Ui, stats: &InventoryStats) {
        let cards = [
            (
                "Total Item ATK",
                stats.total_items.to_string(),
                egui::Color32::from_rgb(59, 130, 246),
            ),
            (
                "Total Stok",
                stats.total_stock.to_string(),
                egui::Color32::from_rgb(34, 197, 94),
            ),
            (
                "Jenis ATK",
                stats.distinct_categories.to_string(),
                egui::Color32::from_rgb(234, 179, 8),
            ),
        ];

        ui.columns(cards.len(), |columns| {
            for (column, (title, value, accent)) in columns.iter_mut().zip(cards) {
                egui::Frame::group(column.style())
                    .stroke(egui::Stroke::new(2.0, accent))
                    .inner_margin(egui::Margin::same(12))
                    .show(column, |ui| {
                        ui.set_min_width(ui.available_width());
                        ui.label(egui::RichText::new(title).color(egui::Color32::GRAY));
                        ui.label(egui::RichText::new(value).size(28.0).strong());
                    });
            }
        });
    }
}
