use eframe::egui;
use egui_extras::{Column, TableBuilder};

use crate::models::{AtkId, AtkItem, StockLevel};

/// Row button the user clicked this frame.
pub enum TableAction {
    Edit(AtkItem),
    Delete(AtkId),
}

pub struct ItemTable;

fn stock_color(level: StockLevel) -> egui::Color32 {
    match level {
        StockLevel::Low => egui::Color32::from_rgb(220, 38, 38),
        StockLevel::Medium => egui::Color32::from_rgb(202, 138, 4),
        StockLevel::High => egui::Color32::from_rgb(22, 163, 74),
    }
}

impl ItemTable {
    /// Renders the item rows; Edit/Hapus buttons are disabled unless `actions_enabled`.
    pub fn show(ui: &mut egui::Ui, items: &[AtkItem], actions_enabled: bool) -> Option<TableAction> {
        let mut action = None;

        TableBuilder::new(ui)
            .striped(true)
            .resizable(false)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .column(Column::exact(60.0))
            .column(Column::remainder().at_least(160.0))
            .column(Column::auto().at_least(120.0))
            .column(Column::auto().at_least(110.0))
            .column(Column::exact(130.0))
            .header(28.0, |mut header| {
                for title in ["ID", "Nama ATK", "Jenis", "Jumlah Stok", "Aksi"] {
                    header.col(|ui| {
                        ui.strong(title);
                    });
                }
            })
            .body(|mut body| {
                for item in items {
                    body.row(30.0, |mut row| {
                        row.col(|ui| {
                            ui.label(item.id.to_string());
                        });
                        row.col(|ui| {
                            ui.label(egui::RichText::new(&item.name).strong());
                        });
                        row.col(|ui| {
                            ui.label(
                                egui::RichText::new(&item.category)
                                    .color(egui::Color32::from_rgb(29, 78, 216)),
                            );
                        });
                        row.col(|ui| {
                            ui.colored_label(
                                stock_color(item.stock_level()),
                                format!("{} pcs", item.quantity),
                            );
                        });
                        row.col(|ui| {
                            if ui
                                .add_enabled(actions_enabled, egui::Button::new("Edit"))
                                .clicked()
                            {
                                action = Some(TableAction::Edit(item.clone()));
                            }
                            if ui
                                .add_enabled(actions_enabled, egui::Button::new("Hapus"))
                                .clicked()
                            {
                                action = Some(TableAction::Delete(item.id));
                            }
                        });
                    });
                }
            });

        action
    }
}
