use eframe::egui;

use crate::formatters::EMPTY_LIST_MESSAGE;
use crate::ui::components::{
    ConfirmDialog, FormAction, ItemForm, ItemTable, StatCards, TableAction, Toast,
};
use crate::ui::state::DashboardState;

pub struct DashboardScreen;

impl DashboardScreen {
    pub fn show(ctx: &egui::Context, state: &mut DashboardState) {
        state.ensure_loaded(ctx);
        state.tick_notification(ctx);

        let busy = state.is_busy();
        let mut create_clicked = false;
        let mut refresh_clicked = false;

        egui::TopBottomPanel::top("atk_header").show(ctx, |ui| {
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.heading("Manajemen Inventori ATK");
                    ui.label(
                        egui::RichText::new("Sistem Manajemen Alat Tulis Kantor")
                            .color(egui::Color32::GRAY),
                    );
                });
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui
                        .add_enabled(!busy, egui::Button::new("+ Tambah ATK"))
                        .clicked()
                    {
                        create_clicked = true;
                    }
                    if ui
                        .add_enabled(!busy, egui::Button::new("Muat Ulang"))
                        .clicked()
                    {
                        refresh_clicked = true;
                    }
                });
            });
            ui.add_space(8.0);
        });

        let mut table_action = None;

        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(ref err) = state.view.error {
                egui::Frame::group(ui.style())
                    .stroke(egui::Stroke::new(1.0, egui::Color32::from_rgb(254, 202, 202)))
                    .fill(egui::Color32::from_rgb(254, 242, 242))
                    .show(ui, |ui| {
                        ui.set_min_width(ui.available_width());
                        ui.colored_label(egui::Color32::from_rgb(185, 28, 28), "Error:");
                        ui.colored_label(egui::Color32::from_rgb(185, 28, 28), err);
                    });
                ui.add_space(12.0);
            }

            StatCards::show(ui, &state.view.statistics());
            ui.add_space(16.0);

            ui.horizontal(|ui| {
                ui.heading("Daftar Inventori ATK");
                if let Some(synced) = state.view.last_synced {
                    ui.label(
                        egui::RichText::new(format!(
                            "Terakhir diperbarui {}",
                            synced.format("%H:%M:%S")
                        ))
                        .color(egui::Color32::GRAY),
                    );
                }
            });
            ui.separator();

            if busy && state.form.is_none() && state.pending_confirmation.is_none() {
                ui.vertical_centered(|ui| {
                    ui.add_space(40.0);
                    ui.spinner();
                    ui.label("Memuat data...");
                });
            } else if state.view.items.is_empty() {
                ui.vertical_centered(|ui| {
                    ui.add_space(40.0);
                    ui.label(egui::RichText::new(EMPTY_LIST_MESSAGE).color(egui::Color32::GRAY));
                });
            } else {
                table_action = ItemTable::show(ui, &state.view.items, !busy);
            }
        });

        if create_clicked {
            state.begin_create();
        }
        if refresh_clicked {
            state.refresh(ctx);
        }
        match table_action {
            Some(TableAction::Edit(item)) => state.begin_edit(&item),
            Some(TableAction::Delete(id)) => state.request_remove(id),
            None => {}
        }

        let form_action = match (state.view.modal.as_ref(), state.form.as_mut()) {
            (Some(session), Some(buffer)) => {
                ItemForm::new(session.mode, buffer, session.error.as_deref(), busy).show(ctx)
            }
            _ => None,
        };
        match form_action {
            Some(FormAction::Submit) => state.submit_form(ctx),
            Some(FormAction::Cancel) => state.cancel_edit(),
            None => {}
        }

        let answer = state
            .pending_confirmation
            .as_ref()
            .and_then(|pending| ConfirmDialog::show(ctx, &pending.prompt, !busy));
        if let Some(confirmed) = answer {
            state.answer_confirmation(ctx, confirmed);
        }

        let dismissed = state
            .view
            .notification
            .as_ref()
            .is_some_and(|n| Toast::show(ctx, n));
        if dismissed {
            state.dismiss_notification();
        }
    }
}
