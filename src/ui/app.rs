use eframe::{self, egui};

use super::{screens::DashboardScreen, state::DashboardState};
use crate::config::AppConfig;

pub struct AtkDashboardApp {
    state: DashboardState,
}

impl eframe::App for AtkDashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.state.poll();
        DashboardScreen::show(ctx, &mut self.state);
    }
}

pub fn launch_gui(config: AppConfig) -> Result<(), eframe::Error> {
    log::info!("Opening dashboard for {}", config.api_base_url());
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1000.0, 700.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Manajemen Inventori ATK",
        options,
        Box::new(move |_cc| {
            let state = DashboardState::new(&config)?;
            Ok(Box::new(AtkDashboardApp { state }))
        }),
    )
}
