use eframe::egui;

use crate::state::AppState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct SalesBoardApp {
    pub state: AppState,
}

impl Default for SalesBoardApp {
    fn default() -> Self {
        let mut state = AppState::default();
        state.load_default_source();
        Self { state }
    }
}

impl eframe::App for SalesBoardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: summary table + charts ----
        egui::CentralPanel::default().show(ctx, |ui| {
            if self.state.dataset.is_none() {
                ui.centered_and_justified(|ui| {
                    ui.heading("Open a sales CSV to begin  (File → Open…)");
                });
                return;
            }

            panels::summary_table(ui, &self.state);
            ui.separator();

            let chart_height = (ui.available_height() - 12.0) / 2.0;
            ui.allocate_ui([ui.available_width(), chart_height].into(), |ui| {
                plot::revenue_by_product(ui, &self.state);
            });
            ui.separator();
            plot::daily_revenue(ui, &self.state);
        });
    }
}
