use eframe::egui;

use crate::state::AppState;
use crate::ui::{feedback, panels, results};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct PlatefulApp {
    pub state: AppState,
}

impl Default for PlatefulApp {
    fn default() -> Self {
        Self {
            state: AppState::default(),
        }
    }
}

impl eframe::App for PlatefulApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Bottom panel: evaluation / feedback form ----
        egui::TopBottomPanel::bottom("feedback_panel")
            .resizable(true)
            .show(ctx, |ui| {
                feedback::feedback_panel(ui, &mut self.state);
            });

        // ---- Left side panel: filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: matching restaurants ----
        egui::CentralPanel::default().show(ctx, |ui| {
            results::results_panel(ui, &self.state);
        });
    }
}
