use eframe::egui;

use crate::state::AppState;
use crate::ui::{panels, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct CourseFinderApp {
    pub state: AppState,
}

impl CourseFinderApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for CourseFinderApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: title, counters, status ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: search ----
        egui::SidePanel::left("search_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::search_panel(ui, &mut self.state);
            });

        // ---- Central panel: results table ----
        egui::CentralPanel::default().show(ctx, |ui| {
            table::results_table(ui, &mut self.state);
        });

        // ---- Floating chat widget ----
        panels::chat_window(ctx, &mut self.state);
    }
}
