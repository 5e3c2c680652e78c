mod app;
mod chat;
mod data;
mod state;
mod ui;

use std::path::Path;

use app::CourseFinderApp;
use eframe::egui;
use state::AppState;

/// The course feed, loaded once at startup from the working directory.
/// There is no refresh; restarting the app restarts the session.
const COURSES_FILE: &str = "courses.json";

fn main() -> eframe::Result {
    env_logger::init();

    let state = match data::loader::load_file(Path::new(COURSES_FILE)) {
        Ok(dataset) => {
            log::info!(
                "Loaded {} courses across {} districts",
                dataset.len(),
                dataset.districts.len()
            );
            AppState::with_dataset(dataset)
        }
        Err(e) => {
            log::error!("Failed to load course data: {e:#}");
            AppState::load_failed(
                "Failed to load course data. Please check your setup.".to_string(),
            )
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Course Finder",
        options,
        Box::new(move |_cc| Ok(Box::new(CourseFinderApp::new(state)))),
    )
}
