mod app;
mod data;
mod feedback;
mod present;
mod state;
mod ui;

use app::PlatefulApp;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 780.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Plateful – Restaurant Browser",
        options,
        Box::new(|_cc| Ok(Box::new(PlatefulApp::default()))),
    )
}
