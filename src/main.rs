// Tracker Calendar Demo
// Main entry point

use tracker_calendar::ui::TrackerApp;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Tracker Calendar demo");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([420.0, 480.0])
            .with_min_inner_size([320.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Tracker Calendar",
        options,
        Box::new(|cc| Ok(Box::new(TrackerApp::new(cc)))),
    )
    .map_err(|err| anyhow::anyhow!("failed to run eframe app: {err}"))
}
