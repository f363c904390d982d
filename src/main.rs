//! Tone Preview - a chat preview with switchable response tones, built with egui
//!
//! Architecture:
//! - Main thread: runs the egui UI and owns all session state
//! - Scheduler thread: runs a Tokio runtime that fires the simulated delays
//! - Communication via crossbeam channels (lock-free, sync-safe)

use eframe::egui;

use tone_preview::app::PreviewApp;
use tone_preview::logging;

fn main() -> eframe::Result<()> {
    logging::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([720.0, 640.0])
            .with_min_inner_size([420.0, 360.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Tone Preview",
        options,
        Box::new(|cc| Ok(Box::new(PreviewApp::new(cc)))),
    )
}
