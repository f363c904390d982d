//! Main update loop and global shortcuts

use eframe::egui;
use std::time::Duration;

use super::PreviewApp;
use crate::events::has_pending_work;
use crate::tone::ALL_TONES;

/// Ctrl+N picks `ALL_TONES[N - 1]` for the newest reply.
const TONE_KEYS: [egui::Key; 4] = [
    egui::Key::Num1,
    egui::Key::Num2,
    egui::Key::Num3,
    egui::Key::Num4,
];

impl eframe::App for PreviewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Process scheduler events
        self.process_events();

        // Global keyboard shortcuts (work even when input doesn't have focus)
        let (escape, toggle_theme, tone_key) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::Escape),
                i.modifiers.command && i.key_pressed(egui::Key::L),
                TONE_KEYS
                    .iter()
                    .position(|k| i.modifiers.command && i.key_pressed(*k)),
            )
        });
        // Esc: stop generating
        if escape && self.state.is_generating {
            self.stop();
        }
        // Ctrl+L: toggle light/dark
        if toggle_theme {
            self.toggle_theme(ctx);
        }
        // Ctrl+1..4: retone the newest reply
        if let Some(index) = tone_key {
            self.change_latest_tone(ALL_TONES[index]);
        }

        // Keep polling while a timer is outstanding
        if has_pending_work(&self.state) {
            ctx.request_repaint_after(Duration::from_millis(50));
        }

        self.render_header(ctx);
        self.render_input_panel(ctx);
        self.render_central_panel(ctx);
    }
}
